//! Filesystem helpers.
use std::{fs, io, path::Path};

/// Recursively copies the file or directory at `src` to `dest`.
///
/// Missing directories are created and permissions are carried over.
/// Existing files are overwritten.
pub fn copy_tree(src: impl AsRef<Path>, dest: impl AsRef<Path>) -> io::Result<()> {
	let (src, dest) = (src.as_ref(), dest.as_ref());
	let metadata = fs::metadata(src)?;

	if metadata.is_dir() {
		fs::create_dir_all(dest)?;

		for entry in fs::read_dir(src)? {
			let entry = entry?;
			copy_tree(entry.path(), dest.join(entry.file_name()))?;
		}

		// after the children, in case `src` is read-only.
		fs::set_permissions(dest, metadata.permissions())
	} else {
		fs::copy(src, dest).map(|_| ())
	}
}
