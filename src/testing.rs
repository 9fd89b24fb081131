//! Test support.
//!
//! [`compare_trees`] reports every difference between two directory trees to
//! a [`Reporter`]. Inside a test, [`assert_trees_eq`] does the same and panics
//! with the whole report.
use crate::set::Set;
use btree_slab::BTreeMap;
use similar::TextDiff;
use std::{
	fs, io,
	path::{Path, PathBuf},
};

mod reporter;

pub use reporter::*;

/// Entry of a directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
	Directory,

	/// File and its content, decoded lossily as UTF-8.
	File(String),
}

impl Entry {
	pub fn is_dir(&self) -> bool {
		matches!(self, Entry::Directory)
	}

	pub fn kind(&self) -> &'static str {
		match self {
			Entry::Directory => "directory",
			Entry::File(_) => "file",
		}
	}
}

/// Lists every entry below `root`, keyed by its path relative to `root`.
///
/// `root` itself is not listed.
pub fn tree_contents(root: impl AsRef<Path>) -> io::Result<BTreeMap<PathBuf, Entry>> {
	let mut contents = BTreeMap::new();
	collect(root.as_ref(), Path::new(""), &mut contents)?;
	Ok(contents)
}

fn collect(dir: &Path, relative: &Path, contents: &mut BTreeMap<PathBuf, Entry>) -> io::Result<()> {
	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = relative.join(entry.file_name());

		if entry.file_type()?.is_dir() {
			collect(&entry.path(), &path, contents)?;
			contents.insert(path, Entry::Directory);
		} else {
			let bytes = fs::read(entry.path())?;
			let content = String::from_utf8_lossy(&bytes).into_owned();
			contents.insert(path, Entry::File(content));
		}
	}

	Ok(())
}

/// Compares the trees rooted at `expected` and `actual`.
///
/// Reports, in order, the paths missing from `actual`, the paths `actual`
/// should not have, then every shared path whose kind or content differs.
/// Each group of differences ends with a call to [`Reporter::fail`].
pub fn compare_trees<R: Reporter + ?Sized>(
	reporter: &mut R,
	expected: impl AsRef<Path>,
	actual: impl AsRef<Path>,
) -> io::Result<()> {
	let expected = tree_contents(expected)?;
	let actual = tree_contents(actual)?;

	let expected_paths: Set<PathBuf> = expected.iter().map(|(path, _)| path.clone()).collect();
	let actual_paths: Set<PathBuf> = actual.iter().map(|(path, _)| path.clone()).collect();

	let missing = expected_paths.difference(&actual_paths).sorted();
	if !missing.is_empty() {
		reporter.log("the following paths are expected but not present");
		for path in &missing {
			reporter.log(&format!("* {}", path.display()));
		}
		reporter.fail();
	}

	let extra = actual_paths.difference(&expected_paths).sorted();
	if !extra.is_empty() {
		reporter.log("the following paths are in the output, but not expected to be");
		for path in &extra {
			reporter.log(&format!("* {}", path.display()));
		}
		reporter.fail();
	}

	for path in expected_paths.intersection(&actual_paths).sorted() {
		let (Some(want), Some(got)) = (expected.get(&path), actual.get(&path)) else {
			continue;
		};

		match (want, got) {
			(Entry::File(want), Entry::File(got)) => {
				if want != got {
					let diff = TextDiff::from_lines(want.as_str(), got.as_str())
						.unified_diff()
						.header("want", "got")
						.to_string();

					reporter.log(&format!(
						"Content mismatch at {} (-want, +got): \n{}",
						path.display(),
						diff
					));
					reporter.fail();
				}
			}
			(want, got) if want.is_dir() != got.is_dir() => {
				reporter.log(&format!(
					"path {} expected to be a {} but got {}",
					path.display(),
					want.kind(),
					got.kind()
				));
				reporter.fail();
			}
			_ => (),
		}
	}

	Ok(())
}

/// Panics with a report of every difference between the trees rooted at
/// `expected` and `actual`.
#[track_caller]
pub fn assert_trees_eq(expected: impl AsRef<Path>, actual: impl AsRef<Path>) {
	let mut reporter = RecordingReporter::new();

	if let Err(e) = compare_trees(&mut reporter, expected, actual) {
		panic!("unable to read directory trees: {e}")
	}

	if reporter.failed() {
		panic!("directory trees differ:\n{}", reporter.messages().collect::<Vec<_>>().join("\n"))
	}
}
