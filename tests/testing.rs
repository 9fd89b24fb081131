use hlp::{
	fs::copy_tree,
	testing::{assert_trees_eq, compare_trees, tree_contents, Call, Entry, RecordingReporter},
};
use std::{fs, path::Path};
use tempfile::TempDir;

fn write(root: &Path, path: &str, content: &str) {
	let path = root.join(path);
	fs::create_dir_all(path.parent().unwrap()).unwrap();
	fs::write(path, content).unwrap();
}

fn mkdir(root: &Path, path: &str) {
	fs::create_dir_all(root.join(path)).unwrap();
}

/// Two trees sharing `same/` and differing everywhere else.
fn fixture() -> (TempDir, TempDir) {
	let a = TempDir::new().unwrap();
	let b = TempDir::new().unwrap();

	for root in [a.path(), b.path()] {
		write(root, "same/file.txt", "same\n");
	}

	write(a.path(), "only_in_a", "a\n");
	write(b.path(), "only_in_b", "b\n");
	write(a.path(), "different/differentfile.txt", "dir_a\n");
	write(b.path(), "different/differentfile.txt", "dir_b\n");
	mkdir(a.path(), "directory_in_a");
	write(b.path(), "directory_in_a", "now a file\n");
	write(a.path(), "file_in_a", "a file\n");
	mkdir(b.path(), "file_in_a");

	(a, b)
}

fn log(message: &str) -> Call {
	Call::Log(message.to_owned())
}

#[test]
fn contents_of_tree() {
	let (a, _) = fixture();
	let contents = tree_contents(a.path()).unwrap();

	let listed: Vec<(String, Entry)> = contents
		.iter()
		.map(|(path, entry)| (path.display().to_string(), entry.clone()))
		.collect();

	assert_eq!(
		listed,
		[
			("different".to_owned(), Entry::Directory),
			("different/differentfile.txt".to_owned(), Entry::File("dir_a\n".to_owned())),
			("directory_in_a".to_owned(), Entry::Directory),
			("file_in_a".to_owned(), Entry::File("a file\n".to_owned())),
			("only_in_a".to_owned(), Entry::File("a\n".to_owned())),
			("same".to_owned(), Entry::Directory),
			("same/file.txt".to_owned(), Entry::File("same\n".to_owned())),
		]
	);
}

#[test]
fn compare_reports_every_difference() {
	let (a, b) = fixture();
	let mut reporter = RecordingReporter::new();

	compare_trees(&mut reporter, a.path(), b.path()).unwrap();
	let calls = reporter.calls();

	assert_eq!(
		calls[..6],
		[
			log("the following paths are expected but not present"),
			log("* only_in_a"),
			Call::Fail,
			log("the following paths are in the output, but not expected to be"),
			log("* only_in_b"),
			Call::Fail,
		]
	);

	match &calls[6] {
		Call::Log(message) => {
			assert!(message.starts_with("Content mismatch at different/differentfile.txt (-want, +got): \n"));
			assert!(message.contains("-dir_a"));
			assert!(message.contains("+dir_b"));
		}
		other => panic!("unexpected call: {other:?}"),
	}

	assert_eq!(
		calls[7..],
		[
			Call::Fail,
			log("path directory_in_a expected to be a directory but got file"),
			Call::Fail,
			log("path file_in_a expected to be a file but got directory"),
			Call::Fail,
		]
	);
}

#[test]
fn identical_trees_report_nothing() {
	let (a, _) = fixture();
	let copy = TempDir::new().unwrap();

	copy_tree(a.path(), copy.path()).unwrap();

	let mut reporter = RecordingReporter::new();
	compare_trees(&mut reporter, a.path(), copy.path()).unwrap();
	assert!(reporter.calls().is_empty());
	assert!(!reporter.failed());

	assert_trees_eq(a.path(), copy.path());
}

#[test]
fn copy_into_missing_directory() {
	let (a, _) = fixture();
	let dest = TempDir::new().unwrap();
	let target = dest.path().join("nested/copy");

	copy_tree(a.path().join("same"), &target).unwrap();
	assert_eq!(fs::read_to_string(target.join("file.txt")).unwrap(), "same\n");
}

#[cfg(unix)]
#[test]
fn copy_keeps_permissions() {
	use std::os::unix::fs::PermissionsExt;

	let src = TempDir::new().unwrap();
	write(src.path(), "tree/file.txt", "content
");
	fs::set_permissions(src.path().join("tree/file.txt"), fs::Permissions::from_mode(0o640)).unwrap();
	fs::set_permissions(src.path().join("tree"), fs::Permissions::from_mode(0o750)).unwrap();

	let dest = TempDir::new().unwrap();
	let target = dest.path().join("copy");
	copy_tree(src.path().join("tree"), &target).unwrap();

	let mode = |path: &Path| fs::metadata(path).unwrap().permissions().mode() & 0o777;
	assert_eq!(mode(&target), 0o750);
	assert_eq!(mode(&target.join("file.txt")), 0o640);
}

#[test]
#[should_panic(expected = "directory trees differ")]
fn assert_panics_on_difference() {
	let (a, b) = fixture();
	assert_trees_eq(a.path(), b.path());
}

#[test]
fn missing_root_is_an_error() {
	let (a, _) = fixture();
	let mut reporter = RecordingReporter::new();
	assert!(compare_trees(&mut reporter, a.path(), a.path().join("nope")).is_err());
}
