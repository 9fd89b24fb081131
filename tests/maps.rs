use hlp::maps::{assign, invert, keys, map_from_slice, map_from_slice_err, values};
use std::collections::HashMap;

#[test]
fn from_slice() {
	let map = map_from_slice(&["a", "bb", "ccc"], |s, i| (s.to_string(), i));
	assert_eq!(map, HashMap::from([("a".to_owned(), 0), ("bb".to_owned(), 1), ("ccc".to_owned(), 2)]));

	let last_wins = map_from_slice(&[1, 2, 3, 4], |n, _| (n % 2, *n));
	assert_eq!(last_wins, HashMap::from([(1, 3), (0, 4)]));
}

#[test]
fn from_slice_err() {
	let ok: Result<_, String> = map_from_slice_err(&["1", "2"], |s, _| Ok((*s, s.len())));
	assert_eq!(ok.unwrap().len(), 2);

	let failed = map_from_slice_err(&["1", "x"], |s, _| s.parse::<i32>().map(|n| (n, n)));
	assert!(failed.is_err());
}

#[test]
fn assign_left_to_right() {
	let merged = assign([
		HashMap::from([("a", 1), ("b", 2)]),
		HashMap::from([("b", 3), ("c", 4)]),
		HashMap::from([("c", 5)]),
	]);

	assert_eq!(merged, HashMap::from([("a", 1), ("b", 3), ("c", 5)]));
	assert!(assign(Vec::<HashMap<u8, u8>>::new()).is_empty());
}

#[test]
fn keys_values_invert() {
	let map = HashMap::from([("one", 1), ("two", 2), ("three", 3)]);

	let mut k = keys(&map);
	k.sort();
	assert_eq!(k, ["one", "three", "two"]);

	let mut v = values(&map);
	v.sort();
	assert_eq!(v, [1, 2, 3]);

	assert_eq!(invert(&map), HashMap::from([(1, "one"), (2, "two"), (3, "three")]));
}
