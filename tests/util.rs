use hlp::{default_env, must, named_captures, named_matches, parse_range, ternary};
use regex::Regex;

#[test]
fn ternary_picks_branch() {
	assert_eq!(ternary(true, "a", "b"), "a");
	assert_eq!(ternary(false, 1, 2), 2);
}

#[test]
fn default_env_lookup() {
	std::env::set_var("HLP_TEST_DEFAULT_ENV_SET", "value");
	std::env::set_var("HLP_TEST_DEFAULT_ENV_EMPTY", "");
	std::env::remove_var("HLP_TEST_DEFAULT_ENV_UNSET");

	assert_eq!(default_env("HLP_TEST_DEFAULT_ENV_SET", "fallback"), "value");
	assert_eq!(default_env("HLP_TEST_DEFAULT_ENV_EMPTY", "fallback"), "");
	assert_eq!(default_env("HLP_TEST_DEFAULT_ENV_UNSET", "fallback"), "fallback");
}

#[test]
fn must_unwraps() {
	assert_eq!(must(parse_range(3, "0-")), [0, 1, 2]);
}

#[test]
#[should_panic(expected = "invalid range expression")]
fn must_panics_with_message() {
	must(parse_range(3, "x"));
}

#[test]
fn captures_by_name() {
	let re = Regex::new(r"(?P<year>\d{4})-(?P<month>\d{2})(-(?P<day>\d{2}))?(\w*)").unwrap();

	let found = named_captures(&re, "released 2021-07");
	assert_eq!(found.len(), 3);
	assert_eq!(found["year"], "2021");
	assert_eq!(found["month"], "07");
	assert_eq!(found["day"], "");

	assert!(named_captures(&re, "no date").is_empty());

	let captures = re.captures("2020-01-31").unwrap();
	assert_eq!(named_matches(&re, &captures)["day"], "31");
}
