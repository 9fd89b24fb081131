use regex::{Captures, Regex};
use std::collections::HashMap;

/// Maps the names of the capture groups of `regex` to the text they matched
/// in `haystack`.
///
/// Unnamed groups are left out, named groups that did not participate in the
/// match map to the empty string. No match gives an empty map.
///
/// ```
/// use hlp::named_captures;
/// use regex::Regex;
///
/// let re = Regex::new(r"(?P<key>\w+)=(?P<value>\w+)").unwrap();
/// let captures = named_captures(&re, "color=red");
/// assert_eq!(captures["key"], "color");
/// assert_eq!(captures["value"], "red");
/// ```
pub fn named_captures(regex: &Regex, haystack: &str) -> HashMap<String, String> {
	regex
		.captures(haystack)
		.map(|captures| named_matches(regex, &captures))
		.unwrap_or_default()
}

/// Same as [`named_captures`], for captures that were already computed.
pub fn named_matches(regex: &Regex, captures: &Captures) -> HashMap<String, String> {
	regex
		.capture_names()
		.flatten()
		.map(|name| {
			let text = captures.name(name).map_or("", |m| m.as_str());
			(name.to_owned(), text.to_owned())
		})
		.collect()
}
