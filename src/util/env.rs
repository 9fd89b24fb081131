use std::env::{self, VarError};

/// Value of the environment variable `key`, or `default` when it is unset.
///
/// A variable set to the empty string is returned as is. A variable holding
/// invalid unicode is treated as unset.
pub fn default_env(key: &str, default: &str) -> String {
	match env::var(key) {
		Ok(value) => value,
		Err(VarError::NotPresent) => default.to_owned(),
		Err(VarError::NotUnicode(_)) => {
			log::warn!("env event=not_unicode key={key} fallback=default");
			default.to_owned()
		}
	}
}
