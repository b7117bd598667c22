// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use log::Level;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

pub const DEFAULT_MESSAGE_TIMEOUT_MS: u32 = 5000;
pub const DEFAULT_LOG_LEVEL: Level = Level::Info;

/// Settings for the board, read from the `data-*` attributes of the element the board mounts into
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoardConfig {
	/// Prefix for all API endpoints, without a trailing slash. Empty means the page's own origin.
	pub api_base: String,
	/// How long a status message stays visible, in milliseconds
	pub message_timeout: u32,
	pub log_level: Level,
}

impl Default for BoardConfig {
	fn default() -> Self {
		Self {
			api_base: String::new(),
			message_timeout: DEFAULT_MESSAGE_TIMEOUT_MS,
			log_level: DEFAULT_LOG_LEVEL,
		}
	}
}

impl BoardConfig {
	/// Builds the configuration from raw attribute values. Missing or blank attributes take their defaults.
	///
	/// # Errors
	///
	/// Fails when the message timeout isn't a non-negative integer or the log level isn't a known level name.
	pub fn from_attributes(
		api_base: Option<String>,
		message_timeout: Option<String>,
		log_level: Option<String>,
	) -> Result<Self, ConfigError> {
		let mut config = Self::default();

		if let Some(api_base) = api_base {
			config.api_base = api_base.trim().trim_end_matches('/').to_string();
		}

		if let Some(timeout) = non_blank(message_timeout) {
			config.message_timeout = timeout
				.parse()
				.map_err(|error| ConfigError::MessageTimeout(timeout.clone(), error))?;
		}

		if let Some(level) = non_blank(log_level) {
			config.log_level = Level::from_str(&level).map_err(|_| ConfigError::LogLevel(level.clone()))?;
		}

		Ok(config)
	}
}

fn non_blank(value: Option<String>) -> Option<String> {
	value.map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

#[derive(Debug, Eq, PartialEq)]
pub enum ConfigError {
	MessageTimeout(String, ParseIntError),
	LogLevel(String),
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MessageTimeout(value, error) => {
				write!(f, "Invalid message timeout \"{}\": {}", value, error)
			}
			Self::LogLevel(value) => write!(f, "Unknown log level \"{}\"", value),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_attributes_use_defaults() {
		let config = BoardConfig::from_attributes(None, None, None).unwrap();
		assert_eq!(config, BoardConfig::default());
		assert_eq!(config.api_base, "");
		assert_eq!(config.message_timeout, 5000);
		assert_eq!(config.log_level, Level::Info);
	}

	#[test]
	fn blank_attributes_use_defaults() {
		let config =
			BoardConfig::from_attributes(Some(String::from("  ")), Some(String::new()), Some(String::from(" "))).unwrap();
		assert_eq!(config, BoardConfig::default());
	}

	#[test]
	fn attributes_override_defaults() {
		let config = BoardConfig::from_attributes(
			Some(String::from("https://school.example/api/")),
			Some(String::from("2500")),
			Some(String::from("debug")),
		)
		.unwrap();
		assert_eq!(config.api_base, "https://school.example/api");
		assert_eq!(config.message_timeout, 2500);
		assert_eq!(config.log_level, Level::Debug);
	}

	#[test]
	fn invalid_timeout_is_an_error() {
		let error = BoardConfig::from_attributes(None, Some(String::from("soon")), None).unwrap_err();
		assert!(matches!(error, ConfigError::MessageTimeout(ref value, _) if value == "soon"));
		assert!(error.to_string().starts_with("Invalid message timeout \"soon\""));

		assert!(BoardConfig::from_attributes(None, Some(String::from("-1")), None).is_err());
	}

	#[test]
	fn invalid_log_level_is_an_error() {
		let error = BoardConfig::from_attributes(None, None, Some(String::from("loud"))).unwrap_err();
		assert_eq!(error, ConfigError::LogLevel(String::from("loud")));
		assert_eq!(error.to_string(), "Unknown log level \"loud\"");
	}
}
