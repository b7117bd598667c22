// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Deserialize;
use std::fmt;
use urlencoding::encode;

pub fn activities_endpoint(api_base: &str) -> String {
	format!("{}/activities", api_base)
}

/// Builds the signup endpoint for an activity. Both the activity name and the email are percent-encoded.
pub fn signup_endpoint(api_base: &str, activity_name: &str, email: &str) -> String {
	format!(
		"{}/activities/{}/signup?email={}",
		api_base,
		encode(activity_name),
		encode(email)
	)
}

pub fn unregister_endpoint(api_base: &str, activity_name: &str, email: &str) -> String {
	format!(
		"{}/activities/{}/unregister?email={}",
		api_base,
		encode(activity_name),
		encode(email)
	)
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct SignupResponse {
	pub message: String,
}

/// The body the server sends with a non-success status
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct ErrorDetail {
	#[serde(default)]
	pub detail: Option<String>,
}

/// A non-success response from the server
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerFailure {
	pub status: u16,
	pub detail: Option<String>,
}

impl ServerFailure {
	/// Reads the failure from a response body. Bodies that aren't JSON or that have no `detail` produce a failure
	/// without detail.
	pub fn from_body(status: u16, body: &str) -> Self {
		let detail = serde_json::from_str::<ErrorDetail>(body)
			.ok()
			.and_then(|error_detail| error_detail.detail)
			.filter(|detail| !detail.is_empty());
		Self { status, detail }
	}

	/// Gets the server-provided detail, or the fallback text if the server didn't provide one
	pub fn detail_or(&self, fallback: &str) -> String {
		match self.detail.as_ref() {
			Some(detail) => detail.clone(),
			None => String::from(fallback),
		}
	}
}

impl fmt::Display for ServerFailure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.detail.as_ref() {
			Some(detail) => write!(f, "HTTP {}: {}", self.status, detail),
			None => write!(f, "HTTP {}", self.status),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn same_origin_endpoints() {
		assert_eq!(activities_endpoint(""), "/activities");
		assert_eq!(
			signup_endpoint("", "Chess Club", "a@x.com"),
			"/activities/Chess%20Club/signup?email=a%40x.com"
		);
		assert_eq!(
			unregister_endpoint("", "Chess Club", "a@x.com"),
			"/activities/Chess%20Club/unregister?email=a%40x.com"
		);
	}

	#[test]
	fn endpoints_use_api_base() {
		assert_eq!(
			activities_endpoint("https://school.example/api"),
			"https://school.example/api/activities"
		);
		assert_eq!(
			signup_endpoint("https://school.example/api", "Art", "b@x.com"),
			"https://school.example/api/activities/Art/signup?email=b%40x.com"
		);
	}

	#[test]
	fn reserved_characters_are_encoded() {
		let endpoint = signup_endpoint("", "Q&A / Debate?", "first+last@x.com");
		assert_eq!(
			endpoint,
			"/activities/Q%26A%20%2F%20Debate%3F/signup?email=first%2Blast%40x.com"
		);
	}

	#[test]
	fn failure_detail_is_used_when_present() {
		let failure = ServerFailure::from_body(400, r#"{"detail": "Not registered"}"#);
		assert_eq!(failure.status, 400);
		assert_eq!(failure.detail.as_deref(), Some("Not registered"));
		assert_eq!(failure.detail_or("Failed to remove participant"), "Not registered");
		assert_eq!(failure.to_string(), "HTTP 400: Not registered");
	}

	#[test]
	fn failure_without_detail_uses_fallback() {
		for body in ["{}", r#"{"detail": null}"#, r#"{"detail": ""}"#, "Internal Server Error", ""] {
			let failure = ServerFailure::from_body(500, body);
			assert_eq!(failure.detail, None, "body: {:?}", body);
			assert_eq!(failure.detail_or("An error occurred"), "An error occurred");
		}
		assert_eq!(ServerFailure::from_body(500, "").to_string(), "HTTP 500");
	}

	#[test]
	fn signup_response_reads_message() {
		let response: SignupResponse = serde_json::from_str(r#"{"message": "Signed up!"}"#).unwrap();
		assert_eq!(response.message, "Signed up!");
		assert!(serde_json::from_str::<SignupResponse>("{}").is_err());
	}
}
