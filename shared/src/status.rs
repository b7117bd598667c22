// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::ServerFailure;

pub const SIGNUP_SERVER_ERROR_FALLBACK: &str = "An error occurred";
pub const SIGNUP_REQUEST_FAILED: &str = "Failed to sign up. Please try again.";
pub const REMOVAL_SERVER_ERROR_FALLBACK: &str = "Failed to remove participant";
pub const REMOVAL_REQUEST_FAILED: &str = "Failed to remove participant. Please try again.";
pub const CONFIRM_REMOVAL_LABEL: &str = "Confirm";
pub const CANCEL_REMOVAL_LABEL: &str = "Cancel";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusKind {
	Success,
	Error,
}

impl StatusKind {
	pub fn css_class(&self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::Error => "error",
		}
	}
}

/// A short-lived message shown after a signup attempt
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StatusMessage {
	pub text: String,
	pub kind: StatusKind,
}

impl StatusMessage {
	pub fn success(text: String) -> Self {
		Self {
			text,
			kind: StatusKind::Success,
		}
	}

	pub fn error(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			kind: StatusKind::Error,
		}
	}

	pub fn signup_rejected(failure: &ServerFailure) -> Self {
		Self::error(failure.detail_or(SIGNUP_SERVER_ERROR_FALLBACK))
	}

	pub fn signup_failed() -> Self {
		Self::error(SIGNUP_REQUEST_FAILED)
	}

	/// Gets the classes for the message area. Hidden messages keep their kind class.
	pub fn css_classes(&self, visible: bool) -> String {
		if visible {
			String::from(self.kind.css_class())
		} else {
			format!("{} hidden", self.kind.css_class())
		}
	}
}

/// Gets the alert text for a rejected removal request
pub fn removal_rejected_text(failure: &ServerFailure) -> String {
	failure.detail_or(REMOVAL_SERVER_ERROR_FALLBACK)
}

pub fn removal_confirmation_text(activity_name: &str, email: &str) -> String {
	format!("Are you sure you want to remove {} from {}?", email, activity_name)
}
