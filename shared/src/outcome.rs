// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::ServerFailure;
use crate::status::{removal_rejected_text, StatusMessage, REMOVAL_REQUEST_FAILED};
use std::future::Future;

/// What the board does after a removal request finishes
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RemovalOutcome {
	/// The participant was removed; the list is fetched again.
	Reload,
	/// The removal didn't happen; the list is left as it is and the text is shown to the user.
	Notice(String),
}

impl RemovalOutcome {
	pub fn rejected(failure: &ServerFailure) -> Self {
		Self::Notice(removal_rejected_text(failure))
	}

	pub fn failed() -> Self {
		Self::Notice(String::from(REMOVAL_REQUEST_FAILED))
	}
}

/// What the board does after a signup request finishes
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignupOutcome {
	pub message: StatusMessage,
	pub reset_form: bool,
	pub reload: bool,
}

impl SignupOutcome {
	pub fn succeeded(message: String) -> Self {
		Self {
			message: StatusMessage::success(message),
			reset_form: true,
			reload: true,
		}
	}

	pub fn rejected(failure: &ServerFailure) -> Self {
		Self {
			message: StatusMessage::signup_rejected(failure),
			reset_form: false,
			reload: false,
		}
	}

	pub fn failed() -> Self {
		Self {
			message: StatusMessage::signup_failed(),
			reset_form: false,
			reload: false,
		}
	}
}

/// Somewhere a status message can be shown and hidden
pub trait StatusDisplay {
	fn show_status(&self, message: StatusMessage);
	fn hide_status(&self);
}

/// Shows a status message, waits on the timer, then hides it.
///
/// The hide isn't tied to the message it was started for, so a message shown while an older one is pending can be
/// hidden early by the older message's timer.
pub async fn show_until<D: StatusDisplay, T: Future>(display: &D, message: StatusMessage, timer: T) {
	display.show_status(message);
	timer.await;
	display.hide_status();
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::status::{StatusKind, SIGNUP_SERVER_ERROR_FALLBACK};
	use futures::channel::oneshot;
	use futures::executor::block_on;
	use futures::FutureExt;
	use std::cell::RefCell;

	#[derive(Default)]
	struct RecordingDisplay {
		shown: RefCell<Vec<StatusMessage>>,
		visible: RefCell<bool>,
		hide_count: RefCell<u32>,
	}

	impl StatusDisplay for RecordingDisplay {
		fn show_status(&self, message: StatusMessage) {
			self.shown.borrow_mut().push(message);
			*self.visible.borrow_mut() = true;
		}

		fn hide_status(&self) {
			*self.visible.borrow_mut() = false;
			*self.hide_count.borrow_mut() += 1;
		}
	}

	#[test]
	fn rejected_removal_shows_detail_without_reload() {
		let failure = ServerFailure::from_body(400, r#"{"detail":"Not registered"}"#);
		assert_eq!(
			RemovalOutcome::rejected(&failure),
			RemovalOutcome::Notice(String::from("Not registered"))
		);
	}

	#[test]
	fn rejected_removal_without_detail_uses_fallback() {
		let failure = ServerFailure::from_body(500, "{}");
		assert_eq!(
			RemovalOutcome::rejected(&failure),
			RemovalOutcome::Notice(String::from("Failed to remove participant"))
		);
	}

	#[test]
	fn failed_removal_request_is_generic_notice() {
		assert_eq!(
			RemovalOutcome::failed(),
			RemovalOutcome::Notice(String::from("Failed to remove participant. Please try again."))
		);
	}

	#[test]
	fn successful_signup_resets_form_and_reloads() {
		let outcome = SignupOutcome::succeeded(String::from("Signed up!"));
		assert_eq!(outcome.message.text, "Signed up!");
		assert_eq!(outcome.message.kind, StatusKind::Success);
		assert!(outcome.reset_form);
		assert!(outcome.reload);
	}

	#[test]
	fn rejected_signup_keeps_form_and_list() {
		let failure = ServerFailure::from_body(400, r#"{"detail":"Student is already signed up"}"#);
		let outcome = SignupOutcome::rejected(&failure);
		assert_eq!(outcome.message.text, "Student is already signed up");
		assert_eq!(outcome.message.kind, StatusKind::Error);
		assert!(!outcome.reset_form);
		assert!(!outcome.reload);

		let outcome = SignupOutcome::rejected(&ServerFailure::from_body(500, ""));
		assert_eq!(outcome.message.text, SIGNUP_SERVER_ERROR_FALLBACK);
	}

	#[test]
	fn failed_signup_request_keeps_form_and_list() {
		let outcome = SignupOutcome::failed();
		assert_eq!(outcome.message.text, "Failed to sign up. Please try again.");
		assert!(!outcome.reset_form);
		assert!(!outcome.reload);
	}

	#[test]
	fn status_stays_visible_until_timer_fires() {
		let display = RecordingDisplay::default();
		let (fire_timer, timer) = oneshot::channel::<()>();

		let mut showing = Box::pin(show_until(
			&display,
			StatusMessage::success(String::from("Signed up!")),
			timer,
		));
		assert!(showing.as_mut().now_or_never().is_none());
		assert!(*display.visible.borrow());
		assert_eq!(*display.hide_count.borrow(), 0);
		assert_eq!(display.shown.borrow()[0].text, "Signed up!");

		assert!(showing.as_mut().now_or_never().is_none());
		assert!(*display.visible.borrow());

		fire_timer.send(()).unwrap();
		block_on(showing);
		assert!(!*display.visible.borrow());
		assert_eq!(*display.hide_count.borrow(), 1);
	}

	#[test]
	fn each_message_is_hidden_exactly_once() {
		let display = RecordingDisplay::default();

		block_on(show_until(&display, StatusMessage::signup_failed(), futures::future::ready(())));
		block_on(show_until(&display, StatusMessage::success(String::from("Signed up!")), futures::future::ready(())));

		assert_eq!(display.shown.borrow().len(), 2);
		assert_eq!(*display.hide_count.borrow(), 2);
		assert!(!*display.visible.borrow());
	}
}
