// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::RequestError;
use crate::requests::{fetch_activities, send_signup, send_unregister};
use activity_board_shared::activities::Activity;
use activity_board_shared::config::BoardConfig;
use activity_board_shared::outcome::{show_until, RemovalOutcome, SignupOutcome, StatusDisplay};
use activity_board_shared::status::StatusMessage;
use gloo_timers::future::TimeoutFuture;
use sycamore::prelude::*;

#[derive(Clone, Eq, PartialEq)]
pub enum BoardState {
	Loading,
	Loaded(Vec<Activity>),
	Failed,
}

/// A participant removal waiting on the user's confirmation
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Removal {
	pub activity_name: String,
	pub email: String,
}

/// An alert shown to the user until dismissed
#[derive(Clone, Eq, PartialEq)]
pub struct Notice {
	pub text: String,
}

/// All of the signals that make up the state of the board.
///
/// Everything here is derived from the last server response; nothing is merged across fetches.
#[derive(Clone)]
pub struct BoardData {
	pub state: RcSignal<BoardState>,
	/// Names for the activity selector. Kept separately so a failed reload leaves the selector alone.
	pub activity_names: RcSignal<Vec<String>>,
	pub status: RcSignal<Option<StatusMessage>>,
	pub status_visible: RcSignal<bool>,
	pub notices: RcSignal<Vec<Notice>>,
	pub pending_removal: RcSignal<Option<Removal>>,
}

impl BoardData {
	pub fn new() -> Self {
		Self {
			state: create_rc_signal(BoardState::Loading),
			activity_names: create_rc_signal(Vec::new()),
			status: create_rc_signal(None),
			status_visible: create_rc_signal(false),
			notices: create_rc_signal(Vec::new()),
			pending_removal: create_rc_signal(None),
		}
	}

	pub fn push_notice(&self, text: String) {
		self.notices.modify().push(Notice { text });
	}

	pub fn dismiss_notice(&self, notice: &Notice) {
		let index = self.notices.get_untracked().iter().position(|check_notice| check_notice == notice);
		if let Some(index) = index {
			self.notices.modify().remove(index);
		}
	}

}

impl StatusDisplay for BoardData {
	fn show_status(&self, message: StatusMessage) {
		self.status.set(Some(message));
		self.status_visible.set(true);
	}

	fn hide_status(&self) {
		self.status_visible.set(false);
	}
}

/// Fetches the activity list and replaces the board with it.
///
/// On failure, the list is replaced with a failure notice and the selector keeps its options.
pub async fn load_activities(data: BoardData, config: BoardConfig) {
	match fetch_activities(&config).await {
		Ok(activities) => {
			log::debug!("Loaded {} activities", activities.len());
			data.activity_names
				.set(activities.iter().map(|activity| activity.name.clone()).collect());
			data.state.set(BoardState::Loaded(activities));
		}
		Err(error) => {
			log::error!("Error fetching activities: {}", error);
			data.state.set(BoardState::Failed);
		}
	}
}

/// Sends a confirmed removal. On success, the board is reloaded; otherwise, a notice is shown and the board is left as
/// it was.
pub async fn remove_participant(data: BoardData, config: BoardConfig, removal: Removal) {
	let outcome = match send_unregister(&config, &removal.activity_name, &removal.email).await {
		Ok(()) => RemovalOutcome::Reload,
		Err(error) => {
			log::error!(
				"Error removing participant {} from {}: {}",
				removal.email,
				removal.activity_name,
				error
			);
			match error {
				RequestError::Server(failure) => RemovalOutcome::rejected(&failure),
				RequestError::Network(_) | RequestError::Parse(_) => RemovalOutcome::failed(),
			}
		}
	};

	match outcome {
		RemovalOutcome::Reload => load_activities(data, config).await,
		RemovalOutcome::Notice(text) => data.push_notice(text),
	}
}

/// Sends a signup request and decides what the form and board should do next
pub async fn submit_signup(config: &BoardConfig, activity_name: &str, email: &str) -> SignupOutcome {
	match send_signup(config, activity_name, email).await {
		Ok(message) => SignupOutcome::succeeded(message),
		Err(error) => {
			log::error!("Error signing up {} for {}: {}", email, activity_name, error);
			match error {
				RequestError::Server(failure) => SignupOutcome::rejected(&failure),
				RequestError::Network(_) | RequestError::Parse(_) => SignupOutcome::failed(),
			}
		}
	}
}

/// Shows a status message and hides it once the timeout passes
pub async fn show_status(data: BoardData, message: StatusMessage, timeout: u32) {
	show_until(&data, message, TimeoutFuture::new(timeout)).await;
}
