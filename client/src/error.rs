// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use activity_board_shared::api::ServerFailure;
use std::fmt;

/// Errors that can occur when making a request to the activities API
pub enum RequestError {
	/// The request couldn't be sent or the response couldn't be read
	Network(gloo_net::Error),
	/// The server responded with a non-success status
	Server(ServerFailure),
	/// The server responded successfully, but the body wasn't what we expected
	Parse(serde_json::Error),
}

impl From<gloo_net::Error> for RequestError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Network(error)
	}
}

impl From<ServerFailure> for RequestError {
	fn from(failure: ServerFailure) -> Self {
		Self::Server(failure)
	}
}

impl From<serde_json::Error> for RequestError {
	fn from(error: serde_json::Error) -> Self {
		Self::Parse(error)
	}
}

impl fmt::Display for RequestError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Network(error) => write!(f, "Request failed: {}", error),
			Self::Server(failure) => write!(f, "The server rejected the request: {}", failure),
			Self::Parse(error) => write!(f, "An invalid response was received: {}", error),
		}
	}
}
