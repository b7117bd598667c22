// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::RequestError;
use activity_board_shared::activities::{Activity, ActivityList};
use activity_board_shared::api::{
	activities_endpoint, signup_endpoint, unregister_endpoint, ServerFailure, SignupResponse,
};
use activity_board_shared::config::BoardConfig;
use gloo_net::http::{Request, Response};

/// Reads the body of a response, turning non-success statuses into a [`ServerFailure`]
async fn successful_body(response: Response) -> Result<String, RequestError> {
	let body = response.text().await?;
	if response.ok() {
		Ok(body)
	} else {
		Err(ServerFailure::from_body(response.status(), &body).into())
	}
}

/// Gets the full activity mapping from the server.
///
/// # Errors
///
/// Errors when the request fails, when the server responds with a non-success status, or when the response body isn't
/// a valid activity mapping.
pub async fn fetch_activities(config: &BoardConfig) -> Result<Vec<Activity>, RequestError> {
	let response = Request::get(&activities_endpoint(&config.api_base)).send().await?;
	let body = successful_body(response).await?;
	let activities: ActivityList = serde_json::from_str(&body)?;
	Ok(activities.into_inner())
}

/// Asks the server to add an email to an activity's roster. Returns the server's confirmation message.
pub async fn send_signup(config: &BoardConfig, activity_name: &str, email: &str) -> Result<String, RequestError> {
	let endpoint = signup_endpoint(&config.api_base, activity_name, email);
	let response = Request::post(&endpoint).send().await?;
	let body = successful_body(response).await?;
	let response: SignupResponse = serde_json::from_str(&body)?;
	Ok(response.message)
}

/// Asks the server to remove an email from an activity's roster. The body of a successful response is ignored.
pub async fn send_unregister(config: &BoardConfig, activity_name: &str, email: &str) -> Result<(), RequestError> {
	let endpoint = unregister_endpoint(&config.api_base, activity_name, email);
	let response = Request::post(&endpoint).send().await?;
	if response.ok() {
		return Ok(());
	}
	let status = response.status();
	let body = response.text().await.unwrap_or_default();
	Err(ServerFailure::from_body(status, &body).into())
}
