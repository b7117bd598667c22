// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::status_message::StatusMessageView;
use crate::data::{load_activities, show_status, submit_signup, BoardData};
use activity_board_shared::config::BoardConfig;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn SignupForm<G: Html>(ctx: Scope<'_>) -> View<G> {
	let data: &BoardData = use_context(ctx);
	let email_signal = create_signal(ctx, String::new());
	let activity_signal = create_signal(ctx, String::new());
	let activity_names = create_memo(ctx, {
		let activity_names = data.activity_names.clone();
		move || (*activity_names.get()).clone()
	});

	// Empty fields are caught by the browser's own validation of the required inputs
	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		let email = (*email_signal.get()).clone();
		let activity_name = (*activity_signal.get()).clone();

		spawn_local_scoped(ctx, async move {
			let data: &BoardData = use_context(ctx);
			let config: &BoardConfig = use_context(ctx);

			let outcome = submit_signup(config, &activity_name, &email).await;
			if outcome.reset_form {
				email_signal.set(String::new());
				activity_signal.set(String::new());
			}
			if outcome.reload {
				spawn_local_scoped(ctx, load_activities(data.clone(), config.clone()));
			}

			show_status(data.clone(), outcome.message, config.message_timeout).await;
		});
	};

	view! {
		ctx,
		form(id="signup-form", on:submit=form_submission_handler) {
			div(class="form-group") {
				label(for="email") { "Student Email:" }
				input(type="email", id="email", required=true, placeholder="your-email@mergington.edu", bind:value=email_signal)
			}
			div(class="form-group") {
				label(for="activity") { "Select Activity:" }
				select(id="activity", required=true, bind:value=activity_signal) {
					option(value="") { "-- Select an activity --" }
					Indexed(
						iterable=activity_names,
						view=|ctx, name| {
							let value = name.clone();
							view! {
								ctx,
								option(value=value) { (name) }
							}
						}
					)
				}
			}
			button(type="submit") { "Sign Up" }
		}
		StatusMessageView
	}
}
