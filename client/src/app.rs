// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::activity_list::ActivityList;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::notices::NoticeList;
use crate::components::signup_form::SignupForm;
use crate::data::{load_activities, BoardData};
use activity_board_shared::config::BoardConfig;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;

/// The board's root. Expects [`BoardConfig`] and [`BoardData`] to be provided as context.
#[component]
pub fn App<G: Html>(ctx: Scope<'_>) -> View<G> {
	let config: &BoardConfig = use_context(ctx);
	let data: &BoardData = use_context(ctx);

	spawn_local_scoped(ctx, load_activities(data.clone(), config.clone()));

	view! {
		ctx,
		NoticeList
		section(id="activities-container") {
			h3 { "Available Activities" }
			ActivityList
		}
		section(id="signup-container") {
			h3 { "Sign Up for an Activity" }
			SignupForm
		}
		ConfirmDialog
	}
}
