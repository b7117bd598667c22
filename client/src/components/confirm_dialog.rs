// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::data::{remove_participant, BoardData};
use activity_board_shared::config::BoardConfig;
use activity_board_shared::status::{removal_confirmation_text, CANCEL_REMOVAL_LABEL, CONFIRM_REMOVAL_LABEL};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// Asks the user to confirm a pending participant removal. Nothing is sent to the server until the user confirms.
#[component]
pub fn ConfirmDialog<G: Html>(ctx: Scope<'_>) -> View<G> {
	let data: &BoardData = use_context(ctx);
	let pending_removal = create_memo(ctx, {
		let pending_removal = data.pending_removal.clone();
		move || (*pending_removal.get()).clone()
	});

	view! {
		ctx,
		(if let Some(removal) = pending_removal.get().as_ref() {
			let prompt = removal_confirmation_text(&removal.activity_name, &removal.email);

			let confirm_handler = move |_event: WebEvent| {
				let data: &BoardData = use_context(ctx);
				let Some(removal) = (*data.pending_removal.get_untracked()).clone() else {
					return;
				};
				data.pending_removal.set(None);

				let config: &BoardConfig = use_context(ctx);
				spawn_local_scoped(ctx, remove_participant(data.clone(), config.clone(), removal));
			};
			let cancel_handler = move |_event: WebEvent| {
				let data: &BoardData = use_context(ctx);
				data.pending_removal.set(None);
			};

			view! {
				ctx,
				div(id="confirm_dialog", role="dialog") {
					p(class="confirm_dialog_prompt") { (prompt) }
					div(class="confirm_dialog_actions") {
						button(class="confirm_dialog_confirm", on:click=confirm_handler) { (CONFIRM_REMOVAL_LABEL) }
						button(class="confirm_dialog_cancel", on:click=cancel_handler) { (CANCEL_REMOVAL_LABEL) }
					}
				}
			}
		} else {
			view! { ctx, }
		})
	}
}
