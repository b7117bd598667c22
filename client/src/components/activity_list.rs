// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::data::{BoardData, BoardState, Removal};
use activity_board_shared::activities::Activity;
use activity_board_shared::status::LOAD_FAILED;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct ActivityCardProps {
	activity: Activity,
}

#[component]
pub fn ActivityCard<G: Html>(ctx: Scope<'_>, props: ActivityCardProps) -> View<G> {
	let activity = props.activity;
	let card_class = if activity.is_full() {
		"activity-card full"
	} else {
		"activity-card"
	};
	let availability = activity.availability_text();

	let participant_views = View::new_fragment(
		activity
			.participants
			.iter()
			.map(|participant| {
				let removal = Removal {
					activity_name: activity.name.clone(),
					email: participant.clone(),
				};
				let participant = participant.clone();
				let remove_handler = move |event: WebEvent| {
					event.prevent_default();
					let data: &BoardData = use_context(ctx);
					data.pending_removal.set(Some(removal.clone()));
				};
				view! {
					ctx,
					li(class="participant-item") {
						span(class="participant-name") { (participant) }
						button(class="delete-btn", title="Remove participant", on:click=remove_handler) { "✕" }
					}
				}
			})
			.collect(),
	);

	let name = activity.name;
	let description = activity.description;
	let schedule = activity.schedule;

	view! {
		ctx,
		div(class=card_class) {
			h4 { (name) }
			p { (description) }
			p {
				strong { "Schedule:" }
				" "
				(schedule)
			}
			p(class="availability") {
				strong { "Availability:" }
				" "
				(availability)
			}
			p {
				strong { "Participants:" }
			}
			ul(class="participants-list") {
				(participant_views)
			}
		}
	}
}

/// The list of activity cards. Every successful load rebuilds all of the cards from the new snapshot.
#[component]
pub fn ActivityList<G: Html>(ctx: Scope<'_>) -> View<G> {
	let data: &BoardData = use_context(ctx);
	let state = create_memo(ctx, {
		let state = data.state.clone();
		move || (*state.get()).clone()
	});

	view! {
		ctx,
		div(id="activities-list") {
			(match state.get().as_ref() {
				BoardState::Loading => view! { ctx, p { "Loading activities..." } },
				BoardState::Failed => view! { ctx, p(class="load-error") { (LOAD_FAILED) } },
				BoardState::Loaded(activities) => View::new_fragment(
					activities
						.iter()
						.map(|activity| {
							let activity = activity.clone();
							view! { ctx, ActivityCard(activity=activity) }
						})
						.collect(),
				),
			})
		}
	}
}
