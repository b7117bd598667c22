// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::data::BoardData;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn NoticeList<G: Html>(ctx: Scope<'_>) -> View<G> {
	let data: &BoardData = use_context(ctx);
	let notices = create_memo(ctx, {
		let notices = data.notices.clone();
		move || (*notices.get()).clone()
	});

	view! {
		ctx,
		ul(id="page_notices") {
			Indexed(
				iterable=notices,
				view=|ctx, notice| {
					let text = notice.text.clone();
					let dismiss_handler = move |_event: WebEvent| {
						let data: &BoardData = use_context(ctx);
						data.dismiss_notice(&notice);
					};
					view! {
						ctx,
						li(class="page_notice_entry", role="alert") {
							span(class="page_notice_entry_text") { (text) }
							span(class="page_notice_entry_dismiss") {
								a(class="click", on:click=dismiss_handler) { "[X]" }
							}
						}
					}
				}
			)
		}
	}
}
