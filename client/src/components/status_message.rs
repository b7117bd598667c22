// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::data::BoardData;
use sycamore::prelude::*;

#[component]
pub fn StatusMessageView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let data: &BoardData = use_context(ctx);
	let status = create_memo(ctx, {
		let status = data.status.clone();
		move || (*status.get()).clone()
	});
	let visible = create_memo(ctx, {
		let status_visible = data.status_visible.clone();
		move || *status_visible.get()
	});

	let message_class = create_memo(ctx, || match status.get().as_ref() {
		Some(message) => message.css_classes(*visible.get()),
		None => String::from("hidden"),
	});
	let message_text = create_memo(ctx, || match status.get().as_ref() {
		Some(message) => message.text.clone(),
		None => String::new(),
	});

	view! {
		ctx,
		div(id="message", class=message_class.get()) {
			(message_text.get())
		}
	}
}
