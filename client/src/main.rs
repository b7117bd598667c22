// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;

mod app;
mod components;
mod data;
mod error;
mod page_utils;
mod pages;
mod requests;

use app::App;
use data::BoardData;
use page_utils::{mount_element, read_config, set_page_title};
use pages::error::{ErrorData, ErrorView};

fn main() {
	console_error_panic_hook::set_once();

	// Without a document, there's nowhere to render or report anything.
	let Some(mount) = mount_element() else {
		return;
	};

	match read_config(&mount) {
		Ok(config) => {
			wasm_logger::init(wasm_logger::Config::new(config.log_level));
			log::debug!("Starting activity board with {:?}", config);
			set_page_title("Extracurricular Activities");

			sycamore::render_to(
				|ctx| {
					provide_context(ctx, config);
					provide_context(ctx, BoardData::new());
					view! { ctx, App }
				},
				&mount,
			);
		}
		Err(error) => {
			wasm_logger::init(wasm_logger::Config::default());
			log::error!("Invalid activity board configuration: {}", error);

			sycamore::render_to(
				|ctx| {
					let error = ErrorData::new_with_error("Unable to start: the page's board configuration is invalid.", error);
					view! { ctx, ErrorView(error=error) }
				},
				&mount,
			);
		}
	}
}
