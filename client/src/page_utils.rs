// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use activity_board_shared::config::{BoardConfig, ConfigError};
use web_sys::{window, Element};

pub const MOUNT_ELEMENT_ID: &str = "activity_board";

pub fn set_page_title(new_title: &str) {
	if let Some(window) = window() {
		if let Some(document) = window.document() {
			document.set_title(new_title);
		}
	}
}

/// Gets the element the board renders into: the element with the mount ID if the page has one, or the page body
/// otherwise
pub fn mount_element() -> Option<Element> {
	let document = window()?.document()?;
	match document.get_element_by_id(MOUNT_ELEMENT_ID) {
		Some(element) => Some(element),
		None => document.body().map(Element::from),
	}
}

/// Reads the board configuration from the mount element's `data-*` attributes
pub fn read_config(mount: &Element) -> Result<BoardConfig, ConfigError> {
	BoardConfig::from_attributes(
		mount.get_attribute("data-api-base"),
		mount.get_attribute("data-message-timeout"),
		mount.get_attribute("data-log-level"),
	)
}
