// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// The details of an activity as the server sends them, keyed externally by the activity name
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct ActivityDetails {
	pub description: String,
	pub schedule: String,
	pub max_participants: u32,
	pub participants: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Activity {
	pub name: String,
	pub description: String,
	pub schedule: String,
	pub max_participants: u32,
	pub participants: Vec<String>,
}

impl Activity {
	pub fn new(name: String, details: ActivityDetails) -> Self {
		Self {
			name,
			description: details.description,
			schedule: details.schedule,
			max_participants: details.max_participants,
			participants: details.participants,
		}
	}

	/// Gets the number of open spots. Negative when the roster is over capacity.
	pub fn spots_left(&self) -> i64 {
		i64::from(self.max_participants) - self.participants.len() as i64
	}

	pub fn is_full(&self) -> bool {
		self.spots_left() <= 0
	}

	pub fn availability_text(&self) -> String {
		format!("{} spots left", self.spots_left())
	}
}

/// The full activity mapping returned by the activity list endpoint.
///
/// The server's key order is preserved so that cards and selector options appear in the order the server lists them.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ActivityList(Vec<Activity>);

impl ActivityList {
	pub fn into_inner(self) -> Vec<Activity> {
		let Self(activities) = self;
		activities
	}

	pub fn names(&self) -> Vec<String> {
		self.0.iter().map(|activity| activity.name.clone()).collect()
	}
}

struct ActivityListVisitor;

impl<'de> Visitor<'de> for ActivityListVisitor {
	type Value = ActivityList;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("a map of activity names to activity details")
	}

	fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
		let mut activities = Vec::with_capacity(access.size_hint().unwrap_or(0));
		while let Some((name, details)) = access.next_entry::<String, ActivityDetails>()? {
			activities.push(Activity::new(name, details));
		}
		Ok(ActivityList(activities))
	}
}

impl<'de> Deserialize<'de> for ActivityList {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_map(ActivityListVisitor)
	}
}
