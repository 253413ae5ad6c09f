//! Fixed event list shared by the listing, registration, and seeding pages.
//!
//! The registration page reads only this in-memory list. The seeding page
//! writes the same list into the `events` collection, which nothing reads
//! back.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use serde::Serialize;

pub const EVENT_CATEGORIES: &[&str] = &["Community", "Sports", "Arts", "Education", "Volunteer"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub activities: &'static [&'static str],
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub attendees: u32,
    pub spots: u32,
    pub description: &'static str,
}

impl Event {
    pub fn remaining_spots(&self) -> u32 {
        self.spots.saturating_sub(self.attendees)
    }

    pub fn is_full(&self) -> bool {
        self.remaining_spots() == 0
    }

    pub fn spots_label(&self) -> String {
        match self.remaining_spots() {
            0 => "Full".to_owned(),
            1 => "1 spot left".to_owned(),
            n => format!("{n} spots left"),
        }
    }

    pub fn register_href(&self) -> String {
        format!("/events/register/{}", self.id)
    }
}

const FIXED_EVENTS: &[Event] = &[
    Event {
        id: "1",
        title: "Neighborhood Park Cleanup",
        category: "Volunteer",
        activities: &["Litter pickup", "Planting", "Trail care"],
        date: "2025-04-12",
        time: "9:00 AM",
        location: "Riverside Park",
        attendees: 18,
        spots: 40,
        description: "Help restore Riverside Park for spring. Gloves and bags provided.",
    },
    Event {
        id: "2",
        title: "Community Potluck Dinner",
        category: "Community",
        activities: &["Shared meal", "Live music"],
        date: "2025-04-19",
        time: "6:00 PM",
        location: "Northside Community Center",
        attendees: 60,
        spots: 60,
        description: "Bring a dish from your family's table and meet your neighbors.",
    },
    Event {
        id: "3",
        title: "Youth Soccer Clinic",
        category: "Sports",
        activities: &["Drills", "Scrimmage"],
        date: "2025-04-26",
        time: "10:00 AM",
        location: "Lincoln Field",
        attendees: 22,
        spots: 30,
        description: "Free coaching for ages 8 to 14. All skill levels welcome.",
    },
    Event {
        id: "4",
        title: "Mural Painting Workshop",
        category: "Arts",
        activities: &["Painting", "Design"],
        date: "2025-05-03",
        time: "1:00 PM",
        location: "Main Street Underpass",
        attendees: 11,
        spots: 15,
        description: "Add your brushstrokes to the new community mural.",
    },
    Event {
        id: "5",
        title: "Financial Literacy Night",
        category: "Education",
        activities: &["Budgeting", "Q&A"],
        date: "2025-05-08",
        time: "7:00 PM",
        location: "Downtown Library",
        attendees: 9,
        spots: 25,
        description: "Practical budgeting and savings tips from local volunteers.",
    },
    Event {
        id: "6",
        title: "Senior Tech Help Day",
        category: "Education",
        activities: &["Phone setup", "Video calls", "Email basics"],
        date: "2025-05-15",
        time: "11:00 AM",
        location: "Oak Avenue Senior Center",
        attendees: 19,
        spots: 20,
        description: "One-on-one help with phones, tablets and video calls.",
    },
];

pub fn fixed_events() -> &'static [Event] {
    FIXED_EVENTS
}

/// Look up a fixed event by id. Unknown ids yield `None`.
pub fn find_event(id: &str) -> Option<&'static Event> {
    FIXED_EVENTS.iter().find(|e| e.id == id)
}

/// Events in `category`, or all of them for `None`.
pub fn filter_events(category: Option<&str>) -> Vec<&'static Event> {
    FIXED_EVENTS
        .iter()
        .filter(|e| category.is_none_or(|c| e.category == c))
        .collect()
}
