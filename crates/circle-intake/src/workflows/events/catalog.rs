use chrono::NaiveDate;
use serde::Serialize;

/// Static listing for one event on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventListing {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub location: &'static str,
    pub date: (i32, u32, u32),
    pub registration_open: bool,
}

impl EventListing {
    pub fn date(&self) -> Option<NaiveDate> {
        let (year, month, day) = self.date;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Whole days from `today` until the event; negative once it has passed.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.date().map(|date| (date - today).num_days())
    }

    /// Registration needs the flag set and the event not yet over.
    pub fn accepts_registrations(&self, today: NaiveDate) -> bool {
        self.registration_open && self.days_until(today).is_some_and(|days| days >= 0)
    }

    pub fn view(&self, today: NaiveDate) -> Option<EventView> {
        let date = self.date()?;
        let days_until = (date - today).num_days();
        let status = match days_until {
            d if d > 0 => EventStatus::Upcoming,
            0 => EventStatus::Today,
            _ => EventStatus::Past,
        };

        Some(EventView {
            slug: self.slug,
            title: self.title,
            summary: self.summary,
            location: self.location,
            date,
            days_until,
            status,
            registration_open: self.accepts_registrations(today),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Upcoming,
    Today,
    Past,
}

/// Event as rendered on the detail page, with its countdown resolved against a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventView {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub location: &'static str,
    pub date: NaiveDate,
    pub days_until: i64,
    pub status: EventStatus,
    pub registration_open: bool,
}

static EVENTS: &[EventListing] = &[
    EventListing {
        slug: "flutter-bootcamp-2026",
        title: "Flutter Bootcamp",
        summary: "A four-week hands-on bootcamp building and shipping a mobile app with Flutter and Firebase.",
        location: "Faculty of Computers, Lab 3",
        date: (2026, 9, 20),
        registration_open: false,
    },
    EventListing {
        slug: "recruitment-open-day-2026",
        title: "Recruitment Open Day",
        summary: "Meet every circle, hear from current members, and get your application questions answered.",
        location: "Main Campus, Great Hall",
        date: (2026, 11, 5),
        registration_open: true,
    },
    EventListing {
        slug: "tech-summit-2026",
        title: "Tech Summit 2026",
        summary: "Talks and panels from engineers and founders, followed by a career fair with our sponsors.",
        location: "University Conference Center",
        date: (2026, 12, 12),
        registration_open: true,
    },
    EventListing {
        slug: "career-night-2027",
        title: "Career Night",
        summary: "CV reviews, mock interviews, and a podcast recording with alumni working across the industry.",
        location: "Main Campus, Hall B",
        date: (2027, 2, 20),
        registration_open: false,
    },
];

pub fn event_listings() -> &'static [EventListing] {
    EVENTS
}

pub fn find_event(slug: &str) -> Option<&'static EventListing> {
    let slug = slug.trim();
    EVENTS
        .iter()
        .find(|event| event.slug.eq_ignore_ascii_case(slug))
}

/// Views sorted by date, soonest first.
pub fn event_views(today: NaiveDate) -> Vec<EventView> {
    let mut views: Vec<_> = EVENTS.iter().filter_map(|event| event.view(today)).collect();
    views.sort_by_key(|view| view.date);
    views
}
