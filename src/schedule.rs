use chrono::Weekday;
use derive_more::Display;
use phf::phf_map;
use serde::Deserialize;

/// Event grouping used for colours, filtering and the legend panel.
///
/// Declaration order is display order.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[display(fmt = "presentation")]
    Presentation,
    #[display(fmt = "mission")]
    Mission,
    #[display(fmt = "practice")]
    Practice,
    #[display(fmt = "visit")]
    Visit,
    #[display(fmt = "worship")]
    Worship,
    #[display(fmt = "youth")]
    Youth,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Presentation,
        Category::Mission,
        Category::Practice,
        Category::Visit,
        Category::Worship,
        Category::Youth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Presentation => "Church Presentation",
            Category::Mission => "Mission",
            Category::Practice => "Choir Practice",
            Category::Visit => "Visit",
            Category::Worship => "Worship",
            Category::Youth => "Youth",
        }
    }

    /// One-line description shown when a legend entry is activated.
    pub fn blurb(&self) -> &'static str {
        match self {
            Category::Presentation => {
                "Special presentations by church groups and ministries during services."
            }
            Category::Mission => {
                "Outreach programs, field work, and mission trips to spread the gospel."
            }
            Category::Practice => {
                "Regular weekly rehearsals for the church choir and worship team preparation."
            }
            Category::Visit => "Pastoral visits, home fellowships, and community outreach events.",
            Category::Worship => {
                "Regular Sunday services, prayer meetings, and special worship gatherings."
            }
            Category::Youth => {
                "Activities, retreats, and fellowship events specifically for the youth ministry."
            }
        }
    }
}

/// Active category filter. `All` leaves the schedule untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(Category),
}

impl Default for Filter {
    fn default() -> Self {
        Filter::All
    }
}

impl Filter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => *c == category,
        }
    }
}

/// A single entry of the annual schedule. The table is fixed; nothing in the
/// application creates, edits or removes events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Event {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Calendar month, 1..=12.
    pub month: u32,
    /// Day of month, 1..=31.
    pub day: u32,
    /// Free-form subtype label, see [`kind_label`].
    pub kind: &'static str,
    pub category: Category,
}

static KIND_LABELS: phf::Map<&'static str, &'static str> = phf_map! {
    "presentation" => "Presentation",
    "mission" => "Mission",
    "practice" => "Practice",
    "visit" => "Visit",
    "worship" => "Worship Service",
    "youth" => "Youth Event",
    "conference" => "Conference",
    "celebration" => "Celebration",
    "planning" => "Planning",
    "kids" => "Kids' Event",
    "community" => "Community Event",
    "music" => "Music Event",
};

/// Display label for a free-form event kind. Unknown kinds are shown as-is.
pub fn kind_label(kind: &str) -> &str {
    KIND_LABELS.get(kind).copied().unwrap_or(kind)
}

pub const EVENTS: [Event; 15] = [
    Event {
        id: 1,
        title: "New Year Service",
        description: "First service of the year with special prayers",
        month: 1,
        day: 1,
        kind: "worship",
        category: Category::Presentation,
    },
    Event {
        id: 2,
        title: "Youth Retreat",
        description: "Annual youth camp and spiritual retreat",
        month: 1,
        day: 15,
        kind: "youth",
        category: Category::Mission,
    },
    Event {
        id: 3,
        title: "Men's Conference",
        description: "Conference focusing on men's spiritual growth",
        month: 2,
        day: 10,
        kind: "conference",
        category: Category::Practice,
    },
    Event {
        id: 4,
        title: "Women's Day Celebration",
        description: "Special service celebrating women",
        month: 3,
        day: 8,
        kind: "celebration",
        category: Category::Presentation,
    },
    Event {
        id: 5,
        title: "Easter Service",
        description: "Resurrection Sunday celebration",
        month: 4,
        day: 20,
        kind: "worship",
        category: Category::Presentation,
    },
    Event {
        id: 6,
        title: "Mission Trip Planning",
        description: "Planning session for summer mission trips",
        month: 5,
        day: 5,
        kind: "planning",
        category: Category::Mission,
    },
    Event {
        id: 7,
        title: "Vacation Bible School",
        description: "Summer kids program and Bible lessons",
        month: 6,
        day: 15,
        kind: "kids",
        category: Category::Practice,
    },
    Event {
        id: 8,
        title: "Summer Camp",
        description: "Youth summer camp activities",
        month: 7,
        day: 10,
        kind: "youth",
        category: Category::Practice,
    },
    Event {
        id: 9,
        title: "Pastor's Anniversary",
        description: "Celebrating pastor's years of service",
        month: 8,
        day: 25,
        kind: "celebration",
        category: Category::Presentation,
    },
    Event {
        id: 10,
        title: "Back to School Blessing",
        description: "Prayer service for students and teachers",
        month: 9,
        day: 1,
        kind: "worship",
        category: Category::Presentation,
    },
    Event {
        id: 11,
        title: "Harvest Festival",
        description: "Fall harvest celebration and food drive",
        month: 10,
        day: 15,
        kind: "community",
        category: Category::Visit,
    },
    Event {
        id: 12,
        title: "Thanksgiving Service",
        description: "Giving thanks for God's blessings",
        month: 11,
        day: 28,
        kind: "worship",
        category: Category::Presentation,
    },
    Event {
        id: 13,
        title: "Christmas Concert",
        description: "Christmas carols and musical performance",
        month: 12,
        day: 15,
        kind: "music",
        category: Category::Presentation,
    },
    Event {
        id: 14,
        title: "Christmas Eve Service",
        description: "Candlelight service on Christmas Eve",
        month: 12,
        day: 24,
        kind: "worship",
        category: Category::Presentation,
    },
    Event {
        id: 15,
        title: "New Year's Eve Watch Night",
        description: "Prayer service to welcome the new year",
        month: 12,
        day: 31,
        kind: "worship",
        category: Category::Presentation,
    },
];

/// First event on the given day, if any. Days carrying more than one event
/// surface only the earliest table entry.
pub fn find_event_for_day(events: &[Event], month_index: u32, day: u32) -> Option<&Event> {
    events
        .iter()
        .find(|e| e.month == month_index + 1 && e.day == day)
}

pub fn filter_events<'a>(
    events: &'a [Event],
    filter: Filter,
) -> impl Iterator<Item = &'a Event> + 'a {
    events.iter().filter(move |e| filter.matches(e.category))
}

/// Per-category counts for the legend. Every category is present in the
/// result, absent ones with a count of zero, so the display order is stable.
pub fn tally_by_category(events: &[Event]) -> Vec<(Category, usize)> {
    Category::ALL
        .iter()
        .map(|&category| {
            let count = events.iter().filter(|e| e.category == category).count();
            (category, count)
        })
        .collect()
}

/// Weekday highlight heuristic: Sundays count as presentation days,
/// Tuesdays/Thursdays/Saturdays as practice days.
pub fn implied_category(weekday: Weekday) -> Option<Category> {
    match weekday {
        Weekday::Sun => Some(Category::Presentation),
        Weekday::Tue | Weekday::Thu | Weekday::Sat => Some(Category::Practice),
        _ => None,
    }
}

/// Highlight category of a day cell under the active filter.
///
/// An explicit event always takes precedence over the implied weekday
/// category; the heuristic only paints event-free days.
pub fn highlight_for_day(
    explicit: Option<&Event>,
    weekday: Weekday,
    filter: Filter,
) -> Option<Category> {
    if let Some(event) = explicit {
        if filter.matches(event.category) {
            return Some(event.category);
        }
    }

    implied_category(weekday).filter(|&c| explicit.is_none() && filter.matches(c))
}

/// Synthetic schedule entry for a practice/presentation weekday without an
/// explicit event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImpliedSession {
    pub category: Category,
    pub month: u32,
    pub day: u32,
    pub weekday: Weekday,
}

impl ImpliedSession {
    pub fn on(weekday: Weekday, month_index: u32, day: u32) -> Option<Self> {
        implied_category(weekday).map(|category| ImpliedSession {
            category,
            month: month_index + 1,
            day,
            weekday,
        })
    }

    pub fn title(&self) -> &'static str {
        match self.category {
            Category::Practice => "Choir Practice",
            _ => "Church Presentation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self.category {
            Category::Practice => "Regular midweek choir practice session",
            _ => "Sunday morning church presentation",
        }
    }

    pub fn time_label(&self) -> &'static str {
        match self.category {
            Category::Practice if self.weekday == Weekday::Sat => "4:00 PM - 6:00 PM",
            Category::Practice => "6:00 PM - 8:00 PM",
            _ => "10:00 AM",
        }
    }
}

/// Anything the detail pane can show: a real schedule entry, an implied
/// weekday session, or the summary selected through the legend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayItem {
    Event(Event),
    Session(ImpliedSession),
    CategorySummary(Category),
}

impl DisplayItem {
    /// Selection target for a day cell: the explicit event if one exists,
    /// otherwise the implied weekday session, otherwise nothing.
    pub fn for_day(
        explicit: Option<&Event>,
        weekday: Weekday,
        month_index: u32,
        day: u32,
    ) -> Option<DisplayItem> {
        if let Some(event) = explicit {
            return Some(DisplayItem::Event(*event));
        }

        ImpliedSession::on(weekday, month_index, day).map(DisplayItem::Session)
    }

    pub fn category(&self) -> Category {
        match self {
            DisplayItem::Event(e) => e.category,
            DisplayItem::Session(s) => s.category,
            DisplayItem::CategorySummary(c) => *c,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DisplayItem::Event(e) => e.title,
            DisplayItem::Session(s) => s.title(),
            DisplayItem::CategorySummary(c) => c.label(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DisplayItem::Event(e) => e.description,
            DisplayItem::Session(s) => s.description(),
            DisplayItem::CategorySummary(c) => c.blurb(),
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            DisplayItem::Event(e) => kind_label(e.kind),
            DisplayItem::Session(s) => match s.category {
                Category::Practice => "Practice",
                _ => "Presentation",
            },
            DisplayItem::CategorySummary(c) => c.label(),
        }
    }

    pub fn date_label(&self, year: i32) -> String {
        match self {
            DisplayItem::Event(e) => format!("{}/{}/{}", e.month, e.day, year),
            DisplayItem::Session(s) => format!("{}/{}/{}", s.month, s.day, year),
            DisplayItem::CategorySummary(_) => format!("Year-round {}", year),
        }
    }

    pub fn time_label(&self) -> &'static str {
        match self {
            DisplayItem::Event(_) => "All Day",
            DisplayItem::Session(s) => s.time_label(),
            DisplayItem::CategorySummary(_) => "Various Times",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_all_is_identity() {
        let filtered: Vec<_> = filter_events(&EVENTS, Filter::All).collect();
        assert_eq!(filtered.len(), EVENTS.len());
        assert!(filtered
            .iter()
            .zip(EVENTS.iter())
            .all(|(got, expected)| *got == expected));
    }

    #[test]
    fn filter_keeps_only_matching_category() {
        let worship: Vec<_> =
            filter_events(&EVENTS, Filter::Category(Category::Worship)).collect();
        assert!(worship.is_empty());

        let practice: Vec<_> =
            filter_events(&EVENTS, Filter::Category(Category::Practice)).collect();
        assert!(practice.iter().all(|e| e.category == Category::Practice));
        assert_eq!(practice.len(), 3);
    }

    #[test]
    fn presentation_events_match_source_table() {
        let titles: Vec<_> = filter_events(&EVENTS, Filter::Category(Category::Presentation))
            .map(|e| e.title)
            .collect();

        assert_eq!(
            titles,
            vec![
                "New Year Service",
                "Women's Day Celebration",
                "Easter Service",
                "Pastor's Anniversary",
                "Back to School Blessing",
                "Thanksgiving Service",
                "Christmas Concert",
                "Christmas Eve Service",
                "New Year's Eve Watch Night",
            ]
        );
    }

    #[test]
    fn tally_covers_all_categories_and_sums_to_len() {
        let tally = tally_by_category(&EVENTS);

        assert_eq!(tally.len(), Category::ALL.len());
        assert_eq!(tally.iter().map(|(_, n)| n).sum::<usize>(), EVENTS.len());

        let count_of = |c: Category| tally.iter().find(|(cat, _)| *cat == c).unwrap().1;
        assert_eq!(count_of(Category::Presentation), 9);
        assert_eq!(count_of(Category::Worship), 0);
        assert_eq!(count_of(Category::Youth), 0);
    }

    #[test]
    fn first_event_wins_on_shared_day() {
        let twice = [
            Event {
                id: 100,
                title: "First",
                description: "",
                month: 3,
                day: 14,
                kind: "worship",
                category: Category::Worship,
            },
            Event {
                id: 101,
                title: "Second",
                description: "",
                month: 3,
                day: 14,
                kind: "youth",
                category: Category::Youth,
            },
        ];

        let found = find_event_for_day(&twice, 2, 14).unwrap();
        assert_eq!(found.id, 100);
    }

    #[test]
    fn lookup_on_empty_list_is_none() {
        assert!(find_event_for_day(&[], 0, 1).is_none());
        assert_eq!(filter_events(&[], Filter::All).count(), 0);
        assert!(tally_by_category(&[]).iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn weekday_heuristic() {
        assert_eq!(implied_category(Weekday::Sun), Some(Category::Presentation));
        assert_eq!(implied_category(Weekday::Tue), Some(Category::Practice));
        assert_eq!(implied_category(Weekday::Thu), Some(Category::Practice));
        assert_eq!(implied_category(Weekday::Sat), Some(Category::Practice));
        assert_eq!(implied_category(Weekday::Mon), None);
        assert_eq!(implied_category(Weekday::Wed), None);
        assert_eq!(implied_category(Weekday::Fri), None);
    }

    #[test]
    fn explicit_event_beats_implied_weekday() {
        // A mission event falling on a Tuesday keeps its own colour.
        let event = EVENTS[1];
        assert_eq!(event.category, Category::Mission);

        let highlight = highlight_for_day(Some(&event), Weekday::Tue, Filter::All);
        assert_eq!(highlight, Some(Category::Mission));
    }

    #[test]
    fn implied_highlight_only_on_event_free_days() {
        assert_eq!(
            highlight_for_day(None, Weekday::Sun, Filter::All),
            Some(Category::Presentation)
        );
        assert_eq!(highlight_for_day(None, Weekday::Mon, Filter::All), None);
    }

    #[test]
    fn filter_masks_explicit_and_implied_highlights() {
        let event = EVENTS[0];
        assert_eq!(event.category, Category::Presentation);

        let filter = Filter::Category(Category::Mission);
        assert_eq!(highlight_for_day(Some(&event), Weekday::Thu, filter), None);
        assert_eq!(highlight_for_day(None, Weekday::Thu, filter), None);
        assert_eq!(
            highlight_for_day(None, Weekday::Thu, Filter::Category(Category::Practice)),
            Some(Category::Practice)
        );
    }

    #[test]
    fn day_selection_prefers_explicit_event() {
        let item = DisplayItem::for_day(Some(&EVENTS[0]), Weekday::Sun, 0, 1).unwrap();
        assert_eq!(item, DisplayItem::Event(EVENTS[0]));

        let item = DisplayItem::for_day(None, Weekday::Sat, 0, 3).unwrap();
        match item {
            DisplayItem::Session(session) => {
                assert_eq!(session.category, Category::Practice);
                assert_eq!(session.time_label(), "4:00 PM - 6:00 PM");
            }
            other => panic!("expected implied session, got {:?}", other),
        }

        assert!(DisplayItem::for_day(None, Weekday::Mon, 0, 5).is_none());
    }

    #[test]
    fn kind_labels_fall_back_to_raw() {
        assert_eq!(kind_label("worship"), "Worship Service");
        assert_eq!(kind_label("kids"), "Kids' Event");
        assert_eq!(kind_label("potluck"), "potluck");
    }
}
