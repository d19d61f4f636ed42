use chrono::{Duration, NaiveDate};
use itertools::Itertools;

use crate::config::Config;
use crate::schedule::{self, Category, Event, Filter};

/// Query layer over the event store. Views never touch the static table
/// directly; swapping in another source only has to reproduce this surface.
pub struct Agenda {
    year: i32,
    events: Vec<Event>,
}

impl Agenda {
    pub fn from_config(config: &Config) -> Self {
        Agenda::with_events(config.year, schedule::EVENTS.to_vec())
    }

    pub fn with_events(year: i32, events: Vec<Event>) -> Self {
        Agenda { year, events }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// First event on the given day of the zero-based month, if any.
    pub fn event_on(&self, month_index: u32, day: u32) -> Option<&Event> {
        schedule::find_event_for_day(&self.events, month_index, day)
    }

    pub fn events_of_month(&self, month_index: u32) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(move |e| e.month == month_index + 1)
    }

    pub fn filtered(&self, filter: Filter) -> impl Iterator<Item = &Event> {
        schedule::filter_events(&self.events, filter)
    }

    pub fn tally(&self) -> Vec<(Category, usize)> {
        schedule::tally_by_category(&self.events)
    }

    /// Date of the event within the agenda year. `None` for day/month
    /// combinations that do not exist in this year.
    pub fn date_of(&self, event: &Event) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, event.month, event.day)
    }

    /// Filter-respecting events falling into `today..=today + days`, sorted
    /// by date, capped at `limit` entries. Drives the "upcoming this week"
    /// panel.
    pub fn upcoming_within(
        &self,
        today: NaiveDate,
        days: i64,
        filter: Filter,
        limit: usize,
    ) -> Vec<&Event> {
        let horizon = today + Duration::days(days);

        self.events
            .iter()
            .filter(|e| filter.matches(e.category))
            .filter_map(|e| self.date_of(e).map(|date| (date, e)))
            .filter(|(date, _)| *date >= today && *date <= horizon)
            .sorted_by_key(|(date, _)| *date)
            .map(|(_, e)| e)
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agenda() -> Agenda {
        Agenda::with_events(2026, schedule::EVENTS.to_vec())
    }

    #[test]
    fn events_of_month_matches_by_one_based_month() {
        let december: Vec<_> = agenda().events_of_month(11).map(|e| e.id).collect();
        assert_eq!(december, vec![13, 14, 15]);

        assert_eq!(agenda().events_of_month(1).count(), 1);
    }

    #[test]
    fn event_lookup_by_day() {
        let agenda = agenda();

        assert_eq!(agenda.event_on(0, 1).unwrap().title, "New Year Service");
        assert!(agenda.event_on(0, 2).is_none());
    }

    #[test]
    fn filtered_delegates_to_the_schedule() {
        let agenda = agenda();
        let presentations: Vec<_> = agenda
            .filtered(Filter::Category(Category::Presentation))
            .map(|e| e.id)
            .collect();
        assert_eq!(presentations, vec![1, 4, 5, 9, 10, 12, 13, 14, 15]);
    }

    #[test]
    fn upcoming_window_is_inclusive_and_sorted() {
        let agenda = agenda();
        let today = NaiveDate::from_ymd_opt(2026, 12, 15).unwrap();

        let upcoming = agenda.upcoming_within(today, 7, Filter::All, 5);
        let ids: Vec<u32> = upcoming.iter().map(|e| e.id).collect();

        // Dec 15 itself counts, Dec 24 falls outside the 7-day window.
        assert_eq!(ids, vec![13]);

        let wider = agenda.upcoming_within(today, 16, Filter::All, 5);
        let ids: Vec<u32> = wider.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![13, 14, 15]);
    }

    #[test]
    fn upcoming_respects_filter_and_limit() {
        let agenda = agenda();
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        let all_year = agenda.upcoming_within(today, 365, Filter::All, 5);
        assert_eq!(all_year.len(), 5);

        let missions =
            agenda.upcoming_within(today, 365, Filter::Category(Category::Mission), 5);
        assert!(missions.iter().all(|e| e.category == Category::Mission));
        assert_eq!(missions.len(), 2);
    }

    #[test]
    fn upcoming_on_empty_store_is_empty() {
        let empty = Agenda::with_events(2026, Vec::new());
        let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();

        assert!(empty.upcoming_within(today, 7, Filter::All, 5).is_empty());
        assert!(empty.tally().iter().all(|(_, n)| *n == 0));
    }
}
