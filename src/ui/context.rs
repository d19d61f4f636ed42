use chrono::prelude::*;
use chrono::Duration;

use unsegen::base::style::*;

use crate::agenda::Agenda;
use crate::calendar;
use crate::schedule::{Category, DisplayItem, Filter};
use crate::state::{Action, ViewState};

#[derive(Clone, Debug)]
pub struct Theme {
    pub day_style: StyleModifier,
    pub day_text_style: TextFormatModifier,
    pub cursor_day_style: StyleModifier,
    pub today_day_char: Option<char>,
    pub selected_day_char: Option<char>,
    pub suppressed_event_char: Option<char>,
    pub month_header_style: StyleModifier,
    pub quarter_header_style: StyleModifier,
    pub weekday_header_style: StyleModifier,
    pub sunday_header_style: StyleModifier,
    pub practice_header_style: StyleModifier,
    pub pane_title_style: StyleModifier,
    pub placeholder_style: StyleModifier,
    pub active_filter_style: StyleModifier,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            day_style: StyleModifier::default(),
            day_text_style: TextFormatModifier::default(),
            cursor_day_style: StyleModifier::default().invert(true),
            today_day_char: Some('*'),
            selected_day_char: Some('>'),
            suppressed_event_char: Some('.'),
            month_header_style: StyleModifier::default().fg_color(Color::Yellow),
            quarter_header_style: StyleModifier::default().invert(true),
            weekday_header_style: StyleModifier::default(),
            sunday_header_style: StyleModifier::default().fg_color(Color::Red),
            practice_header_style: StyleModifier::default().fg_color(Color::Green),
            pane_title_style: StyleModifier::default().fg_color(Color::Yellow),
            placeholder_style: StyleModifier::default(),
            active_filter_style: StyleModifier::default().invert(true),
        }
    }
}

impl Theme {
    /// Terminal colour of a category, mirroring the original palette.
    pub fn category_color(category: Category) -> Color {
        match category {
            Category::Presentation => Color::Red,
            Category::Mission => Color::Magenta,
            Category::Practice => Color::Green,
            Category::Visit => Color::Yellow,
            Category::Worship => Color::Blue,
            Category::Youth => Color::Cyan,
        }
    }

    pub fn highlight_style(&self, category: Category) -> StyleModifier {
        StyleModifier::default()
            .bg_color(Self::category_color(category))
            .fg_color(Color::White)
    }

    pub fn swatch_style(&self, category: Category) -> StyleModifier {
        StyleModifier::default().fg_color(Self::category_color(category))
    }
}

pub struct Context {
    theme: Theme,
    agenda: Agenda,
    view_state: ViewState,
    cursor: NaiveDate,
    now: DateTime<Local>,
    upcoming_days: i64,
    upcoming_limit: usize,
}

impl Context {
    pub fn new(agenda: Agenda, upcoming_days: i64, upcoming_limit: usize) -> Self {
        let now = Local::now();
        let cursor = year_start(agenda.year());

        let mut context = Context {
            theme: Theme::default(),
            agenda,
            view_state: ViewState::default(),
            cursor,
            now,
            upcoming_days,
            upcoming_limit,
        };
        context.select_today();
        context
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn agenda(&self) -> &Agenda {
        &self.agenda
    }

    pub fn year(&self) -> i32 {
        self.agenda.year()
    }

    pub fn now(&self) -> &DateTime<Local> {
        &self.now
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    pub fn update(&mut self) {
        self.now = Local::now();
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    /// Jump the cursor to today, or to January 1 when the wall clock is
    /// outside the configured year.
    pub fn select_today(&mut self) {
        let today = self.today();
        self.cursor = if today.year() == self.year() {
            today
        } else {
            year_start(self.year())
        };
    }

    /// Move the cursor by a number of days, saturating at the year bounds.
    pub fn move_cursor(&mut self, days: i64) {
        let moved = self.cursor + Duration::days(days);
        self.cursor = clamp_to_year(moved, self.year());
    }

    /// Jump to the first day of the previous/next quarter, saturating at the
    /// first and last quarter.
    pub fn move_quarter(&mut self, forward: bool) -> Result<(), ()> {
        let quarter = self.quarter();
        let target = if forward {
            if quarter + 1 >= calendar::QUARTERS_PER_YEAR {
                return Err(());
            }
            quarter + 1
        } else {
            quarter.checked_sub(1).ok_or(())?
        };

        let month = target * calendar::MONTHS_PER_QUARTER + 1;
        self.cursor = NaiveDate::from_ymd_opt(self.year(), month, 1).unwrap();
        Ok(())
    }

    pub fn cursor_month_index(&self) -> u32 {
        self.cursor.month0()
    }

    /// Quarter currently shown: the one the cursor is in.
    pub fn quarter(&self) -> u32 {
        calendar::quarter_of_month(self.cursor_month_index())
    }

    pub fn filter(&self) -> Filter {
        self.view_state.filter
    }

    pub fn selection(&self) -> Option<&DisplayItem> {
        self.view_state.selection.as_ref()
    }

    pub fn apply(&mut self, action: Action) {
        self.view_state = self.view_state.apply(action);
    }

    /// Selection target for the day under the cursor, if the day carries an
    /// event or an implied weekday session.
    pub fn item_under_cursor(&self) -> Option<DisplayItem> {
        let month_index = self.cursor_month_index();
        let day = self.cursor.day();
        let explicit = self.agenda.event_on(month_index, day);

        DisplayItem::for_day(explicit, self.cursor.weekday(), month_index, day)
    }

    pub fn upcoming(&self) -> Vec<&crate::schedule::Event> {
        self.agenda.upcoming_within(
            self.today(),
            self.upcoming_days,
            self.filter(),
            self.upcoming_limit,
        )
    }
}

fn year_start(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap()
}

fn clamp_to_year(date: NaiveDate, year: i32) -> NaiveDate {
    let start = year_start(year);
    let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();

    date.max(start).min(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::EVENTS;

    fn context() -> Context {
        Context::new(Agenda::with_events(2026, EVENTS.to_vec()), 7, 5)
    }

    #[test]
    fn cursor_saturates_at_year_bounds() {
        let mut ctx = context();
        ctx.cursor = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();

        ctx.move_cursor(-7);
        assert_eq!(ctx.cursor(), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());

        ctx.cursor = NaiveDate::from_ymd_opt(2026, 12, 30).unwrap();
        ctx.move_cursor(7);
        assert_eq!(ctx.cursor(), NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
    }

    #[test]
    fn quarter_follows_cursor() {
        let mut ctx = context();
        ctx.cursor = NaiveDate::from_ymd_opt(2026, 5, 10).unwrap();
        assert_eq!(ctx.quarter(), 1);

        assert!(ctx.move_quarter(true).is_ok());
        assert_eq!(ctx.cursor(), NaiveDate::from_ymd_opt(2026, 9, 1).unwrap());
        assert!(ctx.move_quarter(true).is_err());

        assert!(ctx.move_quarter(false).is_ok());
        assert_eq!(ctx.cursor(), NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
    }

    #[test]
    fn item_under_cursor_prefers_explicit_event() {
        let mut ctx = context();

        // Jan 1 2026 carries the New Year Service.
        ctx.cursor = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        match ctx.item_under_cursor() {
            Some(DisplayItem::Event(event)) => assert_eq!(event.id, 1),
            other => panic!("expected event selection, got {:?}", other),
        }

        // Jan 6 2026 is an event-free Tuesday.
        ctx.cursor = NaiveDate::from_ymd_opt(2026, 1, 6).unwrap();
        match ctx.item_under_cursor() {
            Some(DisplayItem::Session(session)) => {
                assert_eq!(session.category, Category::Practice)
            }
            other => panic!("expected implied session, got {:?}", other),
        }

        // Jan 5 2026 is an event-free Monday.
        ctx.cursor = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert!(ctx.item_under_cursor().is_none());
    }
}
