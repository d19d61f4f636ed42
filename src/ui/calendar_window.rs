use chrono::{Datelike, NaiveDate};
use std::fmt::Display;
use std::fmt::Write;
use unsegen::base::*;
use unsegen::widget::*;

use crate::calendar::{self, DAYS_PER_WEEK};
use crate::schedule::{self, DisplayItem};

use super::{Context, Theme};

struct DayCell<'a> {
    day_num: u32,
    selected: bool,
    is_today: bool,
    suppressed_event: bool,
    theme: &'a Theme,
}

impl<'a> DayCell<'a> {
    const CELL_HEIGHT: usize = 1;
    const CELL_WIDTH: usize = 4;

    fn new(day_num: u32, theme: &'a Theme) -> Self {
        DayCell {
            day_num,
            selected: false,
            is_today: false,
            suppressed_event: false,
            theme,
        }
    }

    fn select(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn today(mut self, is_today: bool) -> Self {
        self.is_today = is_today;
        self
    }

    /// Mark a day whose event is hidden by the active filter.
    fn suppressed(mut self, suppressed_event: bool) -> Self {
        self.suppressed_event = suppressed_event;
        self
    }
}

impl Display for DayCell<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arg_today = if self.is_today {
            self.theme.today_day_char.unwrap_or(' ')
        } else {
            ' '
        };

        let arg_marker = if self.selected {
            self.theme.selected_day_char.unwrap_or(' ')
        } else if self.suppressed_event {
            self.theme.suppressed_event_char.unwrap_or(' ')
        } else {
            ' '
        };

        write!(f, "{}{}{:>2}", arg_today, arg_marker, self.day_num)
    }
}

pub struct MonthPane<'a> {
    month_index: u32,
    year: i32,
    rows: Vec<[Option<u32>; DAYS_PER_WEEK]>,
    context: &'a Context,
}

impl<'a> MonthPane<'a> {
    const ROWS: usize = 6;
    const HEADER_ROWS: usize = 2;

    const WEEKDAYS: &'static [&'static str] = &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

    pub fn new(month_index: u32, context: &'a Context) -> Self {
        let year = context.year();
        let layout = calendar::month_layout(year, month_index).unwrap();

        MonthPane {
            month_index,
            year,
            rows: calendar::build_week_rows(&layout),
            context,
        }
    }

    fn is_selected_day(&self, day: u32) -> bool {
        match self.context.selection() {
            Some(DisplayItem::Event(e)) => e.month == self.month_index + 1 && e.day == day,
            Some(DisplayItem::Session(s)) => s.month == self.month_index + 1 && s.day == day,
            _ => false,
        }
    }
}

impl Widget for MonthPane<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::exact(DAYS_PER_WEEK * DayCell::CELL_WIDTH),
            height: RowDemand::exact(Self::HEADER_ROWS + Self::ROWS * DayCell::CELL_HEIGHT),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = self.context.theme();

        let mut cursor = Cursor::new(&mut window)
            .wrapping_mode(WrappingMode::Wrap)
            .style_modifier(theme.month_header_style);

        write!(&mut cursor, "{}", calendar::month_name(self.month_index)).unwrap();
        cursor.fill_and_wrap_line();

        for (idx, &head) in Self::WEEKDAYS.iter().enumerate() {
            let style = match idx {
                0 => theme.sunday_header_style,
                2 | 4 | 6 => theme.practice_header_style,
                _ => theme.weekday_header_style,
            };
            cursor.set_style_modifier(style);
            write!(
                &mut cursor,
                "{:>width$}",
                &head,
                width = DayCell::CELL_WIDTH
            )
            .unwrap();
        }

        cursor.set_style_modifier(theme.day_style.format(theme.day_text_style));

        for row in &self.rows {
            for slot in row.iter() {
                match slot {
                    None => {
                        cursor.set_style_modifier(theme.day_style);
                        write!(&mut cursor, "{:width$}", "", width = DayCell::CELL_WIDTH)
                            .unwrap();
                    }
                    Some(day) => {
                        let date =
                            NaiveDate::from_ymd_opt(self.year, self.month_index + 1, *day)
                                .unwrap();
                        let explicit = self.context.agenda().event_on(self.month_index, *day);
                        let highlight = schedule::highlight_for_day(
                            explicit,
                            date.weekday(),
                            self.context.filter(),
                        );

                        let base = match highlight {
                            Some(category) => theme.highlight_style(category),
                            None => theme.day_style,
                        };

                        cursor.set_style_modifier(base);
                        if date == self.context.cursor() {
                            cursor.apply_style_modifier(theme.cursor_day_style);
                        }

                        let cell = DayCell::new(*day, theme)
                            .select(self.is_selected_day(*day))
                            .today(date == self.context.today())
                            .suppressed(explicit.is_some() && highlight.is_none());

                        if let Err(err) = write!(&mut cursor, "{}", cell) {
                            log::warn!("Could not draw day cell: {}", err);
                        }
                    }
                }
            }
        }
    }
}

pub struct QuarterHeader<'a> {
    context: &'a Context,
}

impl<'a> QuarterHeader<'a> {
    pub fn new(context: &'a Context) -> Self {
        QuarterHeader { context }
    }
}

impl Widget for QuarterHeader<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(DAYS_PER_WEEK * DayCell::CELL_WIDTH),
            height: RowDemand::exact(1),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = self.context.theme();

        let mut cursor = Cursor::new(&mut window).style_modifier(theme.quarter_header_style);

        write!(
            &mut cursor,
            "{}  {}",
            calendar::quarter_title(self.context.quarter()),
            self.context.year()
        )
        .unwrap();
        cursor.fill_and_wrap_line();
    }
}
