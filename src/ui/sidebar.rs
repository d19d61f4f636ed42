use std::fmt::Write;
use unsegen::base::*;
use unsegen::widget::*;

use crate::schedule::{kind_label, Filter};

use super::Context;

const SWATCH: char = '\u{25a0}'; // ■

/// Details of the current selection, or a placeholder when nothing is
/// selected.
pub struct DetailPane<'a> {
    context: &'a Context,
}

impl<'a> DetailPane<'a> {
    pub fn new(context: &'a Context) -> Self {
        DetailPane { context }
    }
}

impl Widget for DetailPane<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(24),
            height: RowDemand::at_least(9),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = self.context.theme();

        let mut cursor = Cursor::new(&mut window).wrapping_mode(WrappingMode::Wrap);

        cursor.set_style_modifier(theme.pane_title_style);
        write!(&mut cursor, "Event Details").unwrap();
        cursor.fill_and_wrap_line();

        match self.context.selection() {
            Some(item) => {
                cursor.set_style_modifier(theme.swatch_style(item.category()));
                write!(&mut cursor, "{} ", SWATCH).unwrap();
                cursor.set_style_modifier(StyleModifier::default());
                writeln!(&mut cursor, "{}", item.kind_label()).unwrap();

                writeln!(&mut cursor, "{}", item.title()).unwrap();
                writeln!(&mut cursor).unwrap();
                writeln!(&mut cursor, "{}", item.description()).unwrap();
                writeln!(&mut cursor).unwrap();
                writeln!(&mut cursor, "{}", item.date_label(self.context.year())).unwrap();
                writeln!(&mut cursor, "{}", item.time_label()).unwrap();
            }
            None => {
                cursor.set_style_modifier(theme.placeholder_style);
                writeln!(&mut cursor, "No Selection").unwrap();
                writeln!(&mut cursor, "Select a date to see what's happening").unwrap();
            }
        }
    }
}

/// Per-category legend with event counts; the active filter entry is
/// highlighted.
pub struct LegendPane<'a> {
    context: &'a Context,
}

impl<'a> LegendPane<'a> {
    pub fn new(context: &'a Context) -> Self {
        LegendPane { context }
    }
}

impl Widget for LegendPane<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(24),
            height: RowDemand::at_least(8),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = self.context.theme();

        let mut cursor = Cursor::new(&mut window).wrapping_mode(WrappingMode::Wrap);

        cursor.set_style_modifier(theme.pane_title_style);
        write!(&mut cursor, "Event Legend").unwrap();
        cursor.fill_and_wrap_line();

        for (index, (category, count)) in self.context.agenda().tally().into_iter().enumerate() {
            cursor.set_style_modifier(theme.swatch_style(category));
            write!(&mut cursor, "{} ", SWATCH).unwrap();

            let active = self.context.filter() == Filter::Category(category);
            cursor.set_style_modifier(if active {
                theme.active_filter_style
            } else {
                StyleModifier::default()
            });
            write!(
                &mut cursor,
                "{} {:<20} {:>2}",
                index + 1,
                category.label(),
                count
            )
            .unwrap();
            cursor.fill_and_wrap_line();
        }
    }
}

/// Events within the configured upcoming window, respecting the active
/// filter.
pub struct UpcomingPane<'a> {
    context: &'a Context,
}

impl<'a> UpcomingPane<'a> {
    pub fn new(context: &'a Context) -> Self {
        UpcomingPane { context }
    }
}

impl Widget for UpcomingPane<'_> {
    fn space_demand(&self) -> Demand2D {
        Demand2D {
            width: ColDemand::at_least(24),
            height: RowDemand::at_least(7),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = self.context.theme();

        let mut cursor = Cursor::new(&mut window).wrapping_mode(WrappingMode::Wrap);

        cursor.set_style_modifier(theme.pane_title_style);
        write!(&mut cursor, "Upcoming This Week").unwrap();
        cursor.fill_and_wrap_line();

        let upcoming = self.context.upcoming();

        if upcoming.is_empty() {
            cursor.set_style_modifier(theme.placeholder_style);
            writeln!(&mut cursor, "No upcoming events this week").unwrap();
            return;
        }

        for event in upcoming {
            cursor.set_style_modifier(theme.swatch_style(event.category));
            write!(&mut cursor, "{} ", SWATCH).unwrap();

            cursor.set_style_modifier(StyleModifier::default());
            if let Err(err) = writeln!(
                &mut cursor,
                "{:>2}/{:<2} {} ({})",
                event.month,
                event.day,
                event.title,
                kind_label(event.kind)
            ) {
                log::warn!("Could not draw upcoming event: {}", err);
            }
        }
    }
}
