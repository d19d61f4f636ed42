use crate::agenda::Agenda;
use crate::calendar;
use crate::config::Config;
use crate::events::{Dispatcher, Event};
use crate::schedule::{Category, Filter};
use crate::state::Action;

use super::{Context, DetailPane, LegendPane, MonthPane, QuarterHeader, UpcomingPane};

use std::convert::TryFrom;
use unsegen::base::{GraphemeCluster, Terminal};
use unsegen::input::{
    Behavior, Event as InputEvent, Input, Key, Navigatable, NavigateBehavior, OperationResult,
    ScrollBehavior, Scrollable,
};
use unsegen::widget::*;

pub struct App {
    context: Context,
}

impl App {
    pub fn new(config: &Config, agenda: Agenda) -> App {
        let context = Context::new(agenda, config.upcoming_days, config.upcoming_limit);
        App { context }
    }

    fn calendar_pane<'w>(&'w self) -> impl Widget + 'w {
        let mut layout = VLayout::new().widget(QuarterHeader::new(&self.context));
        for month_index in calendar::months_of_quarter(self.context.quarter()) {
            layout = layout.widget(MonthPane::new(month_index, &self.context));
        }
        layout
    }

    fn side_pane<'w>(&'w self) -> impl Widget + 'w {
        VLayout::new()
            .widget(DetailPane::new(&self.context))
            .widget(LegendPane::new(&self.context))
            .widget(UpcomingPane::new(&self.context))
    }

    fn as_widget<'w>(&'w self) -> impl Widget + 'w {
        HLayout::new()
            .separator(GraphemeCluster::try_from(' ').unwrap())
            .widget(self.calendar_pane())
            .widget(self.side_pane())
    }

    pub fn run(
        &mut self,
        dispatcher: Dispatcher,
        mut term: Terminal,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut run = true;

        while run {
            // Handle events
            if let Ok(event) = dispatcher.next() {
                match event {
                    Event::Update => self.context.update(),
                    Event::Input(input) => {
                        if input.matches(Key::Esc) {
                            self.context.apply(Action::Clear);
                        } else {
                            let _ = input
                                .chain((Key::Char('q'), || run = false))
                                .chain((Key::Char('\n'), || {
                                    if let Some(item) = self.context.item_under_cursor() {
                                        self.context.apply(Action::Select(item));
                                    }
                                }))
                                .chain((Key::Char('t'), || self.context.select_today()))
                                .chain(
                                    NavigateBehavior::new(&mut CursorBehaviour(&mut self.context))
                                        .down_on(Key::Char('j'))
                                        .up_on(Key::Char('k'))
                                        .left_on(Key::Char('h'))
                                        .right_on(Key::Char('l')),
                                )
                                .chain(
                                    ScrollBehavior::new(&mut QuarterBehaviour(&mut self.context))
                                        .forwards_on(Key::Char(']'))
                                        .backwards_on(Key::Char('[')),
                                )
                                .chain(FilterBehaviour(&mut self.context))
                                .finish();
                        }
                    }
                }
            }

            // Draw
            let root = term.create_root_window();
            self.as_widget().draw(root, RenderingHints::default());

            term.present();
        }

        Ok(())
    }
}

struct CursorBehaviour<'a>(&'a mut Context);

impl Navigatable for CursorBehaviour<'_> {
    fn move_down(&mut self) -> OperationResult {
        self.0.move_cursor(7);
        Ok(())
    }

    fn move_up(&mut self) -> OperationResult {
        self.0.move_cursor(-7);
        Ok(())
    }

    fn move_left(&mut self) -> OperationResult {
        self.0.move_cursor(-1);
        Ok(())
    }

    fn move_right(&mut self) -> OperationResult {
        self.0.move_cursor(1);
        Ok(())
    }
}

struct QuarterBehaviour<'a>(&'a mut Context);

impl Scrollable for QuarterBehaviour<'_> {
    fn scroll_forwards(&mut self) -> OperationResult {
        self.0.move_quarter(true)
    }

    fn scroll_backwards(&mut self) -> OperationResult {
        self.0.move_quarter(false)
    }
}

/// Legend shortcuts: digits toggle the category filters, 'a' resets to the
/// unfiltered view.
struct FilterBehaviour<'a>(&'a mut Context);

impl Behavior for FilterBehaviour<'_> {
    fn input(self, input: Input) -> Option<Input> {
        if let InputEvent::Key(Key::Char(c)) = input.event {
            match c {
                'a' => {
                    self.0.apply(Action::SetFilter(Filter::All));
                    self.0.apply(Action::Clear);
                    return None;
                }
                '1'..='6' => {
                    let index = c as usize - '1' as usize;
                    self.0.apply(Action::ToggleCategory(Category::ALL[index]));
                    return None;
                }
                _ => {}
            }
        }

        Some(input)
    }
}
