use crate::schedule::{Category, DisplayItem, Filter};

/// State transitions triggered by user interaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Select an item; selecting the current selection again clears it.
    Select(DisplayItem),
    Clear,
    SetFilter(Filter),
    /// Legend entry activation: focus a category filter or, when it is
    /// already active, reset to the unfiltered view.
    ToggleCategory(Category),
}

/// The complete transient UI state: what is selected and which category
/// filter is active. Everything else is recomputed from the schedule on
/// every draw.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewState {
    pub selection: Option<DisplayItem>,
    pub filter: Filter,
}

impl ViewState {
    pub fn apply(self, action: Action) -> ViewState {
        match action {
            Action::Select(item) => ViewState {
                selection: if self.selection == Some(item) {
                    None
                } else {
                    Some(item)
                },
                ..self
            },
            Action::Clear => ViewState {
                selection: None,
                ..self
            },
            Action::SetFilter(filter) => ViewState { filter, ..self },
            Action::ToggleCategory(category) => {
                if self.filter == Filter::Category(category) {
                    ViewState {
                        selection: None,
                        filter: Filter::All,
                    }
                } else {
                    ViewState {
                        selection: Some(DisplayItem::CategorySummary(category)),
                        filter: Filter::Category(category),
                    }
                }
            }
        }
    }
}
