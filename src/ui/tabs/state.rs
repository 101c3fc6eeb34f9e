use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Reviews,
    WriteReview,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Reviews, Tab::WriteReview];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Reviews => "Reviews",
            Tab::WriteReview => "Write A Review",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Reviews => 0,
            Tab::WriteReview => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabsState {
    pub selected: Tab,
}

impl UiState for TabsState {}

impl TabsState {
    pub fn reviews_visible(&self) -> bool {
        self.selected == Tab::Reviews
    }

    pub fn form_visible(&self) -> bool {
        self.selected == Tab::WriteReview
    }
}
