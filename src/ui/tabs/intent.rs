use crate::ui::mvi::Intent;
use crate::ui::tabs::state::Tab;

#[derive(Debug, Clone, Copy)]
pub enum TabsIntent {
    /// Tab label clicked.
    Select(Tab),
    Next,
    Previous,
}

impl Intent for TabsIntent {}
