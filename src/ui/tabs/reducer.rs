use crate::ui::mvi::Reducer;
use crate::ui::tabs::intent::TabsIntent;
use crate::ui::tabs::state::{Tab, TabsState};

pub struct TabsReducer;

impl Reducer for TabsReducer {
    type State = TabsState;
    type Intent = TabsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let count = Tab::ALL.len();
        let selected = match intent {
            TabsIntent::Select(tab) => tab,
            TabsIntent::Next => Tab::ALL[(state.selected.index() + 1) % count],
            TabsIntent::Previous => Tab::ALL[(state.selected.index() + count - 1) % count],
        };
        TabsState { selected }
    }
}
