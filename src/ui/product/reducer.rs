use crate::ui::mvi::Reducer;
use crate::ui::product::intent::ProductIntent;
use crate::ui::product::state::ProductState;

pub struct ProductReducer;

impl Reducer for ProductReducer {
    type State = ProductState;
    type Intent = ProductIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let count = state.catalog().variants.len();
        match intent {
            ProductIntent::SelectVariant { index } => state.with_selected(index),
            ProductIntent::HoverNext => {
                let next = if state.selected_index() + 1 >= count {
                    0
                } else {
                    state.selected_index() + 1
                };
                state.with_selected(next)
            }
            ProductIntent::HoverPrevious => {
                let previous = if state.selected_index() == 0 {
                    count.saturating_sub(1)
                } else {
                    state.selected_index() - 1
                };
                state.with_selected(previous)
            }
            ProductIntent::ReviewReceived { review } => state.with_review(review),
        }
    }
}
