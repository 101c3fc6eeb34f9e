use crate::ui::mvi::Reducer;
use crate::ui::review_form::intent::ReviewFormIntent;
use crate::ui::review_form::state::{FormField, ReviewFormState};

pub struct ReviewFormReducer;

impl Reducer for ReviewFormReducer {
    type State = ReviewFormState;
    type Intent = ReviewFormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ReviewFormIntent::FocusNext => state.focused = state.focused.next(),
            ReviewFormIntent::FocusPrevious => state.focused = state.focused.previous(),
            ReviewFormIntent::InputChar(ch) => match state.focused {
                FormField::Name => state.name.push(ch),
                FormField::Review => state.text.push(ch),
                FormField::Rating | FormField::Submit => {}
            },
            ReviewFormIntent::Backspace => match state.focused {
                FormField::Name => {
                    state.name.pop();
                }
                FormField::Review => {
                    state.text.pop();
                }
                FormField::Rating | FormField::Submit => {}
            },
            ReviewFormIntent::SetRating(rating) => state.rating = Some(rating),
            ReviewFormIntent::ClearRating => state.rating = None,
            ReviewFormIntent::Submitted => {
                state.name.clear();
                state.text.clear();
                state.rating = None;
                state.focused = FormField::Name;
            }
            // Appends without clearing: repeated failures accumulate.
            ReviewFormIntent::Rejected { missing } => state.errors.extend(missing),
        }
        state
    }
}
