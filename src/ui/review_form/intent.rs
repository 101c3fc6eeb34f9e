use crate::review::Rating;
use crate::ui::mvi::Intent;
use crate::ui::review_form::state::ReviewError;

#[derive(Debug, Clone)]
pub enum ReviewFormIntent {
    FocusNext,
    FocusPrevious,
    /// Typed character for the focused text field (name or review).
    InputChar(char),
    Backspace,
    /// Ratings arrive already validated, see `Rating::from_digit`.
    SetRating(Rating),
    ClearRating,
    /// The review was published. Clears the fields, keeps `errors`.
    Submitted,
    /// Submit was refused for these missing fields.
    Rejected { missing: Vec<ReviewError> },
}

impl Intent for ReviewFormIntent {}
