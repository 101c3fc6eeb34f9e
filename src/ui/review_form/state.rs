use thiserror::Error;

use crate::review::{Rating, Review};
use crate::ui::mvi::UiState;

/// A required field left blank on submit. The display strings are the
/// messages shown above the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("Name required.")]
    MissingName,
    #[error("Review required.")]
    MissingReview,
    #[error("Rating required.")]
    MissingRating,
}

/// Keyboard focus inside the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Review,
    Rating,
    Submit,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Review,
        FormField::Rating,
        FormField::Submit,
    ];

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewFormState {
    pub name: String,
    pub text: String,
    pub rating: Option<Rating>,
    /// Messages from failed submits. Only ever appended to.
    pub errors: Vec<ReviewError>,
    pub focused: FormField,
}

impl UiState for ReviewFormState {}

impl ReviewFormState {
    /// Completeness check run on submit.
    ///
    /// Missing fields are reported in the fixed order name, review, rating.
    pub fn validate(&self) -> Result<Review, Vec<ReviewError>> {
        match (self.name.is_empty(), self.text.is_empty(), self.rating) {
            (false, false, Some(rating)) => Ok(Review {
                name: self.name.clone(),
                text: self.text.clone(),
                rating,
            }),
            (no_name, no_text, rating) => {
                let mut missing = Vec::new();
                if no_name {
                    missing.push(ReviewError::MissingName);
                }
                if no_text {
                    missing.push(ReviewError::MissingReview);
                }
                if rating.is_none() {
                    missing.push(ReviewError::MissingRating);
                }
                Err(missing)
            }
        }
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}
