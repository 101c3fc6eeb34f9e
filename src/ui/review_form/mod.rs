mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ReviewFormIntent;
pub use reducer::ReviewFormReducer;
pub use state::{FormField, ReviewError, ReviewFormState};
pub use view::render_review_form;
