//! Model-View-Intent primitives shared by the page components.
//!
//! ```text
//! key press ──→ Intent ──→ Reducer ──→ State ──→ render
//!     ↑                                            │
//!     └────────────────────────────────────────────┘
//! ```
//!
//! Every component (product viewer, review tabs, review form) keeps its
//! state in a plain value and changes it only through its reducer. Derived
//! display values are methods on the state, recomputed on each draw.
//! Side effects such as publishing on the event channel or touching the
//! cart stay in [`crate::ui::app::App`].

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
