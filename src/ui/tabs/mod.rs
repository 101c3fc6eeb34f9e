mod intent;
mod reducer;
mod state;
mod view;

pub use intent::TabsIntent;
pub use reducer::TabsReducer;
pub use state::{Tab, TabsState};
pub use view::{render_tabs, reviews_pane_lines, TabsView, NO_REVIEWS};
