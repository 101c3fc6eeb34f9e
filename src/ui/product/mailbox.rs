use std::sync::mpsc::{self, Receiver};

use crate::bus::{EventChannel, ReviewSubmitted};
use crate::review::Review;

/// The product viewer's subscription to `review-submitted`.
///
/// The bus handler only forwards into a channel; the app drains it after
/// each handled event and feeds the reviews through the product reducer.
pub struct ReviewMailbox {
    rx: Receiver<Review>,
}

impl ReviewMailbox {
    /// Subscribe on `bus`. Reviews published before this call are not seen.
    pub fn mount(bus: &EventChannel) -> Self {
        let (tx, rx) = mpsc::channel();
        bus.subscribe::<ReviewSubmitted, _>(move |review: &Review| {
            if tx.send(review.clone()).is_err() {
                tracing::trace!("review mailbox dropped, discarding review");
            }
        });
        Self { rx }
    }

    /// Everything delivered since the last drain, oldest first.
    pub fn drain(&self) -> Vec<Review> {
        self.rx.try_iter().collect()
    }
}
