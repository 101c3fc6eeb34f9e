//! Typed publish/subscribe channel shared between UI components.
//!
//! The channel is an ordinary value: it is created once at startup and
//! handed (as `Arc<EventChannel>`) to whichever component needs it.
//! Delivery is synchronous. `publish` runs every handler that was registered
//! before the call, in registration order, and returns once all of them have
//! run. Nothing is buffered for subscribers that arrive later.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::review::Review;

/// A named event family with a fixed payload type.
pub trait Topic: 'static {
    type Payload: Send + 'static;

    /// Human-readable topic name, used for logging.
    const NAME: &'static str;
}

/// Emitted by the review form after a successful submit.
pub struct ReviewSubmitted;

impl Topic for ReviewSubmitted {
    type Payload = Review;
    const NAME: &'static str = "review-submitted";
}

type Handler<P> = Arc<dyn Fn(&P) + Send + Sync>;

#[derive(Default)]
pub struct EventChannel {
    topics: Mutex<HashMap<TypeId, Box<dyn Any + Send>>>,
}

impl EventChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for every future publish on topic `T`.
    ///
    /// Handlers keep their own state behind interior mutability; the
    /// channel holds no lock while they run.
    pub fn subscribe<T, F>(&self, handler: F)
    where
        T: Topic,
        F: Fn(&T::Payload) + Send + Sync + 'static,
    {
        let handler: Handler<T::Payload> = Arc::new(handler);
        let mut topics = self.topics.lock();
        let entry = topics
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(Vec::<Handler<T::Payload>>::new()));
        if let Some(handlers) = entry.downcast_mut::<Vec<Handler<T::Payload>>>() {
            handlers.push(handler);
            tracing::debug!(topic = T::NAME, subscribers = handlers.len(), "subscribed");
        }
    }

    /// Deliver `payload` to the current subscribers of `T`.
    ///
    /// Returns how many handlers ran. Zero subscribers is not an error.
    pub fn publish<T: Topic>(&self, payload: &T::Payload) -> usize {
        // Snapshot first: handlers may subscribe or publish (even on `T`)
        // while running, and later subscribers miss this payload.
        let handlers = self.handlers::<T>();
        for handler in &handlers {
            handler(payload);
        }
        tracing::debug!(topic = T::NAME, delivered = handlers.len(), "published");
        handlers.len()
    }

    pub fn subscriber_count<T: Topic>(&self) -> usize {
        self.handlers::<T>().len()
    }

    fn handlers<T: Topic>(&self) -> Vec<Handler<T::Payload>> {
        self.topics
            .lock()
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<Vec<Handler<T::Payload>>>())
            .cloned()
            .unwrap_or_default()
    }
}
