//! Event Pipe
//!
//! Канал публикации/подписки для обмена сообщениями между компонентами.
//! Передаётся через Leptos-контекст от корня приложения, так что область
//! действия канала — дерево компонентов, а не глобальное состояние.
//!
//! ## Использование
//!
//! ```rust
//! use frontend::shared::event_pipe::{topics, EventPipe};
//!
//! let pipe = EventPipe::new();
//! let subscription = pipe.subscribe(topics::DATASET_SELECTED, |payload| {
//!     log::info!("schema: {}", payload);
//! });
//! pipe.emit(topics::DATASET_SELECTED, r#"{"type":"record","fields":[]}"#);
//! subscription.cancel();
//! ```
//!
//! В компоненте канал берётся из контекста (`use_context::<EventPipe>()`),
//! а подписка освобождается в `on_cleanup`.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

/// Topic names shared by publishers and subscribers.
pub mod topics {
    /// Schema JSON of the most recently selected stream or dataset.
    pub const DATASET_SELECTED: &str = "dataset.selected";
}

type Handler = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Default)]
struct Registry {
    listeners: HashMap<String, Vec<(Uuid, Handler)>>,
}

/// Shared event channel. Cheap to clone; all clones publish into the same
/// registry.
#[derive(Clone, Default)]
pub struct EventPipe {
    registry: Arc<RwLock<Registry>>,
}

impl EventPipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `payload` to every current subscriber of `topic`, in
    /// subscription order. Emitting to a topic without subscribers is a
    /// no-op.
    pub fn emit(&self, topic: &str, payload: &str) {
        // Snapshot the handlers before invoking any of them: a handler may
        // subscribe or cancel during delivery.
        let handlers: Vec<Handler> = {
            let registry = self.registry.read().expect("event pipe lock poisoned");
            registry
                .listeners
                .get(topic)
                .map(|subs| subs.iter().map(|(_, handler)| handler.clone()).collect())
                .unwrap_or_default()
        };
        for handler in handlers {
            handler(payload);
        }
    }

    /// Register `handler` for `topic`.
    ///
    /// The returned [`Subscription`] unsubscribes when dropped, so holding it
    /// in a component and releasing it in `on_cleanup` ties the subscription
    /// to the component's lifetime.
    #[must_use]
    pub fn subscribe(&self, topic: &str, handler: impl Fn(&str) + Send + Sync + 'static) -> Subscription {
        let id = Uuid::new_v4();
        self.registry
            .write()
            .expect("event pipe lock poisoned")
            .listeners
            .entry(topic.to_string())
            .or_default()
            .push((id, Arc::new(handler)));
        Subscription {
            topic: topic.to_string(),
            id,
            pipe: self.clone(),
        }
    }

    /// Drop every subscriber of `topic`.
    pub fn cancel_topic(&self, topic: &str) {
        self.registry
            .write()
            .expect("event pipe lock poisoned")
            .listeners
            .remove(topic);
    }

    fn unsubscribe(&self, topic: &str, id: Uuid) {
        let mut registry = self.registry.write().expect("event pipe lock poisoned");
        let now_empty = match registry.listeners.get_mut(topic) {
            Some(subs) => {
                subs.retain(|(sub_id, _)| *sub_id != id);
                subs.is_empty()
            }
            None => false,
        };
        if now_empty {
            registry.listeners.remove(topic);
        }
    }
}

/// Active subscription handle; unsubscribes on drop.
pub struct Subscription {
    topic: String,
    id: Uuid,
    pipe: EventPipe,
}

impl Subscription {
    /// Explicit form of dropping the handle.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.pipe.unsubscribe(&self.topic, self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) + Send + Sync + Clone) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |payload: &str| {
            sink.lock().unwrap().push(payload.to_string())
        })
    }

    #[test]
    fn test_emit_reaches_all_subscribers_in_order() {
        let pipe = EventPipe::new();
        let (seen, record) = recorder();

        let first = pipe.subscribe(topics::DATASET_SELECTED, {
            let record = record.clone();
            move |p| record(&format!("first:{p}"))
        });
        let second = pipe.subscribe(topics::DATASET_SELECTED, move |p| record(&format!("second:{p}")));

        pipe.emit(topics::DATASET_SELECTED, "{}");
        assert_eq!(*seen.lock().unwrap(), vec!["first:{}", "second:{}"]);

        first.cancel();
        second.cancel();
    }

    #[test]
    fn test_emit_without_subscribers_is_noop() {
        let pipe = EventPipe::new();
        pipe.emit("nobody.listens", "{}");
    }

    #[test]
    fn test_cancelled_subscription_receives_nothing() {
        let pipe = EventPipe::new();
        let (seen, record) = recorder();

        let subscription = pipe.subscribe(topics::DATASET_SELECTED, record);
        pipe.emit(topics::DATASET_SELECTED, "one");
        subscription.cancel();
        pipe.emit(topics::DATASET_SELECTED, "two");

        assert_eq!(*seen.lock().unwrap(), vec!["one"]);
    }

    #[test]
    fn test_cancel_only_affects_own_subscription() {
        let pipe = EventPipe::new();
        let (seen, record) = recorder();

        let first = pipe.subscribe(topics::DATASET_SELECTED, {
            let record = record.clone();
            move |p| record(&format!("a:{p}"))
        });
        let _second = pipe.subscribe(topics::DATASET_SELECTED, move |p| record(&format!("b:{p}")));

        first.cancel();
        pipe.emit(topics::DATASET_SELECTED, "x");

        assert_eq!(*seen.lock().unwrap(), vec!["b:x"]);
    }

    #[test]
    fn test_cancel_topic_silences_everyone() {
        let pipe = EventPipe::new();
        let (seen, record) = recorder();

        let _first = pipe.subscribe(topics::DATASET_SELECTED, {
            let record = record.clone();
            move |p| record(p)
        });
        let _second = pipe.subscribe(topics::DATASET_SELECTED, record);

        pipe.cancel_topic(topics::DATASET_SELECTED);
        pipe.emit(topics::DATASET_SELECTED, "x");

        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_topics_are_independent() {
        let pipe = EventPipe::new();
        let (seen, record) = recorder();

        let _subscription = pipe.subscribe(topics::DATASET_SELECTED, record);
        pipe.emit("other.topic", "x");

        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_subscriber_may_cancel_during_delivery() {
        let pipe = EventPipe::new();
        let (seen, record) = recorder();

        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
        let subscription = pipe.subscribe(topics::DATASET_SELECTED, {
            let slot = slot.clone();
            move |p| {
                record(p);
                // Self-unsubscribe while the emit is still running.
                drop(slot.lock().unwrap().take());
            }
        });
        *slot.lock().unwrap() = Some(subscription);

        pipe.emit(topics::DATASET_SELECTED, "one");
        pipe.emit(topics::DATASET_SELECTED, "two");

        assert_eq!(*seen.lock().unwrap(), vec!["one"]);
    }
}
