//! # Observer Notifications
//!
//! A `Notifier` keeps an ordered list of observers and calls each of them,
//! synchronously and in registration order, whenever something is published.

use std::sync::Arc;
use tracing::debug;

/// A synchronous handler invoked for every published value.
///
/// Handlers run on the publisher's thread and must return quickly. They only
/// borrow the value for the duration of the call.
pub trait Observer<T>: Send + Sync {
    fn update(&self, item: &T);
}

/// Closures work as observers.
impl<T, F> Observer<T> for F
where
    F: Fn(&T) + Send + Sync,
{
    fn update(&self, item: &T) {
        self(item)
    }
}

/// Ordered list of observers. There is no unsubscribe.
pub struct Notifier<T> {
    observers: Vec<Arc<dyn Observer<T>>>,
}

impl<T> Default for Notifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Notifier<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<T> Notifier<T> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Appends `observer`. Subscribing the same handle twice means it runs twice.
    pub fn subscribe(&mut self, observer: Arc<dyn Observer<T>>) {
        self.observers.push(observer);
        debug!(observers = self.observers.len(), "Subscribed");
    }

    /// Calls every observer with `item`, in registration order.
    pub fn publish(&self, item: &T) {
        for observer in &self.observers {
            observer.update(item);
        }
        debug!(observers = self.observers.len(), "Published");
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_publish_runs_observers_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut notifier = Notifier::<u32>::new();

        for name in ["first", "second", "third"] {
            let log = log.clone();
            notifier.subscribe(Arc::new(move |n: &u32| {
                log.lock().unwrap().push(format!("{name}:{n}"));
            }));
        }
        notifier.publish(&7);

        assert_eq!(
            *log.lock().unwrap(),
            ["first:7", "second:7", "third:7"]
        );
    }

    #[test]
    fn test_duplicate_subscription_runs_twice() {
        let hits = Arc::new(Mutex::new(0));
        let counter = hits.clone();
        let observer: Arc<dyn Observer<u32>> = Arc::new(move |_: &u32| {
            *counter.lock().unwrap() += 1;
        });

        let mut notifier = Notifier::new();
        notifier.subscribe(observer.clone());
        notifier.subscribe(observer);
        notifier.publish(&1);

        assert_eq!(notifier.len(), 2);
        assert_eq!(*hits.lock().unwrap(), 2);
    }

    #[test]
    fn test_publish_without_observers_is_noop() {
        let notifier = Notifier::<u32>::new();
        assert!(notifier.is_empty());
        notifier.publish(&1);
    }
}
