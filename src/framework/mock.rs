//! # Mock Observer & Testing Guide
//!
//! The `MockObserver<T>` type is a drop-in [`Observer`] that checks every
//! notification it receives against a queue of expectations. It lets you assert
//! *exactly* which values were published, and in which order, without writing a
//! bespoke recording observer in every test.
//!
//! ## Usage
//!
//! ```rust
//! use catalog_demos::animals::{Animal, AnimalRegistry};
//! use catalog_demos::framework::mock::MockObserver;
//!
//! let mut registry = AnimalRegistry::new();
//! registry.add(Animal::dog("Rex"));
//!
//! // 1. Setup expectations
//! let mut mock = MockObserver::new();
//! mock.expect_update(Animal::cat("Tom"));
//!
//! // 2. Subscribe the mock
//! registry.subscribe(mock.observer());
//!
//! // 3. Exercise
//! registry.add(Animal::cat("Tom"));
//!
//! // 4. Verify: Rex was never seen, Tom was seen once
//! mock.verify();
//! ```
//!
//! An unexpected notification panics immediately, so the failing test points at
//! the publish call that caused it.

use crate::framework::notifier::Observer;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

/// An observer with expectation tracking.
#[derive(Clone)]
pub struct MockObserver<T> {
    expectations: Arc<Mutex<VecDeque<T>>>,
    received: Arc<Mutex<Vec<T>>>,
}

impl<T> Default for MockObserver<T>
where
    T: Clone + PartialEq + Debug + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MockObserver<T>
where
    T: Clone + PartialEq + Debug + Send + Sync + 'static,
{
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Expects the next notification to carry `item`.
    pub fn expect_update(&mut self, item: T) -> &mut Self {
        self.expectations.lock().unwrap().push_back(item);
        self
    }

    /// Returns a handle to subscribe. All handles share this mock's state.
    pub fn observer(&self) -> Arc<dyn Observer<T>> {
        Arc::new(self.clone())
    }

    /// Every value received so far, in order.
    pub fn received(&self) -> Vec<T> {
        self.received.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T> Observer<T> for MockObserver<T>
where
    T: Clone + PartialEq + Debug + Send + Sync + 'static,
{
    fn update(&self, item: &T) {
        let expected = self.expectations.lock().unwrap().pop_front();
        match expected {
            Some(expected) if expected == *item => {
                self.received.lock().unwrap().push(item.clone());
            }
            Some(expected) => {
                panic!("Unexpected update: expected {expected:?}, got {item:?}");
            }
            None => panic!("Unexpected update with no expectation left: {item:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Notifier;

    #[test]
    fn test_mock_observer_with_expectations() {
        let mut mock = MockObserver::<u32>::new();
        mock.expect_update(1).expect_update(2);

        let mut notifier = Notifier::new();
        notifier.subscribe(mock.observer());
        notifier.publish(&1);
        notifier.publish(&2);

        mock.verify();
        assert_eq!(mock.received(), [1, 2]);
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_panics_on_missing_update() {
        let mut mock = MockObserver::<u32>::new();
        mock.expect_update(1);
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Unexpected update")]
    fn test_unexpected_update_panics() {
        let mock = MockObserver::<u32>::new();
        mock.update(&9);
    }
}
