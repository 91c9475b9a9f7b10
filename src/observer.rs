//! Subject/observer: a one-to-many dependency where every attached observer
//! hears about each state change. Observers are shared handles (`Rc`), so
//! detach works by identity, not by value comparison.

use std::rc::Rc;

pub trait Observer {
    fn name(&self) -> &str;
    fn update(&self, value: i64);
}

pub struct Subject {
    state: i64,
    observers: Vec<Rc<dyn Observer>>,
}

impl Subject {
    pub fn new() -> Self {
        Self {
            state: 0,
            observers: Vec::new(),
        }
    }

    pub fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Remove the observer that is identity-equal to `observer`.
    pub fn detach(&mut self, observer: &Rc<dyn Observer>) {
        self.observers
            .retain(|attached| !Rc::ptr_eq(attached, observer));
    }

    pub fn state(&self) -> i64 {
        self.state
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Store the new state, then notify every attached observer with it.
    pub fn set_state(&mut self, value: i64) {
        self.state = value;
        for observer in &self.observers {
            observer.update(value);
        }
    }
}

impl Default for Subject {
    fn default() -> Self {
        Self::new()
    }
}
