//! Key-to-shared-instance registry (the flyweight/singleton-per-key idiom).
//!
//! Each key gets at most one instance for the registry's lifetime. Sharing is
//! the one intentional exception to the collection's tree-shaped ownership,
//! so it goes through `Rc` explicitly instead of hidden aliasing. The demos
//! are single-threaded throughout, which is why `Rc` and not `Arc`.

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::PatternError;

type Constructor<T> = Box<dyn Fn() -> Rc<T>>;

pub struct Registry<T: ?Sized> {
    constructors: HashMap<String, Constructor<T>>,
    instances: HashMap<String, Rc<T>>,
}

impl<T: ?Sized> Registry<T> {
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
            instances: HashMap::new(),
        }
    }

    /// Install the constructor that `acquire` will call the first time
    /// `key` is requested. Re-registering a key replaces its constructor
    /// but never an instance already built.
    pub fn register(&mut self, key: impl Into<String>, construct: impl Fn() -> Rc<T> + 'static) {
        self.constructors.insert(key.into(), Box::new(construct));
    }

    /// Return the shared instance for `key`, constructing it on first use.
    /// Every later call with the same key returns the identical `Rc`.
    pub fn acquire(&mut self, key: &str) -> Result<Rc<T>, PatternError> {
        if let Some(existing) = self.instances.get(key) {
            return Ok(Rc::clone(existing));
        }

        let construct = self
            .constructors
            .get(key)
            .ok_or_else(|| PatternError::unknown_variant(key))?;

        let instance = construct();
        self.instances.insert(key.to_string(), Rc::clone(&instance));
        Ok(instance)
    }

    /// Number of instances actually constructed so far.
    pub fn live_instances(&self) -> usize {
        self.instances.len()
    }
}

impl<T: ?Sized> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Piece {
        fn color(&self) -> &str;
    }

    struct Stone(&'static str);

    impl Piece for Stone {
        fn color(&self) -> &str {
            self.0
        }
    }

    fn stones() -> Registry<dyn Piece> {
        let mut registry: Registry<dyn Piece> = Registry::new();
        registry.register("black", || Rc::new(Stone("black")));
        registry.register("white", || Rc::new(Stone("white")));
        registry
    }

    #[test]
    fn acquire_is_idempotent_per_key() {
        let mut registry = stones();

        let first = registry.acquire("black").unwrap();
        let second = registry.acquire("black").unwrap();

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(registry.live_instances(), 1);
    }

    #[test]
    fn distinct_keys_never_alias() {
        let mut registry = stones();

        let black = registry.acquire("black").unwrap();
        let white = registry.acquire("white").unwrap();

        assert!(!Rc::ptr_eq(&black, &white));
        assert_eq!(black.color(), "black");
        assert_eq!(white.color(), "white");
    }

    #[test]
    fn unknown_key_is_an_error_not_a_crash() {
        let mut registry = stones();
        assert_eq!(
            registry.acquire("red").err(),
            Some(PatternError::unknown_variant("red"))
        );
    }

    #[test]
    fn instance_survives_constructor_replacement() {
        let mut registry = stones();
        let before = registry.acquire("black").unwrap();

        registry.register("black", || Rc::new(Stone("repainted")));
        let after = registry.acquire("black").unwrap();

        assert!(Rc::ptr_eq(&before, &after));
        assert_eq!(after.color(), "black");
    }
}
