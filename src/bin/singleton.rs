//! Singleton: exactly one process-wide instance, constructed on first access.
//! Instead of hidden global mutable state, the instance is an immutable,
//! lazily built value that callers receive as an explicit reference.

use lazy_static::lazy_static;

struct AppConfig {
    app_name: String,
    max_connections: u32,
}

impl AppConfig {
    fn load() -> Self {
        println!("AppConfig constructed");
        Self {
            app_name: "patterns-demo".to_string(),
            max_connections: 8,
        }
    }

    fn describe(&self) {
        println!(
            "Config for '{}' allows {} connections",
            self.app_name, self.max_connections
        );
    }
}

lazy_static! {
    static ref CONFIG: AppConfig = AppConfig::load();
}

/// Callers get the shared instance handed to them instead of reaching for
/// a global themselves; anything below this point is plain dependency
/// injection.
fn instance() -> &'static AppConfig {
    &CONFIG
}

fn serve_request(config: &AppConfig) {
    config.describe();
}

fn main() {
    let first = instance();
    serve_request(first);

    let second = instance();
    serve_request(second);

    println!(
        "first and second are {} instance",
        if std::ptr::eq(first, second) {
            "the same"
        } else {
            "a different"
        }
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_access_yields_the_identical_instance() {
        assert!(std::ptr::eq(instance(), instance()));
    }
}

// Expected output:
//
// AppConfig constructed
// Config for 'patterns-demo' allows 8 connections
// Config for 'patterns-demo' allows 8 connections
// first and second are the same instance
