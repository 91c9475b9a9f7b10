//! Chain of Responsibility: log records walk a caller-ordered chain of
//! level-specific writers until one accepts. A level nobody accepts comes
//! back as an unhandled diagnostic instead of vanishing.

use patterns::chain::{Chain, Handler, Request};

struct LevelLogger {
    level: &'static str,
}

impl LevelLogger {
    fn boxed(level: &'static str) -> Box<Self> {
        Box::new(Self { level })
    }
}

impl Handler for LevelLogger {
    fn name(&self) -> &str {
        self.level
    }

    fn try_handle(&self, request: &Request) -> Option<String> {
        (request.topic == self.level)
            .then(|| format!("[{}]: {}", self.level.to_uppercase(), request.body))
    }
}

fn log(chain: &Chain, level: &str, message: &str) {
    let dispatch = chain.dispatch(&Request::new(level, message));
    match dispatch.outcome {
        Ok(line) => println!("{line}"),
        Err(err) => println!("{err}"),
    }
}

fn main() {
    // Order is caller-defined: debug -> info -> warning -> error.
    let chain = Chain::new()
        .append(LevelLogger::boxed("debug"))
        .append(LevelLogger::boxed("info"))
        .append(LevelLogger::boxed("warning"))
        .append(LevelLogger::boxed("error"));

    log(&chain, "debug", "This is a debug message");
    log(&chain, "info", "This is an info message");
    log(&chain, "warning", "This is a warning message");
    log(&chain, "error", "This is an error message");
    log(&chain, "trace", "This level has no handler");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_visits_every_handler_before_its_own() {
        let chain = Chain::new()
            .append(LevelLogger::boxed("debug"))
            .append(LevelLogger::boxed("info"))
            .append(LevelLogger::boxed("error"));

        let dispatch = chain.dispatch(&Request::new("error", "boom"));
        assert_eq!(dispatch.trace, vec!["debug", "info", "error"]);
        assert_eq!(dispatch.outcome, Ok("[ERROR]: boom".to_string()));
    }

    #[test]
    fn unknown_level_reports_unhandled() {
        let chain = Chain::new().append(LevelLogger::boxed("info"));
        let dispatch = chain.dispatch(&Request::new("trace", "x"));
        assert!(dispatch.outcome.is_err());
    }
}

// Expected output:
//
// [DEBUG]: This is a debug message
// [INFO]: This is an info message
// [WARNING]: This is a warning message
// [ERROR]: This is an error message
// no handler accepted request: trace: This level has no handler
