//! Chain of responsibility: an ordered, caller-defined sequence of handlers.
//! Each handler either fully handles a request or passes it along; the chain
//! records which handlers a request visited so ordering stays observable.

use crate::error::PatternError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub topic: String,
    pub body: String,
}

impl Request {
    pub fn new(topic: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            body: body.into(),
        }
    }
}

pub trait Handler {
    fn name(&self) -> &str;

    /// `Some(response)` handles the request terminally; `None` forwards it.
    fn try_handle(&self, request: &Request) -> Option<String>;
}

/// Outcome of walking the chain: the handlers visited, in order, and either
/// the terminal response or the unhandled error.
pub struct Dispatch {
    pub trace: Vec<String>,
    pub outcome: Result<String, PatternError>,
}

pub struct Chain {
    handlers: Vec<Box<dyn Handler>>,
}

impl Chain {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Handlers run in append order; the chain never reorders them.
    pub fn append(mut self, handler: Box<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn dispatch(&self, request: &Request) -> Dispatch {
        let mut trace = Vec::new();

        for handler in &self.handlers {
            trace.push(handler.name().to_string());
            if let Some(response) = handler.try_handle(request) {
                return Dispatch {
                    trace,
                    outcome: Ok(response),
                };
            }
        }

        Dispatch {
            trace,
            outcome: Err(PatternError::unhandled(format!(
                "{}: {}",
                request.topic, request.body
            ))),
        }
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}
