//! The shape family used by the factory vignettes: one capability contract,
//! three concrete variants, and a simple factory keyed by a string label.

use crate::error::PatternError;

pub trait Shape: std::fmt::Debug {
    fn name(&self) -> &str;
    fn draw(&self) -> String;
}

#[derive(Debug)]
pub struct Circle;
#[derive(Debug)]
pub struct Square;
#[derive(Debug)]
pub struct Rectangle;

impl Shape for Circle {
    fn name(&self) -> &str {
        "circle"
    }

    fn draw(&self) -> String {
        "Drawing Circle".to_string()
    }
}

impl Shape for Square {
    fn name(&self) -> &str {
        "square"
    }

    fn draw(&self) -> String {
        "Drawing Square".to_string()
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &str {
        "rectangle"
    }

    fn draw(&self) -> String {
        "Drawing Rectangle".to_string()
    }
}

/// Simple factory: the caller names a variant, the factory picks the type.
///
/// An unknown label is a diagnostic for the caller to report, not a panic.
pub fn create_shape(kind: &str) -> Result<Box<dyn Shape>, PatternError> {
    match kind {
        "circle" => Ok(Box::new(Circle)),
        "square" => Ok(Box::new(Square)),
        "rectangle" => Ok(Box::new(Rectangle)),
        other => Err(PatternError::unknown_variant(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_builds_the_requested_variant() {
        let circle = create_shape("circle").unwrap();
        let square = create_shape("square").unwrap();

        assert_eq!(circle.draw(), "Drawing Circle");
        assert_eq!(square.draw(), "Drawing Square");
        assert_ne!(circle.name(), square.name());
    }

    #[test]
    fn unknown_kind_is_a_diagnostic_not_a_panic() {
        let err = create_shape("triangle").unwrap_err();
        assert_eq!(err, PatternError::unknown_variant("triangle"));
        assert_eq!(
            err.to_string(),
            "unknown variant requested: 'triangle'"
        );
    }

    #[test]
    fn dispatch_goes_through_the_contract() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle),
            Box::new(Square),
            Box::new(Rectangle),
        ];

        let drawn: Vec<String> = shapes.iter().map(|s| s.draw()).collect();
        assert_eq!(
            drawn,
            vec!["Drawing Circle", "Drawing Square", "Drawing Rectangle"]
        );
    }
}
