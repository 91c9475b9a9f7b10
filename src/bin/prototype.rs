//! Prototype: new objects are produced by copying an existing one through
//! the abstract contract, without the client naming the concrete type.
//! The serialized view makes it visible that a clone is a full deep copy.

use serde::Serialize;

// ===== Prototype contract =====

trait Prototype {
    fn clone_box(&self) -> Box<dyn Prototype>;
    fn describe(&self) -> String;
}

// ===== Concrete prototypes =====

#[derive(Clone, Serialize)]
struct Sensor {
    id: u32,
    calibration: Vec<f64>,
}

#[derive(Clone, Serialize)]
struct Profile {
    name: String,
    tags: Vec<String>,
}

impl Prototype for Sensor {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!("Sensor {}", serde_json::to_string(self).unwrap_or_default())
    }
}

impl Prototype for Profile {
    fn clone_box(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!("Profile {}", serde_json::to_string(self).unwrap_or_default())
    }
}

fn main() {
    let originals: Vec<Box<dyn Prototype>> = vec![
        Box::new(Sensor {
            id: 42,
            calibration: vec![0.5, 1.5],
        }),
        Box::new(Profile {
            name: "Hello".to_string(),
            tags: vec!["demo".to_string()],
        }),
    ];

    // Copy through the contract; the client never names the concrete types.
    let clones: Vec<Box<dyn Prototype>> = originals.iter().map(|p| p.clone_box()).collect();

    println!("Original objects:");
    for original in &originals {
        println!("{}", original.describe());
    }

    println!("Cloned objects:");
    for clone in &clones {
        println!("{}", clone.describe());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_is_a_deep_copy() {
        let mut original = Sensor {
            id: 1,
            calibration: vec![1.0],
        };
        let copied = original.clone_box();

        original.calibration.push(2.0);
        assert_eq!(copied.describe(), r#"Sensor {"id":1,"calibration":[1.0]}"#);
    }

    #[test]
    fn clone_goes_through_the_contract() {
        let prototypes: Vec<Box<dyn Prototype>> = vec![
            Box::new(Sensor {
                id: 7,
                calibration: vec![],
            }),
            Box::new(Profile {
                name: "x".to_string(),
                tags: vec![],
            }),
        ];

        for prototype in &prototypes {
            assert_eq!(prototype.clone_box().describe(), prototype.describe());
        }
    }
}

// Expected output:
//
// Original objects:
// Sensor {"id":42,"calibration":[0.5,1.5]}
// Profile {"name":"Hello","tags":["demo"]}
// Cloned objects:
// Sensor {"id":42,"calibration":[0.5,1.5]}
// Profile {"name":"Hello","tags":["demo"]}
