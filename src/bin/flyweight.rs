//! Flyweight: stones of the same color share one intrinsic object from the
//! registry; position is extrinsic state supplied at use. Identity checks
//! make the sharing visible.

use std::rc::Rc;

use patterns::registry::Registry;
use patterns::PatternError;

trait ChessPiece {
    fn display(&self, x: u32, y: u32) -> String;
}

struct Stone {
    color: &'static str,
}

impl ChessPiece for Stone {
    fn display(&self, x: u32, y: u32) -> String {
        format!(
            "{} Chess at ({x}, {y})",
            match self.color {
                "black" => "Black",
                _ => "White",
            }
        )
    }
}

fn chess_registry() -> Registry<dyn ChessPiece> {
    let mut registry: Registry<dyn ChessPiece> = Registry::new();
    registry.register("black", || Rc::new(Stone { color: "black" }));
    registry.register("white", || Rc::new(Stone { color: "white" }));
    registry
}

fn main() {
    let mut registry = chess_registry();
    if let Err(err) = run(&mut registry) {
        println!("{err}");
    }
}

fn run(registry: &mut Registry<dyn ChessPiece>) -> Result<(), PatternError> {
    let black1 = registry.acquire("black")?;
    let black2 = registry.acquire("black")?;
    let white1 = registry.acquire("white")?;

    // Shared intrinsic object, extrinsic position.
    println!("{}", black1.display(1, 2));
    println!("{}", black2.display(3, 5));
    println!("{}", white1.display(4, 4));

    println!(
        "black1 and black2 are {} object.",
        if Rc::ptr_eq(&black1, &black2) {
            "the same"
        } else {
            "different"
        }
    );
    println!("Instances constructed: {}", registry.live_instances());

    match registry.acquire("red") {
        Ok(_) => println!("red should not have been registered"),
        Err(err) => println!("{err}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_color_shares_one_instance() {
        let mut registry = chess_registry();
        let a = registry.acquire("black").unwrap();
        let b = registry.acquire("black").unwrap();
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(registry.live_instances(), 1);
    }

    #[test]
    fn extrinsic_state_stays_out_of_the_shared_object() {
        let mut registry = chess_registry();
        let stone = registry.acquire("white").unwrap();
        assert_eq!(stone.display(4, 4), "White Chess at (4, 4)");
        assert_eq!(stone.display(9, 9), "White Chess at (9, 9)");
    }

    #[test]
    fn demo_driver_never_errors() {
        let mut registry = chess_registry();
        assert_eq!(run(&mut registry), Ok(()));
    }
}

// Expected output:
//
// Black Chess at (1, 2)
// Black Chess at (3, 5)
// White Chess at (4, 4)
// black1 and black2 are the same object.
// Instances constructed: 2
// unknown variant requested: 'red'
