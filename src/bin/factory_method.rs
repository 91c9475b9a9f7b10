//! Factory Method: object creation is delegated to per-product factories,
//! so adding a product means adding a factory, never editing existing code.

use patterns::shapes::{Circle, Shape, Square};

// ===== Factory contract =====

trait ShapeFactory {
    fn create_shape(&self) -> Box<dyn Shape>;
}

// ===== Concrete factories =====

struct CircleFactory;
struct SquareFactory;

impl ShapeFactory for CircleFactory {
    fn create_shape(&self) -> Box<dyn Shape> {
        Box::new(Circle)
    }
}

impl ShapeFactory for SquareFactory {
    fn create_shape(&self) -> Box<dyn Shape> {
        Box::new(Square)
    }
}

// ===== Client =====

fn produce_and_draw(factory: &dyn ShapeFactory) {
    let shape = factory.create_shape();
    println!("{}", shape.draw());
}

fn main() {
    produce_and_draw(&CircleFactory);
    produce_and_draw(&SquareFactory);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_factory_produces_its_own_product() {
        assert_eq!(CircleFactory.create_shape().name(), "circle");
        assert_eq!(SquareFactory.create_shape().name(), "square");
    }
}

// Expected output:
//
// Drawing Circle
// Drawing Square
