//! Runtime polymorphism two ways. The original exercise hand-rolled a
//! vtable in C with tagged base pointers and casts; here the closed set of
//! shapes is a sum type dispatched by `match`, shown side by side with the
//! trait-object form the rest of the collection uses.

// ===== Closed set: enum dispatch =====

enum Shape {
    Circle { radius: f64 },
    Rect { width: f64, height: f64 },
}

impl Shape {
    fn draw(&self) {
        match self {
            Shape::Circle { radius } => println!("Circle with radius {radius}"),
            Shape::Rect { width, height } => println!("Rect {width} x {height}"),
        }
    }

    fn area(&self) -> f64 {
        match self {
            Shape::Circle { radius } => std::f64::consts::PI * radius * radius,
            Shape::Rect { width, height } => width * height,
        }
    }
}

// ===== Open set: trait-object dispatch =====

trait Drawable {
    fn draw(&self);
}

struct Circle {
    radius: f64,
}

struct Rect {
    width: f64,
    height: f64,
}

impl Drawable for Circle {
    fn draw(&self) {
        println!("Circle with radius {}", self.radius);
    }
}

impl Drawable for Rect {
    fn draw(&self) {
        println!("Rect {} x {}", self.width, self.height);
    }
}

fn main() {
    println!("== Enum dispatch ==");
    let shapes = vec![
        Shape::Circle { radius: 1.0 },
        Shape::Rect {
            width: 2.0,
            height: 3.0,
        },
    ];
    for shape in &shapes {
        shape.draw();
    }
    let total: f64 = shapes.iter().map(Shape::area).sum();
    println!("Total area: {total:.2}");

    println!();
    println!("== Trait-object dispatch ==");
    let drawables: Vec<Box<dyn Drawable>> = vec![
        Box::new(Circle { radius: 1.0 }),
        Box::new(Rect {
            width: 2.0,
            height: 3.0,
        }),
    ];
    for drawable in &drawables {
        drawable.draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_dispatch_computes_per_variant_area() {
        let circle = Shape::Circle { radius: 1.0 };
        let rect = Shape::Rect {
            width: 2.0,
            height: 3.0,
        };

        assert!((circle.area() - std::f64::consts::PI).abs() < 1e-9);
        assert!((rect.area() - 6.0).abs() < 1e-9);
    }
}

// Expected output:
//
// == Enum dispatch ==
// Circle with radius 1
// Rect 2 x 3
// Total area: 9.14
//
// == Trait-object dispatch ==
// Circle with radius 1
// Rect 2 x 3
