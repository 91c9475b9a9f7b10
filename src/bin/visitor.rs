//! Visitor: new operations over a closed set of shapes are added as new
//! visitors, without touching the shape types themselves.

// ===== Element set (closed) =====

struct Circle {
    radius: f64,
}

struct Rectangle {
    width: f64,
    height: f64,
}

enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Shape {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        match self {
            Shape::Circle(circle) => visitor.visit_circle(circle),
            Shape::Rectangle(rectangle) => visitor.visit_rectangle(rectangle),
        }
    }
}

// ===== Visitor contract =====

trait Visitor {
    fn visit_circle(&mut self, circle: &Circle);
    fn visit_rectangle(&mut self, rectangle: &Rectangle);
}

// ===== Concrete visitors =====

struct PrintVisitor;

impl Visitor for PrintVisitor {
    fn visit_circle(&mut self, circle: &Circle) {
        println!("Circle with radius: {}", circle.radius);
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) {
        println!(
            "Rectangle with width: {}, height: {}",
            rectangle.width, rectangle.height
        );
    }
}

struct AreaVisitor {
    total: f64,
}

impl Visitor for AreaVisitor {
    fn visit_circle(&mut self, circle: &Circle) {
        let area = std::f64::consts::PI * circle.radius * circle.radius;
        self.total += area;
        println!("Circle area: {area:.2}");
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) {
        let area = rectangle.width * rectangle.height;
        self.total += area;
        println!("Rectangle area: {area:.2}");
    }
}

fn main() {
    let shapes = vec![
        Shape::Circle(Circle { radius: 5.0 }),
        Shape::Rectangle(Rectangle {
            width: 4.0,
            height: 6.0,
        }),
    ];

    println!("--- Printing Shapes ---");
    let mut printer = PrintVisitor;
    for shape in &shapes {
        shape.accept(&mut printer);
    }

    println!();
    println!("--- Calculating Area ---");
    let mut area = AreaVisitor { total: 0.0 };
    for shape in &shapes {
        shape.accept(&mut area);
    }
    println!("Total area: {:.2}", area.total);
}


// Expected output:
//
// --- Printing Shapes ---
// Circle with radius: 5
// Rectangle with width: 4, height: 6
//
// --- Calculating Area ---
// Circle area: 78.54
// Rectangle area: 24.00
// Total area: 102.54
