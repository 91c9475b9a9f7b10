//! Decorator: extras are layered around a base coffee by wrapping it, each
//! layer owning the one beneath and satisfying the same contract.

// ===== Component contract =====

trait Coffee {
    fn description(&self) -> String;
    fn cost(&self) -> f64;
}

// ===== Base component =====

struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn description(&self) -> String {
        "Simple Coffee".to_string()
    }

    fn cost(&self) -> f64 {
        2.0
    }
}

// ===== Decorators =====

struct Milk {
    inner: Box<dyn Coffee>,
}

struct Sugar {
    inner: Box<dyn Coffee>,
}

impl Coffee for Milk {
    fn description(&self) -> String {
        format!("{}, Milk", self.inner.description())
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + 0.5
    }
}

impl Coffee for Sugar {
    fn description(&self) -> String {
        format!("{}, Sugar", self.inner.description())
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + 0.3
    }
}

fn print_order(coffee: &dyn Coffee) {
    println!("{} : ${}", coffee.description(), coffee.cost());
}

fn main() {
    let mut order: Box<dyn Coffee> = Box::new(SimpleCoffee);
    print_order(order.as_ref());

    order = Box::new(Milk { inner: order });
    print_order(order.as_ref());

    order = Box::new(Sugar { inner: order });
    print_order(order.as_ref());
}


// Expected output:
//
// Simple Coffee : $2
// Simple Coffee, Milk : $2.5
// Simple Coffee, Milk, Sugar : $2.8
