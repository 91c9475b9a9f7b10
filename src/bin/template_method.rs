//! Template Method: the brewing skeleton is a default trait method; each
//! beverage fills in only the steps that vary.

trait CaffeineBeverage {
    // Variation points.
    fn brew(&self);
    fn add_condiments(&self);

    // Fixed steps shared by every beverage.
    fn boil_water(&self) {
        println!("Boiling water");
    }

    fn pour_in_cup(&self) {
        println!("Pouring into cup");
    }

    /// The algorithm skeleton. Implementors supply the blanks but cannot
    /// reorder the steps.
    fn prepare_recipe(&self) {
        self.boil_water();
        self.brew();
        self.pour_in_cup();
        self.add_condiments();
    }
}

struct Tea;
struct Coffee;

impl CaffeineBeverage for Tea {
    fn brew(&self) {
        println!("Steeping the tea");
    }

    fn add_condiments(&self) {
        println!("Adding lemon");
    }
}

impl CaffeineBeverage for Coffee {
    fn brew(&self) {
        println!("Dripping coffee through filter");
    }

    fn add_condiments(&self) {
        println!("Adding sugar and milk");
    }
}

fn main() {
    println!("Making tea:");
    Tea.prepare_recipe();

    println!();
    println!("Making coffee:");
    Coffee.prepare_recipe();
}

// Expected output:
//
// Making tea:
// Boiling water
// Steeping the tea
// Pouring into cup
// Adding lemon
//
// Making coffee:
// Boiling water
// Dripping coffee through filter
// Pouring into cup
// Adding sugar and milk
