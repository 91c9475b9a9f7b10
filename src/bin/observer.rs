//! Observer: two observers subscribe to a subject, one unsubscribes, and
//! only the remaining one hears the second state change.

use std::rc::Rc;

use patterns::observer::{Observer, Subject};

struct ConsoleObserver {
    name: String,
}

impl ConsoleObserver {
    fn new(name: &str) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
        })
    }
}

impl Observer for ConsoleObserver {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, value: i64) {
        println!("Observer [{}] received update: {}", self.name, value);
    }
}

fn main() {
    let mut subject = Subject::new();

    let observer_a = ConsoleObserver::new("A");
    let observer_b = ConsoleObserver::new("B");

    subject.attach(observer_a.clone());
    subject.attach(observer_b);

    subject.set_state(100); // both hear this

    let a_handle: Rc<dyn Observer> = observer_a;
    subject.detach(&a_handle);

    subject.set_state(200); // only B is left
}

// Expected output:
//
// Observer [A] received update: 100
// Observer [B] received update: 100
// Observer [B] received update: 200
