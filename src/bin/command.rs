//! Command: button presses are reified as objects so the invoker can replay
//! or undo them without knowing what they do. The receiver is shared by the
//! commands through `Rc`; nothing is manually freed mid-call.

use std::rc::Rc;

// ===== Receiver =====

struct Light;

impl Light {
    fn on(&self) {
        println!("Light is ON");
    }

    fn off(&self) {
        println!("Light is OFF");
    }
}

// ===== Command contract =====

trait Command {
    fn execute(&self);
    fn undo(&self);
}

struct LightOnCommand {
    light: Rc<Light>,
}

struct LightOffCommand {
    light: Rc<Light>,
}

impl Command for LightOnCommand {
    fn execute(&self) {
        self.light.on();
    }

    fn undo(&self) {
        self.light.off();
    }
}

impl Command for LightOffCommand {
    fn execute(&self) {
        self.light.off();
    }

    fn undo(&self) {
        self.light.on();
    }
}

// ===== Invoker =====

enum Slot {
    On,
    Off,
}

struct RemoteControl {
    on_command: Box<dyn Command>,
    off_command: Box<dyn Command>,
    last_pressed: Option<Slot>,
}

impl RemoteControl {
    fn new(on_command: Box<dyn Command>, off_command: Box<dyn Command>) -> Self {
        Self {
            on_command,
            off_command,
            last_pressed: None,
        }
    }

    fn press_on(&mut self) {
        self.on_command.execute();
        self.last_pressed = Some(Slot::On);
    }

    fn press_off(&mut self) {
        self.off_command.execute();
        self.last_pressed = Some(Slot::Off);
    }

    fn press_undo(&mut self) {
        match self.last_pressed {
            Some(Slot::On) => {
                print!("Undoing last command: ");
                self.on_command.undo();
            }
            Some(Slot::Off) => {
                print!("Undoing last command: ");
                self.off_command.undo();
            }
            None => println!("Nothing to undo"),
        }
    }
}

fn main() {
    let living_room_light = Rc::new(Light);

    let mut remote = RemoteControl::new(
        Box::new(LightOnCommand {
            light: Rc::clone(&living_room_light),
        }),
        Box::new(LightOffCommand {
            light: Rc::clone(&living_room_light),
        }),
    );

    remote.press_on();
    remote.press_off();
    remote.press_undo();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recording {
        log: Rc<RefCell<Vec<&'static str>>>,
        action: &'static str,
        reverse: &'static str,
    }

    impl Command for Recording {
        fn execute(&self) {
            self.log.borrow_mut().push(self.action);
        }

        fn undo(&self) {
            self.log.borrow_mut().push(self.reverse);
        }
    }

    #[test]
    fn undo_reverses_the_last_pressed_command() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut remote = RemoteControl::new(
            Box::new(Recording {
                log: Rc::clone(&log),
                action: "on",
                reverse: "off",
            }),
            Box::new(Recording {
                log: Rc::clone(&log),
                action: "off",
                reverse: "on",
            }),
        );

        remote.press_on();
        remote.press_off();
        remote.press_undo();

        assert_eq!(*log.borrow(), vec!["on", "off", "on"]);
    }
}

// Expected output:
//
// Light is ON
// Light is OFF
// Undoing last command: Light is ON
