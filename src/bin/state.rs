//! State: a light switch whose behavior lives in its current state. Each
//! transition consumes the old state and returns the next one, so there is
//! no mid-transition self-destruction and no dangling state object.

#[derive(Debug, PartialEq, Eq)]
enum LightState {
    On,
    Off,
}

impl LightState {
    /// Handle one button press, announcing the transition and returning the
    /// successor state by value.
    fn press(self) -> Self {
        match self {
            LightState::On => {
                println!("Light is ON. Switching to OFF...");
                LightState::Off
            }
            LightState::Off => {
                println!("Light is OFF. Switching to ON...");
                LightState::On
            }
        }
    }
}

struct Light {
    state: LightState,
}

impl Light {
    fn new() -> Self {
        Self {
            state: LightState::Off,
        }
    }

    fn press_button(&mut self) {
        // Temporarily park a placeholder so the transition can consume the
        // old state by value.
        let current = std::mem::replace(&mut self.state, LightState::Off);
        self.state = current.press();
    }
}

fn main() {
    let mut light = Light::new();

    for _ in 0..4 {
        light.press_button();
    }
}


// Expected output:
//
// Light is OFF. Switching to ON...
// Light is ON. Switching to OFF...
// Light is OFF. Switching to ON...
// Light is ON. Switching to OFF...
