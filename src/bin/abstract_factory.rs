//! Abstract Factory: a factory builds a whole family of related widgets, so
//! a client can never mix a Windows button with a Mac checkbox by accident.

// ===== Product contracts =====

trait Button {
    fn paint(&self) -> String;
}

trait CheckBox {
    fn paint(&self) -> String;
}

// ===== Windows family =====

struct WindowsButton;
struct WindowsCheckBox;

impl Button for WindowsButton {
    fn paint(&self) -> String {
        "Render a button in Windows style".to_string()
    }
}

impl CheckBox for WindowsCheckBox {
    fn paint(&self) -> String {
        "Render a checkbox in Windows style".to_string()
    }
}

// ===== Mac family =====

struct MacButton;
struct MacCheckBox;

impl Button for MacButton {
    fn paint(&self) -> String {
        "Render a button in Mac style".to_string()
    }
}

impl CheckBox for MacCheckBox {
    fn paint(&self) -> String {
        "Render a checkbox in Mac style".to_string()
    }
}

// ===== Factory contract and concrete factories =====

trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn CheckBox>;
}

struct WindowsFactory;
struct MacFactory;

impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_checkbox(&self) -> Box<dyn CheckBox> {
        Box::new(WindowsCheckBox)
    }
}

impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_checkbox(&self) -> Box<dyn CheckBox> {
        Box::new(MacCheckBox)
    }
}

// ===== Client =====

fn build_ui(factory: &dyn GuiFactory) {
    println!("{}", factory.create_button().paint());
    println!("{}", factory.create_checkbox().paint());
}

fn main() {
    println!("[Windows UI]");
    build_ui(&WindowsFactory);

    println!();
    println!("[Mac UI]");
    build_ui(&MacFactory);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_never_mix() {
        let factories: Vec<Box<dyn GuiFactory>> =
            vec![Box::new(WindowsFactory), Box::new(MacFactory)];

        for (factory, style) in factories.iter().zip(["Windows", "Mac"]) {
            assert!(factory.create_button().paint().contains(style));
            assert!(factory.create_checkbox().paint().contains(style));
        }
    }
}

// Expected output:
//
// [Windows UI]
// Render a button in Windows style
// Render a checkbox in Windows style
//
// [Mac UI]
// Render a button in Mac style
// Render a checkbox in Mac style
