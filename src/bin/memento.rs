//! Memento: an editor saves snapshots of its text into a LIFO history and
//! undoes back through them. The history owns its copies, so editing after
//! a save can never corrupt an earlier snapshot.

use patterns::history::History;

struct Editor {
    text: String,
}

impl Editor {
    fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        println!("Text set to: {}", self.text);
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn undo(&mut self, history: &mut History<String>) {
        match history.restore() {
            Ok(previous) => {
                self.text = previous;
                println!("Restored to: {}", self.text);
            }
            Err(err) => println!("{err}"),
        }
    }
}

fn main() {
    let mut editor = Editor::new();
    let mut history = History::new();

    editor.set_text("Hello");
    history.save(&editor.text);

    editor.set_text("Hello, world!");
    history.save(&editor.text);

    editor.set_text("Hello, world!!!");

    println!("Now: {}", editor.text());

    editor.undo(&mut history);
    editor.undo(&mut history);
    editor.undo(&mut history); // history is exhausted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_walks_back_in_lifo_order() {
        let mut editor = Editor::new();
        let mut history = History::new();

        editor.text = "one".to_string();
        history.save(&editor.text);
        editor.text = "two".to_string();
        history.save(&editor.text);
        editor.text = "three".to_string();

        editor.undo(&mut history);
        assert_eq!(editor.text(), "two");
        editor.undo(&mut history);
        assert_eq!(editor.text(), "one");
    }

    #[test]
    fn exhausted_history_leaves_text_untouched() {
        let mut editor = Editor::new();
        let mut history = History::new();

        editor.text = "keep me".to_string();
        editor.undo(&mut history);
        assert_eq!(editor.text(), "keep me");
    }
}

// Expected output:
//
// Text set to: Hello
// Text set to: Hello, world!
// Text set to: Hello, world!!!
// Now: Hello, world!!!
// Restored to: Hello, world!
// Restored to: Hello
// nothing to restore: history is empty
