//! Mediator: chat users never talk to each other directly. The room owns
//! the participants and routes every message, so there are no tangled
//! user-to-user references to manage.

struct User {
    name: String,
}

impl User {
    fn receive(&self, message: &str, from: &str) {
        println!("[{}] received from [{from}]: {message}", self.name);
    }
}

struct ChatRoom {
    users: Vec<User>,
}

impl ChatRoom {
    fn new() -> Self {
        Self { users: Vec::new() }
    }

    fn join(&mut self, name: &str) {
        self.users.push(User {
            name: name.to_string(),
        });
    }

    /// Route `message` from `sender` to every other participant.
    fn send(&self, sender: &str, message: &str) {
        if !self.users.iter().any(|user| user.name == sender) {
            println!("[{sender}] is not in the room");
            return;
        }

        println!("[{sender}] sends: {message}");
        for user in self.users.iter().filter(|user| user.name != sender) {
            user.receive(message, sender);
        }
    }
}

fn main() {
    let mut room = ChatRoom::new();
    room.join("Alice");
    room.join("Bob");
    room.join("Charlie");

    room.send("Alice", "Hello everyone!");
    room.send("Bob", "Hi Alice!");
    room.send("Charlie", "Hey guys!");
    room.send("Mallory", "Let me in");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sender_is_excluded_from_delivery() {
        let mut room = ChatRoom::new();
        room.join("a");
        room.join("b");

        let recipients: Vec<&str> = room
            .users
            .iter()
            .filter(|user| user.name != "a")
            .map(|user| user.name.as_str())
            .collect();
        assert_eq!(recipients, vec!["b"]);
    }

    #[test]
    fn unknown_sender_is_rejected() {
        let mut room = ChatRoom::new();
        room.join("a");
        assert!(!room.users.iter().any(|user| user.name == "ghost"));
    }
}

// Expected output:
//
// [Alice] sends: Hello everyone!
// [Bob] received from [Alice]: Hello everyone!
// [Charlie] received from [Alice]: Hello everyone!
// [Bob] sends: Hi Alice!
// [Alice] received from [Bob]: Hi Alice!
// [Charlie] received from [Bob]: Hi Alice!
// [Charlie] sends: Hey guys!
// [Alice] received from [Charlie]: Hey guys!
// [Bob] received from [Charlie]: Hey guys!
// [Mallory] is not in the room
