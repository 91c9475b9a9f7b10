//! Iterator: traversal is split out of the collection. Implementing the
//! standard `Iterator` trait is the whole pattern here; `for` loops and
//! adapter methods come along for free.

use itertools::Itertools;

struct StringList {
    items: Vec<String>,
}

impl StringList {
    fn new() -> Self {
        Self { items: Vec::new() }
    }

    fn add(&mut self, item: &str) {
        self.items.push(item.to_string());
    }

    fn iter(&self) -> StringListIter<'_> {
        StringListIter {
            list: self,
            index: 0,
        }
    }
}

/// External iterator holding a cursor into the list, never exposing the
/// list's internal representation.
struct StringListIter<'a> {
    list: &'a StringList,
    index: usize,
}

impl<'a> Iterator for StringListIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.list.items.get(self.index)?;
        self.index += 1;
        Some(item)
    }
}

impl<'a> IntoIterator for &'a StringList {
    type Item = &'a str;
    type IntoIter = StringListIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn main() {
    let mut list = StringList::new();
    list.add("Apple");
    list.add("Banana");
    list.add("Cherry");

    for fruit in &list {
        println!("{fruit}");
    }

    // Standard adapters apply to the hand-written iterator too.
    println!("Joined: {}", list.iter().join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut list = StringList::new();
        list.add("a");
        list.add("b");

        let collected: Vec<&str> = list.iter().collect();
        assert_eq!(collected, vec!["a", "b"]);
    }

    #[test]
    fn empty_list_yields_nothing() {
        let list = StringList::new();
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn independent_cursors_do_not_interfere() {
        let mut list = StringList::new();
        list.add("x");
        list.add("y");

        let mut first = list.iter();
        let mut second = list.iter();
        assert_eq!(first.next(), Some("x"));
        assert_eq!(second.next(), Some("x"));
        assert_eq!(first.next(), Some("y"));
    }
}

// Expected output:
//
// Apple
// Banana
// Cherry
// Joined: Apple, Banana, Cherry
