//! Composite: files and directories form one recursive tree type, and a
//! single `display` walks leaves and branches uniformly. The closed set of
//! node kinds makes a sum type the natural shape here.

enum Node {
    File(String),
    Dir { name: String, children: Vec<Node> },
}

impl Node {
    fn file(name: &str) -> Self {
        Node::File(name.to_string())
    }

    fn dir(name: &str, children: Vec<Node>) -> Self {
        Node::Dir {
            name: name.to_string(),
            children,
        }
    }

    fn display(&self, indent: usize) {
        let pad = " ".repeat(indent);
        match self {
            Node::File(name) => println!("{pad}- File: {name}"),
            Node::Dir { name, children } => {
                println!("{pad}+ Dir: {name}");
                for child in children {
                    child.display(indent + 4);
                }
            }
        }
    }

    fn count_files(&self) -> usize {
        match self {
            Node::File(_) => 1,
            Node::Dir { children, .. } => children.iter().map(Node::count_files).sum(),
        }
    }
}

fn main() {
    let root = Node::dir(
        "root",
        vec![
            Node::dir("bin", vec![Node::file("ls"), Node::file("cat")]),
            Node::dir("etc", vec![Node::file("config.ini")]),
            Node::dir(
                "home",
                vec![Node::dir("user", vec![Node::file("readme.txt")])],
            ),
        ],
    );

    root.display(0);
    println!("Total files: {}", root.count_files());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_treats_leaves_and_branches_uniformly() {
        let tree = Node::dir(
            "a",
            vec![
                Node::file("one"),
                Node::dir("b", vec![Node::file("two"), Node::file("three")]),
            ],
        );
        assert_eq!(tree.count_files(), 3);
    }

    #[test]
    fn empty_directory_holds_no_files() {
        assert_eq!(Node::dir("empty", vec![]).count_files(), 0);
    }
}

// Expected output:
//
// + Dir: root
//     + Dir: bin
//         - File: ls
//         - File: cat
//     + Dir: etc
//         - File: config.ini
//     + Dir: home
//         + Dir: user
//             - File: readme.txt
// Total files: 4
