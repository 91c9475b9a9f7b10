//! Interpreter: a tiny grammar of numbers joined by `+` is parsed into an
//! expression tree, then evaluated by walking the tree.

// ===== Expression tree =====

enum Expr {
    Number(i64),
    Add(Box<Expr>, Box<Expr>),
}

impl Expr {
    fn interpret(&self) -> i64 {
        match self {
            Expr::Number(n) => *n,
            Expr::Add(left, right) => left.interpret() + right.interpret(),
        }
    }
}

// ===== Parser for "a + b + c" =====

fn parse(input: &str) -> Result<Expr, String> {
    let mut tokens = input.split_whitespace();

    let first = tokens.next().ok_or("empty expression")?;
    let mut expr = Expr::Number(parse_number(first)?);

    while let Some(op) = tokens.next() {
        if op != "+" {
            return Err(format!("expected '+', found '{op}'"));
        }
        let operand = tokens.next().ok_or("dangling '+'")?;
        expr = Expr::Add(Box::new(expr), Box::new(Expr::Number(parse_number(operand)?)));
    }

    Ok(expr)
}

fn parse_number(token: &str) -> Result<i64, String> {
    token
        .parse()
        .map_err(|_| format!("not a number: '{token}'"))
}

fn main() {
    let expression = "5 + 10 + 20";
    match parse(expression) {
        Ok(tree) => {
            println!("Expression: {expression}");
            println!("Result: {}", tree.interpret());
        }
        Err(err) => println!("Parse error: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_left_to_right() {
        assert_eq!(parse("5 + 10 + 20").unwrap().interpret(), 35);
    }

    #[test]
    fn single_number_is_itself() {
        assert_eq!(parse("42").unwrap().interpret(), 42);
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        assert!(parse("").is_err());
        assert!(parse("1 +").is_err());
        assert!(parse("1 * 2").is_err());
        assert!(parse("one + two").is_err());
    }
}

// Expected output:
//
// Expression: 5 + 10 + 20
// Result: 35
