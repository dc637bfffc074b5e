//! Binary operator table
//!
//! Maps an operator lexeme to its precedence and associativity. The table is
//! built once on first use and shared read-only afterwards.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Binding strength of one binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    pub lexeme: &'static str,
    pub precedence: u8,
    pub associativity: Associativity,
}

impl Operator {
    const fn new(
        lexeme: &'static str,
        precedence: u8,
        associativity: Associativity,
    ) -> Self {
        Self {
            lexeme,
            precedence,
            associativity,
        }
    }

    /// Minimum precedence for the right-hand operand.
    ///
    /// Right-associative operators recurse at their own level so a chain
    /// nests to the right. Left-associative ones require strictly tighter
    /// operators on the right, leaving equal ones for the enclosing loop.
    pub fn next_min_precedence(&self) -> u8 {
        match self.associativity {
            Associativity::Left => self.precedence + 1,
            Associativity::Right => self.precedence,
        }
    }
}

// Precedences 2..=5 are unused.
const OPERATORS: &[Operator] = &[
    Operator::new("or", 0, Associativity::Left),
    Operator::new("and", 0, Associativity::Left),
    Operator::new("not", 0, Associativity::Left),
    Operator::new("==", 0, Associativity::Left),
    Operator::new("<", 1, Associativity::Left),
    Operator::new("<=", 1, Associativity::Left),
    Operator::new(">", 1, Associativity::Left),
    Operator::new(">=", 1, Associativity::Left),
    Operator::new("+", 6, Associativity::Left),
    Operator::new("-", 6, Associativity::Left),
    Operator::new("*", 7, Associativity::Left),
    Operator::new("/", 7, Associativity::Left),
    Operator::new("^", 8, Associativity::Right),
];

fn table() -> &'static FxHashMap<&'static str, Operator> {
    static TABLE: OnceLock<FxHashMap<&'static str, Operator>> = OnceLock::new();
    TABLE.get_or_init(|| OPERATORS.iter().map(|op| (op.lexeme, *op)).collect())
}

/// Look up the binary operator spelled `lexeme`.
pub fn lookup(lexeme: &str) -> Option<&'static Operator> {
    table().get(lexeme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let plus = lookup("+").unwrap();
        assert_eq!(plus.precedence, 6);
        assert_eq!(plus.associativity, Associativity::Left);

        let caret = lookup("^").unwrap();
        assert_eq!(caret.precedence, 8);
        assert_eq!(caret.associativity, Associativity::Right);

        assert_eq!(lookup(">=").unwrap().lexeme, ">=");
        assert!(lookup("=").is_none());
        assert!(lookup("**").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_next_min_precedence() {
        assert_eq!(lookup("-").unwrap().next_min_precedence(), 7);
        assert_eq!(lookup("^").unwrap().next_min_precedence(), 8);
        assert_eq!(lookup("or").unwrap().next_min_precedence(), 1);
    }

    #[test]
    fn test_table_is_complete() {
        assert_eq!(OPERATORS.len(), 13);
        for op in OPERATORS {
            assert_eq!(lookup(op.lexeme), Some(op));
        }
    }
}
