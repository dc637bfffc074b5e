// AST (Abstract Syntax Tree) definitions for sprig

use std::fmt;

/// A statement or expression node.
///
/// Literal nodes keep their raw lexeme; converting numbers is left to
/// whatever consumes the tree. Every node owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    IntLiteral(String),
    FloatLiteral(String),
    StringLiteral(String),
    Identifier(String),

    /// `left op right`. `op` is always an entry of the operator table.
    BinaryExpr {
        left: Box<AstNode>,
        op: String,
        right: Box<AstNode>,
    },

    /// `let name = initializer;`
    LetBinding {
        name: String,
        initializer: Box<AstNode>,
    },

    /// `const name = initializer;`
    ConstBinding {
        name: String,
        initializer: Box<AstNode>,
    },

    /// `{ expr* }`
    Block(Vec<AstNode>),
}

impl AstNode {
    pub fn binary(left: AstNode, op: impl Into<String>, right: AstNode) -> Self {
        AstNode::BinaryExpr {
            left: Box::new(left),
            op: op.into(),
            right: Box::new(right),
        }
    }
}

impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::IntLiteral(text) => write!(f, "IntLiteral({text})"),
            AstNode::FloatLiteral(text) => write!(f, "FloatLiteral({text})"),
            AstNode::StringLiteral(text) => {
                write!(f, "StringLiteral(\"{text}\")")
            }
            AstNode::Identifier(name) => write!(f, "Identifier({name})"),
            AstNode::BinaryExpr { left, op, right } => {
                write!(f, "BinaryExpr({left}, {op}, {right})")
            }
            AstNode::LetBinding { name, initializer } => {
                write!(f, "LetBinding({name}, {initializer})")
            }
            AstNode::ConstBinding { name, initializer } => {
                write!(f, "ConstBinding({name}, {initializer})")
            }
            AstNode::Block(statements) => {
                f.write_str("Block(")?;
                for (i, stmt) in statements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{stmt}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Top-level statements in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub nodes: Vec<AstNode>,
}

impl Program {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl IntoIterator for Program {
    type Item = AstNode;
    type IntoIter = std::vec::IntoIter<AstNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            writeln!(f, "{node}")?;
        }
        Ok(())
    }
}
