/// Represents a binary operator.
///
/// Only the four arithmetic operators exist. `Add` and `Sub` share the lowest
/// precedence level, `Mul` and `Div` the higher one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Returns `true` for the operators of the lowest precedence level.
    ///
    /// ## Example
    /// ```
    /// use rcalc::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Sub.is_additive());
    /// assert!(!BinaryOperator::Div.is_additive());
    /// ```
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Applies the operator to two operands with plain `f64` semantics.
    ///
    /// Division by zero is not an error: it yields an infinity or NaN.
    ///
    /// ## Example
    /// ```
    /// use rcalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Mul.apply(1.5, 2.0), 3.0);
    /// assert!(BinaryOperator::Div.apply(1.0, 0.0).is_infinite());
    /// assert!(BinaryOperator::Div.apply(0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

/// A node of the binary expression tree.
///
/// Nodes are built fully formed: a `Leaf` already holds its value, and an
/// `Operator` owns both of its children. The tree is acyclic and owned by the
/// call that built it.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A resolved numeric value.
    Leaf(f64),
    /// A binary operation over two subtrees.
    Operator {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Node {
    /// Builds an operator node from its parts.
    #[must_use]
    pub fn operator(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Operator { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Number of edges on the longest path from this node to a leaf.
    ///
    /// ## Example
    /// ```
    /// use rcalc::ast::{BinaryOperator, Node};
    ///
    /// let leaf = Node::Leaf(1.0);
    /// assert_eq!(leaf.depth(), 0);
    ///
    /// let sum = Node::operator(BinaryOperator::Add, Node::Leaf(1.0), Node::Leaf(2.0));
    /// assert_eq!(sum.depth(), 1);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Operator { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// Renders the tree as fully parenthesized infix, e.g. `((7 - 3) - 2)`.
impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Leaf(value) => write!(f, "{value}"),
            Self::Operator { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
