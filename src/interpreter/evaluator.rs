use crate::ast::Node;

impl Node {
    /// Evaluates the tree bottom-up.
    ///
    /// Both subtrees of an operator are resolved before the operator is
    /// applied. A leaf is already resolved. Arithmetic is plain `f64`, so
    /// division by zero produces an infinity or NaN instead of an error.
    ///
    /// # Example
    /// ```
    /// use rcalc::ast::{BinaryOperator, Node};
    ///
    /// // (7 - 3) - 2
    /// let tree = Node::operator(BinaryOperator::Sub,
    ///                           Node::operator(BinaryOperator::Sub, Node::Leaf(7.0), Node::Leaf(3.0)),
    ///                           Node::Leaf(2.0));
    /// assert_eq!(tree.evaluate(), 2.0);
    /// ```
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        match self {
            Self::Leaf(value) => *value,
            Self::Operator { op, left, right } => {
                let left = left.evaluate();
                let right = right.evaluate();
                op.apply(left, right)
            },
        }
    }
}
