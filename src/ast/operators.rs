use std::fmt;

/// Binding strength of prefix `NOT`, between `AND` and the comparisons.
pub const NOT_PRECEDENCE: u8 = 3;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Like,
    NotLike,
    Add,
    Sub,
    Mul,
    Div,
    Concat,
    And,
    Or,
}

impl BinaryOperator {
    /// Binding strength, higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Or => 1,
            BinaryOperator::And => 2,
            BinaryOperator::Eq
            | BinaryOperator::NotEq
            | BinaryOperator::Lt
            | BinaryOperator::LtEq
            | BinaryOperator::Gt
            | BinaryOperator::GtEq
            | BinaryOperator::Like
            | BinaryOperator::NotLike => 4,
            BinaryOperator::Concat => 5,
            BinaryOperator::Add | BinaryOperator::Sub => 6,
            BinaryOperator::Mul | BinaryOperator::Div => 7,
        }
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(self, BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Mul | BinaryOperator::Div)
    }

    /// `||` and arithmetic rank differently across dialects, so mixing them
    /// always needs explicit grouping.
    pub fn mixes_with(&self, other: &BinaryOperator) -> bool {
        let concat = |op: &BinaryOperator| *op == BinaryOperator::Concat;
        concat(self) != concat(other) && (self.is_arithmetic() || other.is_arithmetic())
    }

    /// `a op (b op c)` means the same as `(a op b) op c`.
    pub fn is_associative(&self) -> bool {
        matches!(
            self,
            BinaryOperator::And | BinaryOperator::Or | BinaryOperator::Add | BinaryOperator::Mul | BinaryOperator::Concat
        )
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOperator::Eq => write!(f, "="),
            BinaryOperator::NotEq => write!(f, "<>"),
            BinaryOperator::Lt => write!(f, "<"),
            BinaryOperator::LtEq => write!(f, "<="),
            BinaryOperator::Gt => write!(f, ">"),
            BinaryOperator::GtEq => write!(f, ">="),
            BinaryOperator::Like => write!(f, "LIKE"),
            BinaryOperator::NotLike => write!(f, "NOT LIKE"),
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Sub => write!(f, "-"),
            BinaryOperator::Mul => write!(f, "*"),
            BinaryOperator::Div => write!(f, "/"),
            BinaryOperator::Concat => write!(f, "||"),
            BinaryOperator::And => write!(f, "AND"),
            BinaryOperator::Or => write!(f, "OR"),
        }
    }
}

impl fmt::Debug for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryOperator({})", self)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{BinaryOperator, NOT_PRECEDENCE};

    #[test]
    pub fn test_operator_text() {
        assert_eq!(BinaryOperator::NotEq.to_string(), "<>");
        assert_eq!(BinaryOperator::NotLike.to_string(), "NOT LIKE");
        assert_eq!(format!("{:?}", BinaryOperator::And), "BinaryOperator(AND)");
    }

    #[test]
    pub fn test_precedence_order() {
        assert!(BinaryOperator::Or.precedence() < BinaryOperator::And.precedence());
        assert!(BinaryOperator::And.precedence() < BinaryOperator::Eq.precedence());
        assert!(BinaryOperator::Add.precedence() < BinaryOperator::Mul.precedence());
        assert!(!BinaryOperator::Sub.is_associative());
    }

    #[test]
    pub fn test_not_and_concat_rank() {
        assert!(BinaryOperator::And.precedence() < NOT_PRECEDENCE);
        assert!(NOT_PRECEDENCE < BinaryOperator::Eq.precedence());
        assert!(BinaryOperator::Eq.precedence() < BinaryOperator::Concat.precedence());
        assert!(BinaryOperator::Concat.precedence() < BinaryOperator::Add.precedence());

        assert!(BinaryOperator::Concat.mixes_with(&BinaryOperator::Mul));
        assert!(BinaryOperator::Add.mixes_with(&BinaryOperator::Concat));
        assert!(!BinaryOperator::Concat.mixes_with(&BinaryOperator::Concat));
        assert!(!BinaryOperator::Concat.mixes_with(&BinaryOperator::Eq));
        assert!(!BinaryOperator::Add.mixes_with(&BinaryOperator::Mul));
    }
}
