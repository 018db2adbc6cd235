//! Precedence handling for Pratt parser
//!
//! Binding powers follow Python's operator precedence, lowest first. Left
//! associative operators bind their right operand at `bp + 1`.

/// Binding power levels for Pratt parser
pub const BP_LOWEST: u8 = 0;
pub const BP_NAMED: u8 = 2;
pub const BP_TERNARY: u8 = 4;
pub const BP_OR: u8 = 6;
pub const BP_AND: u8 = 8;
pub const BP_NOT: u8 = 10;
pub const BP_COMPARE: u8 = 12;
pub const BP_BIT_OR: u8 = 14;
pub const BP_BIT_XOR: u8 = 16;
pub const BP_BIT_AND: u8 = 18;
pub const BP_SHIFT: u8 = 20;
pub const BP_ADD: u8 = 22;
pub const BP_MUL: u8 = 24;
pub const BP_UNARY: u8 = 26;
pub const BP_POWER: u8 = 28;
pub const BP_AWAIT: u8 = 30;
pub const BP_POSTFIX: u8 = 32;

/// Minimum binding power for assignment and loop targets; stops before `in`
pub const BP_TARGET: u8 = BP_COMPARE + 1;

/// Precedence rules for the Pratt parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Lowest precedence
    Lowest,
    /// Assignment expression (:=)
    Named,
    /// Conditional expression (x if c else y)
    Ternary,
    /// or
    Or,
    /// and
    And,
    /// not
    Not,
    /// Comparisons, membership and identity tests
    Compare,
    /// |
    BitOr,
    /// ^
    BitXor,
    /// &
    BitAnd,
    /// << >>
    Shift,
    /// + -
    Term,
    /// * @ / // %
    Factor,
    /// Unary + - ~
    Unary,
    /// ** (right associative)
    Power,
    /// await
    Await,
    /// Calls, attribute access, subscripts
    Postfix,
}

impl Precedence {
    /// Convert precedence to binding power
    pub fn to_bp(self) -> u8 {
        match self {
            Precedence::Lowest => BP_LOWEST,
            Precedence::Named => BP_NAMED,
            Precedence::Ternary => BP_TERNARY,
            Precedence::Or => BP_OR,
            Precedence::And => BP_AND,
            Precedence::Not => BP_NOT,
            Precedence::Compare => BP_COMPARE,
            Precedence::BitOr => BP_BIT_OR,
            Precedence::BitXor => BP_BIT_XOR,
            Precedence::BitAnd => BP_BIT_AND,
            Precedence::Shift => BP_SHIFT,
            Precedence::Term => BP_ADD,
            Precedence::Factor => BP_MUL,
            Precedence::Unary => BP_UNARY,
            Precedence::Power => BP_POWER,
            Precedence::Await => BP_AWAIT,
            Precedence::Postfix => BP_POSTFIX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        let levels = [
            Precedence::Lowest,
            Precedence::Named,
            Precedence::Ternary,
            Precedence::Or,
            Precedence::And,
            Precedence::Not,
            Precedence::Compare,
            Precedence::BitOr,
            Precedence::BitXor,
            Precedence::BitAnd,
            Precedence::Shift,
            Precedence::Term,
            Precedence::Factor,
            Precedence::Unary,
            Precedence::Power,
            Precedence::Await,
            Precedence::Postfix,
        ];
        for pair in levels.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].to_bp() + 1 < pair[1].to_bp());
        }
    }

    #[test]
    fn test_target_stops_before_comparisons() {
        assert!(BP_TARGET > BP_COMPARE);
        assert!(BP_TARGET <= BP_BIT_OR);
    }
}
