//! Pratt parser implementation
//! Handles expression parsing with binding power

pub mod led;
pub mod nud;
pub mod precedence;

pub use nud::*;
pub use precedence::*;

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::ParserState;

impl ParserState<'_> {
    /// Parse an expression whose operators bind at least `min_bp`
    pub fn parse_expression(
        &mut self,
        min_bp: u8,
    ) -> Option<Expr> {
        let mut lhs = self.parse_prefix()?;

        while let Some((left_bp, right_bp, parser_fn)) = self.infix_info() {
            if left_bp < min_bp {
                break;
            }
            lhs = parser_fn(self, lhs, right_bp)?;
        }

        Some(lhs)
    }

    /// Comma separated expressions; a tuple as soon as one comma appears
    pub fn parse_expression_list(
        &mut self,
        min_bp: u8,
    ) -> Option<Expr> {
        let first = self.parse_expression(min_bp)?;
        if !self.at(&TokenKind::Comma) {
            return Some(first);
        }

        let start = first.span;
        let mut elts = vec![first];
        while self.skip(&TokenKind::Comma) {
            if !self.current_kind().starts_expression() {
                break;
            }
            elts.push(self.parse_expression(min_bp)?);
        }
        Some(Expr::new(ExprKind::Tuple(elts), self.span_from(start)))
    }

    /// Trailing `for target in iter if cond` clauses of a comprehension
    pub fn parse_comprehension_clauses(&mut self) -> Option<Vec<Comprehension>> {
        let mut generators = Vec::new();

        loop {
            let is_async = self.at(&TokenKind::KwAsync) && self.peek_kind() == &TokenKind::KwFor;
            if is_async {
                self.bump();
            }
            if !self.skip(&TokenKind::KwFor) {
                break;
            }

            let target = self.parse_expression_list(BP_TARGET)?;
            self.check_assign_target(&target)?;
            self.expect(&TokenKind::KwIn)?;
            let iter = self.parse_expression(BP_OR)?;

            let mut ifs = Vec::new();
            while self.skip(&TokenKind::KwIf) {
                ifs.push(self.parse_expression(BP_OR)?);
            }

            generators.push(Comprehension {
                target,
                iter,
                ifs,
                is_async,
            });
        }

        Some(generators)
    }

    /// Whether a comprehension clause starts here
    pub fn at_comprehension(&self) -> bool {
        self.at(&TokenKind::KwFor)
            || (self.at(&TokenKind::KwAsync) && self.peek_kind() == &TokenKind::KwFor)
    }

    /// Reject expressions that cannot be assigned to
    pub fn check_assign_target(
        &mut self,
        target: &Expr,
    ) -> Option<()> {
        match &target.kind {
            ExprKind::Name(_) | ExprKind::Attribute { .. } | ExprKind::Subscript { .. } => Some(()),
            ExprKind::Tuple(elts) | ExprKind::List(elts) => {
                for elt in elts {
                    self.check_assign_target(elt)?;
                }
                Some(())
            }
            ExprKind::Starred(inner) => self.check_assign_target(inner),
            other => {
                self.error_at(
                    format!("cannot assign to {}", describe(other)),
                    target.span,
                );
                None
            }
        }
    }
}

/// Human readable name of an expression kind for error messages
pub fn describe(kind: &ExprKind) -> &'static str {
    match kind {
        ExprKind::BoolOp { .. } | ExprKind::BinOp { .. } | ExprKind::UnaryOp { .. } => "expression",
        ExprKind::NamedExpr { .. } => "named expression",
        ExprKind::Lambda { .. } => "lambda",
        ExprKind::IfExp { .. } => "conditional expression",
        ExprKind::Dict { .. } => "dict literal",
        ExprKind::Set(_) => "set display",
        ExprKind::ListComp { .. } => "list comprehension",
        ExprKind::SetComp { .. } => "set comprehension",
        ExprKind::DictComp { .. } => "dict comprehension",
        ExprKind::GeneratorExp { .. } => "generator expression",
        ExprKind::Await(_) => "await expression",
        ExprKind::Yield(_) | ExprKind::YieldFrom(_) => "yield expression",
        ExprKind::Compare { .. } => "comparison",
        ExprKind::Call { .. } => "function call",
        ExprKind::FormattedString(_) => "f-string expression",
        ExprKind::Constant(_) => "literal",
        ExprKind::Attribute { .. } => "attribute",
        ExprKind::Subscript { .. } => "subscript",
        ExprKind::Starred(_) => "starred",
        ExprKind::Name(_) => "name",
        ExprKind::List(_) => "list",
        ExprKind::Tuple(_) => "tuple",
        ExprKind::Slice { .. } => "slice",
    }
}
