//! Infix expression parsing (led - left denotation)
//!
//! Binary and boolean operators, comparison chains, the conditional
//! expression, `:=` and the postfix forms (calls, subscripts, attributes).

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::pratt::precedence::*;
use crate::frontend::core::parser::pratt::describe;
use crate::frontend::core::parser::ParserState;

type InfixFn<'a> = fn(&mut ParserState<'a>, Expr, u8) -> Option<Expr>;

impl<'a> ParserState<'a> {
    /// Get infix operator info for current token
    ///
    /// Returns `(left_bp, right_bp, parser)`.
    #[inline]
    pub(crate) fn infix_info(&self) -> Option<(u8, u8, InfixFn<'a>)> {
        let binary: InfixFn<'a> = Self::parse_binary;
        let info = match self.current_kind() {
            TokenKind::KwOr => (BP_OR, BP_OR + 1, Self::parse_bool_op as InfixFn<'a>),
            TokenKind::KwAnd => (BP_AND, BP_AND + 1, Self::parse_bool_op as InfixFn<'a>),
            TokenKind::KwNot if self.peek_kind() == &TokenKind::KwIn => {
                (BP_COMPARE, BP_COMPARE + 1, Self::parse_compare as InfixFn<'a>)
            }
            TokenKind::KwIn
            | TokenKind::KwIs
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Le
            | TokenKind::Ge
            | TokenKind::EqEq
            | TokenKind::Neq => (BP_COMPARE, BP_COMPARE + 1, Self::parse_compare as InfixFn<'a>),
            TokenKind::Pipe => (BP_BIT_OR, BP_BIT_OR + 1, binary),
            TokenKind::Caret => (BP_BIT_XOR, BP_BIT_XOR + 1, binary),
            TokenKind::Amp => (BP_BIT_AND, BP_BIT_AND + 1, binary),
            TokenKind::LShift | TokenKind::RShift => (BP_SHIFT, BP_SHIFT + 1, binary),
            TokenKind::Plus | TokenKind::Minus => (BP_ADD, BP_ADD + 1, binary),
            TokenKind::Star
            | TokenKind::Slash
            | TokenKind::DoubleSlash
            | TokenKind::Percent
            | TokenKind::At => (BP_MUL, BP_MUL + 1, binary),
            // Right associative, and `2 ** -1` is legal
            TokenKind::DoubleStar => (BP_POWER, BP_UNARY, binary),
            TokenKind::KwIf => (BP_TERNARY, BP_TERNARY, Self::parse_ternary as InfixFn<'a>),
            TokenKind::ColonEq => (BP_NAMED, BP_NAMED, Self::parse_named as InfixFn<'a>),
            TokenKind::LParen => (BP_POSTFIX, BP_POSTFIX + 1, Self::parse_call as InfixFn<'a>),
            TokenKind::LBracket => (
                BP_POSTFIX,
                BP_POSTFIX + 1,
                Self::parse_subscript as InfixFn<'a>,
            ),
            TokenKind::Dot => (
                BP_POSTFIX,
                BP_POSTFIX + 1,
                Self::parse_attribute as InfixFn<'a>,
            ),
            _ => return None,
        };
        Some(info)
    }

    /// Binary operator for the current token
    fn binary_op(&self) -> Option<BinOp> {
        let op = match self.current_kind() {
            TokenKind::Plus => BinOp::Add,
            TokenKind::Minus => BinOp::Sub,
            TokenKind::Star => BinOp::Mult,
            TokenKind::At => BinOp::MatMult,
            TokenKind::Slash => BinOp::Div,
            TokenKind::DoubleSlash => BinOp::FloorDiv,
            TokenKind::Percent => BinOp::Mod,
            TokenKind::DoubleStar => BinOp::Pow,
            TokenKind::LShift => BinOp::LShift,
            TokenKind::RShift => BinOp::RShift,
            TokenKind::Pipe => BinOp::BitOr,
            TokenKind::Caret => BinOp::BitXor,
            TokenKind::Amp => BinOp::BitAnd,
            _ => return None,
        };
        Some(op)
    }

    /// Comparison operator at the current token and how many tokens it spans
    fn compare_op(&self) -> Option<(CmpOp, usize)> {
        let op = match self.current_kind() {
            TokenKind::EqEq => (CmpOp::Eq, 1),
            TokenKind::Neq => (CmpOp::NotEq, 1),
            TokenKind::Lt => (CmpOp::Lt, 1),
            TokenKind::Le => (CmpOp::LtE, 1),
            TokenKind::Gt => (CmpOp::Gt, 1),
            TokenKind::Ge => (CmpOp::GtE, 1),
            TokenKind::KwIn => (CmpOp::In, 1),
            TokenKind::KwIs if self.peek_kind() == &TokenKind::KwNot => (CmpOp::IsNot, 2),
            TokenKind::KwIs => (CmpOp::Is, 1),
            TokenKind::KwNot if self.peek_kind() == &TokenKind::KwIn => (CmpOp::NotIn, 2),
            _ => return None,
        };
        Some(op)
    }

    /// Parse binary expression
    fn parse_binary(
        &mut self,
        left: Expr,
        right_bp: u8,
    ) -> Option<Expr> {
        let op = self.binary_op()?;
        self.bump();

        let right = self.parse_expression(right_bp)?;
        let span = left.span.to(right.span);
        Some(Expr::new(
            ExprKind::BinOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            span,
        ))
    }

    /// `a or b or c` collapses into one node with three values
    fn parse_bool_op(
        &mut self,
        left: Expr,
        right_bp: u8,
    ) -> Option<Expr> {
        let start = left.span;
        let (op, token) = match self.current_kind() {
            TokenKind::KwOr => (BoolOp::Or, TokenKind::KwOr),
            _ => (BoolOp::And, TokenKind::KwAnd),
        };

        let mut values = vec![left];
        while self.skip(&token) {
            values.push(self.parse_expression(right_bp)?);
        }

        Some(Expr::new(
            ExprKind::BoolOp { op, values },
            self.span_from(start),
        ))
    }

    /// `a < b <= c` collapses into one node with two operators
    fn parse_compare(
        &mut self,
        left: Expr,
        right_bp: u8,
    ) -> Option<Expr> {
        let start = left.span;
        let mut ops = Vec::new();
        let mut comparators = Vec::new();

        while let Some((op, width)) = self.compare_op() {
            for _ in 0..width {
                self.bump();
            }
            ops.push(op);
            comparators.push(self.parse_expression(right_bp)?);
        }

        Some(Expr::new(
            ExprKind::Compare {
                left: Box::new(left),
                ops,
                comparators,
            },
            self.span_from(start),
        ))
    }

    /// `body if test else orelse`
    fn parse_ternary(
        &mut self,
        body: Expr,
        right_bp: u8,
    ) -> Option<Expr> {
        let start = body.span;
        self.bump(); // consume 'if'

        let test = self.parse_expression(BP_OR)?;
        self.expect(&TokenKind::KwElse)?;
        let orelse = self.parse_expression(right_bp)?;

        Some(Expr::new(
            ExprKind::IfExp {
                test: Box::new(test),
                body: Box::new(body),
                orelse: Box::new(orelse),
            },
            self.span_from(start),
        ))
    }

    /// `name := value`
    fn parse_named(
        &mut self,
        target: Expr,
        right_bp: u8,
    ) -> Option<Expr> {
        if target.as_name().is_none() {
            self.error_at(
                format!(
                    "cannot use assignment expressions with {}",
                    describe(&target.kind)
                ),
                target.span,
            );
            return None;
        }
        self.bump(); // consume ':='

        let value = self.parse_expression(right_bp)?;
        let span = target.span.to(value.span);
        Some(Expr::new(
            ExprKind::NamedExpr {
                target: Box::new(target),
                value: Box::new(value),
            },
            span,
        ))
    }

    /// Parse function call: `func(a, *b, c=d, **e)`
    fn parse_call(
        &mut self,
        func: Expr,
        _right_bp: u8,
    ) -> Option<Expr> {
        let start = func.span;
        self.bump(); // consume '('

        let mut args = Vec::new();
        let mut keywords = Vec::new();

        while !self.at(&TokenKind::RParen) {
            let arg_start = self.span();
            if self.skip(&TokenKind::DoubleStar) {
                let value = self.parse_expression(BP_LOWEST)?;
                keywords.push(Keyword {
                    arg: None,
                    value,
                    span: self.span_from(arg_start),
                });
            } else if matches!(self.current_kind(), TokenKind::Identifier(_))
                && self.peek_kind() == &TokenKind::Eq
            {
                let name = self.expect_identifier()?;
                self.bump(); // consume '='
                let value = self.parse_expression(BP_LOWEST)?;
                keywords.push(Keyword {
                    arg: Some(name),
                    value,
                    span: self.span_from(arg_start),
                });
            } else {
                let mut arg = self.parse_expression(BP_LOWEST)?;
                if self.at_comprehension() {
                    let generators = self.parse_comprehension_clauses()?;
                    arg = Expr::new(
                        ExprKind::GeneratorExp {
                            elt: Box::new(arg),
                            generators,
                        },
                        self.span_from(arg_start),
                    );
                }
                args.push(arg);
            }

            if !self.skip(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RParen)?;

        Some(Expr::new(
            ExprKind::Call {
                func: Box::new(func),
                args,
                keywords,
            },
            self.span_from(start),
        ))
    }

    /// Parse subscript: `value[index]`, `value[a:b]`, `value[i, j]`
    fn parse_subscript(
        &mut self,
        value: Expr,
        _right_bp: u8,
    ) -> Option<Expr> {
        let start = value.span;
        self.bump(); // consume '['

        let items_start = self.span();
        let mut items = Vec::new();
        let mut saw_comma = false;
        loop {
            items.push(self.parse_slice_item()?);
            if !self.skip(&TokenKind::Comma) {
                break;
            }
            saw_comma = true;
            if self.at(&TokenKind::RBracket) {
                break;
            }
        }

        let slice = if saw_comma || items.len() != 1 {
            Expr::new(ExprKind::Tuple(items), self.span_from(items_start))
        } else {
            items.remove(0)
        };
        self.expect(&TokenKind::RBracket)?;

        Some(Expr::new(
            ExprKind::Subscript {
                value: Box::new(value),
                slice: Box::new(slice),
            },
            self.span_from(start),
        ))
    }

    /// One index or `lower:upper:step` slice
    fn parse_slice_item(&mut self) -> Option<Expr> {
        let start = self.span();
        let lower = if self.at(&TokenKind::Colon) {
            None
        } else {
            let expr = self.parse_expression(BP_LOWEST)?;
            if !self.at(&TokenKind::Colon) {
                return Some(expr);
            }
            Some(Box::new(expr))
        };
        self.bump(); // consume ':'

        let upper = if self.slice_part_ends() {
            None
        } else {
            Some(Box::new(self.parse_expression(BP_LOWEST)?))
        };

        let step = if self.skip(&TokenKind::Colon) && !self.slice_part_ends() {
            Some(Box::new(self.parse_expression(BP_LOWEST)?))
        } else {
            None
        };

        Some(Expr::new(
            ExprKind::Slice { lower, upper, step },
            self.span_from(start),
        ))
    }

    fn slice_part_ends(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Colon | TokenKind::Comma | TokenKind::RBracket
        )
    }

    /// Parse field access: `value.attr`
    fn parse_attribute(
        &mut self,
        value: Expr,
        _right_bp: u8,
    ) -> Option<Expr> {
        let start = value.span;
        self.bump(); // consume '.'

        let attr = self.expect_identifier()?;
        Some(Expr::new(
            ExprKind::Attribute {
                value: Box::new(value),
                attr,
            },
            self.span_from(start),
        ))
    }
}
