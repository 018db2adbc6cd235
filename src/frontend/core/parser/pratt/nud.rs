//! Prefix expression parsing (nud - null denotation)
//!
//! Atoms, displays, unary operators and the keyword-led expressions
//! (`lambda`, `await`, `yield`).

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::pratt::precedence::*;
use crate::frontend::core::parser::statements::parse_parameters;
use crate::frontend::core::parser::ParserState;

/// Extension trait for prefix parsing
pub trait PrefixParser {
    /// Parse prefix expression at current position
    fn parse_prefix(&mut self) -> Option<Expr>;
}

impl<'a> PrefixParser for ParserState<'a> {
    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.prefix_info() {
            Some(parser_fn) => parser_fn(self),
            None => {
                self.error_expected("expression");
                None
            }
        }
    }
}

impl<'a> ParserState<'a> {
    /// Get prefix parser for current token
    #[inline]
    pub(crate) fn prefix_info(&self) -> Option<fn(&mut Self) -> Option<Expr>> {
        match self.current_kind() {
            TokenKind::Identifier(_) => Some(Self::parse_name),
            TokenKind::IntLiteral(_) | TokenKind::FloatLiteral(_) => Some(Self::parse_number),
            TokenKind::StringLiteral(_)
            | TokenKind::BytesLiteral(_)
            | TokenKind::FormattedString(_) => Some(Self::parse_strings),
            TokenKind::KwTrue | TokenKind::KwFalse | TokenKind::KwNone | TokenKind::Ellipsis => {
                Some(Self::parse_keyword_constant)
            }
            TokenKind::Minus | TokenKind::Plus | TokenKind::Tilde | TokenKind::KwNot => {
                Some(Self::parse_unary)
            }
            TokenKind::Star => Some(Self::parse_starred),
            TokenKind::KwLambda => Some(Self::parse_lambda),
            TokenKind::KwAwait => Some(Self::parse_await),
            TokenKind::KwYield => Some(Self::parse_yield),
            TokenKind::LParen => Some(Self::parse_group_or_tuple),
            TokenKind::LBracket => Some(Self::parse_list_display),
            TokenKind::LBrace => Some(Self::parse_brace_display),
            _ => None,
        }
    }

    fn parse_name(&mut self) -> Option<Expr> {
        let name = self.expect_identifier()?;
        Some(Expr::new(ExprKind::Name(name.value), name.span))
    }

    fn parse_number(&mut self) -> Option<Expr> {
        let span = self.span();
        let constant = match self.current_kind() {
            TokenKind::IntLiteral(n) => Constant::Int(*n),
            TokenKind::FloatLiteral(f) => Constant::Float(*f),
            _ => return None,
        };
        self.bump();
        Some(Expr::new(ExprKind::Constant(constant), span))
    }

    /// Adjacent string literals concatenate: `"a" 'b'` is `"ab"`
    fn parse_strings(&mut self) -> Option<Expr> {
        let start = self.span();
        let mut text = String::new();
        let mut bytes = Vec::new();
        let mut saw_bytes = false;
        let mut saw_text = false;
        let mut formatted = false;

        loop {
            match self.current_kind() {
                TokenKind::StringLiteral(s) => {
                    saw_text = true;
                    text.push_str(s);
                }
                TokenKind::FormattedString(s) => {
                    saw_text = true;
                    formatted = true;
                    text.push_str(s);
                }
                TokenKind::BytesLiteral(b) => {
                    saw_bytes = true;
                    bytes.extend_from_slice(b);
                }
                _ => break,
            }
            self.bump();
        }

        let span = self.span_from(start);
        if saw_bytes && saw_text {
            self.error_at("cannot mix bytes and nonbytes literals", span);
            return None;
        }

        let kind = if saw_bytes {
            ExprKind::Constant(Constant::Bytes(bytes))
        } else if formatted {
            ExprKind::FormattedString(text)
        } else {
            ExprKind::Constant(Constant::Str(text))
        };
        Some(Expr::new(kind, span))
    }

    fn parse_keyword_constant(&mut self) -> Option<Expr> {
        let span = self.span();
        let constant = match self.current_kind() {
            TokenKind::KwTrue => Constant::Bool(true),
            TokenKind::KwFalse => Constant::Bool(false),
            TokenKind::KwNone => Constant::None,
            TokenKind::Ellipsis => Constant::Ellipsis,
            _ => return None,
        };
        self.bump();
        Some(Expr::new(ExprKind::Constant(constant), span))
    }

    /// Parse unary operator expression
    fn parse_unary(&mut self) -> Option<Expr> {
        let start = self.span();
        let (op, operand_bp) = match self.current_kind() {
            TokenKind::Minus => (UnaryOp::USub, BP_UNARY),
            TokenKind::Plus => (UnaryOp::UAdd, BP_UNARY),
            TokenKind::Tilde => (UnaryOp::Invert, BP_UNARY),
            TokenKind::KwNot => (UnaryOp::Not, BP_NOT),
            _ => return None,
        };
        self.bump();

        let operand = self.parse_expression(operand_bp)?;
        Some(Expr::new(
            ExprKind::UnaryOp {
                op,
                operand: Box::new(operand),
            },
            self.span_from(start),
        ))
    }

    fn parse_starred(&mut self) -> Option<Expr> {
        let start = self.span();
        self.bump(); // consume '*'
        let value = self.parse_expression(BP_BIT_OR)?;
        Some(Expr::new(
            ExprKind::Starred(Box::new(value)),
            self.span_from(start),
        ))
    }

    /// `lambda params: body`
    fn parse_lambda(&mut self) -> Option<Expr> {
        let start = self.span();
        self.bump(); // consume 'lambda'

        let params = parse_parameters(self, &TokenKind::Colon, false)?;
        self.expect(&TokenKind::Colon)?;
        let body = self.parse_expression(BP_TERNARY)?;

        Some(Expr::new(
            ExprKind::Lambda {
                params,
                body: Box::new(body),
            },
            self.span_from(start),
        ))
    }

    fn parse_await(&mut self) -> Option<Expr> {
        let start = self.span();
        self.bump(); // consume 'await'
        let value = self.parse_expression(BP_AWAIT + 1)?;
        Some(Expr::new(
            ExprKind::Await(Box::new(value)),
            self.span_from(start),
        ))
    }

    /// `yield`, `yield a, b` or `yield from e`
    fn parse_yield(&mut self) -> Option<Expr> {
        let start = self.span();
        self.bump(); // consume 'yield'

        let kind = if self.skip(&TokenKind::KwFrom) {
            ExprKind::YieldFrom(Box::new(self.parse_expression(BP_LOWEST)?))
        } else if self.current_kind().starts_expression() {
            ExprKind::Yield(Some(Box::new(self.parse_expression_list(BP_LOWEST)?)))
        } else {
            ExprKind::Yield(None)
        };
        Some(Expr::new(kind, self.span_from(start)))
    }

    /// `()`, `(e)`, `(a, b)` or `(e for x in xs)`
    fn parse_group_or_tuple(&mut self) -> Option<Expr> {
        let start = self.span();
        self.bump(); // consume '('

        if self.skip(&TokenKind::RParen) {
            return Some(Expr::new(ExprKind::Tuple(Vec::new()), self.span_from(start)));
        }

        let first = self.parse_expression(BP_LOWEST)?;

        if self.at_comprehension() {
            let generators = self.parse_comprehension_clauses()?;
            self.expect(&TokenKind::RParen)?;
            return Some(Expr::new(
                ExprKind::GeneratorExp {
                    elt: Box::new(first),
                    generators,
                },
                self.span_from(start),
            ));
        }

        if self.at(&TokenKind::Comma) {
            let mut elts = vec![first];
            while self.skip(&TokenKind::Comma) {
                if self.at(&TokenKind::RParen) {
                    break;
                }
                elts.push(self.parse_expression(BP_LOWEST)?);
            }
            self.expect(&TokenKind::RParen)?;
            return Some(Expr::new(ExprKind::Tuple(elts), self.span_from(start)));
        }

        self.expect(&TokenKind::RParen)?;
        Some(first)
    }

    /// `[a, b]` or `[e for x in xs]`
    fn parse_list_display(&mut self) -> Option<Expr> {
        let start = self.span();
        self.bump(); // consume '['

        if self.skip(&TokenKind::RBracket) {
            return Some(Expr::new(ExprKind::List(Vec::new()), self.span_from(start)));
        }

        let first = self.parse_expression(BP_LOWEST)?;

        if self.at_comprehension() {
            let generators = self.parse_comprehension_clauses()?;
            self.expect(&TokenKind::RBracket)?;
            return Some(Expr::new(
                ExprKind::ListComp {
                    elt: Box::new(first),
                    generators,
                },
                self.span_from(start),
            ));
        }

        let elts = self.parse_display_tail(first, &TokenKind::RBracket)?;
        Some(Expr::new(ExprKind::List(elts), self.span_from(start)))
    }

    /// `{}`, `{k: v}`, `{a, b}` and their comprehensions
    fn parse_brace_display(&mut self) -> Option<Expr> {
        let start = self.span();
        self.bump(); // consume '{'

        if self.skip(&TokenKind::RBrace) {
            return Some(Expr::new(
                ExprKind::Dict {
                    keys: Vec::new(),
                    values: Vec::new(),
                },
                self.span_from(start),
            ));
        }

        if self.at(&TokenKind::DoubleStar) {
            self.error_at("dict unpacking is not supported", self.span());
            return None;
        }

        let first = self.parse_expression(BP_LOWEST)?;

        if !self.skip(&TokenKind::Colon) {
            if self.at_comprehension() {
                let generators = self.parse_comprehension_clauses()?;
                self.expect(&TokenKind::RBrace)?;
                return Some(Expr::new(
                    ExprKind::SetComp {
                        elt: Box::new(first),
                        generators,
                    },
                    self.span_from(start),
                ));
            }
            let elts = self.parse_display_tail(first, &TokenKind::RBrace)?;
            return Some(Expr::new(ExprKind::Set(elts), self.span_from(start)));
        }

        let value = self.parse_expression(BP_LOWEST)?;

        if self.at_comprehension() {
            let generators = self.parse_comprehension_clauses()?;
            self.expect(&TokenKind::RBrace)?;
            return Some(Expr::new(
                ExprKind::DictComp {
                    key: Box::new(first),
                    value: Box::new(value),
                    generators,
                },
                self.span_from(start),
            ));
        }

        let mut keys = vec![first];
        let mut values = vec![value];
        while self.skip(&TokenKind::Comma) {
            if self.at(&TokenKind::RBrace) {
                break;
            }
            keys.push(self.parse_expression(BP_LOWEST)?);
            self.expect(&TokenKind::Colon)?;
            values.push(self.parse_expression(BP_LOWEST)?);
        }
        self.expect(&TokenKind::RBrace)?;

        Some(Expr::new(
            ExprKind::Dict { keys, values },
            self.span_from(start),
        ))
    }

    /// Remaining `, e` elements of a list or set display, then the closer
    fn parse_display_tail(
        &mut self,
        first: Expr,
        closing: &TokenKind,
    ) -> Option<Vec<Expr>> {
        let mut elts = vec![first];
        while self.skip(&TokenKind::Comma) {
            if self.at(closing) {
                break;
            }
            elts.push(self.parse_expression(BP_LOWEST)?);
        }
        self.expect(closing)?;
        Some(elts)
    }
}
