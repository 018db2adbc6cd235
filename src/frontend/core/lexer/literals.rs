//! Literal scanning implementations
//! Handles number and string literals, including prefixed and triple-quoted strings

use super::tokenizer::Lexer;
use crate::frontend::core::lexer::tokens::*;

/// Scan a number literal (decimal, hex, octal, binary, float)
pub fn scan_number(
    lexer: &mut Lexer<'_>,
    first_char: char,
) -> Option<Token> {
    let mut value = String::new();
    value.push(first_char);

    if first_char == '0' {
        let radix = match lexer.peek() {
            Some('x' | 'X') => Some(16),
            Some('o' | 'O') => Some(8),
            Some('b' | 'B') => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            if let Some(marker) = lexer.advance() {
                value.push(marker);
            }
            return scan_radix_number(lexer, value, radix);
        }
    }

    scan_digits(lexer, &mut value);

    let mut is_float = false;
    if lexer.peek() == Some(&'.') && lexer.peek_next() != Some('.') {
        is_float = true;
        value.push('.');
        lexer.advance();
        scan_digits(lexer, &mut value);
    }
    if matches!(lexer.peek(), Some('e' | 'E')) {
        is_float = true;
        scan_exponent(lexer, &mut value);
    }

    finish_decimal(lexer, value, is_float)
}

/// Scan a float starting with its decimal point: `.5`
pub fn scan_leading_dot(lexer: &mut Lexer<'_>) -> Option<Token> {
    let mut value = String::from("0.");
    scan_digits(lexer, &mut value);
    if matches!(lexer.peek(), Some('e' | 'E')) {
        scan_exponent(lexer, &mut value);
    }
    finish_decimal(lexer, value, true)
}

fn scan_digits(
    lexer: &mut Lexer<'_>,
    value: &mut String,
) {
    while let Some(&c) = lexer.peek() {
        if is_digit(c) || c == '_' {
            value.push(c);
            lexer.advance();
        } else {
            break;
        }
    }
}

fn scan_exponent(
    lexer: &mut Lexer<'_>,
    value: &mut String,
) {
    if let Some(e) = lexer.advance() {
        value.push(e);
    }
    if let Some(&sign) = lexer.peek() {
        if sign == '+' || sign == '-' {
            value.push(sign);
            lexer.advance();
        }
    }
    scan_digits(lexer, value);
}

fn scan_radix_number(
    lexer: &mut Lexer<'_>,
    mut value: String,
    radix: u32,
) -> Option<Token> {
    while let Some(&c) = lexer.peek() {
        if c.is_ascii_alphanumeric() || c == '_' {
            value.push(c);
            lexer.advance();
        } else {
            break;
        }
    }

    let digits: String = value[2..].chars().filter(|c| *c != '_').collect();
    let well_formed = !digits.is_empty() && !value.ends_with('_') && !value[2..].contains("__");
    match u128::from_str_radix(&digits, radix) {
        Ok(n) if well_formed => Some(lexer.make_token(TokenKind::IntLiteral(n))),
        _ => invalid_number(lexer, value),
    }
}

fn finish_decimal(
    lexer: &mut Lexer<'_>,
    mut value: String,
    is_float: bool,
) -> Option<Token> {
    // Trailing letters glue onto the literal: 1abc, 2j
    while let Some(&c) = lexer.peek() {
        if is_identifier_char(c) {
            value.push(c);
            lexer.advance();
        } else {
            break;
        }
    }

    if value.ends_with('_') || value.contains("__") || value.contains("_.") || value.contains("._")
    {
        return invalid_number(lexer, value);
    }
    let cleaned: String = value.chars().filter(|c| *c != '_').collect();

    if is_float {
        return match cleaned.parse::<f64>() {
            Ok(f) => Some(lexer.make_token(TokenKind::FloatLiteral(f))),
            Err(_) => invalid_number(lexer, value),
        };
    }

    let leading_zero = cleaned.len() > 1 && cleaned.starts_with('0');
    if leading_zero && cleaned.chars().any(|c| c != '0') {
        return invalid_number(lexer, value);
    }
    match cleaned.parse::<u128>() {
        Ok(n) => Some(lexer.make_token(TokenKind::IntLiteral(n))),
        Err(_) => invalid_number(lexer, value),
    }
}

fn invalid_number(
    lexer: &mut Lexer<'_>,
    text: String,
) -> Option<Token> {
    lexer.error = Some(LexError::InvalidNumber {
        text,
        span: lexer.span(),
    });
    None
}

/// String literal prefix flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringPrefix {
    pub raw: bool,
    pub bytes: bool,
    pub formatted: bool,
}

impl StringPrefix {
    /// Parse a prefix such as `rb` or `F`; `None` when it is not a string prefix
    pub fn parse(text: &str) -> Option<Self> {
        let mut prefix = StringPrefix::default();
        if text.len() > 2 {
            return None;
        }
        for c in text.chars() {
            match c.to_ascii_lowercase() {
                'r' if !prefix.raw => prefix.raw = true,
                'b' if !prefix.bytes && !prefix.formatted => prefix.bytes = true,
                'f' if !prefix.formatted && !prefix.bytes => prefix.formatted = true,
                'u' if text.len() == 1 => {}
                _ => return None,
            }
        }
        Some(prefix)
    }
}

/// Scan a string literal whose opening `quote` was just consumed
pub fn scan_string(
    lexer: &mut Lexer<'_>,
    prefix: StringPrefix,
    quote: char,
) -> Option<Token> {
    let triple = lexer.peek() == Some(&quote) && lexer.peek_next() == Some(quote);
    if triple {
        lexer.advance();
        lexer.advance();
    }

    let mut value = String::new();
    loop {
        let c = match lexer.advance() {
            Some(c) => c,
            None => return unterminated(lexer),
        };

        if c == quote {
            if !triple {
                break;
            }
            if lexer.peek() == Some(&quote) && lexer.peek_next() == Some(quote) {
                lexer.advance();
                lexer.advance();
                break;
            }
            value.push(c);
            continue;
        }

        if c == '\n' && !triple {
            return unterminated(lexer);
        }

        if prefix.bytes && !c.is_ascii() {
            lexer.error = Some(LexError::NonAsciiBytes { span: lexer.span() });
            return None;
        }

        if c != '\\' {
            value.push(c);
            continue;
        }

        let escaped = match lexer.advance() {
            Some(e) => e,
            None => return unterminated(lexer),
        };
        if prefix.raw {
            value.push('\\');
            value.push(escaped);
            continue;
        }
        if let Err(sequence) = scan_escape(lexer, escaped, prefix.bytes, &mut value) {
            lexer.error = Some(LexError::InvalidEscape {
                sequence,
                span: lexer.span(),
            });
            return None;
        }
    }

    let kind = if prefix.bytes {
        // Escapes above 0xff were rejected, so every char fits a byte
        TokenKind::BytesLiteral(value.chars().map(|c| c as u32 as u8).collect())
    } else if prefix.formatted {
        TokenKind::FormattedString(value)
    } else {
        TokenKind::StringLiteral(value)
    };
    Some(lexer.make_token(kind))
}

fn unterminated(lexer: &mut Lexer<'_>) -> Option<Token> {
    lexer.error = Some(LexError::UnterminatedString { span: lexer.span() });
    None
}

/// Decode the escape following a backslash into `value`
fn scan_escape(
    lexer: &mut Lexer<'_>,
    escaped: char,
    bytes: bool,
    value: &mut String,
) -> Result<(), String> {
    match escaped {
        '\n' => {}
        '\\' | '\'' | '"' => value.push(escaped),
        'a' => value.push('\x07'),
        'b' => value.push('\x08'),
        'f' => value.push('\x0c'),
        'n' => value.push('\n'),
        'r' => value.push('\r'),
        't' => value.push('\t'),
        'v' => value.push('\x0b'),
        '0'..='7' => {
            let mut code = escaped.to_digit(8).unwrap_or(0);
            for _ in 0..2 {
                match lexer.peek().and_then(|c| c.to_digit(8)) {
                    Some(d) => {
                        code = code * 8 + d;
                        lexer.advance();
                    }
                    None => break,
                }
            }
            if bytes && code > 0xff {
                return Err(format!("\\{:o}", code));
            }
            value.push(char::from_u32(code).ok_or_else(|| format!("\\{:o}", code))?);
        }
        'x' => value.push(scan_hex_escape(lexer, 'x', 2)?),
        'u' if !bytes => value.push(scan_hex_escape(lexer, 'u', 4)?),
        'U' if !bytes => value.push(scan_hex_escape(lexer, 'U', 8)?),
        'N' if !bytes => return Err("\\N".to_string()),
        other => {
            value.push('\\');
            value.push(other);
        }
    }
    Ok(())
}

fn scan_hex_escape(
    lexer: &mut Lexer<'_>,
    marker: char,
    count: usize,
) -> Result<char, String> {
    let mut digits = String::new();
    for _ in 0..count {
        match lexer.peek() {
            Some(&c) if is_hex_digit(c) => {
                digits.push(c);
                lexer.advance();
            }
            _ => return Err(format!("\\{}{}", marker, digits)),
        }
    }
    u32::from_str_radix(&digits, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| format!("\\{}{}", marker, digits))
}

/// Check if character can start an identifier
pub fn is_identifier_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

/// Check if character can continue an identifier
pub fn is_identifier_char(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Check if character is a decimal digit
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Check if character is a hex digit
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_parse() {
        assert_eq!(
            StringPrefix::parse("rb"),
            Some(StringPrefix {
                raw: true,
                bytes: true,
                formatted: false
            })
        );
        assert_eq!(StringPrefix::parse("u"), Some(StringPrefix::default()));
        assert!(StringPrefix::parse("bf").is_none());
        assert!(StringPrefix::parse("rr").is_none());
        assert!(StringPrefix::parse("x").is_none());
    }
}
