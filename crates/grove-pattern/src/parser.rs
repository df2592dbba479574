//! Textual S-expression reader.
//!
//! Patterns and data share one surface syntax: whitespace-separated tokens,
//! parentheses for lists, and double-quoted strings without escapes. A bare
//! token is an integer if it parses as one, otherwise a float if it parses
//! as one, otherwise a symbol. Lists always read into right-nested cons
//! chains ending in the empty list.

use crate::error::ParseError;
use crate::expression::Expression;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Open,
    Close,
    Str(String),
    Number(String),
    Symbol(String),
}

fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            c if c.is_whitespace() => {}
            '(' => tokens.push(Token::Open),
            ')' => tokens.push(Token::Close),
            '"' => tokens.push(read_string(&mut chars)?),
            first => tokens.push(read_bare(first, &mut chars)),
        }
    }

    Ok(tokens)
}

fn read_string(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Result<Token, ParseError> {
    let mut text = String::new();
    loop {
        match chars.next() {
            Some('"') => return Ok(Token::Str(text)),
            Some(c) => text.push(c),
            None => return Err(ParseError::UnterminatedString),
        }
    }
}

fn read_bare(first: char, chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Token {
    let mut word = String::new();
    word.push(first);
    while let Some(c) = chars.peek().copied() {
        if c.is_whitespace() || c == '(' || c == ')' {
            break;
        }
        word.push(c);
        chars.next();
    }

    if word.parse::<f64>().is_ok() {
        Token::Number(word)
    } else {
        Token::Symbol(word)
    }
}

struct Reader {
    tokens: Vec<Token>,
    pos: usize,
}

impl Reader {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn read_expression(&mut self) -> Result<Expression, ParseError> {
        match self.peek() {
            None => Err(ParseError::UnexpectedEof),
            Some(Token::Open) => self.read_list(),
            Some(_) => self.read_atom(),
        }
    }

    fn read_list(&mut self) -> Result<Expression, ParseError> {
        if !matches!(self.peek(), Some(Token::Open)) {
            return Err(ParseError::ExpectedOpen);
        }
        self.advance();

        let mut items = Vec::new();
        loop {
            match self.peek() {
                None => return Err(ParseError::ExpectedClose),
                Some(Token::Close) => {
                    self.advance();
                    return Ok(Expression::list(items));
                }
                Some(_) => items.push(self.read_expression()?),
            }
        }
    }

    fn read_atom(&mut self) -> Result<Expression, ParseError> {
        let Some(token) = self.advance() else {
            return Err(ParseError::UnexpectedEof);
        };
        match token {
            Token::Str(text) => Ok(Expression::text(text)),
            Token::Number(text) => read_number(&text),
            Token::Symbol(name) => Ok(Expression::Symbol(name)),
            Token::Close => Err(ParseError::UnexpectedToken {
                token: ")".to_owned(),
            }),
            Token::Open => Err(ParseError::UnexpectedToken {
                token: "(".to_owned(),
            }),
        }
    }
}

/// Integers are preferred over floats: `34` reads as an integer atom and
/// `34.0` as a float atom. The distinction matters to `oddp` / `evenp`.
fn read_number(text: &str) -> Result<Expression, ParseError> {
    if let Ok(value) = text.parse::<i64>() {
        return Ok(Expression::int(value));
    }
    if let Ok(value) = text.parse::<f64>() {
        return Ok(Expression::float(value));
    }
    Err(ParseError::InvalidNumber {
        token: text.to_owned(),
    })
}

/// Reads a single expression from `input`.
///
/// Trailing input after the first expression is ignored; use [`parse_all`]
/// to read everything.
///
/// # Errors
///
/// Returns a [`ParseError`] when the input is empty or ill-formed.
///
/// # Examples
///
/// ```
/// use grove_pattern::parse;
///
/// let expr = parse("(a (b c) d)")?;
/// assert_eq!(expr.to_string(), "(a (b c) d)");
/// # Ok::<(), grove_pattern::ParseError>(())
/// ```
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    let tokens = tokenize(input)?;
    Reader::new(tokens).read_expression()
}

/// Reads expressions from `input` until it is exhausted.
///
/// # Errors
///
/// Returns a [`ParseError`] when any expression is ill-formed. Empty input
/// yields an empty sequence.
pub fn parse_all(input: &str) -> Result<Vec<Expression>, ParseError> {
    let tokens = tokenize(input)?;
    let mut reader = Reader::new(tokens);
    let mut expressions = Vec::new();
    while !reader.at_end() {
        expressions.push(reader.read_expression()?);
    }
    Ok(expressions)
}
