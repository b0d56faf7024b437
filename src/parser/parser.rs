//! Line-oriented parser for proplog input.

use thiserror::Error;

use super::ast::{Directive, Statement};
use super::lexer::{LexError, Lexer, Token};
use crate::syntax::{Clause, Literal, Term};

/// Parse error with its source position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}:{column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError {
            message: e.message,
            line: e.line,
            column: e.column,
        }
    }
}

/// Parser state for directive lines and terms.
struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, line: usize) -> Result<Self, ParseError> {
        let mut lexer = Lexer::at_line(input, line);
        let current = lexer.next_token()?;
        let (line, column) = lexer.token_start();
        Ok(Parser {
            lexer,
            current,
            line,
            column,
        })
    }

    fn advance(&mut self) -> Result<Token, ParseError> {
        let old = std::mem::replace(&mut self.current, self.lexer.next_token()?);
        (self.line, self.column) = self.lexer.token_start();
        Ok(old)
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if self.current == expected {
            self.advance()?;
            Ok(())
        } else {
            Err(self.error(format!("expected {:?}, found {:?}", expected, self.current)))
        }
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        if self.current == Token::Eof {
            Ok(())
        } else {
            Err(self.error(format!("unexpected trailing input: {:?}", self.current)))
        }
    }

    fn symbol(&mut self, what: &str) -> Result<String, ParseError> {
        match &self.current {
            Token::Symbol(s) => {
                let s = s.clone();
                self.advance()?;
                Ok(s)
            }
            other => Err(self.error(format!("expected {}, found {:?}", what, other))),
        }
    }

    fn error(&self, message: String) -> ParseError {
        ParseError {
            message,
            line: self.line,
            column: self.column,
        }
    }
}

/// Parse a source file into statements, one per non-blank line.
pub fn parse_file(source: &str) -> Result<Vec<Statement>, ParseError> {
    let mut statements = Vec::new();
    for (index, line) in source.lines().enumerate() {
        if let Some(stmt) = parse_line_at(line, index + 1)? {
            statements.push(stmt);
        }
    }
    Ok(statements)
}

/// Parse a single line. Blank and comment-only lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Statement>, ParseError> {
    parse_line_at(line, 1)
}

/// Parse a single S-expression term.
pub fn parse_term(source: &str) -> Result<Term, ParseError> {
    let mut parser = Parser::new(source, 1)?;
    let term = parse_term_inner(&mut parser)?;
    parser.expect_end()?;
    Ok(term)
}

fn parse_line_at(line: &str, line_no: usize) -> Result<Option<Statement>, ParseError> {
    let trimmed = line.trim_start();

    if trimmed.starts_with(':') {
        return parse_directive(line, line_no).map(Some);
    }

    let content = strip_comment(trimmed).trim();
    if content.is_empty() {
        return Ok(None);
    }

    if let Some(rest) = content.strip_prefix("?-") {
        let literals = rest.split_whitespace().map(Literal::parse).collect();
        return Ok(Some(Statement::Query(literals)));
    }

    Ok(Some(Statement::Clause(Clause::parse(content))))
}

/// Cut a `//` comment that starts a line or follows whitespace.
fn strip_comment(line: &str) -> &str {
    let mut from = 0;
    while let Some(offset) = line[from..].find("//") {
        let at = from + offset;
        if at == 0 || line[..at].ends_with(char::is_whitespace) {
            return &line[..at];
        }
        from = at + 2;
    }
    line
}

fn parse_directive(line: &str, line_no: usize) -> Result<Statement, ParseError> {
    let mut parser = Parser::new(line, line_no)?;
    parser.expect(Token::Colon)?;
    let (name_line, name_column) = (parser.line, parser.column);
    let name = parser.symbol("directive name after ':'")?;

    let stmt = match name.as_str() {
        "load" => {
            let path = match &parser.current {
                Token::StringLit(p) | Token::Symbol(p) => p.clone(),
                _ => return Err(parser.error("expected path after :load".to_string())),
            };
            parser.advance()?;
            Statement::Directive(Directive::Load(path))
        }
        "set" => {
            let key = parser.symbol("setting name after :set")?;
            let value = parser.symbol("setting value after setting name")?;
            Statement::Directive(Directive::Set { key, value })
        }
        "unify" => {
            let left = parse_term_inner(&mut parser)?;
            let right = parse_term_inner(&mut parser)?;
            Statement::Unify(left, right)
        }
        "clauses" => Statement::Directive(Directive::Clauses),
        "reset" => Statement::Directive(Directive::Reset),
        "help" => Statement::Directive(Directive::Help),
        "quit" | "q" => Statement::Directive(Directive::Quit),
        _ => {
            return Err(ParseError {
                message: format!("unknown directive: {}", name),
                line: name_line,
                column: name_column,
            })
        }
    };

    parser.expect_end()?;
    Ok(stmt)
}

fn parse_term_inner(parser: &mut Parser<'_>) -> Result<Term, ParseError> {
    match &parser.current {
        Token::LParen => {
            parser.advance()?;
            let mut items = Vec::new();
            loop {
                match parser.current {
                    Token::RParen => {
                        parser.advance()?;
                        return Ok(Term::Sequence(items));
                    }
                    Token::Eof => return Err(parser.error("unclosed '('".to_string())),
                    _ => items.push(parse_term_inner(parser)?),
                }
            }
        }
        Token::Symbol(s) => {
            let term = Term::from_token(s);
            parser.advance()?;
            Ok(term)
        }
        Token::StringLit(s) => {
            let term = Term::atom(s.as_str());
            parser.advance()?;
            Ok(term)
        }
        other => Err(parser.error(format!("expected term, found {:?}", other))),
    }
}
