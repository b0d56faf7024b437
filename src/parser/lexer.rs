//! Lexer for directive lines and S-expression terms.

/// Token types for proplog syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Delimiters
    LParen, // (
    RParen, // )

    // Directive
    Colon, // :

    // Bare token: literal, variable, atom, directive name, or number
    Symbol(String),

    // String literal
    StringLit(String),

    // End of input
    Eof,
}

/// Lexer state.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    token_line: usize,
    token_column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    #[cfg(test)]
    pub fn new(input: &'a str) -> Self {
        Lexer::at_line(input, 1)
    }

    /// Create a lexer whose positions start on the given line.
    pub fn at_line(input: &'a str, line: usize) -> Self {
        Lexer {
            input,
            position: 0,
            line,
            column: 1,
            token_line: line,
            token_column: 1,
        }
    }

    /// Position (line, column) where the most recent token started.
    pub fn token_start(&self) -> (usize, usize) {
        (self.token_line, self.token_column)
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments();
        self.token_line = self.line;
        self.token_column = self.column;

        let remaining = &self.input[self.position..];
        let ch = match remaining.chars().next() {
            Some(ch) => ch,
            None => return Ok(Token::Eof),
        };

        match ch {
            '(' => {
                self.advance(1);
                Ok(Token::LParen)
            }
            ')' => {
                self.advance(1);
                Ok(Token::RParen)
            }
            ':' => {
                self.advance(1);
                Ok(Token::Colon)
            }
            '"' => self.lex_string(),
            _ => Ok(self.lex_symbol()),
        }
    }

    /// Collect every remaining token, excluding `Eof`.
    #[cfg(test)]
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            match self.next_token()? {
                Token::Eof => return Ok(tokens),
                tok => tokens.push(tok),
            }
        }
    }

    fn advance(&mut self, bytes: usize) {
        let consumed = &self.input[self.position..self.position + bytes];
        for ch in consumed.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.position += bytes;
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.input[self.position..].chars().next() {
            if ch.is_whitespace() {
                self.advance(ch.len_utf8());
            } else if self.input[self.position..].starts_with("//") {
                // Skip to end of line
                let rest = &self.input[self.position..];
                let len = rest.find('\n').map_or(rest.len(), |i| i + 1);
                self.advance(len);
            } else {
                break;
            }
        }
    }

    fn lex_symbol(&mut self) -> Token {
        let start = self.position;
        while let Some(ch) = self.input[self.position..].chars().next() {
            if ch.is_whitespace() || ch == '(' || ch == ')' || ch == '"' {
                break;
            }
            self.advance(ch.len_utf8());
        }
        Token::Symbol(self.input[start..self.position].to_string())
    }

    fn lex_string(&mut self) -> Result<Token, LexError> {
        // Skip opening quote
        self.advance(1);
        let mut content = String::new();

        while let Some(ch) = self.input[self.position..].chars().next() {
            match ch {
                '"' => {
                    self.advance(1); // Skip closing quote
                    return Ok(Token::StringLit(content));
                }
                '\\' => {
                    self.advance(1);
                    match self.input[self.position..].chars().next() {
                        Some(escaped @ ('"' | '\\')) => {
                            content.push(escaped);
                            self.advance(1);
                        }
                        _ => {
                            return Err(LexError {
                                message: "invalid escape in string literal".to_string(),
                                line: self.line,
                                column: self.column,
                            })
                        }
                    }
                }
                '\n' => break,
                _ => {
                    content.push(ch);
                    self.advance(ch.len_utf8());
                }
            }
        }

        Err(LexError {
            message: "unterminated string literal".to_string(),
            line: self.line,
            column: self.column,
        })
    }
}

/// Lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}
