use super::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Longest token the reader accepts.
pub const TOKEN_MAX: usize = 1024;

/// Longest variable or label name.
pub const VAR_NAME_MAX: usize = 20;

/// True for an ASCII letter followed by ASCII letters and digits,
/// within the name length bound. Anything else is a literal.
pub fn is_var_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(ch) if ch.is_ascii_alphabetic() => {}
        _ => return false,
    }
    s.len() <= VAR_NAME_MAX && chars.all(|ch| ch.is_ascii_alphanumeric())
}

/// Reader of whitespace-delimited tokens over a script, with a
/// 1-based line counter for diagnostics. A `;` is always a token of
/// its own, even when glued to the end of another token.
pub struct TokenSource<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
}

impl<'a> TokenSource<'a> {
    pub fn new(source: &'a str) -> TokenSource<'a> {
        TokenSource {
            chars: source.chars().peekable(),
            line: 1,
        }
    }

    /// Line of the most recently consumed character.
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Next token, or `None` at end of input.
    pub fn token(&mut self) -> Result<Option<String>> {
        while let Some(ch) = self.chars.peek() {
            if !ch.is_whitespace() {
                break;
            }
            if *ch == '\n' {
                self.line += 1;
            }
            self.chars.next();
        }
        match self.chars.peek() {
            None => return Ok(None),
            Some(&';') => {
                self.chars.next();
                return Ok(Some(";".to_string()));
            }
            _ => {}
        }
        let mut s = String::new();
        while let Some(ch) = self.chars.peek() {
            if ch.is_whitespace() || *ch == ';' {
                break;
            }
            s.push(*ch);
            self.chars.next();
            if s.len() > TOKEN_MAX {
                return Err(error!(Syntax, self.line));
            }
        }
        Ok(Some(s))
    }

    /// Next token, failing if the input ends first.
    pub fn expect(&mut self) -> Result<String> {
        match self.token()? {
            Some(token) => Ok(token),
            None => Err(error!(Syntax, self.line)),
        }
    }

    /// Consume exactly the given token, failing on anything else.
    pub fn require(&mut self, expected: &str) -> Result<()> {
        if self.expect()? == expected {
            Ok(())
        } else {
            Err(error!(Syntax, self.line))
        }
    }
}
