use super::LineNumber;

pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn in_line_number(mut self, line: usize) -> Error {
        debug_assert!(self.line_number.is_none());
        self.line_number = Some(line);
        self
    }

    pub fn message<S: Into<String>>(mut self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        self.message = message.into();
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ErrorCode {
    Syntax,
    DuplicateLabel,
    UndefinedLabel,
    UndefinedVariable,
    InvalidNumber,
    DivideByZero,
    Break,
    Io,
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        Error::new(ErrorCode::Io).message(error.to_string())
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        match self.code {
            Syntax => write!(f, "Syntax error")?,
            DuplicateLabel => write!(f, "Duplicate label: {}", self.message)?,
            UndefinedLabel => write!(f, "Undefined label: {}", self.message)?,
            UndefinedVariable => write!(f, "Undefined variable: {}", self.message)?,
            InvalidNumber => write!(f, "Invalid number")?,
            DivideByZero => write!(f, "Divide by zero")?,
            Break => write!(f, "Break")?,
            Io => write!(f, "I/O error: {}", self.message)?,
        }
        if let Some(line) = self.line_number {
            write!(f, " (line {})", line)?;
        }
        Ok(())
    }
}
