/*!
# Language Module

Lexical analysis for NONDE scripts: the token reader and the error
type shared across the crate.

*/

#[macro_use]
mod error;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use token::is_var_name;
pub use token::TokenSource;
pub use token::{TOKEN_MAX, VAR_NAME_MAX};

/// Source line attached to a diagnostic, when one is known.
pub type LineNumber = Option<usize>;
