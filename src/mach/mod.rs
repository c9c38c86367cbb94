/*!
## Machine Module

This Rust module is the loaded form of a NONDE script and the engine
that runs it.

*/

mod command;
mod label;
mod program;
mod runtime;
mod var;

pub use command::ArithOp;
pub use command::Command;
pub use command::Operand;
pub use label::LabelTable;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use var::Var;
