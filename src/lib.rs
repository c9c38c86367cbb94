//! # NONDE
//!
//! An interpreter for NONDE, a miniature scripting language of
//! labels, string variables, integer arithmetic, and jumps.
//!
//! A script is a free-form sequence of label definitions
//! (`name:`) and `;`-terminated commands:
//!
//! ```text
//! set i #0;
//! top:
//!    print i; print #
//! ;
//!    add i i #1;
//!    less t i #5;
//!    if t top;
//! ```
//!
//! Loading happens in one pass into a command list and a label table,
//! then a program counter walks the list until it runs off the end.

pub mod lang;
pub mod mach;
