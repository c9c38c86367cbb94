use super::{LabelTable, Var};
use crate::error;
use crate::lang::{is_var_name, Error, TokenSource};
use std::io::Write;

type Result<T> = std::result::Result<T, Error>;

/// A command argument. Classification happens once, when the token is
/// read; a variable reference never becomes a literal later or vice
/// versa.
#[derive(Debug, PartialEq, Clone)]
pub enum Operand {
    /// Read through the variable store at execution time.
    Var(String),
    /// Fixed value, stored with the sigil already stripped.
    Literal(String),
}

impl Operand {
    pub fn from_token(token: &str) -> Operand {
        if is_var_name(token) {
            Operand::Var(token.to_string())
        } else {
            let mut chars = token.chars();
            chars.next();
            Operand::Literal(chars.as_str().to_string())
        }
    }

    fn resolve<'a>(&'a self, vars: &'a Var, line: usize) -> Result<&'a str> {
        match self {
            Operand::Var(name) => match vars.fetch(name) {
                Some(value) => Ok(value),
                None => Err(error!(UndefinedVariable, line; name.as_str())),
            },
            Operand::Literal(value) => Ok(value),
        }
    }

    fn number(&self, vars: &Var, line: usize) -> Result<i64> {
        match self.resolve(vars, line)?.trim().parse::<i64>() {
            Ok(n) => Ok(n),
            Err(_) => Err(error!(InvalidNumber, line)),
        }
    }

    /// Lenient read for `if` conditions: unset or non-numeric is zero.
    fn truth(&self, vars: &Var) -> i64 {
        let value = match self {
            Operand::Var(name) => match vars.fetch(name) {
                Some(value) => value,
                None => return 0,
            },
            Operand::Literal(value) => value,
        };
        value.trim().parse().unwrap_or(0)
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Operand::Var(name) => write!(f, "{}", name),
            Operand::Literal(value) => write!(f, "#{}", value),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ArithOp {
    Add,
    Sub,
    Mult,
    Div,
    Mod,
    Eq,
    Less,
}

impl ArithOp {
    fn from_keyword(keyword: &str) -> Option<ArithOp> {
        use ArithOp::*;
        match keyword {
            "add" => Some(Add),
            "sub" => Some(Sub),
            "mult" => Some(Mult),
            "div" => Some(Div),
            "mod" => Some(Mod),
            "eq" => Some(Eq),
            "less" => Some(Less),
            _ => None,
        }
    }

    fn apply(self, lhs: i64, rhs: i64, line: usize) -> Result<String> {
        use ArithOp::*;
        fn flag(b: bool) -> String {
            if b {
                "1".to_string()
            } else {
                String::new()
            }
        }
        let n = match self {
            Add => lhs.wrapping_add(rhs),
            Sub => lhs.wrapping_sub(rhs),
            Mult => lhs.wrapping_mul(rhs),
            Div | Mod if rhs == 0 => return Err(error!(DivideByZero, line)),
            Div => lhs.wrapping_div(rhs),
            Mod => lhs.wrapping_rem(rhs),
            Eq => return Ok(flag(lhs == rhs)),
            Less => return Ok(flag(lhs < rhs)),
        };
        Ok(n.to_string())
    }
}

/// ## Command set
///
/// The five executable units of a program. Each stores its parsed
/// operands and the source line recorded when its terminator was
/// consumed.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Write an operand's value to the output. No trailing newline.
    Print { arg: Operand, line: usize },
    /// Copy an operand's string value into a variable.
    Set {
        dest: String,
        src: Operand,
        line: usize,
    },
    /// Combine two numeric operands into a variable. `eq` and `less`
    /// store `"1"` or the empty string.
    Arithmetic {
        op: ArithOp,
        dest: String,
        lhs: Operand,
        rhs: Operand,
        line: usize,
    },
    /// Jump to a label if the condition reads as nonzero.
    If {
        cond: Operand,
        target: String,
        line: usize,
    },
    /// Unconditional jump to a label.
    Goto { target: String, line: usize },
}

impl Command {
    /// Parse one command: the keyword has been read, the operands and
    /// the `;` terminator have not.
    pub fn parse(keyword: &str, tokens: &mut TokenSource) -> Result<Command> {
        match keyword {
            "print" => {
                let arg = Operand::from_token(&tokens.expect()?);
                tokens.require(";")?;
                Ok(Command::Print {
                    arg,
                    line: tokens.line_number(),
                })
            }
            "set" => {
                let dest = Self::var_name(tokens)?;
                let src = Operand::from_token(&tokens.expect()?);
                tokens.require(";")?;
                Ok(Command::Set {
                    dest,
                    src,
                    line: tokens.line_number(),
                })
            }
            "if" => {
                let cond = Operand::from_token(&tokens.expect()?);
                let target = Self::var_name(tokens)?;
                tokens.require(";")?;
                Ok(Command::If {
                    cond,
                    target,
                    line: tokens.line_number(),
                })
            }
            "goto" => {
                let target = Self::var_name(tokens)?;
                tokens.require(";")?;
                Ok(Command::Goto {
                    target,
                    line: tokens.line_number(),
                })
            }
            _ => match ArithOp::from_keyword(keyword) {
                Some(op) => {
                    let dest = Self::var_name(tokens)?;
                    let lhs = Operand::from_token(&tokens.expect()?);
                    let rhs = Operand::from_token(&tokens.expect()?);
                    tokens.require(";")?;
                    Ok(Command::Arithmetic {
                        op,
                        dest,
                        lhs,
                        rhs,
                        line: tokens.line_number(),
                    })
                }
                None => Err(error!(Syntax, tokens.line_number())),
            },
        }
    }

    fn var_name(tokens: &mut TokenSource) -> Result<String> {
        let token = tokens.expect()?;
        if is_var_name(&token) {
            Ok(token)
        } else {
            Err(error!(Syntax, tokens.line_number()))
        }
    }

    pub fn line_number(&self) -> usize {
        use Command::*;
        match self {
            Print { line, .. }
            | Set { line, .. }
            | Arithmetic { line, .. }
            | If { line, .. }
            | Goto { line, .. } => *line,
        }
    }

    /// Run this command at index `pc`, returning the index of the
    /// next command: `pc + 1` on fall-through, a label target on a
    /// jump.
    pub fn execute<W: Write>(
        &self,
        labels: &LabelTable,
        vars: &mut Var,
        out: &mut W,
        pc: usize,
    ) -> Result<usize> {
        match self {
            Command::Print { arg, line } => {
                out.write_all(arg.resolve(vars, *line)?.as_bytes())?;
                Ok(pc + 1)
            }
            Command::Set { dest, src, line } => {
                let value = src.resolve(vars, *line)?.to_string();
                vars.store(dest, value);
                Ok(pc + 1)
            }
            Command::Arithmetic {
                op,
                dest,
                lhs,
                rhs,
                line,
            } => {
                let lhs = lhs.number(vars, *line)?;
                let rhs = rhs.number(vars, *line)?;
                vars.store(dest, op.apply(lhs, rhs, *line)?);
                Ok(pc + 1)
            }
            Command::If { cond, target, line } => {
                if cond.truth(vars) != 0 {
                    Self::jump(labels, target, *line)
                } else {
                    Ok(pc + 1)
                }
            }
            Command::Goto { target, line } => Self::jump(labels, target, *line),
        }
    }

    fn jump(labels: &LabelTable, target: &str, line: usize) -> Result<usize> {
        match labels.find(target) {
            Some(target) => Ok(target),
            None => Err(error!(UndefinedLabel, line; target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Command> {
        let mut tokens = TokenSource::new(s);
        let keyword = tokens.expect()?;
        Command::parse(&keyword, &mut tokens)
    }

    #[test]
    fn test_operand_classification() {
        assert_eq!(
            Operand::from_token("count"),
            Operand::Var("count".to_string())
        );
        assert_eq!(
            Operand::from_token("#hello"),
            Operand::Literal("hello".to_string())
        );
        assert_eq!(
            Operand::from_token("#-5"),
            Operand::Literal("-5".to_string())
        );
        // Any non-name first character acts as the sigil.
        assert_eq!(
            Operand::from_token("2x"),
            Operand::Literal("x".to_string())
        );
    }

    #[test]
    fn test_operand_display() {
        assert_eq!(Operand::from_token("count").to_string(), "count");
        assert_eq!(Operand::from_token("#hi").to_string(), "#hi");
    }

    #[test]
    fn test_parse_print() {
        assert_eq!(
            parse("print #hi ;").unwrap(),
            Command::Print {
                arg: Operand::Literal("hi".to_string()),
                line: 1,
            }
        );
    }

    #[test]
    fn test_parse_arithmetic() {
        assert_eq!(
            parse("add x y #1;").unwrap(),
            Command::Arithmetic {
                op: ArithOp::Add,
                dest: "x".to_string(),
                lhs: Operand::Var("y".to_string()),
                rhs: Operand::Literal("1".to_string()),
                line: 1,
            }
        );
    }

    #[test]
    fn test_parse_rejects() {
        // Unknown keyword.
        assert!(parse("frobnicate x;").is_err());
        // Missing terminator.
        assert!(parse("print x").is_err());
        // Destination must be a variable name.
        assert!(parse("set #5 #5;").is_err());
        assert!(parse("goto #top;").is_err());
        // Missing operand.
        assert!(parse("add x #1;").is_err());
    }

    #[test]
    fn test_eq_and_less() {
        assert_eq!(ArithOp::Eq.apply(3, 3, 1).unwrap(), "1");
        assert_eq!(ArithOp::Eq.apply(3, 4, 1).unwrap(), "");
        assert_eq!(ArithOp::Less.apply(3, 4, 1).unwrap(), "1");
        assert_eq!(ArithOp::Less.apply(4, 3, 1).unwrap(), "");
    }

    #[test]
    fn test_divide_by_zero() {
        let error = ArithOp::Div.apply(10, 0, 4).unwrap_err();
        assert_eq!(error.to_string(), "Divide by zero (line 4)");
        let error = ArithOp::Mod.apply(10, 0, 4).unwrap_err();
        assert_eq!(error.to_string(), "Divide by zero (line 4)");
    }
}
