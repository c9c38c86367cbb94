use super::{Command, LabelTable};
use crate::error;
use crate::lang::{is_var_name, Error, TokenSource};

type Result<T> = std::result::Result<T, Error>;

/// A loaded script: the ordered command sequence plus the label
/// table. Both are fixed once `load` returns; command indexes are the
/// unit of program counter addressing.
#[derive(Debug)]
pub struct Program {
    commands: Vec<Command>,
    labels: LabelTable,
}

impl Program {
    /// Single forward pass over the token stream. A token ending in
    /// `:` defines a label bound to the index of the next command;
    /// anything else must be a command keyword. Loading is total:
    /// nothing executes until the whole script has parsed and linked.
    pub fn load(source: &str) -> Result<Program> {
        let mut commands: Vec<Command> = vec![];
        let mut labels = LabelTable::new();
        let mut tokens = TokenSource::new(source);
        while let Some(token) = tokens.token()? {
            match token.strip_suffix(':') {
                Some(name) => {
                    if !is_var_name(name) {
                        return Err(error!(Syntax, tokens.line_number()));
                    }
                    labels.add(name, commands.len())?;
                }
                None => commands.push(Command::parse(&token, &mut tokens)?),
            }
        }
        let program = Program { commands, labels };
        program.link()?;
        Ok(program)
    }

    /// Every `if` and `goto` must name a defined label. Checking here
    /// keeps a bad jump from ever reaching the runtime.
    fn link(&self) -> Result<()> {
        for command in &self.commands {
            let (target, line) = match command {
                Command::If { target, line, .. } => (target, *line),
                Command::Goto { target, line } => (target, *line),
                _ => continue,
            };
            if self.labels.find(target).is_none() {
                return Err(error!(UndefinedLabel, line; target.as_str()));
            }
        }
        Ok(())
    }

    pub fn command(&self, pc: usize) -> Option<&Command> {
        self.commands.get(pc)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_load_sequence() {
        let program = Program::load("set x #5; print x; print #\n;").unwrap();
        assert_eq!(program.len(), 3);
        assert!(program.labels().is_empty());
        assert!(program.command(2).is_some());
        assert!(program.command(3).is_none());
    }

    #[test]
    fn test_load_empty() {
        let program = Program::load("").unwrap();
        assert!(program.is_empty());
    }

    #[test]
    fn test_label_binds_next_index() {
        let program = Program::load("print #a; mid: print #b; last:").unwrap();
        assert_eq!(program.labels().find("mid"), Some(1));
        // A trailing label is a valid jump-to-end target.
        assert_eq!(program.labels().find("last"), Some(2));
        assert_eq!(program.len(), 2);
    }

    #[test]
    fn test_bad_label_name() {
        let error = Program::load("2nd: print #a;").unwrap_err();
        assert_eq!(error.code(), ErrorCode::Syntax);
        let error = Program::load(":").unwrap_err();
        assert_eq!(error.code(), ErrorCode::Syntax);
    }

    #[test]
    fn test_duplicate_label() {
        let error = Program::load("l: print #a; l: print #b;").unwrap_err();
        assert_eq!(error.to_string(), "Duplicate label: l");
    }

    #[test]
    fn test_unknown_keyword() {
        let error = Program::load("print #a;\nerase x;").unwrap_err();
        assert_eq!(error.to_string(), "Syntax error (line 2)");
    }

    #[test]
    fn test_undefined_label_fails_link() {
        let error = Program::load("print #a;\ngoto nowhere;").unwrap_err();
        assert_eq!(error.to_string(), "Undefined label: nowhere (line 2)");
        let error = Program::load("if x nowhere;").unwrap_err();
        assert_eq!(error.code(), ErrorCode::UndefinedLabel);
    }
}
