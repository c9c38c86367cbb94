use super::{Program, Var};
use crate::error;
use crate::lang::Error;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// Commands executed per `execute` call before control returns to
/// the caller.
const BURST_CYCLES: usize = 5000;

/// How an execution burst ended.
#[derive(Debug, PartialEq)]
pub enum Event {
    /// The program counter ran off the end of the program. There is
    /// no halt command; this is the only way a script finishes.
    Stopped,
    /// The cycle budget ran out. Call `execute` again to continue.
    Running,
}

/// ## Execution engine
///
/// A program counter over a loaded `Program`, plus the variable
/// store. Each step replaces the counter with whatever the current
/// command returns; scripts that jump backward forever simply never
/// stop, so execution is metered in bursts and interruptible.
pub struct Runtime {
    pc: usize,
    vars: Var,
    interrupted: Arc<AtomicBool>,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new()
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime {
            pc: 0,
            vars: Var::new(),
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Checked once per burst. Flip it from a signal handler to stop
    /// a running script.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.fetch(name)
    }

    /// Execute up to `cycles` commands, writing any `print` output
    /// to `out`.
    pub fn execute<W: Write>(
        &mut self,
        program: &Program,
        out: &mut W,
        cycles: usize,
    ) -> Result<Event> {
        if self.interrupted.swap(false, Ordering::SeqCst) {
            return Err(match program.command(self.pc) {
                Some(command) => error!(Break, command.line_number()),
                None => error!(Break),
            });
        }
        for _ in 0..cycles {
            let command = match program.command(self.pc) {
                Some(command) => command,
                None => return Ok(Event::Stopped),
            };
            self.pc = command.execute(program.labels(), &mut self.vars, out, self.pc)?;
        }
        Ok(Event::Running)
    }

    /// Run to completion. Loops forever if the script does.
    pub fn run<W: Write>(&mut self, program: &Program, out: &mut W) -> Result<()> {
        loop {
            if let Event::Stopped = self.execute(program, out, BURST_CYCLES)? {
                return Ok(());
            }
        }
    }
}
