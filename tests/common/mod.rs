use nonde::lang::Error;
use nonde::mach::{Event, Program, Runtime};

pub const CYCLES: usize = 5000;

/// Load and run a script for one cycle burst, returning its output
/// and whether it finished.
pub fn try_exec(source: &str) -> Result<(String, Event), Error> {
    let program = Program::load(source)?;
    let mut runtime = Runtime::new();
    let mut out: Vec<u8> = vec![];
    let event = runtime.execute(&program, &mut out, CYCLES)?;
    Ok((String::from_utf8(out).unwrap(), event))
}

/// Output of a script expected to finish cleanly.
#[allow(dead_code)]
pub fn exec(source: &str) -> String {
    match try_exec(source) {
        Ok((output, Event::Stopped)) => output,
        Ok((_, Event::Running)) => panic!("{} execution cycles exceeded", CYCLES),
        Err(error) => panic!("{} : {:?}", error, error),
    }
}

/// Diagnostic of a script expected to fail to load or run.
#[allow(dead_code)]
pub fn exec_err(source: &str) -> String {
    match try_exec(source) {
        Ok(_) => panic!("expected an error"),
        Err(error) => error.to_string(),
    }
}
