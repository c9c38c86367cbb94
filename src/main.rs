extern crate ansi_term;
extern crate ctrlc;
use ansi_term::Style;
use nonde::lang::Error;
use nonde::mach::{Program, Runtime};
use std::io::Write;
use std::sync::atomic::Ordering;

fn usage() -> ! {
    eprintln!("usage: nonde <script>");
    std::process::exit(1);
}

fn main() {
    let mut args = std::env::args().skip(1);
    let path = match (args.next(), args.next()) {
        (Some(path), None) => path,
        _ => usage(),
    };
    let source = match std::fs::read_to_string(&path) {
        Ok(source) => source,
        Err(_) => {
            eprintln!("Can't open file: {}", path);
            usage();
        }
    };
    if let Err(error) = run(&source) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

fn run(source: &str) -> Result<(), Error> {
    let program = Program::load(source)?;
    let mut runtime = Runtime::new();
    let interrupted = runtime.interrupt_handle();
    ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runtime.run(&program, &mut out)?;
    out.flush()?;
    Ok(())
}
