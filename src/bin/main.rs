use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use ls8::loader::{self, LoadError};
use ls8::vm::Vm;
use ls8::Error;

/// Run an LS-8 program
#[derive(Parser)]
#[command(version)]
struct Args {
  /// Program file, one binary literal per line
  program: PathBuf,

  /// Log the machine state before every instruction
  #[arg(long)]
  trace: bool,
}

const EXIT_FAILURE: u8 = 1;
const EXIT_NOT_FOUND: u8 = 2;

fn main() -> ExitCode {
  let args = match Args::try_parse() {
    Ok(args) => args,
    // --help and --version
    Err(err) if !err.use_stderr() => err.exit(),
    Err(err) => {
      let _ = err.print();
      return ExitCode::from(EXIT_FAILURE);
    }
  };

  let mut logger = env_logger::Builder::new();
  logger.filter_level(LevelFilter::Warn).parse_default_env();
  if args.trace {
    logger.filter_module("ls8", LevelFilter::Trace);
  }
  logger.init();

  let chunk = match loader::load_file(&args.program) {
    Ok(chunk) => chunk,
    Err(err) => {
      eprintln!("{err}");
      return match err {
        LoadError::NotFound { .. } => ExitCode::from(EXIT_NOT_FOUND),
        _ => ExitCode::from(EXIT_FAILURE),
      };
    }
  };

  let mut vm = Vm::new();
  let stdout = io::stdout();
  let mut out = stdout.lock();
  let result = vm
    .load(&chunk)
    .and_then(|()| vm.run(&mut out))
    .and_then(|()| out.flush().map_err(Error::from));
  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("error: {err}");
      ExitCode::from(EXIT_FAILURE)
    }
  }
}
