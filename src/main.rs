//! `toyrsa` command-line binary

use std::io;
use std::process::ExitCode;

use env_logger::Env;
use rand::rngs::OsRng;
use toyrsa::shell::{self, Error};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let invocation = match shell::parse_args(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("toyrsa: {}", err);
            eprint!("{}", shell::USAGE);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    match shell::run(&invocation, &mut input, &mut output, &mut OsRng) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Error::Core(ref core) = err {
                log::debug!("core operation failed: {:?}", core);
            }
            eprintln!("toyrsa: {}", err);
            ExitCode::FAILURE
        }
    }
}
