//! xq binary entry point

use std::io;
use std::process::ExitCode;

use xq_cli::StdUi;

fn main() -> ExitCode {
    let mut ui = StdUi;
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let code = xq_cli::run(std::env::args_os(), &mut ui, &mut stdin);
    ExitCode::from(code as u8)
}
