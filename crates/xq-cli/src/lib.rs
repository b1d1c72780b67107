//! Query XML documents with XPath from the command line.
//!
//! The binary is a thin shell around [`run`], which is also the entry
//! point for integration tests: output streams go through the [`ui::Ui`]
//! abstraction and stdin is injected as a reader.

pub mod read;
pub mod ui;

use std::ffi::OsString;
use std::io::Read;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

pub use read::{OutputMode, ReadCommand};
pub use ui::{BufferUi, StdUi, Ui};

/// Query XML documents with XPath
#[derive(Debug, Parser)]
#[command(name = "xq", version, about = "Queries XML documents with XPath")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Queries an XML document from a file or stdin
    Read(ReadCommand),
    /// Prints the xq version
    Version,
}

/// Parse `args` (including the program name) and run the selected
/// command. Returns the process exit code.
pub fn run<I, T>(args: I, ui: &mut dyn Ui, stdin: &mut dyn Read) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version requests are not failures.
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                ui.output(err.to_string().trim_end());
                return 0;
            }
            ui.error(err.to_string().trim_end());
            return 1;
        }
    };

    match cli.command {
        Command::Read(command) => command.run(ui, stdin),
        Command::Version => {
            ui.output(&format!("xq v{}", env!("CARGO_PKG_VERSION")));
            0
        }
    }
}
