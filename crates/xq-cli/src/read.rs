//! The `read` command: evaluate an XPath expression against a document

use std::fs;
use std::io::Read;

use anyhow::Context;
use clap::{Args, ValueEnum};
use sxd_adapter::SxdNavigator;
use xml_nav_traits::{QueryValue, XmlNavigator};

use crate::ui::Ui;

/// How matched nodes are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Reconstructed XML fragment per node
    Xml,
    /// Raw string value per node
    Raw,
}

/// Evaluate an XPath query against an XML document
#[derive(Debug, Args)]
pub struct ReadCommand {
    /// Format to output the xpath result in
    #[arg(long, value_enum, default_value = "xml")]
    pub output: OutputMode,

    /// XPath expression to evaluate
    pub xpath: String,

    /// Path to the XML document, or "-" to read from stdin
    pub file_path: String,
}

impl ReadCommand {
    /// Run the command, writing results and errors through `ui`.
    ///
    /// `stdin` supplies the document when the path is `-`. Returns the
    /// process exit code: 0 on success (including an empty node-set),
    /// 1 on any boundary failure.
    pub fn run(&self, ui: &mut dyn Ui, stdin: &mut dyn Read) -> i32 {
        // Compile before touching the input so expression errors are
        // reported without reading or parsing the document.
        let query = match sxd_adapter::compile(&self.xpath) {
            Ok(query) => query,
            Err(err) => {
                ui.error(&format!("Failed to parse xpath: {}", err.message()));
                return 1;
            }
        };

        let raw = match read_input(&self.file_path, stdin) {
            Ok(raw) => raw,
            Err(err) => {
                ui.error(&format!("{:#}", err));
                return 1;
            }
        };

        let package = match sxd_adapter::parse(&raw) {
            Ok(package) => package,
            Err(err) => {
                ui.error(&format!("Failed to parse XML input: {}", err.message()));
                return 1;
            }
        };
        let document = package.as_document();
        let nav = SxdNavigator::new(document);

        let value = match query.evaluate(&nav) {
            Ok(value) => value,
            Err(err) => {
                ui.error(&format!("Failed to evaluate xpath: {}", err.message()));
                return 1;
            }
        };

        match value {
            QueryValue::Nodes(nodes) => {
                for node in &nodes {
                    let line = match self.output {
                        OutputMode::Xml => {
                            let mut buffer = String::new();
                            xq_render::render(&nav, node, &mut buffer);
                            buffer
                        }
                        OutputMode::Raw => nav.string_value(node),
                    };
                    ui.output(&line);
                }
            }
            scalar => {
                if let Some(line) = scalar.scalar_string() {
                    ui.output(&line);
                }
            }
        }

        0
    }
}

/// Read the whole document from a file path, or from stdin when the
/// path is `-`
fn read_input(path: &str, stdin: &mut dyn Read) -> anyhow::Result<String> {
    if path == "-" {
        let mut raw = String::new();
        stdin
            .read_to_string(&mut raw)
            .context("Failed to read stdin")?;
        Ok(raw)
    } else {
        fs::read_to_string(path).context("Failed to read file")
    }
}
