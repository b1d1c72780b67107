//! Output abstraction for command results and errors

/// Sink for user-facing output.
///
/// Commands write one line per result through `output` and one line per
/// failure through `error`, so tests can capture both streams.
pub trait Ui {
    /// Write a result line (stdout)
    fn output(&mut self, line: &str);

    /// Write an error line (stderr)
    fn error(&mut self, line: &str);
}

/// Ui backed by the process's standard streams
#[derive(Debug, Default)]
pub struct StdUi;

impl Ui for StdUi {
    fn output(&mut self, line: &str) {
        println!("{}", line);
    }

    fn error(&mut self, line: &str) {
        eprintln!("{}", line);
    }
}

/// Ui that captures lines in memory, for tests
#[derive(Debug, Default)]
pub struct BufferUi {
    /// Captured result lines
    pub out_lines: Vec<String>,
    /// Captured error lines
    pub err_lines: Vec<String>,
}

impl BufferUi {
    /// Create an empty buffer Ui
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ui for BufferUi {
    fn output(&mut self, line: &str) {
        self.out_lines.push(line.to_string());
    }

    fn error(&mut self, line: &str) {
        self.err_lines.push(line.to_string());
    }
}
