// ============================================================
// Layer 6 — External Morphological Analyzer
// ============================================================
// Runs an external program once per text:
//
//   stdin  ← the text (UTF-8)
//   stdout → morphemes separated by whitespace
//
// Any analyzer can be plugged in this way, e.g. a small script
// wrapping a Korean morpheme tagger.

use std::{
    io::{self, ErrorKind, Write},
    process::{ChildStdin, Command, Stdio},
    thread,
};

use crate::domain::traits::MorphAnalyzer;
use crate::error::{PrepError, Result};

#[derive(Debug, Clone)]
pub struct CommandAnalyzer {
    program: String,
    args:    Vec<String>,
}

impl CommandAnalyzer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from `[program, args...]`, as given on the command line.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }
}

impl MorphAnalyzer for CommandAnalyzer {
    fn morphs(&self, text: &str) -> Result<Vec<String>> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| PrepError::Analyzer(format!("cannot start '{}': {e}", self.program)))?;

        // stdin is fed from its own thread while stdout and stderr drain.
        let stdin = child.stdin.take();
        let (written, output) = thread::scope(|s| {
            let writer = s.spawn(move || feed(stdin, text));
            let output = child.wait_with_output();
            (writer.join(), output)
        });

        written
            .map_err(|_| PrepError::Analyzer(format!("stdin writer for '{}' panicked", self.program)))?
            .map_err(|e| PrepError::Analyzer(format!("cannot write to '{}': {e}", self.program)))?;

        let output = output
            .map_err(|e| PrepError::Analyzer(format!("'{}' did not finish: {e}", self.program)))?;

        if !output.status.success() {
            return Err(PrepError::Analyzer(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| PrepError::Analyzer(format!("'{}' wrote non-UTF-8 output", self.program)))?;
        Ok(stdout.split_whitespace().map(str::to_string).collect())
    }
}

/// Write `text` and close the pipe. A program that exits without
/// reading stdin is judged by its exit status, so a broken pipe is fine.
fn feed(stdin: Option<ChildStdin>, text: &str) -> io::Result<()> {
    let Some(mut stdin) = stdin else { return Ok(()) };
    match stdin.write_all(text.as_bytes()) {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
