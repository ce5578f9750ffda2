/// Entry Function - the implementation under test
///
/// Anything callable with one argument is an entry: plain functions and
/// closures through the blanket impl, external programs through
/// [`ProcessEntry`]. The runner never cares which.
use std::io::{self, ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;
use tracing::debug;

pub trait EntryFunction<I, O> {
    /// Invoke the entry once. `Err` carries a reason when no output could be
    /// produced; a wrong output is still `Ok` and is judged by the runner.
    fn invoke(&mut self, input: I) -> Result<O, String>;
}

impl<I, O, F> EntryFunction<I, O> for F
where
    F: FnMut(I) -> O,
{
    fn invoke(&mut self, input: I) -> Result<O, String> {
        Ok(self(input))
    }
}

/// An entry implemented by an external program.
///
/// Each call spawns the program, writes the input plus a newline to stdin and
/// reads stdout. Exactly one trailing line terminator is stripped from the
/// output; everything else is compared as-is.
#[derive(Debug, Clone)]
pub struct ProcessEntry {
    program: String,
    args: Vec<String>,
}

impl ProcessEntry {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<S: Into<String>>(mut self, args: impl IntoIterator<Item = S>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl EntryFunction<String, String> for ProcessEntry {
    fn invoke(&mut self, input: String) -> Result<String, String> {
        debug!(program = %self.program, args = ?self.args, "Spawning entry");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| format!("failed to spawn `{}`: {}", self.program, e))?;

        // Feed stdin from its own thread so a chatty entry cannot fill the
        // stdout pipe while we are still writing
        let writer = child.stdin.take().map(|mut stdin| {
            thread::spawn(move || -> io::Result<()> {
                stdin.write_all(input.as_bytes())?;
                stdin.write_all(b"\n")
            })
        });

        let output = child
            .wait_with_output()
            .map_err(|e| format!("failed to wait for `{}`: {}", self.program, e))?;

        if let Some(writer) = writer {
            match writer.join() {
                // Entry exited without reading its input; the exit status decides
                Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => {}
                Ok(Err(e)) => return Err(format!("failed to write input: {}", e)),
                Ok(Ok(())) => {}
                Err(_) => return Err("input writer thread panicked".to_string()),
            }
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            return Err(if stderr.is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {}", output.status, stderr)
            });
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| "stdout is not valid UTF-8".to_string())?;

        Ok(strip_line_terminator(&stdout).to_string())
    }
}

fn strip_line_terminator(output: &str) -> &str {
    output
        .strip_suffix("\r\n")
        .or_else(|| output.strip_suffix('\n'))
        .unwrap_or(output)
}
