//! Step progress implementation
//!
//! Plain text lines, one per step, suitable for logs and non-TTY output.

use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Numbered progress over a known number of steps
#[derive(Debug)]
pub struct StepProgress<W: Write> {
    /// Output sink
    out: W,
    /// Total steps
    total: usize,
    /// Steps started so far
    current: usize,
    /// Start time
    start_time: Instant,
}

impl<W: Write> StepProgress<W> {
    /// Create progress over `total` steps writing to `out`
    pub fn new(total: usize, out: W) -> Self {
        Self {
            out,
            total,
            current: 0,
            start_time: Instant::now(),
        }
    }

    /// Announce the next step as `[i/total]` and return its 1-based index
    pub fn step(&mut self) -> io::Result<usize> {
        self.current += 1;
        writeln!(self.out, "[{}/{}]", self.current, self.total)?;
        Ok(self.current)
    }

    /// Print a free-form line between steps
    pub fn note(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)
    }

    /// Steps started so far
    pub fn current(&self) -> usize {
        self.current
    }

    /// Total steps
    pub fn total(&self) -> usize {
        self.total
    }

    /// Get elapsed time
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Print the completion line
    pub fn finish(&mut self, what: &str) -> io::Result<()> {
        let elapsed = Duration::from_millis(self.elapsed().as_millis() as u64);
        writeln!(
            self.out,
            "Completed: {} {} in {}",
            self.current,
            what,
            humantime::format_duration(elapsed)
        )?;
        self.out.flush()
    }

    /// Recover the output sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbering() {
        let mut progress = StepProgress::new(3, Vec::new());
        assert_eq!(progress.step().unwrap(), 1);
        progress.note("make build OBJDIR=a").unwrap();
        assert_eq!(progress.step().unwrap(), 2);
        assert_eq!(progress.current(), 2);
        assert_eq!(progress.total(), 3);

        let out = String::from_utf8(progress.into_inner()).unwrap();
        assert_eq!(out, "[1/3]\nmake build OBJDIR=a\n[2/3]\n");
    }

    #[test]
    fn test_finish_line() {
        let mut progress = StepProgress::new(1, Vec::new());
        progress.step().unwrap();
        progress.finish("configurations").unwrap();

        let out = String::from_utf8(progress.into_inner()).unwrap();
        assert!(out.contains("Completed: 1 configurations in "));
    }
}
