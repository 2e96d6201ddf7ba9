//! External build tool invocation

use crate::config::Target;
use crate::error::{IoResultExt, Result};
use std::path::Path;
use std::process::Command;

/// Captured result of one tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Whether the tool exited successfully
    pub success: bool,
    /// Human-readable exit status
    pub status: String,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl ToolOutput {
    /// Successful run with no output
    pub fn ok() -> Self {
        Self {
            success: true,
            status: "exit status: 0".to_string(),
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// Failed run with the given status and output
    pub fn failed(status: impl Into<String>, stdout: impl Into<String>) -> Self {
        Self {
            success: false,
            status: status.into(),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Captured stdout followed by stderr
    pub fn combined(&self) -> String {
        match (self.stdout.is_empty(), self.stderr.is_empty()) {
            (_, true) => self.stdout.clone(),
            (true, false) => self.stderr.clone(),
            (false, false) => format!("{}\n{}", self.stdout.trim_end(), self.stderr),
        }
    }
}

/// Runs the external build step for one configuration directory
pub trait ToolRunner {
    /// Command line that [`invoke`](Self::invoke) will run, for display
    fn describe(&self, target: Target, dir: &Path) -> String;

    /// Run `target` for `dir` and wait for it to finish
    fn invoke(&mut self, target: Target, dir: &Path) -> Result<ToolOutput>;
}

/// Invokes `make <target> OBJDIR=<dir>`
#[derive(Debug, Clone)]
pub struct MakeRunner {
    program: String,
}

impl Default for MakeRunner {
    fn default() -> Self {
        Self::new("make")
    }
}

impl MakeRunner {
    /// Use `program` in place of `make`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program being invoked
    pub fn program(&self) -> &str {
        &self.program
    }

    fn objdir_arg(dir: &Path) -> String {
        format!("OBJDIR={}", dir.display())
    }
}

impl ToolRunner for MakeRunner {
    fn describe(&self, target: Target, dir: &Path) -> String {
        format!("{} {} {}", self.program, target, Self::objdir_arg(dir))
    }

    fn invoke(&mut self, target: Target, dir: &Path) -> Result<ToolOutput> {
        let output = Command::new(&self.program)
            .arg(target.as_str())
            .arg(Self::objdir_arg(dir))
            .output()
            .with_path(dir)?;

        Ok(ToolOutput {
            success: output.status.success(),
            status: output.status.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
