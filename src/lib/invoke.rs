use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use anyhow::Context as _;

/// A fully constructed renderer invocation: the program path plus its
/// ordered argument list. Built once per run, never mutated afterwards.
#[derive(Clone)]
#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

/// Runs an external program to completion.
///
/// Dispatch talks to this trait so it can be exercised without spawning
/// a real renderer.
pub trait Invoke {
    /// Blocks until the child process exits. The child's exit status is
    /// deliberately not surfaced; only a failure to spawn is an error.
    fn invoke(&mut self, invocation: &Invocation) -> anyhow::Result<()>;
}

/// Spawns the child via `std::process::Command` and waits synchronously.
pub struct SystemInvoke;

impl Invoke for SystemInvoke {
    fn invoke(&mut self, invocation: &Invocation) -> anyhow::Result<()> {
        process::Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .with_context(|| {
                format!("failed to run {}", invocation.program.display())
            })?;

        Ok(())
    }
}

/// Records invocations instead of spawning anything.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingInvoke {
    pub calls: Vec<Invocation>,
}

#[cfg(test)]
impl Invoke for RecordingInvoke {
    fn invoke(&mut self, invocation: &Invocation) -> anyhow::Result<()> {
        self.calls.push(invocation.clone());

        Ok(())
    }
}
