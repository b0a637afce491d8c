pub mod invoke;
pub mod preset;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context as _;

use crate::invoke::{Invocation, Invoke};

/// Exit status reported when the renderer has not been built yet.
pub const EXIT_RENDERER_MISSING: i32 = 127;

// The renderer binary, relative to the install root
const RENDERER: &str = "build/hw4";

const BUILD_HINT: &str = "The program must be built by running \"make\" first";

/// How a single run of the launcher ended.
#[derive(Clone, Copy)]
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A preset was selected and the renderer ran to completion.
    Launched,
    /// The arguments selected no preset; the usage line was written.
    Usage,
    /// The renderer was absent; nothing was dispatched.
    RendererMissing,
}

impl Outcome {
    /// Process exit status for this outcome. Only the missing renderer is
    /// fatal; a usage error falls through to a normal exit.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Launched | Outcome::Usage => 0,
            Outcome::RendererMissing => EXIT_RENDERER_MISSING,
        }
    }
}

/// The directory containing the launcher executable.
/// All renderer and scene paths are resolved relative to it.
pub fn install_root() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe()
        .context("unable to locate the launcher executable")?;

    let root = exe.parent()
        .context("launcher executable has no parent directory")?;

    Ok(root.to_path_buf())
}

pub struct Launcher {
    root: PathBuf,
}

impl Launcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The path the renderer is expected at once built.
    pub fn renderer_path(&self) -> PathBuf {
        self.root.join(RENDERER)
    }

    /// Dispatches one run: build check, mode selection, subprocess.
    ///
    /// `prog` is the launcher's own argv[0], reproduced verbatim in the
    /// usage line. Contract diagnostics go to `diag`; ambient detail goes
    /// through the logger. The renderer's exit status and output streams
    /// are left untouched.
    pub fn run(
        &self,
        prog: &str,
        args: &[String],
        invoker: &mut dyn Invoke,
        diag: &mut dyn Write,
    ) -> anyhow::Result<Outcome> {
        let renderer = self.renderer_path();

        // Checked before any mode interpretation
        if !renderer.exists() {
            writeln!(diag, "{}", BUILD_HINT)?;

            return Ok(Outcome::RendererMissing);
        }

        let preset = match preset::select(prog, args) {
            Some(preset) => preset,
            None => {
                writeln!(diag, "{}", preset::usage(prog))?;

                return Ok(Outcome::Usage);
            },
        };

        let invocation = Invocation {
            program: renderer,
            args: preset.renderer_args(&self.root),
        };

        log::info!("launching renderer preset --{}", preset.mode);
        log::debug!("{:?}", invocation);

        invoker.invoke(&invocation)?;

        Ok(Outcome::Launched)
    }
}
