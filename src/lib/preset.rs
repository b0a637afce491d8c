use std::ffi::OsString;
use std::path::Path;

/// A statically known renderer configuration, one row per recognized mode.
///
/// The table below is the whole dispatch surface: adding a preset means
/// adding a row, and both the CLI matcher and the usage line are derived
/// from it.
#[derive(Debug)]
pub struct Preset {
    /// Long flag (without the leading dashes) that selects this preset.
    pub mode: &'static str,
    pub supersample: u32,
    pub width: u32,
    pub height: u32,
    /// Output image, written relative to the caller's working directory.
    pub output: &'static str,
    /// Scene description, relative to the install root.
    pub scene: &'static str,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        mode: "yours",
        supersample: 4,
        width: 910,
        height: 512,
        output: "yours.ppm",
        scene: "../scenes/chessboard.scn",
    },
    Preset {
        mode: "default",
        supersample: 4,
        width: 512,
        height: 512,
        output: "default.ppm",
        scene: "../scenes/cornell.scn",
    },
];

impl Preset {
    /// Renderer argument list, in exactly the order the renderer expects:
    /// flags first, then the positional scene path.
    pub fn renderer_args(&self, root: &Path) -> Vec<OsString> {
        vec![
            OsString::from("--no-preview"),
            OsString::from("--supersample"),
            OsString::from(self.supersample.to_string()),
            OsString::from("-s"),
            OsString::from(format!("{},{}", self.width, self.height)),
            OsString::from("-o"),
            OsString::from(self.output),
            root.join(self.scene).into_os_string(),
        ]
    }
}

/// Matches the process arguments against the preset table.
///
/// Exactly one mode flag selects its preset. Every other argument set
/// returns `None`: no arguments, extra arguments, an unrecognized flag,
/// or two modes at once.
pub fn select(prog: &str, args: &[String]) -> Option<&'static Preset> {
    // A mode is always the sole argument; clap alone would tolerate a
    // repeated flag
    if args.len() != 1 {
        return None;
    }

    let mut cmd = clap::Command::new(prog.to_owned())
        .disable_help_flag(true)
        .disable_version_flag(true);

    for preset in PRESETS {
        cmd = cmd.arg(
            clap::Arg::new(preset.mode)
                .long(preset.mode)
                .action(clap::ArgAction::SetTrue));
    }

    let modes = PRESETS.iter()
        .map(|preset| preset.mode)
        .collect::<Vec<_>>();

    cmd = cmd.group(
        clap::ArgGroup::new("mode")
            .args(&modes)
            .multiple(false)
            .required(true));

    let parsed = cmd
        .try_get_matches_from({
            std::iter::once(prog).chain(args.iter().map(String::as_str))
        })
        .ok()?;

    PRESETS.iter().find(|preset| {
        parsed.get_one::<bool>(preset.mode).copied().unwrap_or(false)
    })
}

/// One-line usage message naming every mode in the table.
pub fn usage(prog: &str) -> String {
    let modes = PRESETS.iter()
        .map(|preset| format!("--{}", preset.mode))
        .collect::<Vec<_>>()
        .join(" | ");

    format!("Usage: {} {{ {} }}", prog, modes)
}
