use std::{env, io, process};

use launch::invoke::SystemInvoke;
use launch::Launcher;

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let mut args = env::args();

    let prog = args.next()
        .unwrap_or_else(|| String::from(env!("CARGO_BIN_NAME")));

    let args = args.collect::<Vec<_>>();

    let launcher = Launcher::new(launch::install_root()?);

    let outcome = launcher.run(&prog, &args, &mut SystemInvoke, &mut io::stderr())?;

    process::exit(outcome.exit_code())
}
