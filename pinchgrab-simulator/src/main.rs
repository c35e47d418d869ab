mod script;
mod simulator;

use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use anyhow::{bail, Context, Result};
use log::info;
use pinchgrab::contexts::GestureConfig;

use crate::{script::Script, simulator::Simulator};

const USAGE: &str = "Usage: pinchgrab_simulator <script.json> [--config <config.json>] [--realtime]";

struct Args {
    script: PathBuf,
    config: Option<PathBuf>,
    realtime: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut script = None;
    let mut config = None;
    let mut realtime = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "--realtime" => realtime = true,
            _ if arg.starts_with("--") => bail!("Unknown option {arg}\n{USAGE}"),
            _ if script.is_none() => script = Some(PathBuf::from(arg)),
            _ => bail!("Unexpected argument {arg}\n{USAGE}"),
        }
    }

    Ok(Args {
        script: script.context(USAGE)?,
        config,
        realtime,
    })
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let script = Script::load(&args.script)?;

    // A config file on the command line beats one embedded in the script
    let config = match &args.config {
        Some(path) => GestureConfig::load(path)
            .with_context(|| format!("Unable to load config {}", path.display()))?,
        None => script.config.unwrap_or_default(),
    };
    info!("[PINCHGRAB_SIMULATOR] Using {:?}", config);

    let should_quit = Arc::new(AtomicBool::from(false));
    {
        let should_quit = should_quit.clone();
        ctrlc::set_handler(move || should_quit.store(true, Ordering::Relaxed))?;
    }

    info!(
        "[PINCHGRAB_SIMULATOR] Playing {} frames from {}..",
        script.frames.len(),
        args.script.display()
    );
    let mut simulator = Simulator::new(config, script.object);
    let summary = simulator.run(&script, args.realtime, &should_quit);

    info!(
        "[PINCHGRAB_SIMULATOR] ..done! {} frames, {} grabs, object moved on {} frames and finished at {:?}",
        summary.frames, summary.grabs, summary.frames_moved, summary.final_position
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Result<Args> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_args() {
        let parsed = args(&["drag.json", "--realtime", "--config", "tight.json"]).unwrap();
        assert_eq!(parsed.script, PathBuf::from("drag.json"));
        assert_eq!(parsed.config, Some(PathBuf::from("tight.json")));
        assert!(parsed.realtime);

        let parsed = args(&["drag.json"]).unwrap();
        assert_eq!(parsed.config, None);
        assert!(!parsed.realtime);
    }

    #[test]
    fn test_bad_args() {
        assert!(args(&[]).is_err());
        assert!(args(&["a.json", "b.json"]).is_err());
        assert!(args(&["a.json", "--config"]).is_err());
        assert!(args(&["a.json", "--fast"]).is_err());
    }
}
