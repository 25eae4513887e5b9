use anyhow::Context;
use clap::Parser;
use os_fingerprint::fileset::load_from_root;
use os_fingerprint::{Detection, DetectorSet};
use serde::Serialize;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Detects the OS of an extracted root filesystem")]
struct Args {
    /// Root of the filesystem to inspect
    #[arg(short, long, default_value = "/")]
    root: PathBuf,

    /// Only run the named detector (e.g. os-release)
    #[arg(short, long)]
    detector: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Report<'a> {
    detector: Option<&'a str>,
    #[serde(flatten)]
    detection: Detection,
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("os_fingerprint={}", level).parse()?)
        .add_directive(format!("os_detect={}", level).parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let defaults = DetectorSet::with_defaults();
    let (name, detection) = match &args.detector {
        Some(name) => {
            let detector = defaults
                .get(name)
                .with_context(|| {
                    format!(
                        "unknown detector '{}' (known: {})",
                        name,
                        defaults.names().join(", ")
                    )
                })?;
            let files = load_from_root(&args.root, detector.required_files())
                .with_context(|| format!("Failed to read files under {}", args.root.display()))?;
            (Some(name.as_str()), detector.detect(&files))
        }
        None => {
            let files = load_from_root(&args.root, &defaults.required_files())
                .with_context(|| format!("Failed to read files under {}", args.root.display()))?;
            tracing::info!(files = files.len(), root = %args.root.display(), "collected");
            match defaults.detect(&files) {
                Some((name, detection)) => (Some(name), detection),
                None => (None, Detection::default()),
            }
        }
    };

    if args.json {
        let report = Report {
            detector: name,
            detection,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let or_missing = |s: &str| {
        if s.is_empty() {
            "<missing>".to_string()
        } else {
            s.to_string()
        }
    };
    println!("DETECTOR={}", name.unwrap_or("<none>"));
    println!("ID={}", or_missing(&detection.os));
    println!("VERSION_ID={}", or_missing(&detection.version));

    Ok(())
}
