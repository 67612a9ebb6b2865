use anyhow::{Result, bail};
use clap::Parser;
use keyscript::{DelayRange, list_dir, process_path};
use std::path::PathBuf;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "keyscript",
    about = "Convert plain-text files into AppleScript that types them back",
    version
)]
struct Args {
    /// Text files to convert
    files: Vec<PathBuf>,

    /// Minimum value when determining delay between keystrokes
    #[arg(long, default_value_t = 0)]
    min: u32,

    /// Maximum value when determining delay between keystrokes
    #[arg(long, default_value_t = 3)]
    max: u32,

    /// Source directory to read all files from
    #[arg(short, long, conflicts_with = "files")]
    dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let delays = DelayRange::new(args.min, args.max)?;

    let inputs = match &args.dir {
        Some(dir) => list_dir(dir)?,
        None if args.files.is_empty() => bail!("no file or directory given to convert"),
        None => args.files,
    };
    debug!(count = inputs.len(), "starting conversion");

    let mut failed = 0usize;
    for path in &inputs {
        if let Err(err) = process_path(path, &delays) {
            error!("{:#}", err);
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{failed} of {} conversions failed", inputs.len());
    }
    Ok(())
}
