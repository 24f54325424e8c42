use anyhow::{Context, Result};
use clap::{crate_authors, CommandFactory, Parser};
use log::debug;
use slice::{utils, ErrorKind, SliceError, SliceRequest};
use std::any::Any;
use std::io::{self, Write};
use std::panic;
use std::path::PathBuf;
use std::process::exit;

#[derive(Parser, Debug)]
#[command(
    author = crate_authors!(),
    version,
    about = "Extract a slice of bytes from a file and write it to stdout.",
    help_template = "\
{name} {version} ({author})
{about}

USAGE:
    {usage}

EXAMPLES:
    slice --start 1048576 --size 4096 --file ./server.log
    slice --start 0x400 --size 0x200 --file ./dump.bin > part.bin
    slice --start 1048576 --size 65536 --file ./server.log --full-lines-only

OPTIONS:
    {options}
"
)]
struct Args {
    /// Byte offset to start reading (0-based). Use hex (0x...) or decimal.
    #[arg(long, value_parser = utils::parse_offset, allow_hyphen_values = true)]
    start: Option<i64>,

    /// Number of bytes to read. Use hex (0x...) or decimal.
    #[arg(long, value_parser = utils::parse_offset, allow_hyphen_values = true)]
    size: Option<i64>,

    /// File to extract from.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Remove truncated lines at start/end of the slice.
    #[arg(long, default_value_t = false)]
    full_lines_only: bool,

    /// Print internal debug info to stderr.
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn run(args: &Args) -> Result<()> {
    let request = SliceRequest::new(
        args.start,
        args.size,
        args.file.clone(),
        args.full_lines_only,
    )?;

    let data = slice::extract(&request)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&data).context("Failed to write output")?;
    stdout.flush().context("Failed to write output")?;
    Ok(())
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<SliceError>() {
        Some(e) if e.kind() == ErrorKind::Usage => {
            eprintln!("Error: {}", e);
            eprintln!("{}", Args::command().render_usage());
        }
        Some(e) => eprintln!("Error: Failed to read file: {}", e),
        None => eprintln!("Error: {:#}", err),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown failure"
    }
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version land here too, and exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let rendered = e.render().to_string();
            eprint!(
                "Error: {}",
                rendered.strip_prefix("error: ").unwrap_or(&rendered)
            );
            exit(1);
        }
    };

    let default_filter = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // keep the default hook from dumping a backtrace, we report it ourselves
    panic::set_hook(Box::new(|info| debug!("{}", info)));

    match panic::catch_unwind(|| run(&args)) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            report(&e);
            exit(1);
        }
        Err(payload) => {
            eprintln!("Error: Unexpected error: {}", panic_message(payload.as_ref()));
            exit(1);
        }
    }
}
