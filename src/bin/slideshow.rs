use std::{io::Write as _, path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "slideshow", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available transition effects as JSON.
    Effects,
    /// Validate a config and print the job summary as JSON.
    Plan(PlanArgs),
    /// Print the render parameters of one frame as JSON.
    Frame(FrameArgs),
    /// Stream the render parameters of a frame range as JSON lines.
    Params(ParamsArgs),
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input slideshow JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input slideshow JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Parser, Debug)]
struct ParamsArgs {
    /// Input slideshow JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON-lines path.
    #[arg(long)]
    out: PathBuf,

    /// First frame to emit.
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// One past the last frame to emit. Defaults to the end of the slideshow.
    #[arg(long)]
    end: Option<u64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Evaluation chunk size (parallel mode only).
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Emit one trace event per evaluated frame.
    #[arg(long, default_value_t = false)]
    trace_frames: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    match cli.cmd {
        Command::Effects => cmd_effects(),
        Command::Plan(args) => cmd_plan(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Params(args) => cmd_params(args),
    }
}

fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("slideshow={level}"))
            .context("build log filter")?,
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
    Ok(())
}

fn load(in_path: &std::path::Path) -> anyhow::Result<slideshow::Slideshow> {
    let cfg = slideshow::SlideshowConfig::from_path(in_path)
        .with_context(|| format!("load slideshow config '{}'", in_path.display()))?;
    Ok(slideshow::Slideshow::new(cfg)?)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("write json to stdout")?;
    writeln!(stdout).context("write json to stdout")?;
    Ok(())
}

fn cmd_effects() -> anyhow::Result<()> {
    print_json(&slideshow::effect_catalog())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let show = load(&args.in_path)?;
    print_json(&slideshow::JobSummary::from_slideshow(&show))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let show = load(&args.in_path)?;
    let params = show.render_params(slideshow::FrameIndex(args.frame))?;
    print_json(&params)
}

fn cmd_params(args: ParamsArgs) -> anyhow::Result<()> {
    let mut show = load(&args.in_path)?;
    if args.trace_frames {
        show = show.with_observer(Arc::new(slideshow::TracingObserver));
    }

    let end = args.end.unwrap_or_else(|| show.total_frames());
    let range = slideshow::FrameRange::new(
        slideshow::FrameIndex(args.start),
        slideshow::FrameIndex(end),
    )?;
    let threading = slideshow::EvalThreading {
        parallel: args.parallel,
        threads: args.threads,
        chunk_size: args.chunk_size,
    };

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let file = std::fs::File::create(&args.out)
        .with_context(|| format!("create output '{}'", args.out.display()))?;
    let mut sink = slideshow::JsonLinesSink::new(std::io::BufWriter::new(file));
    let stats = slideshow::stream_range(&show, range, &threading, &mut sink)?;

    eprintln!("wrote {} frames to {}", stats.frames, args.out.display());
    Ok(())
}
