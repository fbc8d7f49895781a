use std::io::Write as _;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "scorereel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the evaluated state of one frame as JSON.
    Eval(EvalArgs),
    /// Print the evaluated states of a frame range as JSON lines.
    Frames(FramesArgs),
    /// Draw a layout preview of one frame as a PNG.
    Frame(FrameArgs),
    /// Validate a player dataset and report every violation.
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Player dataset JSON. Without it the reel has no cards.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Timeline config JSON. Missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep dataset file order instead of reversing it.
    #[arg(long, default_value_t = false)]
    file_order: bool,
}

#[derive(Parser, Debug)]
struct EvalArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    input: InputArgs,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive). Defaults to the composition end.
    #[arg(long)]
    end: Option<u64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Evaluation chunk size (parallel mode only).
    #[arg(long, default_value_t = 256)]
    chunk_size: usize,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Milliseconds the stat counters of visible cards have been running.
    /// Defaults to the full count-up duration.
    #[arg(long)]
    counter_ms: Option<u64>,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Player dataset JSON.
    #[arg(long)]
    data: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Eval(args) => cmd_eval(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scorereel=info"));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .with(env_filter)
        .init();
}

fn build_scheduler(input: &InputArgs) -> anyhow::Result<scorereel::TimelineScheduler> {
    let config = match &input.config {
        Some(path) => scorereel::TimelineConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => scorereel::TimelineConfig::default(),
    };
    let opts = scorereel::DatasetOpts {
        reverse: !input.file_order,
    };
    let players = match &input.data {
        Some(path) => scorereel::load_players_from_path_or_empty(path, opts),
        None => Vec::new(),
    };
    tracing::info!(
        players = players.len(),
        frames = config.composition_frames(),
        "timeline ready"
    );
    Ok(scorereel::TimelineScheduler::new(config, players)?)
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let sched = build_scheduler(&args.input)?;
    let state = sched.frame_state(scorereel::FrameIndex(args.frame));

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &state).context("write frame state")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let sched = build_scheduler(&args.input)?;
    let end = args.end.unwrap_or(sched.composition_range().end.0);
    let range =
        scorereel::FrameRange::new(scorereel::FrameIndex(args.start), scorereel::FrameIndex(end))?;
    let threading = scorereel::EvalThreading {
        parallel: args.parallel,
        threads: args.threads,
        chunk_size: args.chunk_size,
    };

    let states = scorereel::evaluate_range(&sched, range, &threading)?;
    let mut out = std::io::BufWriter::new(std::io::stdout().lock());
    for state in &states {
        serde_json::to_writer(&mut out, state).context("write frame state")?;
        writeln!(out)?;
    }
    out.flush()?;

    tracing::info!(frames = states.len(), "evaluated range");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let sched = build_scheduler(&args.input)?;
    let cfg = sched.config();
    let state = sched.frame_state(scorereel::FrameIndex(args.frame));

    let lookups = scorereel::Lookups::serie_a();
    let contents = scorereel::card_contents(sched.visible_players(), &lookups);

    let full = Duration::from_millis(cfg.counter_duration_ms);
    let mut board = scorereel::CounterBoard::from_players(sched.visible_players(), full);
    let t0 = Instant::now();
    board.observe(&state, cfg.canvas, cfg.template, t0);
    let elapsed = args.counter_ms.map(Duration::from_millis).unwrap_or(full);
    board.advance_to(t0 + elapsed);

    let mut surface = scorereel::PreviewSurface::new(cfg.canvas);
    scorereel::draw_frame(&mut surface, &state, cfg, &contents, Some(&board))?;
    surface.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let file = std::fs::File::open(&args.data)
        .with_context(|| format!("open dataset '{}'", args.data.display()))?;
    match scorereel::parse_players(std::io::BufReader::new(file)) {
        Ok(players) => {
            println!("{}: {} players ok", args.data.display(), players.len());
            Ok(())
        }
        Err(errs) => {
            for e in &errs.errors {
                eprintln!("{e}");
            }
            anyhow::bail!(
                "{}: {} schema violation(s)",
                args.data.display(),
                errs.errors.len()
            )
        }
    }
}
