use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, error};
use word_rank::{report, JobDescription, Orchestrator};

/// Ranks text files by their Fibonacci-weighted word-length distribution.
#[derive(Parser)]
#[command(name = "word-rank")]
struct Cli {
    /// Number of workers per pipeline stage
    workers: usize,

    /// Job description file: fragment size, file count, then one path per line
    job_description: PathBuf,

    /// Path the report is written to
    report: PathBuf,

    /// Abort a stage that does not complete within this many seconds
    #[arg(long)]
    phase_timeout_secs: Option<u64>,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    if let Err(err) = run(cli).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let job = JobDescription::load(&cli.job_description)?;
    debug!(
        fragment_size = job.fragment_size,
        files = job.files.len(),
        "job description loaded"
    );

    let mut orchestrator = Orchestrator::new(cli.workers);
    if let Some(seconds) = cli.phase_timeout_secs {
        orchestrator = orchestrator.with_phase_timeout(Duration::from_secs(seconds));
    }

    let results = orchestrator.run(&job).await?;
    report::write(&cli.report, &results)?;
    debug!(report = %cli.report.display(), "report written");
    Ok(())
}
