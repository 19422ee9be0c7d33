use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use taskdash_core::config::resolve_config;
use taskdash_service::live::serve_and_watch;
use taskdash_service::site::{build_site, BuildReport, BuildVersion};
use taskdash_service::{render_mode, RenderMode};

#[derive(Parser)]
#[command(
    name = "taskdash",
    version,
    about = "Build a task dashboard and notepad from tasks.md and notes/"
)]
struct Cli {
    /// Serve the pages on a local port and rebuild when inputs change
    #[arg(long)]
    serve: bool,

    /// Project root holding tasks.md, notes/ and an optional .taskdash.toml
    #[arg(long, env = "TASKDASH_ROOT", default_value = ".")]
    root: PathBuf,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_outputs(report: &BuildReport) {
    println!("✅ Dashboard → {}", report.dashboard_path.display());
    println!("✅ Notepad   → {}", report.notepad_path.display());
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    tracing::debug!(version = taskdash_core::version(), "starting");

    let resolved = resolve_config(&cli.root)
        .with_context(|| format!("loading configuration from {}", cli.root.display()))?;
    if let Some(path) = &resolved.config_file {
        tracing::info!(path = %path.display(), "using config file");
    }

    let mode = render_mode(cli.serve);
    let version = BuildVersion::new();
    let report = build_site(&resolved.paths, mode, &version).context("building pages")?;
    print_outputs(&report);

    if mode == RenderMode::Static {
        println!();
        println!("🚀 Done! Run with --serve to start a live-updating local server.");
        println!("   Or open the files above in any browser.");
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;
    runtime
        .block_on(serve_and_watch(resolved.paths, resolved.serve, version))
        .context("serving pages")?;
    Ok(())
}
