//! Command line front-end: rewrite stylesheet references passed as arguments.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use css_asset_urls::{DirContext, TracingLog, UrlOptions, UrlRewriter, UrlStrategy, config};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
  name = "css-asset-urls",
  about = "Resolve, copy or inline assets referenced from stylesheets"
)]
struct Cli {
  /// Directory references are resolved against.
  #[arg(long, default_value = ".")]
  from: PathBuf,
  /// Destination root for copied assets. Defaults to `--from`.
  #[arg(long)]
  to: Option<PathBuf>,
  /// Stylesheet the references were taken from.
  #[arg(long)]
  file: Option<PathBuf>,
  /// JSON option file. Defaults to `asset-urls.config.json` in `--from`.
  #[arg(long)]
  config: Option<PathBuf>,
  /// Override the strategy of every option set.
  #[arg(long, value_enum)]
  strategy: Option<StrategyArg>,
  /// Emit debug diagnostics.
  #[arg(short, long)]
  verbose: bool,
  /// References to rewrite, as they appear inside `url()`.
  #[arg(required = true)]
  urls: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
  Rebase,
  Inline,
  Copy,
  Passthrough,
}

impl From<StrategyArg> for UrlStrategy {
  fn from(value: StrategyArg) -> Self {
    match value {
      StrategyArg::Rebase => Self::Rebase,
      StrategyArg::Inline => Self::Inline,
      StrategyArg::Copy => Self::Copy,
      StrategyArg::Passthrough => Self::Passthrough,
    }
  }
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("error: {err:#}");
      ExitCode::FAILURE
    }
  }
}

fn init_tracing(verbose: bool) {
  let default = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();
}

fn run(cli: Cli) -> Result<()> {
  let mut option_sets = match &cli.config {
    Some(path) => config::from_path(path)
      .with_context(|| format!("failed to load options from {}", path.display()))?,
    None => config::discover(&cli.from).context("failed to load options")?,
  };

  if let Some(strategy) = cli.strategy {
    for options in &mut option_sets {
      options.strategy = strategy.into();
    }
  }
  if option_sets.is_empty() {
    option_sets.push(UrlOptions::default());
  }

  let to = cli.to.clone().unwrap_or_else(|| cli.from.clone());
  let mut dir = DirContext::new(&cli.from, to);
  if let Some(file) = &cli.file {
    dir = dir.with_file(file);
  }

  let rewriter = UrlRewriter::new(option_sets);
  for url in &cli.urls {
    let replacement = rewriter
      .rewrite(url, &dir, &TracingLog)
      .with_context(|| format!("failed to process {url}"))?;
    match replacement {
      Some(value) => println!("{url} -> {value}"),
      None => println!("{url} (unchanged)"),
    }
  }

  Ok(())
}
