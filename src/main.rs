mod cli;

use playgen::{
    config::{self, Config},
    pipeline::{OutputTarget, Pipeline, PipelineConfig, ProgressEvent, RunSummary},
    PlaylistFormat, UrlWrap,
};

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::io::Write;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "playgen=debug,playgen_media=debug,playgen_common=debug".to_string()
        } else {
            "playgen=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_config_or_default(cli.config.as_deref())?;
    let output = OutputTarget::parse(&cli.playlist);
    let pipeline_config = build_pipeline_config(&cli, &config);
    pipeline_config.validate()?;

    // Status lines go to stderr when the playlist itself goes to stdout
    let console = Console::new(output.is_stdout());
    let verbose = pipeline_config.verbose;
    let verify = pipeline_config.verify;

    let progress_console = console;
    let pipeline = Pipeline::new(pipeline_config).with_progress_callback(Box::new(
        move |event: &ProgressEvent| progress_console.progress(event, verbose),
    ));

    console.line(format!(
        "Generating playlist with {} entries...",
        pipeline.config().range_len()
    ));
    if verify {
        console.line("Verifying URLs...");
    }

    let summary = pipeline.run(&output)?;
    print_summary(&console, &summary, cli.json)?;

    Ok(())
}

fn build_pipeline_config(cli: &Cli, config: &Config) -> PipelineConfig {
    let format_name = cli
        .format
        .clone()
        .unwrap_or_else(|| config.playlist.format.clone());
    let format = PlaylistFormat::from_str_lossy(&format_name);
    if format_name.parse::<PlaylistFormat>().is_err() {
        tracing::warn!("Unknown format '{}', using {}", format_name, format);
    }

    let workers = match cli.threads {
        Some(threads) => threads.max(1) as usize,
        None => config.verify.threads,
    };

    let wrap = UrlWrap::new(
        cli.prefix.clone().or_else(|| config.playlist.prefix.clone()),
        cli.suffix.clone().or_else(|| config.playlist.suffix.clone()),
    );

    PipelineConfig::new(cli.link.clone(), cli.start, cli.end)
        .with_padding(cli.padding.unwrap_or(config.playlist.padding))
        .with_format(format)
        .with_verify(cli.verify || config.verify.enabled)
        .with_verbose(cli.verbose)
        .with_workers(workers)
        .with_wrap(wrap)
}

fn print_summary(console: &Console, summary: &RunSummary, json: bool) -> Result<()> {
    if json {
        let json_str = serde_json::to_string_pretty(summary)?;
        console.line(json_str);
        return Ok(());
    }

    if summary.skipped > 0 {
        console.line(format!(
            "Skipped {} entries that could not be generated",
            summary.skipped
        ));
    }

    if summary.verified {
        console.line(format!(
            "\nVerification complete: {} valid, {} invalid URLs",
            summary.valid, summary.invalid
        ));
    }

    console.line(format!(
        "Playlist file '{}' created successfully.",
        summary.output
    ));

    Ok(())
}

/// Human-readable status output.
#[derive(Clone, Copy)]
struct Console {
    use_stderr: bool,
}

impl Console {
    fn new(use_stderr: bool) -> Self {
        Self { use_stderr }
    }

    fn line(&self, msg: impl AsRef<str>) {
        if self.use_stderr {
            eprintln!("{}", msg.as_ref());
        } else {
            println!("{}", msg.as_ref());
        }
    }

    fn progress(&self, event: &ProgressEvent, verbose: bool) {
        match event {
            ProgressEvent::Generated { done, total } if !verbose => {
                self.inline(format!("\rProgress: {}/{}", done, total));
                if done == total {
                    self.line("");
                }
            }
            ProgressEvent::Checked {
                url, reachable, ..
            } if verbose => {
                let status = if *reachable { "OK" } else { "FAILED" };
                self.line(format!("Checking: {} [{}]", url, status));
            }
            ProgressEvent::Checked { done, total, .. } => {
                self.inline(format!("\rVerified: {}/{}", done, total));
                if done == total {
                    self.line("");
                }
            }
            _ => {}
        }
    }

    fn inline(&self, msg: String) {
        if self.use_stderr {
            let mut err = std::io::stderr().lock();
            let _ = write!(err, "{}", msg);
            let _ = err.flush();
        } else {
            let mut out = std::io::stdout().lock();
            let _ = write!(out, "{}", msg);
            let _ = out.flush();
        }
    }
}
