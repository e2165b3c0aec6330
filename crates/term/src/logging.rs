use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Directory for per-process log files; stderr logging is used when unset.
pub const LOG_DIR_ENV: &str = "TYALIAS_LOG_DIR";

fn default_filter(verbose: bool) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("tyalias=debug,tyalias_registry=debug,tyalias_commands=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	})
}

pub fn setup_tracing(verbose: bool) {
	if let Some(log_dir) = std::env::var(LOG_DIR_ENV).ok().map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let pid = std::process::id();
		let log_path = log_dir.join(format!("tyalias.{pid}.log"));

		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			let file_layer = tracing_subscriber::fmt::layer()
				.with_writer(file)
				.with_ansi(false)
				.with_target(true);

			tracing_subscriber::registry()
				.with(default_filter(verbose))
				.with(file_layer)
				.init();

			tracing::info!(path = ?log_path, "tracing initialized");
			return;
		}
	}

	tracing_subscriber::fmt()
		.with_env_filter(default_filter(verbose))
		.with_writer(std::io::stderr)
		.init();
}
