//! `apigw` binary module entry point.
//!
//! Invoked by the automation host as `apigw <module> <args-file>`. The args file holds
//! the module params as a JSON object; the result object is printed on stdout.
//! Logs go to stderr, filtered by `APIGW_LOG` (default `warn`).

use apigw::host::{self, ModuleKind, ModuleResult};
use apigw::{Error, Result};
use clap::Parser;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "APIGW_LOG";

#[derive(Debug, Parser)]
#[command(name = "apigw", version, about = "Reconcile AWS API Gateway REST APIs and Models")]
struct Cli {
	/// The module to run.
	#[arg(value_enum)]
	module: ModuleKind,

	/// JSON file with the module params.
	args_file: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	let cli = Cli::parse();

	let res = match read_params(&cli.args_file) {
		Ok(params) => host::execute(cli.module, &params).await,
		Err(err) => ModuleResult::failure(err.to_string()),
	};

	match res.to_json() {
		Ok(json) => println!("{json}"),
		Err(err) => {
			println!(r#"{{"failed": true, "msg": "cannot render module result"}}"#);
			tracing::error!(%err, "cannot render module result");
			return ExitCode::FAILURE;
		}
	}

	if res.failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

fn read_params(path: &Path) -> Result<Value> {
	let content = std::fs::read_to_string(path).map_err(|err| Error::ArgsFileRead {
		path: path.display().to_string(),
		cause: err.to_string(),
	})?;
	Ok(serde_json::from_str(&content)?)
}
