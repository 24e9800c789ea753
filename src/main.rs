use std::path::PathBuf;

use clap::Parser;
use freshness_check::config::{
    DEFAULT_PACKAGE_NAME, DEFAULT_SERVICE_URL, FETCH_TIMEOUT_MS, RegistryConfig, log_path,
};
use freshness_check::logging::{LogTarget, init_logging};
use freshness_check::version::sink::StderrSink;

#[derive(Parser)]
#[command(name = "freshness-check")]
#[command(version, about = "Report whether a newer release of a package is published")]
struct Cli {
    /// Release-metadata endpoint to query
    #[arg(long, default_value = DEFAULT_SERVICE_URL)]
    service_url: String,

    /// Package name reported to the registry
    #[arg(long, default_value = DEFAULT_PACKAGE_NAME)]
    package: String,

    /// Version considered to be running
    #[arg(long, default_value = env!("CARGO_PKG_VERSION"))]
    current_version: String,

    /// Registry query timeout in milliseconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Write JSON logs to a file instead of stderr (defaults to the data directory)
    #[arg(long, value_name = "PATH")]
    log_file: Option<Option<PathBuf>>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let target = match cli.log_file {
        Some(Some(path)) => LogTarget::File(path),
        Some(None) => LogTarget::File(log_path()),
        None => LogTarget::Stderr,
    };
    let _guard = init_logging(target)?;

    let config = RegistryConfig {
        enabled: true,
        service_url: cli.service_url,
        package_name: cli.package,
        timeout_ms: cli.timeout_ms,
    };

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(freshness_check::check(
            &cli.current_version,
            &config,
            &StderrSink,
        ));

    Ok(())
}
