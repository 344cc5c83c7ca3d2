//! Contract harness: replays HTTP fixtures against a running auth or library
//! service and checks status, headers and error kinds.
//!
//! # Usage
//!
//! ```bash
//! # Auth service fixtures
//! cargo run -p contract-harness -- --base-url http://localhost:3112 --service auth
//!
//! # Library service fixtures
//! cargo run -p contract-harness -- --base-url http://localhost:3114 --service library
//! ```
//!
//! Exits 0 when all assertions pass, exits 1 when any fail.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};

mod fixture;
mod reporter;
mod runner;

use reporter::Reporter;
use runner::Runner;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Service {
    Auth,
    Library,
}

impl Service {
    fn dir_name(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Library => "library",
        }
    }
}

#[derive(Parser)]
#[command(about = "Run HTTP contract assertions against a live service")]
struct Args {
    /// Base URL of the service (e.g. http://localhost:3112)
    #[arg(long)]
    base_url: String,

    /// Run only fixtures for this service; all services when omitted
    #[arg(long, value_enum)]
    service: Option<Service>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contract_harness=info".into()),
        )
        .init();

    let args = Args::parse();

    let root = contracts_root(Path::new(env!("CARGO_MANIFEST_DIR")));
    let fixtures = fixture::load_all(&root, args.service.map(Service::dir_name))?;

    if fixtures.is_empty() {
        tracing::warn!(root = %root.display(), "no fixtures found");
        return Ok(());
    }

    println!(
        "Running {} fixture(s) against {}",
        fixtures.len(),
        args.base_url
    );
    println!();

    let runner = Runner::new(&args.base_url);
    let mut reporter = Reporter::default();

    for f in &fixtures {
        let result = runner.run(f).await;
        reporter.record(f, &result);
    }

    reporter.print_summary();

    if reporter.all_passed() {
        Ok(())
    } else {
        std::process::exit(1);
    }
}

/// Nearest ancestor of `start` holding a `contracts/http` directory, falling
/// back to `start` itself.
fn contracts_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|p| p.join("contracts/http").is_dir())
        .unwrap_or(start)
        .to_path_buf()
}
