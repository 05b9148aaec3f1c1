use std::path::PathBuf;

use clap::Parser;
use tracing::error;

use jpyc_stats::{env::ENV_CONFIG, log, update_jpyc_stats, DuneApiHttp, Paths};

/// Fetches the latest JPYC stats from Dune, stores them as CSV and updates the README summary.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the README.md to update. Defaults to this crate's directory.
    #[clap(long)]
    repo_root: Option<PathBuf>,
    /// Directory the CSV and timestamp files are written to. Defaults to <repo-root>/data.
    #[clap(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    log::init();

    let cli = Cli::parse();

    let dune_api_key = match ENV_CONFIG.require_dune_api_key() {
        Ok(dune_api_key) => dune_api_key,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let mut paths = match cli.repo_root {
        Some(repo_root) => Paths::from_repo_root(&repo_root),
        None => Paths::from_manifest_dir(),
    };
    if let Some(data_dir) = cli.data_dir {
        paths.data_dir = data_dir;
    }

    let dune_api = DuneApiHttp::new_with_url(dune_api_key, &ENV_CONFIG.dune_api_url);
    update_jpyc_stats(&dune_api, &paths).await?;

    Ok(())
}
