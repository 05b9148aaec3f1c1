//! One run of the updater: fetch both queries, stamp the time, refresh the README.

use std::fs;

use anyhow::Result;
use tracing::info;

use crate::{
    dune::DuneApi,
    fetch::fetch_and_save,
    paths::Paths,
    queries::{JPYC_DAILY, JPYC_MONTHLY},
    readme, time,
};

/// Runs the full update and returns the timestamp it recorded.
pub async fn update_jpyc_stats(dune_api: &impl DuneApi, paths: &Paths) -> Result<String> {
    fs::create_dir_all(&paths.data_dir)?;

    let monthly = fetch_and_save(dune_api, &JPYC_MONTHLY, &paths.data_dir).await?;
    let daily = fetch_and_save(dune_api, &JPYC_DAILY, &paths.data_dir).await?;

    // Taken after both fetches, the README and the timestamp file share it.
    let last_updated = time::get_timestamp();
    fs::write(paths.last_updated_path(), format!("{last_updated}\n"))?;

    let section = readme::generate_readme_section(&monthly, &daily, &last_updated);
    readme::update_readme(&paths.repo_root, &section)?;

    info!("done, last updated: {last_updated}");

    Ok(last_updated)
}
