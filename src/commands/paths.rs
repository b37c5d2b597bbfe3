//! Print every static detail path

use anyhow::Result;

use crate::Site;

pub async fn run(site: &Site) -> Result<()> {
    let paths = site.pages().all_paths().await?;
    for path in &paths {
        println!("{}", path);
    }
    tracing::info!("{} paths", paths.len());
    Ok(())
}
