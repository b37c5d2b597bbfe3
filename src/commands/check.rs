//! Validate all content

use anyhow::Result;

use crate::content::audit;
use crate::Site;

/// Report schema violations, dangling references and stale slugs.
///
/// Fails when any error-level issue is found.
pub async fn run(site: &Site) -> Result<()> {
    tracing::info!("Checking content in {:?}", site.content_dir);
    let report = audit(site.store()).await?;

    for issue in &report.issues {
        println!("{}", issue);
    }
    println!(
        "Checked {} entries: {} errors, {} warnings",
        report.checked,
        report.errors(),
        report.warnings()
    );

    if report.has_errors() {
        anyhow::bail!("Content check failed with {} errors", report.errors());
    }
    Ok(())
}
