//! Run orchestration: validate, list, build the tree, emit.

use anyhow::{Context, Result};
use bucketsite_core::{SiteConfig, SiteTree};
use bucketsite_listing::{ObjectLister, list_all};
use bucketsite_render::{EmitReport, emit_site};
use tracing::{debug, info};

/// Counts reported at the end of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Objects returned by the listing.
    pub objects: usize,
    /// Nodes in the reconstructed tree, root included.
    pub nodes: usize,
    /// What the emitter wrote.
    pub emitted: EmitReport,
}

/// Generate the site for `config` from the objects `lister` returns.
///
/// The configuration is validated before the first listing call, so a
/// rejected configuration never touches the network or the filesystem.
pub async fn run(config: &SiteConfig, lister: &dyn ObjectLister) -> Result<RunSummary> {
    config.validate()?;
    debug!(config = %serde_json::to_string(config)?, "effective configuration");

    let objects = list_all(lister)
        .await
        .with_context(|| format!("failed to list bucket {}", config.bucket))?;
    info!(bucket = %config.bucket, objects = objects.len(), "listed bucket");

    let tree = SiteTree::build(&objects, config);
    let emitted = emit_site(&tree, config)
        .await
        .with_context(|| format!("failed to write site to {}", config.output.display()))?;

    let summary = RunSummary {
        objects: objects.len(),
        nodes: tree.len(),
        emitted,
    };
    info!(
        objects = summary.objects,
        nodes = summary.nodes,
        pages = summary.emitted.pages.len(),
        sitemap = summary.emitted.sitemap.is_some(),
        output = %config.output.display(),
        "site generated"
    );
    Ok(summary)
}
