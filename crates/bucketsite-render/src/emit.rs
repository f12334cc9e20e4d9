//! Page and sitemap emission.
//!
//! Pages for different folders share nothing, so each write runs as its own
//! task; the asset copy runs alongside them on a blocking thread. A bucket
//! folder can land inside `assets/`, so page and asset paths are checked for
//! overlap before any task starts. All tasks are joined before the sitemap is
//! written, and the first failure aborts the run.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use bucketsite_core::url::collapse_slashes;
use bucketsite_core::{Node, SiteConfig, SiteError, SiteTree};
use bucketsite_sitemap::{Sitemap, to_xml};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::assets::{asset_files, install_assets};
use crate::error::{EmitError, EmitResult};
use crate::page::ListingPage;

/// File name of every listing page.
pub const INDEX_FILE: &str = "index.html";

/// File name of the sitemap at the output root.
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// What a run wrote, relative to the output directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitReport {
    /// Listing pages, sorted.
    pub pages: Vec<PathBuf>,
    /// Number of asset files written.
    pub assets: usize,
    /// Sitemap path, when one was written.
    pub sitemap: Option<PathBuf>,
}

#[derive(Debug)]
enum Emitted {
    Page(PathBuf),
    Assets(usize),
}

/// Write one listing page per folder, the static assets and, if enabled,
/// the sitemap.
///
/// # Errors
///
/// Fails before writing anything if the configuration is invalid or a page
/// would overlap a static asset; otherwise returns the first I/O,
/// serialization or task error encountered.
pub async fn emit_site(tree: &SiteTree, config: &SiteConfig) -> EmitResult<EmitReport> {
    config.validate()?;
    let output = config.output.clone();

    let mut listings = Vec::new();
    let mut page_paths = Vec::new();
    for (folder, children) in tree.folder_listings() {
        let Some(relative) = page_path(folder) else {
            warn!(key = %folder.key, "skipping folder with a relative path segment");
            continue;
        };
        listings.push((folder, children));
        page_paths.push(relative);
    }

    let extra = config.assets_dir.clone();
    let asset_paths =
        tokio::task::spawn_blocking(move || asset_files(extra.as_deref())).await??;
    if let Some((page, asset)) = find_collision(&page_paths, &asset_paths) {
        return Err(EmitError::AssetCollision { page, asset });
    }

    let mut tasks = JoinSet::new();
    {
        let output = output.clone();
        let extra = config.assets_dir.clone();
        tasks.spawn_blocking(move || install_assets(&output, extra.as_deref()).map(Emitted::Assets));
    }

    let mut emitted_folders = Vec::with_capacity(listings.len());
    for ((folder, children), relative) in listings.into_iter().zip(page_paths) {
        let html = ListingPage::new(config, folder, &children).render();
        let path = output.join(&relative);
        emitted_folders.push(folder);
        tasks.spawn(async move { write_file(&path, html).await.map(|()| Emitted::Page(relative)) });
    }

    let mut report = EmitReport::default();
    while let Some(joined) = tasks.join_next().await {
        match joined?? {
            Emitted::Page(path) => report.pages.push(path),
            Emitted::Assets(count) => report.assets = count,
        }
    }
    report.pages.sort();
    info!(pages = report.pages.len(), assets = report.assets, "wrote listing pages");

    if config.include_sitemap {
        let domain = config.domain().ok_or(SiteError::MissingDomain)?;
        let sitemap: Sitemap = emitted_folders
            .iter()
            .map(|folder| sitemap_location(domain, folder))
            .collect();
        let path = output.join(SITEMAP_FILE);
        write_file(&path, to_xml(&sitemap)?).await?;
        info!(entries = sitemap.len(), path = %path.display(), "wrote sitemap");
        report.sitemap = Some(PathBuf::from(SITEMAP_FILE));
    }

    Ok(report)
}

/// Output path of a folder's page, relative to the output directory.
///
/// Returns `None` for keys containing `.` or `..` segments, which would
/// resolve outside the folder's own directory.
#[must_use]
pub fn page_path(folder: &Node) -> Option<PathBuf> {
    let mut path = PathBuf::new();
    for part in &folder.key_parts {
        if part == "." || part == ".." {
            return None;
        }
        path.push(part);
    }
    path.push(INDEX_FILE);
    Some(path)
}

/// Absolute sitemap URL of a folder's page.
#[must_use]
pub fn sitemap_location(domain: &str, folder: &Node) -> String {
    collapse_slashes(&format!(
        "{}/{}/{INDEX_FILE}",
        domain.trim_end_matches('/'),
        folder.url
    ))
}

/// First page/asset pair where one path equals or contains the other.
fn find_collision(pages: &[PathBuf], assets: &[PathBuf]) -> Option<(PathBuf, PathBuf)> {
    let page_set: HashSet<&Path> = pages.iter().map(PathBuf::as_path).collect();
    let asset_set: HashSet<&Path> = assets.iter().map(PathBuf::as_path).collect();

    for page in pages {
        if let Some(asset) = page.ancestors().find(|p| asset_set.contains(p)) {
            return Some((page.clone(), asset.to_path_buf()));
        }
    }
    for asset in assets {
        if let Some(page) = asset.ancestors().find(|p| page_set.contains(p)) {
            return Some((page.to_path_buf(), asset.clone()));
        }
    }
    None
}

async fn write_file(path: &Path, contents: String) -> EmitResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| EmitError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
    }
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| EmitError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), "wrote file");
    Ok(())
}
