//! Listing page model and HTML template.

use std::cmp::Ordering;

use bucketsite_core::url::join_path;
use bucketsite_core::{Node, SiteConfig, UrlResolver};
use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, html};

use crate::assets::{ASSETS_DIR, STYLESHEET_NAME};

/// Everything the template needs to render one folder.
#[derive(Debug)]
pub struct ListingPage<'a> {
    config: &'a SiteConfig,
    folder: &'a Node,
    entries: Vec<&'a Node>,
}

impl<'a> ListingPage<'a> {
    /// Build the page model: hidden files are dropped unless the
    /// configuration asks for them, then folders sort before files and
    /// names compare case-insensitively.
    #[must_use]
    pub fn new(config: &'a SiteConfig, folder: &'a Node, children: &[&'a Node]) -> Self {
        let mut entries: Vec<&Node> = children
            .iter()
            .copied()
            .filter(|n| config.include_hidden_files || !n.is_hidden_file())
            .collect();
        entries.sort_by(|a, b| compare_entries(a, b));
        Self {
            config,
            folder,
            entries,
        }
    }

    /// Children shown on the page, in display order.
    #[must_use]
    pub fn entries(&self) -> &[&'a Node] {
        &self.entries
    }

    /// `<title>` text.
    #[must_use]
    pub fn title(&self) -> String {
        let site = self.config.site_title();
        if self.folder.is_root() {
            site.to_owned()
        } else {
            format!("{site}/{}", self.folder.key)
        }
    }

    /// Render the page to an HTML string.
    #[must_use]
    pub fn render(&self) -> String {
        self.markup().into_string()
    }

    fn markup(&self) -> Markup {
        let resolver = UrlResolver::new(self.config);
        let stylesheet = join_path(
            self.config.root_path(),
            &[ASSETS_DIR.to_owned(), STYLESHEET_NAME.to_owned()],
        );
        let parts = &self.folder.key_parts;

        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (self.title()) }
                    link rel="stylesheet" href=(stylesheet);
                }
                body {
                    nav.breadcrumbs {
                        a href=(resolver.folder_url(&[])) { (self.config.site_title()) }
                        @for depth in 1..=parts.len() {
                            span.sep { "/" }
                            @if depth == parts.len() {
                                span.current { (parts[depth - 1]) }
                            } @else {
                                a href=(resolver.folder_url(&parts[..depth])) { (parts[depth - 1]) }
                            }
                        }
                    }
                    main {
                        @if self.entries.is_empty() && parts.is_empty() {
                            p.empty { "This bucket is empty." }
                        } @else {
                            table.listing {
                                thead {
                                    tr {
                                        th.name { "Name" }
                                        th.size { "Size" }
                                        th.modified { "Last modified" }
                                    }
                                }
                                tbody {
                                    @if let Some((_, ancestors)) = parts.split_last() {
                                        tr.parent {
                                            td.name { a href=(resolver.folder_url(ancestors)) { ".." } }
                                            td.size {}
                                            td.modified {}
                                        }
                                    }
                                    @for entry in &self.entries {
                                        (entry_row(entry))
                                    }
                                }
                            }
                        }
                    }
                    @if let Some(footer) = self.config.footer.as_deref().filter(|f| !f.trim().is_empty()) {
                        footer { (footer) }
                    }
                }
            }
        }
    }
}

fn entry_row(entry: &Node) -> Markup {
    html! {
        tr {
            td.name {
                @if entry.is_folder() {
                    a.folder href=(entry.url) { (entry.file_name) }
                } @else {
                    a.file href=(entry.url) { (entry.file_name) }
                }
            }
            td.size { (entry.size.map(format_size).unwrap_or_default()) }
            td.modified { (entry.last_modified.map(format_time).unwrap_or_default()) }
        }
    }
}

/// Folders before files; within a kind, case-insensitive name order. Names
/// differing only in case put lowercase first so the order is total.
#[must_use]
pub fn compare_entries(a: &Node, b: &Node) -> Ordering {
    b.is_folder()
        .cmp(&a.is_folder())
        .then_with(|| compare_names(&a.file_name, &b.file_name))
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Human-readable size with binary units.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["KiB", "MiB", "GiB", "TiB", "PiB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

fn format_time(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M UTC").to_string()
}
