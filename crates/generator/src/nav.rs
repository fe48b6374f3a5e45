//! Navigation chrome: top bar, sidebar and the mobile tab bar.

use crate::escape::html_escape;
use landing_kit_core::{Layout, PageConfig, Section};

/// Page the first section lands on in multi-page output
pub const INDEX_PAGE: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub section_id: String,
    pub href: String,
    pub label: String,
}

/// One link per entry of `sections`, duplicates included
///
/// Labels come from `nav_items`, falling back to the capitalized identifier.
/// Single-page links are in-page anchors; multi-page links point at the
/// section's own file, except the first section which lives in `index.html`.
pub fn nav_links(config: &PageConfig, sections: &[Section]) -> Vec<NavLink> {
    let first = sections.first();

    sections
        .iter()
        .map(|section| {
            let id = section.id();
            let href = if config.single_page {
                format!("#{}", id)
            } else if Some(section) == first {
                INDEX_PAGE.to_string()
            } else {
                format!("{}.html", id)
            };
            let label = config
                .nav_items
                .get(id)
                .filter(|label| !label.is_empty())
                .cloned()
                .unwrap_or_else(|| section.display_name());

            NavLink {
                section_id: id.to_string(),
                href,
                label,
            }
        })
        .collect()
}

fn render_links(links: &[NavLink], indent: &str) -> String {
    links
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" class="nav-link" data-section="{}">{}</a>"#,
                html_escape(&link.href),
                html_escape(&link.section_id),
                html_escape(&link.label)
            )
        })
        .collect::<Vec<_>>()
        .join(&format!("\n{}", indent))
}

/// Desktop navigation for the configured layout
pub fn render_navigation(config: &PageConfig, links: &[NavLink]) -> String {
    let title = html_escape(&config.title);

    match config.layout {
        Layout::TopNavbar => format!(
            r#"<nav class="navbar">
      <div class="logo">{}</div>
      <div class="nav-links">
        {}
      </div>
    </nav>"#,
            title,
            render_links(links, "        ")
        ),
        Layout::LeftSidebar | Layout::RightSidebar => format!(
            r#"<nav class="sidebar {}">
      <div class="sidebar-header">
        <div class="logo">{}</div>
        <button class="sidebar-toggle" aria-label="Toggle Sidebar">
          <span class="toggle-icon"></span>
        </button>
      </div>
      <div class="nav-links">
        {}
      </div>
    </nav>"#,
            config.layout.as_str(),
            title,
            render_links(links, "        ")
        ),
    }
}

/// Bottom tab bar shown below 768px, same links as the desktop navigation
pub fn render_tabbar(links: &[NavLink]) -> String {
    format!(
        r#"<div class="mobile-tabbar">
      {}
    </div>"#,
        render_links(links, "      ")
    )
}
