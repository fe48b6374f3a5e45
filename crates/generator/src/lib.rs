//! Static landing page generation.
//!
//! Every function here is a pure transformation of a [`PageConfig`] into
//! strings: no I/O, no shared state, same input gives byte-identical output.

pub mod behavior;
pub mod blocks;
pub mod color;
pub mod escape;
pub mod markup;
pub mod nav;
pub mod pages;
pub mod resolve;
pub mod styles;

pub use behavior::render_behavior;
pub use color::{Palette, shade, with_alpha};
pub use escape::html_escape;
pub use markup::{
    SCRIPT_FILE, STYLESHEET_FILE, font_stylesheet_href, render_inline_document, render_markup,
};
pub use nav::INDEX_PAGE;
pub use pages::render_multi_page;
pub use resolve::{Block, ImageSlot, resolve_blocks};
pub use styles::render_styles;

use landing_kit_core::PageConfig;
use tracing::debug;

/// Every file of an exported site
pub struct GeneratedSite {
    pub pages: Vec<(String, String)>,  // (file name, html)
    pub assets: Vec<(String, String)>, // (file name, contents)
}

impl GeneratedSite {
    /// Look up a page or asset by file name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.files()
            .find(|(file, _)| *file == name)
            .map(|(_, contents)| contents)
    }

    /// Pages first, then assets
    pub fn files(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pages
            .iter()
            .chain(self.assets.iter())
            .map(|(name, contents)| (name.as_str(), contents.as_str()))
    }
}

/// Render every file for `config`
///
/// Single-page configs produce `index.html`; otherwise the pages come from
/// [`render_multi_page`]. The stylesheet and script are rendered once and
/// shared by all pages.
pub fn generate_site(config: &PageConfig) -> GeneratedSite {
    let pages = if config.single_page {
        vec![(INDEX_PAGE.to_string(), render_markup(config))]
    } else {
        render_multi_page(config)
    };

    let assets = vec![
        (STYLESHEET_FILE.to_string(), render_styles(config)),
        (SCRIPT_FILE.to_string(), render_behavior(config)),
    ];

    debug!(
        "Generated {} page(s) and {} asset(s) for '{}'",
        pages.len(),
        assets.len(),
        config.title
    );

    GeneratedSite { pages, assets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_kit_core::Section;

    #[test]
    fn test_single_page_site() {
        let site = generate_site(&PageConfig::default());
        let names: Vec<_> = site.files().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["index.html", "styles.css", "script.js"]);
        assert!(site.get("index.html").unwrap().contains(r#"<section id="contact""#));
        assert!(site.get("missing.html").is_none());
    }

    #[test]
    fn test_multi_page_site_shares_assets() {
        let config = PageConfig {
            single_page: false,
            sections: vec![Section::Hero, Section::About],
            ..PageConfig::default()
        };
        let site = generate_site(&config);
        assert_eq!(site.pages.len(), 2);
        assert_eq!(site.assets.len(), 2);
        assert_eq!(site.get("styles.css").unwrap(), render_styles(&config));
    }
}
