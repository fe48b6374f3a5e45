use crate::markup::render_page;
use crate::nav::INDEX_PAGE;
use landing_kit_core::PageConfig;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Split a config into one document per section
///
/// `index.html` holds the first section; every later section gets
/// `<id>.html` holding just that block. Entries equal to the first section and
/// repeated entries are skipped, as is any section whose file name would
/// overwrite `index.html`. Pages come back in section order.
///
/// Unlike a plain render of each narrowed config, whose navigation would only
/// list the sections on that page, every page here navigates over all
/// sections of `config`, and the first section links to `index.html` instead
/// of a `<first>.html` that is never written.
pub fn render_multi_page(config: &PageConfig) -> Vec<(String, String)> {
    let multi = PageConfig {
        single_page: false,
        ..config.clone()
    };
    let nav_sections = &config.sections;

    let first = config.sections.first();
    let index_sections = first.cloned().into_iter().collect();
    let mut pages = vec![(
        INDEX_PAGE.to_string(),
        render_page(&multi.with_sections(index_sections), nav_sections),
    )];

    let mut written = BTreeSet::from([INDEX_PAGE.to_string()]);

    for section in config.sections.iter().skip(1) {
        if Some(section) == first {
            continue;
        }

        let file_name = format!("{}.html", section.id());
        if file_name == INDEX_PAGE {
            warn!("Section '{}' would overwrite {}, skipping it", section, INDEX_PAGE);
            continue;
        }
        if !written.insert(file_name.clone()) {
            debug!("Section '{}' already has a page", section);
            continue;
        }

        let html = render_page(&multi.with_sections(vec![section.clone()]), nav_sections);
        pages.push((file_name, html));
    }

    pages
}
