//! Configuration checks run before a build.
//!
//! The generator renders anything it is given; this crate is where a config
//! gets judged. Nothing here fails: findings are collected into a
//! [`ValidationReport`] and the caller decides what to do with them.

use landing_kit_core::config::validate_file_name;
use landing_kit_core::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR, DEFAULT_TEXT_COLOR,
    PageConfig, Section, is_hex_color,
};
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    /// No errors (warnings are allowed)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check a config for problems the generator would silently paper over
pub fn validate_config(config: &PageConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_text(config, &mut report);
    check_colors(config, &mut report);
    check_sections(config, &mut report);
    check_nav_items(config, &mut report);
    check_content(config, &mut report);

    report.info.push(format!(
        "{} section(s), {} layout, {}",
        config.sections.len(),
        config.layout,
        if config.single_page {
            "single page"
        } else {
            "one page per section"
        }
    ));

    debug!(
        "Validated '{}': {} error(s), {} warning(s)",
        config.title,
        report.errors.len(),
        report.warnings.len()
    );

    report
}

fn check_text(config: &PageConfig, report: &mut ValidationReport) {
    if config.title.trim().is_empty() {
        report.warnings.push("Page title is empty".to_string());
    }
    if config.description.trim().is_empty() {
        report
            .warnings
            .push("Page description is empty; hero, about and custom blocks fall back to it".to_string());
    }
    if config.font_family.trim().is_empty() {
        report
            .warnings
            .push("Font family is empty; browsers will use their default font".to_string());
    }
}

/// (field name, current value, default) for each configured color
fn color_fields(config: &mut PageConfig) -> [(&'static str, &mut String, &'static str); 4] {
    [
        (
            "primaryColor",
            &mut config.primary_color,
            DEFAULT_PRIMARY_COLOR,
        ),
        (
            "secondaryColor",
            &mut config.secondary_color,
            DEFAULT_SECONDARY_COLOR,
        ),
        (
            "backgroundColor",
            &mut config.background_color,
            DEFAULT_BACKGROUND_COLOR,
        ),
        ("textColor", &mut config.text_color, DEFAULT_TEXT_COLOR),
    ]
}

fn check_colors(config: &PageConfig, report: &mut ValidationReport) {
    let mut normalized = config.clone();
    report.warnings.extend(normalize_colors(&mut normalized));
}

/// Replace every color that is not `#RRGGBB`/`#RGB` with its default
///
/// Returns one message per replaced color.
pub fn normalize_colors(config: &mut PageConfig) -> Vec<String> {
    let mut replaced = Vec::new();
    for (field, value, default) in color_fields(config) {
        if !is_hex_color(value) {
            replaced.push(format!(
                "{} '{}' is not a hex color (#RRGGBB or #RGB); using {}",
                field, value, default
            ));
            *value = default.to_string();
        }
    }
    replaced
}

fn check_sections(config: &PageConfig, report: &mut ValidationReport) {
    if config.sections.is_empty() {
        report
            .warnings
            .push("No sections configured; the page will only contain navigation".to_string());
        return;
    }

    let mut seen = BTreeSet::new();
    for section in &config.sections {
        let id = section.id();

        if id.trim().is_empty() {
            report.errors.push("Empty section identifier".to_string());
            continue;
        }

        if !seen.insert(id) {
            report.warnings.push(format!(
                "Section '{}' appears more than once; it is rendered each time",
                id
            ));
        }

        if let Err(e) = validate_file_name(&format!("{}.html", id), "sections") {
            if config.single_page {
                report.warnings.push(format!(
                    "Section '{}' cannot be used in multi-page mode: {}",
                    id, e
                ));
            } else {
                report
                    .errors
                    .push(format!("Section '{}' cannot be used as a page: {}", id, e));
            }
        }

        if id.chars().any(char::is_whitespace) {
            report.warnings.push(format!(
                "Section '{}' contains whitespace; its #anchor will not work",
                id
            ));
        }
    }

    if !config.single_page {
        let first = &config.sections[0];
        if config
            .sections
            .iter()
            .skip(1)
            .any(|s| s != first && s.id() == "index")
        {
            report.warnings.push(
                "Section 'index' would overwrite index.html and is skipped in multi-page mode"
                    .to_string(),
            );
        }
    }
}

fn check_nav_items(config: &PageConfig, report: &mut ValidationReport) {
    for (key, label) in &config.nav_items {
        if !config.sections.iter().any(|s| s.id() == key) {
            report.warnings.push(format!(
                "Navigation label for '{}' has no matching section",
                key
            ));
        } else if label.trim().is_empty() {
            report.info.push(format!(
                "Navigation label for '{}' is empty; the section name is used",
                key
            ));
        }
    }
}

fn check_content(config: &PageConfig, report: &mut ValidationReport) {
    let has = |section: Section| config.sections.contains(&section);

    if has(Section::Features) && config.features.is_empty() {
        report
            .warnings
            .push("Features section has no feature cards".to_string());
    }

    for (index, feature) in config.features.iter().enumerate() {
        if feature.title.trim().is_empty() {
            report
                .warnings
                .push(format!("Feature #{} has no title", index + 1));
        }
    }

    let unused = [
        (!config.features.is_empty(), Section::Features),
        (config.hero.is_some(), Section::Hero),
        (config.about.is_some(), Section::About),
        (config.contact.is_some(), Section::Contact),
    ];
    for (present, section) in unused {
        if present && !has(section.clone()) {
            report.info.push(format!(
                "'{}' content is configured but the section is not listed",
                section
            ));
        }
    }

    let empty_images = config.images.iter().filter(|i| i.trim().is_empty()).count();
    if empty_images > 0 {
        report.warnings.push(format!(
            "{} empty image path(s); placeholders are drawn instead",
            empty_images
        ));
    }
}
