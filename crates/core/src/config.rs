use crate::error::{Error, Result};
use crate::types::*;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File names probed by [`locate_config`], in order of preference
pub const CONFIG_FILE_NAMES: &[&str] = &["page.toml", "page.json"];

/// Raw TOML configuration structure
/// This matches the page.toml file structure exactly
#[derive(Debug, Deserialize)]
struct RawConfig {
    page: RawPage,
    #[serde(default)]
    theme: RawTheme,
    #[serde(default)]
    nav: BTreeMap<String, String>,
    #[serde(default)]
    hero: Option<Hero>,
    #[serde(default)]
    features_section: Option<FeaturesSection>,
    #[serde(default)]
    feature: Vec<Feature>,
    #[serde(default)]
    about: Option<About>,
    #[serde(default)]
    contact: Option<Contact>,
}

#[derive(Debug, Deserialize)]
struct RawPage {
    title: String,
    #[serde(default)]
    description: String,
    layout: Option<String>, // Parse as Layout
    sections: Vec<String>,
    single_page: Option<bool>,
    #[serde(default)]
    images: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawTheme {
    primary_color: Option<String>,
    secondary_color: Option<String>,
    background_color: Option<String>,
    text_color: Option<String>,
    font_family: Option<String>,
}

/// Find the configuration file inside a project directory
pub fn locate_config<P: AsRef<Path>>(dir: P) -> Result<PathBuf> {
    let dir = dir.as_ref();
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| {
            Error::ConfigParse(format!(
                "No {} found in {}",
                CONFIG_FILE_NAMES.join(" or "),
                dir.display()
            ))
        })
}

/// Parse a page configuration file, choosing the format from its extension
pub fn parse_page_config<P: AsRef<Path>>(path: P) -> Result<PageConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => parse_page_json_str(&content),
        _ => parse_page_toml_str(&content),
    }
}

/// Parse the editor's JSON representation
pub fn parse_page_json_str(content: &str) -> Result<PageConfig> {
    Ok(serde_json::from_str(content)?)
}

/// Parse page.toml from a string (useful for testing)
pub fn parse_page_toml_str(content: &str) -> Result<PageConfig> {
    let raw: RawConfig = toml::from_str(content)?;

    let layout = match raw.page.layout {
        Some(layout) => layout
            .parse::<Layout>()
            .map_err(|e| Error::ConfigParse(format!("Invalid page.layout: {}", e)))?,
        None => Layout::default(),
    };

    let sections = raw
        .page
        .sections
        .iter()
        .map(|id| {
            if id.trim().is_empty() {
                Err(Error::ConfigParse(
                    "Empty identifier in page.sections".to_string(),
                ))
            } else {
                Ok(Section::from_id(id))
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PageConfig {
        layout,
        primary_color: raw
            .theme
            .primary_color
            .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string()),
        secondary_color: raw
            .theme
            .secondary_color
            .unwrap_or_else(|| DEFAULT_SECONDARY_COLOR.to_string()),
        background_color: raw
            .theme
            .background_color
            .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.to_string()),
        text_color: raw
            .theme
            .text_color
            .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string()),
        font_family: raw.theme.font_family.unwrap_or_else(|| "Inter".to_string()),
        title: raw.page.title,
        description: raw.page.description,
        sections,
        single_page: raw.page.single_page.unwrap_or(true),
        images: raw.page.images,
        nav_items: raw.nav,
        features_section: raw.features_section,
        features: raw.feature,
        hero: raw.hero,
        about: raw.about,
        contact: raw.contact,
    })
}

/// Validate and convert a relative path string to PathBuf.
///
/// Rejects absolute paths, parent directory references (`..`) and empty
/// strings, so that nothing derived from a config file can be written
/// outside the directory it is joined onto.
///
/// ```text
/// validate_path("features.html", "page")        → Ok(PathBuf)
/// validate_path("../index.html", "page")        → Err("Parent directory references...")
/// validate_path("/etc/passwd", "page")          → Err("Absolute paths not allowed...")
/// ```
pub fn validate_path(path_str: &str, field_name: &str) -> Result<PathBuf> {
    let path = Path::new(path_str);

    if path_str.trim().is_empty() {
        return Err(Error::InvalidData(format!(
            "Empty path in '{}' field",
            field_name
        )));
    }

    if path.is_absolute() || path_str.starts_with('/') || path_str.starts_with('\\') {
        return Err(Error::InvalidData(format!(
            "Absolute paths not allowed in '{}': '{}'. Use relative paths only.",
            field_name, path_str
        )));
    }

    for component in path.components() {
        if component == std::path::Component::ParentDir {
            return Err(Error::InvalidData(format!(
                "Parent directory references (..) not allowed in '{}': '{}'",
                field_name, path_str
            )));
        }
    }

    Ok(path.to_path_buf())
}

/// Validate a file name that must stay in the output root (no directories)
pub fn validate_file_name(name: &str, field_name: &str) -> Result<PathBuf> {
    let path = validate_path(name, field_name)?;
    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidData(format!(
            "Path separators not allowed in '{}': '{}'",
            field_name, name
        )));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_TOML: &str = r##"
[page]
title = "T"
description = "Desc"
sections = ["hero", "contact"]
"##;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_page_toml_str(MINIMAL_TOML).unwrap();
        assert_eq!(config.title, "T");
        assert_eq!(config.layout, Layout::TopNavbar);
        assert_eq!(config.sections, vec![Section::Hero, Section::Contact]);
        assert_eq!(config.primary_color, DEFAULT_PRIMARY_COLOR);
        assert_eq!(config.font_family, "Inter");
        assert!(config.single_page);
        assert!(config.hero.is_none());
        assert!(config.contact.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r##"
[page]
title = "Acme"
description = "We build things"
layout = "left-sidebar"
sections = ["hero", "features", "team"]
single_page = false
images = ["images/one.jpg", "images/two.jpg"]

[theme]
primary_color = "#3182ce"
secondary_color = "#805ad5"
background_color = "#fff"
text_color = "#111111"
font_family = "Open Sans"

[nav]
features = "What we do"

[hero]
title = "Hello"
pills = ["Fast", "Cheap"]
background_image = "images/hero.jpg"

[features_section]
title = "SERVICES"

[[feature]]
title = "One"
description = "First"

[[feature]]
title = "Two"
description = "Second"
link = "https://example.com"
"##;

        let config = parse_page_toml_str(toml).unwrap();
        assert_eq!(config.layout, Layout::LeftSidebar);
        assert!(!config.single_page);
        assert_eq!(config.sections[2], Section::Custom("team".to_string()));
        assert_eq!(config.nav_items.get("features").unwrap(), "What we do");
        assert_eq!(config.font_family, "Open Sans");
        assert_eq!(config.features.len(), 2);
        assert_eq!(config.features[0].link, None);
        assert_eq!(
            config.features[1].link.as_deref(),
            Some("https://example.com")
        );

        let hero = config.hero.unwrap();
        assert_eq!(hero.title, "Hello");
        assert_eq!(hero.description, "");
        assert_eq!(hero.background_image, "images/hero.jpg");

        let features_section = config.features_section.unwrap();
        assert_eq!(features_section.title, "SERVICES");
        assert_eq!(features_section.subtitle, "");
    }

    #[test]
    fn test_parse_rejects_unknown_layout() {
        let toml = r##"
[page]
title = "T"
layout = "bottom-bar"
sections = ["hero"]
"##;
        let result = parse_page_toml_str(toml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("page.layout"));
    }

    #[test]
    fn test_parse_rejects_blank_section() {
        let toml = r##"
[page]
title = "T"
sections = ["hero", "  "]
"##;
        assert!(parse_page_toml_str(toml).is_err());
    }

    #[test]
    fn test_parse_json_editor_format() {
        let json = r##"{
            "layout": "right-sidebar",
            "primaryColor": "#ff0000",
            "secondaryColor": "#00ff00",
            "backgroundColor": "#ffffff",
            "textColor": "#000000",
            "fontFamily": "Inter",
            "title": "T",
            "description": "Desc",
            "sections": ["hero", "gallery"],
            "singlePage": false,
            "navItems": {"hero": "Home"},
            "hero": {"title": "Hi", "backgroundImage": "data:image/png;base64,AAAA"},
            "contact": {"phone": "1", "location": "L", "hours": "H"}
        }"##;

        let config = parse_page_json_str(json).unwrap();
        assert_eq!(config.layout, Layout::RightSidebar);
        assert!(!config.single_page);
        assert_eq!(config.sections[1], Section::Custom("gallery".to_string()));
        assert_eq!(config.nav_items.get("hero").unwrap(), "Home");
        assert_eq!(
            config.hero.unwrap().background_image,
            "data:image/png;base64,AAAA"
        );
        assert!(config.contact.unwrap().title.is_none());
        assert!(config.images.is_empty());
    }

    #[test]
    fn test_json_round_trip_of_default_config() {
        let config = PageConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"primaryColor\":\"#e25822\""));
        assert!(json.contains("\"layout\":\"top-navbar\""));
        assert_eq!(parse_page_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_parse_page_config_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("page.toml");
        std::fs::write(&toml_path, MINIMAL_TOML).unwrap();
        assert_eq!(parse_page_config(&toml_path).unwrap().title, "T");

        let json_path = dir.path().join("page.json");
        std::fs::write(
            &json_path,
            serde_json::to_string(&PageConfig::default()).unwrap(),
        )
        .unwrap();
        assert_eq!(
            parse_page_config(&json_path).unwrap(),
            PageConfig::default()
        );
    }

    #[test]
    fn test_locate_config_prefers_toml() {
        let dir = tempfile::tempdir().unwrap();
        assert!(locate_config(dir.path()).is_err());

        std::fs::write(dir.path().join("page.json"), "{}").unwrap();
        assert_eq!(
            locate_config(dir.path()).unwrap(),
            dir.path().join("page.json")
        );

        std::fs::write(dir.path().join("page.toml"), MINIMAL_TOML).unwrap();
        assert_eq!(
            locate_config(dir.path()).unwrap(),
            dir.path().join("page.toml")
        );
    }

    #[test]
    fn test_validate_path_valid_relative() {
        assert!(validate_path("index.html", "page").is_ok());
        assert!(validate_path("images/hero.jpg", "image").is_ok());
    }

    #[test]
    fn test_validate_path_rejects_traversal_and_absolute() {
        let result = validate_path("../secret.html", "page");
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Parent directory references")
        );

        let result = validate_path("/etc/passwd", "page");
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Absolute paths not allowed")
        );

        assert!(validate_path("   ", "page").is_err());
    }

    #[test]
    fn test_validate_file_name_rejects_separators() {
        assert!(validate_file_name("pricing.html", "page").is_ok());
        let result = validate_file_name("nested/pricing.html", "page");
        assert!(result.unwrap_err().to_string().contains("Path separators"));
        assert!(validate_file_name("a\\b.html", "page").is_err());
    }
}
