use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Complete landing page configuration
///
/// JSON uses the camelCase keys of the browser editor (`primaryColor`,
/// `navItems`, ...). `page.toml` goes through the raw structure in
/// [`crate::config`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    #[serde(default)]
    pub layout: Layout,
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub font_family: String,
    pub title: String,
    pub description: String,
    pub sections: Vec<Section>,
    #[serde(default = "default_single_page")]
    pub single_page: bool,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub nav_items: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features_section: Option<FeaturesSection>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<Hero>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<About>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

fn default_single_page() -> bool {
    true
}

impl PageConfig {
    /// Copy of this config rendering only the given sections
    pub fn with_sections(&self, sections: Vec<Section>) -> Self {
        Self {
            sections,
            ..self.clone()
        }
    }
}

impl Default for PageConfig {
    /// Starting point offered to a fresh project
    fn default() -> Self {
        Self {
            layout: Layout::TopNavbar,
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary_color: DEFAULT_SECONDARY_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            font_family: "Inter".to_string(),
            title: "My Amazing Landing Page".to_string(),
            description:
                "This is a beautiful landing page created with the Landing Page Generator."
                    .to_string(),
            sections: vec![
                Section::Hero,
                Section::Features,
                Section::About,
                Section::Contact,
            ],
            single_page: true,
            images: Vec::new(),
            nav_items: BTreeMap::new(),
            features_section: Some(FeaturesSection {
                title: "FEATURES".to_string(),
                subtitle: "Our Features & Services.".to_string(),
            }),
            features: vec![
                Feature {
                    title: "Communications".to_string(),
                    description: "Pretium lectus quam id leo in vitae turpis. Mattis pellentesque id nibh tortor id.".to_string(),
                    image: String::new(),
                    link: Some("https://example.com/communications".to_string()),
                },
                Feature {
                    title: "Inspired Design".to_string(),
                    description: "Nunc consequat interdum varius sit amet mattis vulputate enim nulla. Risus feugiat.".to_string(),
                    image: String::new(),
                    link: Some("https://example.com/design".to_string()),
                },
                Feature {
                    title: "Happy Customers".to_string(),
                    description: "Nisl purus in mollis nunc sed id semper. Rhoncus aenean vel elit scelerisque mauris.".to_string(),
                    image: String::new(),
                    link: Some("https://example.com/customers".to_string()),
                },
            ],
            hero: Some(Hero {
                title: "Welcome to Our Platform".to_string(),
                description: "Create beautiful landing pages with our easy-to-use generator."
                    .to_string(),
                pills: DEFAULT_HERO_PILLS.iter().map(|p| p.to_string()).collect(),
                background_image: String::new(),
            }),
            about: Some(About {
                title: "Nice to meet you".to_string(),
                description: "We're a team of passionate designers and developers creating amazing tools for businesses.".to_string(),
                image: String::new(),
            }),
            contact: Some(Contact {
                phone: "1 (234) 567-891, 1 (234) 987-654".to_string(),
                location: "121 Rock Street, 21 Avenue, New York, NY 92103-9000".to_string(),
                hours: "Mon - Fri ......10 am - 8 pm, Sat, Sun ....... Closed".to_string(),
                title: Some("CONTACT".to_string()),
                subtitle: Some("Contact Us".to_string()),
            }),
        }
    }
}

pub const DEFAULT_PRIMARY_COLOR: &str = "#e25822";
pub const DEFAULT_SECONDARY_COLOR: &str = "#10b981";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";
pub const DEFAULT_TEXT_COLOR: &str = "#1f2937";

/// Pills shown in the hero block when none are configured
pub const DEFAULT_HERO_PILLS: &[&str] = &[
    "Designer",
    "Product Designer",
    "Marketing",
    "Full Stack Developer",
];

/// Navigation placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    #[default]
    TopNavbar,
    LeftSidebar,
    RightSidebar,
}

impl Layout {
    /// Identifier used in config files and as a CSS class
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::TopNavbar => "top-navbar",
            Layout::LeftSidebar => "left-sidebar",
            Layout::RightSidebar => "right-sidebar",
        }
    }

    pub fn is_sidebar(&self) -> bool {
        !matches!(self, Layout::TopNavbar)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top-navbar" => Ok(Layout::TopNavbar),
            "left-sidebar" => Ok(Layout::LeftSidebar),
            "right-sidebar" => Ok(Layout::RightSidebar),
            other => Err(format!(
                "unknown layout '{}', expected top-navbar, left-sidebar or right-sidebar",
                other
            )),
        }
    }
}

/// One content block of the page
///
/// Built-in kinds get their own variant; anything else is carried verbatim
/// as `Custom` and rendered as a generic block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Section {
    Hero,
    Features,
    About,
    Contact,
    Custom(String),
}

impl Section {
    pub fn from_id(id: &str) -> Self {
        match id {
            "hero" => Section::Hero,
            "features" => Section::Features,
            "about" => Section::About,
            "contact" => Section::Contact,
            other => Section::Custom(other.to_string()),
        }
    }

    /// Identifier as written in the config; also the anchor id and page name
    pub fn id(&self) -> &str {
        match self {
            Section::Hero => "hero",
            Section::Features => "features",
            Section::About => "about",
            Section::Contact => "contact",
            Section::Custom(id) => id,
        }
    }

    /// Identifier with its first character uppercased
    pub fn display_name(&self) -> String {
        capitalize_first_letter(self.id())
    }
}

impl From<String> for Section {
    fn from(id: String) -> Self {
        Section::from_id(&id)
    }
}

impl From<&str> for Section {
    fn from(id: &str) -> Self {
        Section::from_id(id)
    }
}

impl From<Section> for String {
    fn from(section: Section) -> Self {
        section.id().to_string()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Label and heading of the features block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesSection {
    pub title: String,
    pub subtitle: String,
}

/// Single feature card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub description: String,
    pub pills: Vec<String>,
    #[serde(alias = "background_image")]
    pub background_image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub phone: String,
    pub location: String,
    pub hours: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_from_id_known_kinds() {
        assert_eq!(Section::from_id("hero"), Section::Hero);
        assert_eq!(Section::from_id("features"), Section::Features);
        assert_eq!(Section::from_id("about"), Section::About);
        assert_eq!(Section::from_id("contact"), Section::Contact);
    }

    #[test]
    fn test_section_custom_round_trips_verbatim() {
        let section = Section::from_id("pricing");
        assert_eq!(section, Section::Custom("pricing".to_string()));
        assert_eq!(section.id(), "pricing");
        assert_eq!(String::from(section), "pricing");

        // Matching is case-sensitive, like the editor
        assert_eq!(
            Section::from_id("Hero"),
            Section::Custom("Hero".to_string())
        );
    }

    #[test]
    fn test_capitalize_first_letter() {
        assert_eq!(capitalize_first_letter("hero"), "Hero");
        assert_eq!(capitalize_first_letter("our team"), "Our team");
        assert_eq!(capitalize_first_letter(""), "");
        assert_eq!(capitalize_first_letter("éclair"), "Éclair");
    }

    #[test]
    fn test_layout_parse_and_display() {
        assert_eq!("left-sidebar".parse::<Layout>().unwrap(), Layout::LeftSidebar);
        assert_eq!(Layout::RightSidebar.to_string(), "right-sidebar");
        assert!("sidebar".parse::<Layout>().is_err());
        assert!(!Layout::TopNavbar.is_sidebar());
        assert!(Layout::LeftSidebar.is_sidebar());
    }

    #[test]
    fn test_with_sections_keeps_everything_else() {
        let config = PageConfig::default();
        let narrowed = config.with_sections(vec![Section::About]);
        assert_eq!(narrowed.sections, vec![Section::About]);
        assert_eq!(narrowed.title, config.title);
        assert_eq!(narrowed.features, config.features);
    }

    #[test]
    fn test_default_config_matches_editor_defaults() {
        let config = PageConfig::default();
        assert_eq!(config.layout, Layout::TopNavbar);
        assert_eq!(config.primary_color, "#e25822");
        assert_eq!(config.sections.len(), 4);
        assert_eq!(config.features.len(), 3);
        assert!(config.single_page);
    }
}
