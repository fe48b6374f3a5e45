//! Fallback resolution.
//!
//! Each section of a [`PageConfig`] is turned into a fully populated view
//! model before any markup is written. Every optional field, empty string and
//! missing image is settled here, so the templates in [`crate::blocks`] never
//! branch on configuration.

use landing_kit_core::{DEFAULT_HERO_PILLS, PageConfig, Section, capitalize_first_letter};

pub const DEFAULT_FEATURES_LABEL: &str = "FEATURES";
pub const DEFAULT_FEATURES_HEADING: &str = "Our Features & Services.";
pub const DEFAULT_ABOUT_TITLE: &str = "nice to meet you";
pub const DEFAULT_CONTACT_LABEL: &str = "CONTACT";
pub const DEFAULT_CONTACT_HEADING: &str = "Contact Us";

/// An image, or the placeholder drawn in its place
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    Image { src: String, alt: String },
    Placeholder { label: String },
}

impl ImageSlot {
    fn pick(src: Option<&str>, alt: &str, placeholder: impl Into<String>) -> Self {
        match src {
            Some(src) => ImageSlot::Image {
                src: src.to_string(),
                alt: alt.to_string(),
            },
            None => ImageSlot::Placeholder {
                label: placeholder.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroView {
    pub title: String,
    pub description: String,
    pub pills: Vec<String>,
    pub background: ImageSlot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,
    pub image: ImageSlot,
    pub href: String,
    /// Opens in a new browsing context without referrer or opener
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturesView {
    pub label: String,
    pub heading: String,
    pub cards: Vec<FeatureCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutView {
    pub title: String,
    pub description: String,
    pub image: ImageSlot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactView {
    pub label: String,
    pub heading: String,
    /// Only the details the config actually provides
    pub details: Vec<ContactDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomView {
    pub id: String,
    pub heading: String,
    pub body: String,
    pub image: ImageSlot,
}

/// A section with every fallback applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Hero(HeroView),
    Features(FeaturesView),
    About(AboutView),
    Contact(ContactView),
    Custom(CustomView),
}

impl Block {
    /// Anchor id of the emitted `<section>`
    pub fn id(&self) -> &str {
        match self {
            Block::Hero(_) => "hero",
            Block::Features(_) => "features",
            Block::About(_) => "about",
            Block::Contact(_) => "contact",
            Block::Custom(view) => &view.id,
        }
    }
}

/// First candidate that is present and non-empty
fn non_empty<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<&'a str> {
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

/// Resolve every section of the config, in order
pub fn resolve_blocks(config: &PageConfig) -> Vec<Block> {
    config
        .sections
        .iter()
        .enumerate()
        .map(|(index, section)| resolve_block(config, section, index))
        .collect()
}

/// Resolve one section; `index` is its position in `config.sections`
pub fn resolve_block(config: &PageConfig, section: &Section, index: usize) -> Block {
    match section {
        Section::Hero => Block::Hero(resolve_hero(config)),
        Section::Features => Block::Features(resolve_features(config)),
        Section::About => Block::About(resolve_about(config)),
        Section::Contact => Block::Contact(resolve_contact(config)),
        Section::Custom(id) => Block::Custom(resolve_custom(config, id, index)),
    }
}

pub fn resolve_hero(config: &PageConfig) -> HeroView {
    let hero = config.hero.as_ref();

    let title = non_empty([hero.map(|h| h.title.as_str()), Some(config.title.as_str())]);
    let description = non_empty([
        hero.map(|h| h.description.as_str()),
        Some(config.description.as_str()),
    ]);

    let pills = match hero {
        Some(h) if !h.pills.is_empty() => h.pills.clone(),
        _ => DEFAULT_HERO_PILLS.iter().map(|p| p.to_string()).collect(),
    };

    let background = non_empty([
        hero.map(|h| h.background_image.as_str()),
        config.images.first().map(String::as_str),
    ]);

    HeroView {
        title: title.unwrap_or_default().to_string(),
        description: description.unwrap_or_default().to_string(),
        pills,
        background: ImageSlot::pick(background, "Hero background", "Hero Image"),
    }
}

pub fn resolve_features(config: &PageConfig) -> FeaturesView {
    let section = config.features_section.as_ref();

    let cards = config
        .features
        .iter()
        .map(|feature| {
            let link = non_empty([feature.link.as_deref()]);
            FeatureCard {
                title: feature.title.clone(),
                description: feature.description.clone(),
                image: ImageSlot::pick(non_empty([Some(feature.image.as_str())]), &feature.title, ""),
                href: link.unwrap_or("#").to_string(),
                external: link.is_some_and(|l| !l.starts_with('#')),
            }
        })
        .collect();

    FeaturesView {
        label: non_empty([section.map(|s| s.title.as_str())])
            .unwrap_or(DEFAULT_FEATURES_LABEL)
            .to_string(),
        heading: non_empty([section.map(|s| s.subtitle.as_str())])
            .unwrap_or(DEFAULT_FEATURES_HEADING)
            .to_string(),
        cards,
    }
}

pub fn resolve_about(config: &PageConfig) -> AboutView {
    let about = config.about.as_ref();

    // Second image when there is one, otherwise the only one
    let fallback_index = 1usize.min(config.images.len().saturating_sub(1));
    let image = non_empty([
        about.map(|a| a.image.as_str()),
        config.images.get(fallback_index).map(String::as_str),
    ]);

    AboutView {
        title: non_empty([about.map(|a| a.title.as_str())])
            .unwrap_or(DEFAULT_ABOUT_TITLE)
            .to_string(),
        description: non_empty([
            about.map(|a| a.description.as_str()),
            Some(config.description.as_str()),
        ])
        .unwrap_or_default()
        .to_string(),
        image: ImageSlot::pick(image, "About us", "About Image"),
    }
}

pub fn resolve_contact(config: &PageConfig) -> ContactView {
    let contact = config.contact.as_ref();

    let details = contact
        .map(|c| {
            [("Phone", &c.phone), ("Location", &c.location), ("Hours", &c.hours)]
                .into_iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(label, value)| ContactDetail {
                    label,
                    value: value.clone(),
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    ContactView {
        label: non_empty([contact.and_then(|c| c.title.as_deref())])
            .unwrap_or(DEFAULT_CONTACT_LABEL)
            .to_string(),
        heading: non_empty([contact.and_then(|c| c.subtitle.as_deref())])
            .unwrap_or(DEFAULT_CONTACT_HEADING)
            .to_string(),
        details,
    }
}

pub fn resolve_custom(config: &PageConfig, id: &str, index: usize) -> CustomView {
    let heading = capitalize_first_letter(id);

    let image = if config.images.is_empty() {
        None
    } else {
        non_empty([config.images.get(index % config.images.len()).map(String::as_str)])
    };

    CustomView {
        id: id.to_string(),
        image: ImageSlot::pick(image, id, format!("{} Image", heading)),
        heading,
        body: config.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_kit_core::{About, Contact, Feature, FeaturesSection, Hero, Layout};
    use std::collections::BTreeMap;

    fn minimal_config() -> PageConfig {
        PageConfig {
            layout: Layout::TopNavbar,
            primary_color: "#ff0000".to_string(),
            secondary_color: "#00ff00".to_string(),
            background_color: "#ffffff".to_string(),
            text_color: "#000000".to_string(),
            font_family: "Inter".to_string(),
            title: "T".to_string(),
            description: "Desc".to_string(),
            sections: vec![Section::Hero],
            single_page: true,
            images: vec![],
            nav_items: BTreeMap::new(),
            features_section: None,
            features: vec![],
            hero: None,
            about: None,
            contact: None,
        }
    }

    fn image(src: &str, alt: &str) -> ImageSlot {
        ImageSlot::Image {
            src: src.to_string(),
            alt: alt.to_string(),
        }
    }

    fn placeholder(label: &str) -> ImageSlot {
        ImageSlot::Placeholder {
            label: label.to_string(),
        }
    }

    #[test]
    fn test_hero_falls_back_to_page_text_and_default_pills() {
        let view = resolve_hero(&minimal_config());
        assert_eq!(view.title, "T");
        assert_eq!(view.description, "Desc");
        assert_eq!(view.pills, DEFAULT_HERO_PILLS);
        assert_eq!(view.background, placeholder("Hero Image"));
    }

    #[test]
    fn test_hero_empty_pills_use_default() {
        let mut config = minimal_config();
        config.hero = Some(Hero {
            title: "Hi".to_string(),
            description: "D".to_string(),
            pills: vec![],
            background_image: String::new(),
        });
        let view = resolve_hero(&config);
        assert_eq!(view.title, "Hi");
        assert_eq!(view.description, "D");
        assert_eq!(view.pills.len(), 4);
    }

    #[test]
    fn test_hero_background_priority() {
        let mut config = minimal_config();
        config.images = vec!["A.png".to_string()];
        assert_eq!(
            resolve_hero(&config).background,
            image("A.png", "Hero background")
        );

        config.hero = Some(Hero {
            background_image: "bg.jpg".to_string(),
            pills: vec!["Only".to_string()],
            ..Hero::default()
        });
        let view = resolve_hero(&config);
        assert_eq!(view.background, image("bg.jpg", "Hero background"));
        assert_eq!(view.pills, vec!["Only".to_string()]);
        // Empty hero strings fall through to the page text
        assert_eq!(view.title, "T");
    }

    #[test]
    fn test_hero_empty_first_image_is_placeholder() {
        let mut config = minimal_config();
        config.images = vec![String::new(), "B.png".to_string()];
        assert_eq!(resolve_hero(&config).background, placeholder("Hero Image"));
    }

    #[test]
    fn test_features_defaults_and_links() {
        let mut config = minimal_config();
        config.features = vec![
            Feature {
                title: "One".to_string(),
                description: "First".to_string(),
                image: "one.png".to_string(),
                link: Some("https://example.com".to_string()),
            },
            Feature {
                title: "Two".to_string(),
                description: "Second".to_string(),
                image: String::new(),
                link: None,
            },
            Feature {
                title: "Three".to_string(),
                link: Some("#contact".to_string()),
                ..Feature::default()
            },
        ];

        let view = resolve_features(&config);
        assert_eq!(view.label, DEFAULT_FEATURES_LABEL);
        assert_eq!(view.heading, DEFAULT_FEATURES_HEADING);
        assert_eq!(view.cards.len(), 3);

        assert_eq!(view.cards[0].image, image("one.png", "One"));
        assert_eq!(view.cards[0].href, "https://example.com");
        assert!(view.cards[0].external);

        assert_eq!(view.cards[1].image, placeholder(""));
        assert_eq!(view.cards[1].href, "#");
        assert!(!view.cards[1].external);

        assert_eq!(view.cards[2].href, "#contact");
        assert!(!view.cards[2].external);
    }

    #[test]
    fn test_features_section_overrides() {
        let mut config = minimal_config();
        config.features_section = Some(FeaturesSection {
            title: "SERVICES".to_string(),
            subtitle: String::new(),
        });
        let view = resolve_features(&config);
        assert_eq!(view.label, "SERVICES");
        assert_eq!(view.heading, DEFAULT_FEATURES_HEADING);
    }

    #[test]
    fn test_about_image_uses_second_image_or_only_image() {
        let mut config = minimal_config();
        assert_eq!(resolve_about(&config).image, placeholder("About Image"));

        config.images = vec!["A.png".to_string()];
        assert_eq!(resolve_about(&config).image, image("A.png", "About us"));

        config.images = vec!["A.png".to_string(), "B.png".to_string(), "C.png".to_string()];
        assert_eq!(resolve_about(&config).image, image("B.png", "About us"));

        config.about = Some(About {
            image: "about.png".to_string(),
            ..About::default()
        });
        let view = resolve_about(&config);
        assert_eq!(view.image, image("about.png", "About us"));
        assert_eq!(view.title, DEFAULT_ABOUT_TITLE);
        assert_eq!(view.description, "Desc");
    }

    #[test]
    fn test_contact_defaults_and_details() {
        let mut config = minimal_config();
        let view = resolve_contact(&config);
        assert_eq!(view.label, DEFAULT_CONTACT_LABEL);
        assert_eq!(view.heading, DEFAULT_CONTACT_HEADING);
        assert!(view.details.is_empty());

        config.contact = Some(Contact {
            phone: "1".to_string(),
            location: String::new(),
            hours: "H".to_string(),
            title: Some(String::new()),
            subtitle: Some("Write us".to_string()),
        });
        let view = resolve_contact(&config);
        assert_eq!(view.label, DEFAULT_CONTACT_LABEL);
        assert_eq!(view.heading, "Write us");
        let labels: Vec<_> = view.details.iter().map(|d| d.label).collect();
        assert_eq!(labels, vec!["Phone", "Hours"]);
    }

    #[test]
    fn test_custom_image_cycles_by_position() {
        let mut config = minimal_config();
        let view = resolve_custom(&config, "gallery", 3);
        assert_eq!(view.heading, "Gallery");
        assert_eq!(view.body, "Desc");
        assert_eq!(view.image, placeholder("Gallery Image"));

        config.images = vec!["A.png".to_string(), "B.png".to_string()];
        assert_eq!(resolve_custom(&config, "gallery", 3).image, image("B.png", "gallery"));
        assert_eq!(resolve_custom(&config, "gallery", 4).image, image("A.png", "gallery"));
    }

    #[test]
    fn test_resolve_blocks_preserves_order_and_duplicates() {
        let mut config = minimal_config();
        config.sections = vec![
            Section::Contact,
            Section::from_id("team"),
            Section::Hero,
            Section::Contact,
        ];
        let ids: Vec<_> = resolve_blocks(&config)
            .iter()
            .map(|b| b.id().to_string())
            .collect();
        assert_eq!(ids, vec!["contact", "team", "hero", "contact"]);
    }
}
