use landing_kit_core::{Hero, Layout, PageConfig, Section};
use landing_kit_generator::{
    generate_site, render_behavior, render_inline_document, render_markup, render_multi_page,
    render_styles, shade,
};
use std::collections::BTreeMap;

fn minimal(sections: &[&str]) -> PageConfig {
    PageConfig {
        layout: Layout::TopNavbar,
        primary_color: "#ff0000".to_string(),
        secondary_color: "#00ff00".to_string(),
        background_color: "#ffffff".to_string(),
        text_color: "#000000".to_string(),
        font_family: "Inter".to_string(),
        title: "T".to_string(),
        description: "Desc".to_string(),
        sections: sections.iter().map(|s| Section::from_id(s)).collect(),
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

/// Position of every `<section id="...">` in document order
fn section_ids(html: &str) -> Vec<String> {
    html.match_indices(r#"<section id=""#)
        .map(|(start, pattern)| {
            let rest = &html[start + pattern.len()..];
            rest[..rest.find('"').unwrap()].to_string()
        })
        .collect()
}

fn nav_order(html: &str) -> Vec<String> {
    let nav = &html[html.find("<nav").unwrap()..html.find("</nav>").unwrap()];
    nav.match_indices(r#"data-section=""#)
        .map(|(start, pattern)| {
            let rest = &nav[start + pattern.len()..];
            rest[..rest.find('"').unwrap()].to_string()
        })
        .collect()
}

#[test]
fn test_totality_for_minimal_configs() {
    let layouts = [Layout::TopNavbar, Layout::LeftSidebar, Layout::RightSidebar];
    let section_sets: [&[&str]; 4] = [
        &[],
        &["hero", "features", "about", "contact"],
        &["gallery", "pricing", "faq"],
        &["contact", "contact", "hero"],
    ];

    for layout in layouts {
        for sections in section_sets {
            for single_page in [true, false] {
                let config = PageConfig {
                    layout,
                    single_page,
                    ..minimal(sections)
                };
                assert!(!render_markup(&config).is_empty());
                assert!(!render_styles(&config).is_empty());
                assert!(!render_behavior(&config).is_empty());
                assert!(!render_inline_document(&config).is_empty());
                assert!(!render_multi_page(&config).is_empty());
            }
        }
    }
}

#[test]
fn test_never_emits_empty_src() {
    let mut config = minimal(&["hero", "features", "about", "contact", "gallery"]);
    config.features = vec![Default::default(), Default::default()];
    config.images = vec![String::new()];
    let html = render_markup(&config);
    assert!(!html.contains(r#"src="""#));
    assert!(!html.contains("<img"));
}

#[test]
fn test_determinism() {
    let a = PageConfig::default();
    let b = PageConfig::default();
    assert_eq!(render_markup(&a), render_markup(&b));
    assert_eq!(render_styles(&a), render_styles(&b));
    assert_eq!(render_behavior(&a), render_behavior(&b));
    assert_eq!(render_multi_page(&a), render_multi_page(&b));
}

#[test]
fn test_section_and_navigation_order_follow_config() {
    let config = minimal(&["contact", "gallery", "hero", "about", "features"]);
    let html = render_markup(&config);
    let expected = vec!["contact", "gallery", "hero", "about", "features"];
    assert_eq!(section_ids(&html), expected);
    assert_eq!(nav_order(&html), expected);
}

#[test]
fn test_duplicate_sections_render_twice() {
    let html = render_markup(&minimal(&["about", "about"]));
    assert_eq!(section_ids(&html), vec!["about", "about"]);
}

#[test]
fn test_hero_background_fallback_chain() {
    let mut config = minimal(&["hero"]);
    config.images = vec!["A.png".to_string()];
    let html = render_markup(&config);
    assert!(html.contains(r#"<img src="A.png" alt="Hero background" class="hero-background">"#));

    config.images.clear();
    let html = render_markup(&config);
    assert!(html.contains(r#"<div class="hero-background placeholder-image">Hero Image</div>"#));
    assert!(!html.contains(r#"class="hero-background">"#));
}

#[test]
fn test_shade_examples() {
    assert_eq!(shade("#000000", 50), "#323232");
    assert_eq!(shade("#ffffff", -50), "#cdcdcd");
    assert_eq!(shade("#ffffff", 50), "#ffffff");
}

#[test]
fn test_multi_page_split() {
    let config = PageConfig {
        single_page: false,
        ..minimal(&["hero", "features", "about"])
    };
    let pages = render_multi_page(&config);
    assert_eq!(pages.len(), 3);

    let lookup = |name: &str| {
        pages
            .iter()
            .find(|(file, _)| file == name)
            .map(|(_, html)| html.as_str())
            .unwrap()
    };
    assert_eq!(section_ids(lookup("index.html")), vec!["hero"]);
    assert_eq!(section_ids(lookup("features.html")), vec!["features"]);
    assert_eq!(section_ids(lookup("about.html")), vec!["about"]);
}

#[test]
fn test_custom_sections_cycle_through_images() {
    let mut config = minimal(&["one", "two", "three"]);
    config.images = vec!["A.png".to_string(), "B.png".to_string()];
    let html = render_markup(&config);
    let a = html.find(r#"<img src="A.png" alt="one""#).unwrap();
    let b = html.find(r#"<img src="B.png" alt="two""#).unwrap();
    let c = html.find(r#"<img src="A.png" alt="three""#).unwrap();
    assert!(a < b && b < c);
}

#[test]
fn test_scenario_from_json() {
    let json = r##"{
        "layout": "top-navbar",
        "sections": ["hero", "contact"],
        "hero": {"title": "Hi", "description": "D", "pills": [], "backgroundImage": ""},
        "contact": {"phone": "1", "location": "L", "hours": "H"},
        "images": [],
        "primaryColor": "#ff0000",
        "secondaryColor": "#00ff00",
        "backgroundColor": "#ffffff",
        "textColor": "#000000",
        "fontFamily": "Inter",
        "title": "T",
        "description": "Desc"
    }"##;
    let config: PageConfig = serde_json::from_str(json).unwrap();
    assert_eq!(
        config.hero,
        Some(Hero {
            title: "Hi".to_string(),
            description: "D".to_string(),
            pills: vec![],
            background_image: String::new(),
        })
    );

    let html = render_markup(&config);
    assert!(html.contains("<h1>Hi</h1>"));
    assert!(html.contains(r#"<div class="hero-background placeholder-image">"#));
    assert!(html.contains(r#"<span class="tag">Designer</span>"#));
    assert!(html.contains(r#"<section id="contact" class="contact-section full-width full-height">"#));
    assert!(html.contains(r#"name="name""#));
    assert!(html.contains(r#"name="email""#));
    assert!(html.contains(r#"name="message""#));
    assert!(html.contains(r#"<button type="submit" class="submit-button">SUBMIT</button>"#));
    assert!(html.contains("<p>L</p>"));

    let css = render_styles(&config);
    assert!(css.contains("Inter"));
    // #ff0000 shaded by -20
    assert!(css.contains("#eb0000"));
    // #00ff00 at 0x20 alpha
    assert!(css.contains("#00ff0020"));
}

#[test]
fn test_generate_site_multi_page_files() {
    let config = PageConfig {
        single_page: false,
        ..minimal(&["hero", "gallery"])
    };
    let site = generate_site(&config);
    let names: Vec<_> = site.files().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["index.html", "gallery.html", "styles.css", "script.js"]);
}
