use super::project::IMAGES_DIR;
use anyhow::{Context, Result};
use landing_kit_core::config::{CONFIG_FILE_NAMES, parse_page_toml_str};
use landing_kit_core::{Layout, PageConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Escape a string for a TOML basic string
///
/// The template is written by hand so it can carry comments, which the toml
/// crate's serializer would drop.
fn toml_escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\x08', "\\b")
        .replace('\x0C', "\\f")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

fn toml_string_array<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let quoted: Vec<String> = items
        .into_iter()
        .map(|item| format!("\"{}\"", toml_escape_string(item)))
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// Create a landing page project with a commented page.toml and an images/
/// directory.
///
/// The directory is created when missing. An existing page.toml or page.json
/// is never overwritten.
pub async fn run(path: PathBuf, title: Option<String>, layout: Option<Layout>) -> Result<()> {
    println!("Initializing landing page project: {}", path.display());

    fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    if let Some(existing) = CONFIG_FILE_NAMES
        .iter()
        .map(|name| path.join(name))
        .find(|candidate| candidate.exists())
    {
        anyhow::bail!(
            "{} already exists\nHint: Delete it first or use a different directory",
            existing.display()
        );
    }

    let toml = generate_page_toml(title.as_deref(), layout.unwrap_or_default())?;
    fs::write(path.join("page.toml"), toml).context("Failed to write page.toml")?;
    create_images_dir(&path)?;

    println!("\n✓ Initialization complete!");
    println!("\nGenerated structure:");
    println!("  {}/", path.display());
    println!("  ├── page.toml   ← Edit this to set title, colors and sections");
    println!("  └── {}/      ← Put pictures here and list them in page.toml", IMAGES_DIR);

    println!("\nNext steps:");
    println!("  1. Edit page.toml");
    println!("  2. Preview: landing-kit preview {}", path.display());
    println!(
        "  3. Export:  landing-kit build {} --output dist",
        path.display()
    );

    Ok(())
}

fn create_images_dir(base: &Path) -> Result<()> {
    fs::create_dir_all(base.join(IMAGES_DIR)).context("Failed to create images directory")?;
    Ok(())
}

/// Commented page.toml seeded with the editor defaults
fn generate_page_toml(title: Option<&str>, layout: Layout) -> Result<String> {
    let defaults = PageConfig::default();

    let page_title = toml_escape_string(title.unwrap_or(&defaults.title));
    let title_comment = if title.is_some() {
        ""
    } else {
        "  # TODO: Set page title"
    };
    let description = toml_escape_string(&defaults.description);
    let sections = toml_string_array(defaults.sections.iter().map(|s| s.id()));

    let mut toml = format!(
        "# Generated by landing-kit init\n\
# Edit this file to customize your landing page\n\
\n\
[page]\n\
title = \"{page_title}\"{title_comment}\n\
description = \"{description}\"\n\
layout = \"{layout}\"  # top-navbar, left-sidebar or right-sidebar\n\
# Built-in sections: hero, features, about, contact. Any other name renders a generic block.\n\
sections = {sections}\n\
single_page = true  # false writes one HTML file per section\n\
images = []  # e.g. [\"images/hero.jpg\", \"images/about.jpg\"]\n\
\n\
[theme]\n\
primary_color = \"{primary}\"\n\
secondary_color = \"{secondary}\"\n\
background_color = \"{background}\"\n\
text_color = \"{text}\"\n\
font_family = \"{font}\"  # Any Google Fonts family\n\
\n\
[nav]\n\
# Custom navigation labels, keyed by section\n\
# about = \"Who we are\"\n\
\n",
        layout = layout,
        primary = defaults.primary_color,
        secondary = defaults.secondary_color,
        background = defaults.background_color,
        text = defaults.text_color,
        font = toml_escape_string(&defaults.font_family),
    );

    if let Some(hero) = &defaults.hero {
        toml.push_str("[hero]\n");
        toml.push_str(&format!("title = \"{}\"\n", toml_escape_string(&hero.title)));
        toml.push_str(&format!(
            "description = \"{}\"\n",
            toml_escape_string(&hero.description)
        ));
        toml.push_str(&format!(
            "pills = {}\n",
            toml_string_array(hero.pills.iter().map(String::as_str))
        ));
        toml.push_str("# background_image = \"images/hero.jpg\"  # Defaults to the first entry of page.images\n\n");
    }

    if let Some(section) = &defaults.features_section {
        toml.push_str("[features_section]\n");
        toml.push_str(&format!("title = \"{}\"\n", toml_escape_string(&section.title)));
        toml.push_str(&format!(
            "subtitle = \"{}\"\n\n",
            toml_escape_string(&section.subtitle)
        ));
    }

    for feature in &defaults.features {
        toml.push_str("[[feature]]\n");
        toml.push_str(&format!("title = \"{}\"\n", toml_escape_string(&feature.title)));
        toml.push_str(&format!(
            "description = \"{}\"\n",
            toml_escape_string(&feature.description)
        ));
        toml.push_str("# image = \"images/feature.png\"\n");
        if let Some(link) = &feature.link {
            toml.push_str(&format!("link = \"{}\"  # Optional\n", toml_escape_string(link)));
        }
        toml.push('\n');
    }

    if let Some(about) = &defaults.about {
        toml.push_str("[about]\n");
        toml.push_str(&format!("title = \"{}\"\n", toml_escape_string(&about.title)));
        toml.push_str(&format!(
            "description = \"{}\"\n",
            toml_escape_string(&about.description)
        ));
        toml.push_str("# image = \"images/about.jpg\"  # Defaults to the second entry of page.images\n\n");
    }

    if let Some(contact) = &defaults.contact {
        toml.push_str("[contact]\n");
        if let Some(title) = &contact.title {
            toml.push_str(&format!("title = \"{}\"\n", toml_escape_string(title)));
        }
        if let Some(subtitle) = &contact.subtitle {
            toml.push_str(&format!("subtitle = \"{}\"\n", toml_escape_string(subtitle)));
        }
        toml.push_str(&format!("phone = \"{}\"\n", toml_escape_string(&contact.phone)));
        toml.push_str(&format!(
            "location = \"{}\"\n",
            toml_escape_string(&contact.location)
        ));
        toml.push_str(&format!("hours = \"{}\"\n", toml_escape_string(&contact.hours)));
    }

    // The template must load with the real parser
    parse_page_toml_str(&toml)
        .context("Generated page.toml is invalid - this is a bug in the template generator")?;

    Ok(toml)
}
