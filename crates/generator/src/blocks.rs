//! Markup templates, one per block kind.
//!
//! Each function takes a resolved view model and returns the `<section>` for
//! it. All text is escaped here; nothing else in the crate writes user text.

use crate::escape::html_escape;
use crate::resolve::{
    AboutView, Block, ContactView, CustomView, FeatureCard, FeaturesView, HeroView, ImageSlot,
};

impl Block {
    pub fn render(&self) -> String {
        match self {
            Block::Hero(view) => render_hero(view),
            Block::Features(view) => render_features(view),
            Block::About(view) => render_about(view),
            Block::Contact(view) => render_contact(view),
            Block::Custom(view) => render_custom(view),
        }
    }
}

/// `<img>` for a real image, otherwise a `<div>` with the given class
fn render_image_slot(slot: &ImageSlot, img_class: Option<&str>, placeholder_class: &str) -> String {
    match slot {
        ImageSlot::Image { src, alt } => {
            let class_attr = img_class
                .map(|c| format!(r#" class="{}""#, c))
                .unwrap_or_default();
            format!(
                r#"<img src="{}" alt="{}"{}>"#,
                html_escape(src),
                html_escape(alt),
                class_attr
            )
        }
        ImageSlot::Placeholder { label } => format!(
            r#"<div class="{}">{}</div>"#,
            placeholder_class,
            html_escape(label)
        ),
    }
}

pub fn render_hero(view: &HeroView) -> String {
    let pills = view
        .pills
        .iter()
        .map(|pill| format!(r#"<span class="tag">{}</span>"#, html_escape(pill)))
        .collect::<Vec<_>>()
        .join("\n      ");

    let background = render_image_slot(
        &view.background,
        Some("hero-background"),
        "hero-background placeholder-image",
    );

    format!(
        r#"<section id="hero" class="hero-section full-width">
  <div class="hero-overlay"></div>
  <div class="hero-content">
    <h1>{}</h1>
    <p class="hero-description">{}</p>
    <div class="tags-container">
      {}
    </div>
  </div>
  {}
</section>"#,
        html_escape(&view.title),
        html_escape(&view.description),
        pills,
        background
    )
}

fn render_feature_card(card: &FeatureCard) -> String {
    let image = render_image_slot(&card.image, None, "feature-image-placeholder");

    let target = if card.external {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    };

    format!(
        r#"<div class="feature-card">
        <div class="feature-image">
          {}
        </div>
        <h3>{}</h3>
        <p>{}</p>
        <a href="{}" class="feature-button"{}>MORE</a>
      </div>"#,
        image,
        html_escape(&card.title),
        html_escape(&card.description),
        html_escape(&card.href),
        target
    )
}

pub fn render_features(view: &FeaturesView) -> String {
    let cards = view
        .cards
        .iter()
        .map(render_feature_card)
        .collect::<Vec<_>>()
        .join("\n      ");

    format!(
        r#"<section id="features" class="features-section full-width">
  <div class="features-container">
    <div class="features-header">
      <span class="features-label">{}</span>
      <h2>{}</h2>
    </div>
    <div class="features-grid">
      {}
    </div>
  </div>
</section>"#,
        html_escape(&view.label),
        html_escape(&view.heading),
        cards
    )
}

pub fn render_about(view: &AboutView) -> String {
    let image = render_image_slot(&view.image, None, "about-image-placeholder");

    format!(
        r#"<section id="about" class="about-section full-width">
  <div class="about-container">
    <div class="about-content">
      <h2>{}</h2>
      <p>{}</p>
    </div>
    <div class="about-image">
      {}
    </div>
  </div>
</section>"#,
        html_escape(&view.title),
        html_escape(&view.description),
        image
    )
}

fn render_contact_info(view: &ContactView) -> String {
    if view.details.is_empty() {
        return String::new();
    }

    let items = view
        .details
        .iter()
        .map(|detail| {
            format!(
                r#"<div class="contact-info-item">
            <h3>{}</h3>
            <p>{}</p>
          </div>"#,
                detail.label,
                html_escape(&detail.value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n          ");

    format!(
        r#"<div class="contact-info">
        <div class="contact-info-shape"></div>
        <div class="contact-info-content">
          {}
        </div>
      </div>
      "#,
        items
    )
}

/// The form is presentational: no action, no script wiring
pub fn render_contact(view: &ContactView) -> String {
    format!(
        r#"<section id="contact" class="contact-section full-width full-height">
  <div class="contact-container">
    <div class="contact-header">
      <span class="contact-label">{}</span>
      <h2>{}</h2>
    </div>
    <div class="contact-content">
      {}<div class="contact-form">
        <form>
          <input type="text" name="name" placeholder="Enter your Name" required>
          <input type="email" name="email" placeholder="Enter a valid email address" required>
          <textarea name="message" placeholder="Message" rows="6"></textarea>
          <button type="submit" class="submit-button">SUBMIT</button>
        </form>
      </div>
    </div>
  </div>
</section>"#,
        html_escape(&view.label),
        html_escape(&view.heading),
        render_contact_info(view)
    )
}

pub fn render_custom(view: &CustomView) -> String {
    let image = render_image_slot(&view.image, Some("section-image"), "placeholder-image");

    format!(
        r#"<section id="{}" class="section full-width">
  <div class="section-content">
    <h2>{}</h2>
    <p>{}</p>
    <div class="image-container">{}</div>
  </div>
</section>"#,
        html_escape(&view.id),
        html_escape(&view.heading),
        html_escape(&view.body),
        image
    )
}
