//! Stylesheet generation.
//!
//! Rules that never depend on the config live in constants; everything that
//! uses a configured or derived color is formatted from the [`Palette`].
//! Block order: base, sidebar, generic content, responsive overrides, then one
//! group per built-in block.

use crate::color::Palette;
use landing_kit_core::PageConfig;

pub fn render_styles(config: &PageConfig) -> String {
    let palette = Palette::from_config(config);

    [
        base_styles(config, &palette),
        NAVIGATION_STYLES.to_string(),
        sidebar_styles(&palette),
        content_styles(&palette),
        RESPONSIVE_STYLES.to_string(),
        HERO_STYLES.to_string(),
        features_styles(&palette),
        about_styles(&palette),
        contact_styles(&palette),
    ]
    .join("\n")
}

fn base_styles(config: &PageConfig, palette: &Palette) -> String {
    let direction = if config.layout.is_sidebar() {
        "row"
    } else {
        "column"
    };

    format!(
        r#"* {{
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}}

body {{
  font-family: '{}', sans-serif;
  color: {};
  background-color: {};
  overflow-x: hidden;
}}

.container {{
  display: flex;
  min-height: 100vh;
  flex-direction: {};
  width: 100%;
}}

/* Full width sections */
.full-width {{
  width: 100vw;
  max-width: 100%;
  margin-left: calc(-50vw + 50%);
  margin-right: calc(-50vw + 50%);
  position: relative;
}}
"#,
        config.font_family, palette.text, palette.background, direction
    )
}

const NAVIGATION_STYLES: &str = r#"/* Navigation */
.navbar {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1rem 2rem;
  color: white;
  width: 100%;
  z-index: 1000;
  position: fixed;
  top: 0;
  left: 0;
  background: linear-gradient(to bottom, rgba(0, 0, 0, 0.8) 0%, rgba(0, 0, 0, 0.6) 50%, rgba(0, 0, 0, 0) 100%);
}

.navbar .logo {
  font-weight: bold;
  font-size: 1.5rem;
}

.navbar .nav-links {
  display: flex;
  gap: 1.5rem;
}

.navbar .nav-link {
  color: white;
  text-decoration: none;
  transition: opacity 0.3s ease;
}

.navbar .nav-link:hover {
  opacity: 0.8;
}

/* Mobile tab bar */
.mobile-tabbar {
  display: none;
  position: fixed;
  bottom: 0;
  left: 0;
  width: 100%;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.9) 0%, rgba(0, 0, 0, 0.7) 100%);
  padding: 0.75rem 1rem;
  z-index: 1000;
  justify-content: space-around;
  backdrop-filter: blur(10px);
  -webkit-backdrop-filter: blur(10px);
  border-top: 1px solid rgba(255, 255, 255, 0.1);
}

.mobile-tabbar .nav-link {
  color: white;
  text-decoration: none;
  display: flex;
  flex-direction: column;
  align-items: center;
  font-size: 0.75rem;
  opacity: 0.7;
  transition: opacity 0.3s ease;
}

.mobile-tabbar .nav-link.active {
  opacity: 1;
}

.mobile-tabbar .nav-link:before {
  content: '';
  display: block;
  width: 6px;
  height: 6px;
  border-radius: 50%;
  background-color: white;
  margin-bottom: 5px;
  opacity: 0;
  transition: opacity 0.3s ease;
}

.mobile-tabbar .nav-link.active:before {
  opacity: 1;
}

/* Off-canvas sidebar toggle, created by script.js on sidebar layouts */
.mobile-sidebar-toggle {
  display: none;
  position: fixed;
  top: 1rem;
  right: 1rem;
  z-index: 1100;
  width: 40px;
  height: 40px;
  padding: 10px 8px;
  border: none;
  border-radius: 4px;
  background: rgba(0, 0, 0, 0.6);
  cursor: pointer;
  flex-direction: column;
  justify-content: space-between;
}

.mobile-sidebar-toggle span {
  display: block;
  width: 100%;
  height: 2px;
  background: white;
}
"#;

fn sidebar_styles(palette: &Palette) -> String {
    format!(
        r#"/* Sidebar */
.sidebar {{
  position: fixed;
  top: 0;
  height: 100vh;
  width: 220px;
  background-color: transparent;
  color: white;
  z-index: 1000;
  transition: transform 0.3s ease, width 0.3s ease;
  display: flex;
  flex-direction: column;
  padding: 0;
}}

.sidebar-header {{
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1.5rem;
  border-bottom: 1px solid rgba(255, 255, 255, 0.1);
}}

.sidebar .logo {{
  margin-bottom: 0;
}}

.sidebar-toggle {{
  background: transparent;
  border: none;
  color: white;
  cursor: pointer;
  width: 24px;
  height: 24px;
  position: relative;
  padding: 0;
}}

.toggle-icon, .toggle-icon:before, .toggle-icon:after {{
  content: '';
  display: block;
  width: 24px;
  height: 2px;
  background: white;
  position: absolute;
  transition: all 0.3s ease;
}}

.toggle-icon:before {{
  top: -6px;
}}

.toggle-icon:after {{
  bottom: -6px;
}}

.sidebar.collapsed .toggle-icon {{
  background: transparent;
}}

.sidebar.collapsed .toggle-icon:before {{
  transform: rotate(45deg);
  top: 0;
}}

.sidebar.collapsed .toggle-icon:after {{
  transform: rotate(-45deg);
  bottom: 0;
}}

.sidebar .nav-links {{
  display: flex;
  flex-direction: column;
  padding: 1.5rem;
  gap: 1rem;
  overflow-y: auto;
}}

.sidebar .nav-link {{
  color: white;
  text-decoration: none;
  padding: 0.5rem 0;
  transition: color 0.3s ease;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}}

.sidebar .nav-link:hover {{
  color: {secondary};
}}

.sidebar.collapsed {{
  width: 60px;
}}

.sidebar.collapsed .logo,
.sidebar.collapsed .nav-links {{
  display: none;
}}

.sidebar.left-sidebar {{
  left: 0;
}}

.sidebar.right-sidebar {{
  right: 0;
}}

.main-content.left-sidebar {{
  margin-left: 220px;
}}

.main-content.right-sidebar {{
  margin-right: 220px;
}}

.sidebar.collapsed.left-sidebar ~ .main-content {{
  margin-left: 60px;
}}

.sidebar.collapsed.right-sidebar ~ .main-content {{
  margin-right: 60px;
}}

@media (max-width: 768px) {{
  .sidebar {{
    transform: translateX(-100%);
    width: 100%;
    background-color: rgba(0, 0, 0, 0.9);
  }}

  .sidebar.right-sidebar {{
    transform: translateX(100%);
  }}

  .sidebar.mobile-open {{
    transform: translateX(0);
  }}

  .sidebar-toggle {{
    display: none;
  }}

  .mobile-sidebar-toggle {{
    display: flex;
  }}

  .main-content.left-sidebar,
  .main-content.right-sidebar {{
    margin-left: 0;
    margin-right: 0;
  }}
}}
"#,
        secondary = palette.secondary
    )
}

fn content_styles(palette: &Palette) -> String {
    format!(
        r#"/* Content */
.main-content {{
  flex: 1;
  width: 100%;
  transition: margin 0.3s ease;
}}

.section {{
  min-height: 80vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 4rem 2rem;
  margin-bottom: 0;
  background-color: white;
}}

.section-content {{
  max-width: 1200px;
  margin: 0 auto;
  text-align: center;
  width: 100%;
}}

.section h2 {{
  font-size: 2.5rem;
  margin-bottom: 1rem;
  color: {primary};
}}

.section p {{
  font-size: 1.1rem;
  line-height: 1.6;
  margin-bottom: 2rem;
}}

/* Images */
.image-container {{
  margin-top: 2rem;
  overflow: hidden;
  border-radius: 8px;
  box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1);
  transition: transform 0.3s ease, box-shadow 0.3s ease;
  max-width: 100%;
}}

.image-container:hover {{
  transform: scale(1.03);
  box-shadow: 0 8px 16px rgba(0, 0, 0, 0.2);
}}

.section-image {{
  width: 100%;
  max-height: 400px;
  object-fit: cover;
  display: block;
}}

.placeholder-image {{
  width: 100%;
  height: 300px;
  background-color: {secondary};
  color: white;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.5rem;
}}
"#,
        primary = palette.primary,
        secondary = palette.secondary
    )
}

const RESPONSIVE_STYLES: &str = r#"@media (max-width: 768px) {
  .navbar {
    padding: 1rem;
  }

  .navbar .nav-links {
    display: none;
  }

  .mobile-tabbar {
    display: flex;
  }

  .features-grid {
    grid-template-columns: 1fr;
  }

  .about-container {
    flex-direction: column;
  }

  .about-content, .about-image {
    width: 100%;
  }

  /* Room for the tab bar */
  body {
    padding-bottom: 60px;
  }
}

@media (max-width: 480px) {
  .hero-content {
    margin-left: 5%;
    margin-right: 5%;
  }

  .feature-card {
    padding: 1rem;
  }
}
"#;

const HERO_STYLES: &str = r#"/* Hero */
.hero-section {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding: 0;
  margin: 0;
  overflow: hidden;
}

.hero-background {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  z-index: 1;
}

.hero-background.placeholder-image {
  height: 100%;
}

.hero-overlay {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  background: linear-gradient(
    to bottom,
    rgba(0, 0, 0, 0.7) 0%,
    rgba(0, 0, 0, 0.5) 30%,
    rgba(0, 0, 0, 0.3) 60%,
    rgba(0, 0, 0, 0.1) 100%
  );
  z-index: 2;
}

.hero-content {
  position: relative;
  z-index: 3;
  max-width: 600px;
  margin-left: 10%;
  color: white;
  padding: 2rem 0;
}

.hero-content h1 {
  font-size: 4rem;
  font-weight: bold;
  margin-bottom: 1.5rem;
  line-height: 1.1;
}

.hero-description {
  font-size: 1.25rem;
  margin-bottom: 2rem;
  opacity: 0.9;
}

.tags-container {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
}

.tag {
  padding: 0.5rem 1rem;
  background: rgba(255, 255, 255, 0.1);
  border: 1px solid rgba(255, 255, 255, 0.2);
  border-radius: 100px;
  font-size: 0.875rem;
  color: white;
  backdrop-filter: blur(4px);
}

@media (max-width: 768px) {
  .hero-content {
    margin: 0 1.5rem;
    padding-top: 6rem;
  }

  .hero-content h1 {
    font-size: 2.5rem;
  }

  .tags-container {
    justify-content: center;
  }

  .tag {
    font-size: 0.75rem;
    padding: 0.4rem 0.8rem;
  }
}

@media (max-width: 480px) {
  .hero-content h1 {
    font-size: 2rem;
  }

  .hero-description {
    font-size: 1rem;
  }
}
"#;

fn features_styles(palette: &Palette) -> String {
    format!(
        r#"/* Features */
.features-section {{
  padding: 5rem 2rem;
  background-color: {tint};
}}

.features-container {{
  max-width: 1200px;
  margin: 0 auto;
}}

.features-header {{
  text-align: center;
  margin-bottom: 3rem;
}}

.features-label {{
  color: {primary};
  font-size: 1rem;
  font-weight: 600;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  display: block;
  margin-bottom: 1rem;
}}

.features-header h2 {{
  font-size: 2.5rem;
  color: #2c5282;
  margin: 0;
}}

.features-grid {{
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 2rem;
  padding: 1rem;
}}

.feature-card {{
  background: white;
  border-radius: 1rem;
  padding: 2rem;
  text-align: center;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
  transition: transform 0.3s ease, box-shadow 0.3s ease;
}}

.feature-card:hover {{
  transform: translateY(-5px);
  box-shadow: 0 8px 15px rgba(0, 0, 0, 0.1);
}}

.feature-image {{
  width: 200px;
  height: 200px;
  margin: 0 auto 1.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
}}

.feature-image img {{
  width: 100%;
  height: 100%;
  object-fit: contain;
}}

.feature-image-placeholder {{
  width: 100%;
  height: 100%;
  background-color: {tint};
  border-radius: 0.5rem;
}}

.feature-card h3 {{
  color: #2d3748;
  font-size: 1.5rem;
  margin-bottom: 1rem;
}}

.feature-card p {{
  color: #718096;
  margin-bottom: 1.5rem;
  line-height: 1.6;
}}

.feature-button {{
  display: inline-block;
  background-color: {primary};
  color: white;
  border: none;
  padding: 0.75rem 2rem;
  border-radius: 0.5rem;
  font-weight: 600;
  text-decoration: none;
  cursor: pointer;
  transition: background-color 0.3s ease;
}}

.feature-button:hover {{
  background-color: {primary_hover};
}}

@media (max-width: 768px) {{
  .features-section {{
    padding: 3rem 1.5rem;
  }}

  .features-header h2 {{
    font-size: 2rem;
  }}

  .features-grid {{
    grid-template-columns: 1fr;
    gap: 1.5rem;
  }}

  .feature-card {{
    padding: 1.5rem;
  }}

  .feature-image {{
    width: 150px;
    height: 150px;
  }}
}}

@media (max-width: 480px) {{
  .features-section {{
    padding: 2rem 1rem;
  }}

  .features-header h2 {{
    font-size: 1.75rem;
  }}

  .feature-card h3 {{
    font-size: 1.25rem;
  }}

  .feature-card p {{
    font-size: 0.9rem;
  }}

  .feature-button {{
    padding: 0.6rem 1.5rem;
    font-size: 0.9rem;
  }}
}}
"#,
        tint = palette.secondary_tint,
        primary = palette.primary,
        primary_hover = palette.primary_hover
    )
}

fn about_styles(palette: &Palette) -> String {
    format!(
        r#"/* About */
.about-section {{
  padding: 0;
  margin: 0;
  background: {background};
  display: flex;
  align-items: center;
}}

.about-container {{
  display: flex;
  width: 100%;
  min-height: 600px;
  margin: 0;
  padding: 0;
}}

.about-content {{
  flex: 1;
  display: flex;
  flex-direction: column;
  justify-content: center;
  padding: 5rem;
  background-color: {background_dark};
}}

.about-content h2 {{
  font-size: 3.5rem;
  font-weight: 800;
  line-height: 1.2;
  margin-bottom: 2rem;
  color: {text};
}}

.about-content p {{
  font-size: 1.125rem;
  line-height: 1.8;
  color: {text_soft};
  max-width: 600px;
}}

.about-image {{
  flex: 1;
  position: relative;
  background-color: {background_light};
  overflow: hidden;
}}

.about-image img {{
  width: 100%;
  height: 100%;
  object-fit: cover;
}}

.about-image-placeholder {{
  width: 100%;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: {tint};
  color: {text};
  font-size: 1.5rem;
}}

@media (max-width: 992px) {{
  .about-content {{
    padding: 4rem 3rem;
  }}

  .about-content h2 {{
    font-size: 3rem;
  }}
}}

@media (max-width: 768px) {{
  .about-section {{
    min-height: auto;
    padding: 4rem 0;
  }}

  .about-container {{
    flex-direction: column;
    min-height: auto;
  }}

  .about-content {{
    padding: 3rem 2rem;
    order: 2;
  }}

  .about-content h2 {{
    font-size: 2.5rem;
    text-align: center;
  }}

  .about-content p {{
    text-align: center;
    margin: 0 auto;
  }}

  .about-image {{
    min-height: 300px;
    order: 1;
  }}
}}

@media (max-width: 480px) {{
  .about-section {{
    padding: 3rem 0;
  }}

  .about-content {{
    padding: 2rem 1.5rem;
  }}

  .about-content h2 {{
    font-size: 2rem;
  }}

  .about-content p {{
    font-size: 1rem;
  }}

  .about-image {{
    min-height: 250px;
  }}
}}
"#,
        background = palette.background,
        background_dark = palette.background_dark,
        background_light = palette.background_light,
        text = palette.text,
        text_soft = palette.text_soft,
        tint = palette.secondary_tint
    )
}

fn contact_styles(palette: &Palette) -> String {
    format!(
        r#"/* Contact */
.contact-section {{
  padding: 0;
  margin: 0;
  background-color: {panel};
  position: relative;
  overflow: hidden;
  display: flex;
  align-items: center;
}}

.contact-container {{
  width: 100%;
  max-width: 1200px;
  margin: 5rem auto;
  padding: 0;
}}

.contact-header {{
  text-align: center;
  margin-bottom: 3rem;
}}

.contact-label {{
  color: {primary};
  font-size: 1rem;
  font-weight: 600;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  display: block;
  margin-bottom: 1rem;
}}

.contact-header h2 {{
  font-size: 2.5rem;
  color: #2c5282;
  margin: 0;
}}

.contact-content {{
  display: flex;
  width: 100%;
  min-height: 600px;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
}}

.contact-info {{
  flex: 1;
  position: relative;
  background-color: white;
  overflow: hidden;
}}

.contact-info-shape {{
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 200px;
  background-color: {primary};
  border-radius: 0 0 50% 0;
}}

.contact-info-content {{
  position: relative;
  z-index: 2;
  padding: 3rem 2rem;
  padding-top: 14rem;
  color: {text};
}}

.contact-info-item {{
  margin-bottom: 2.5rem;
}}

.contact-info-item h3 {{
  color: {primary};
  font-size: 1rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
}}

.contact-info-item p {{
  font-size: 1rem;
  line-height: 1.6;
}}

.contact-form {{
  flex: 1;
  padding: 3rem 2rem;
  background-color: {form};
  display: flex;
  flex-direction: column;
}}

.contact-form form {{
  display: flex;
  flex-direction: column;
  gap: 1rem;
}}

.contact-form input,
.contact-form textarea {{
  padding: 1rem;
  border: none;
  border-radius: 4px;
  font-size: 1rem;
  background: white;
}}

.contact-form textarea {{
  resize: none;
  min-height: 150px;
}}

.submit-button {{
  margin-top: 1rem;
  padding: 1rem;
  border: none;
  border-radius: 4px;
  background-color: {primary};
  color: white;
  font-weight: 600;
  cursor: pointer;
  transition: background-color 0.3s ease;
  text-transform: uppercase;
}}

.submit-button:hover {{
  background-color: {primary_hover};
}}

@media (max-width: 992px) {{
  .contact-container {{
    max-width: 90%;
  }}
}}

@media (max-width: 768px) {{
  .contact-section {{
    padding: 3rem 0;
  }}

  .contact-content {{
    flex-direction: column;
    min-height: auto;
  }}

  .contact-info,
  .contact-form {{
    width: 100%;
  }}

  .contact-info-shape {{
    height: 150px;
  }}

  .contact-info-content {{
    padding-top: 11rem;
  }}
}}

@media (max-width: 480px) {{
  .contact-section {{
    padding: 2rem 0;
  }}

  .contact-info-content,
  .contact-form {{
    padding: 2rem 1.5rem;
  }}

  .contact-info-content {{
    padding-top: 11rem;
  }}

  .contact-header h2 {{
    font-size: 1.75rem;
  }}

  .contact-info-item h3,
  .contact-info-item p {{
    font-size: 0.9rem;
  }}
}}
"#,
        panel = palette.panel_background,
        form = palette.form_background,
        primary = palette.primary,
        primary_hover = palette.primary_hover,
        text = palette.text
    )
}
