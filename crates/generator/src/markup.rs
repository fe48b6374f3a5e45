//! Full HTML documents.

use crate::behavior::render_behavior;
use crate::escape::html_escape;
use crate::nav::{nav_links, render_navigation, render_tabbar};
use crate::resolve::resolve_blocks;
use crate::styles::render_styles;
use landing_kit_core::{PageConfig, Section};

pub const STYLESHEET_FILE: &str = "styles.css";
pub const SCRIPT_FILE: &str = "script.js";

/// How the stylesheet and script reach the document
enum Assets {
    Linked,
    Inline { styles: String, script: String },
}

/// Web-font stylesheet URL; every space in the family becomes `+`
pub fn font_stylesheet_href(font_family: &str) -> String {
    format!(
        "https://fonts.googleapis.com/css2?family={}&display=swap",
        font_family.replace(' ', "+")
    )
}

/// Standalone document referencing `styles.css` and `script.js`
pub fn render_markup(config: &PageConfig) -> String {
    render_document(config, &config.sections, Assets::Linked)
}

/// Document whose navigation lists `nav_sections` instead of the rendered ones
pub(crate) fn render_page(config: &PageConfig, nav_sections: &[Section]) -> String {
    render_document(config, nav_sections, Assets::Linked)
}

/// Self-contained document with the stylesheet and script inlined
pub fn render_inline_document(config: &PageConfig) -> String {
    // Keep user-supplied CSS text (the font family) from closing the element
    let styles = render_styles(config).replace("</", "<\\/");
    let script = render_behavior(config);
    render_document(config, &config.sections, Assets::Inline { styles, script })
}

fn render_document(config: &PageConfig, nav_sections: &[Section], assets: Assets) -> String {
    let links = nav_links(config, nav_sections);
    let layout = config.layout.as_str();

    let blocks = resolve_blocks(config)
        .iter()
        .map(|block| block.render())
        .collect::<Vec<_>>()
        .join("\n");

    let (style_tag, script_tag) = match assets {
        Assets::Linked => (
            format!(r#"<link rel="stylesheet" href="{}">"#, STYLESHEET_FILE),
            format!(r#"<script src="{}"></script>"#, SCRIPT_FILE),
        ),
        Assets::Inline { styles, script } => (
            format!("<style>\n{}</style>", styles),
            format!("<script>\n{}</script>", script),
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <meta name="description" content="{description}">
  {style_tag}
  <link href="{font_href}" rel="stylesheet">
</head>
<body>
  <div class="container {layout}">
    {navigation}
    {tabbar}
    <div class="main-content {layout}">
{blocks}
    </div>
  </div>
  {script_tag}
</body>
</html>
"#,
        title = html_escape(&config.title),
        description = html_escape(&config.description),
        style_tag = style_tag,
        font_href = html_escape(&font_stylesheet_href(&config.font_family)),
        layout = layout,
        navigation = render_navigation(config, &links),
        tabbar = render_tabbar(&links),
        blocks = blocks,
        script_tag = script_tag
    )
}
