//! Shared slide styling and small layout helpers.

use vizdeck_common::{ContentNode, Style};

pub const TITLE_BACKGROUND: &str = "#fbffb9";

/// Inner box of a markdown panel.
pub fn markdown_inner() -> Style {
    Style::new()
        .set("fontSize", 30)
        .set("width", "80%")
        .set("margin", "auto")
        .set("backgroundColor", "white")
        .set("padding", "3%")
        .set("borderRadius", 10)
}

/// Outer frame of a markdown panel.
pub fn markdown_outer() -> Style {
    Style::new()
        .set("width", "80%")
        .set("margin", "3% auto ")
        .set("backgroundColor", "#cbe86e")
        .set("padding", "3%")
        .set("borderRadius", 15)
}

pub fn centered() -> Style {
    Style::new().set("textAlign", "center")
}

/// Markdown in the standard two-box frame.
pub fn panel(source: &str) -> ContentNode {
    ContentNode::div(vec![ContentNode::markdown(source).with_style(markdown_inner())])
        .with_style(markdown_outer())
}

/// Slide heading band.
pub fn head_title(word: &str) -> ContentNode {
    ContentNode::div(vec![ContentNode::h1(word).with_style(centered())])
        .with_style(Style::new().set("backgroundColor", TITLE_BACKGROUND))
}

/// Section heading band inside a slide.
pub fn section_title(word: &str) -> ContentNode {
    ContentNode::div(vec![ContentNode::h2(word).with_style(centered())])
        .with_style(Style::new().set("backgroundColor", TITLE_BACKGROUND))
}

/// Right-aligned link to the following slide.
pub fn next_link(label: &str, href: &str) -> ContentNode {
    ContentNode::div(vec![ContentNode::link(label, href)])
        .with_style(Style::new().set("textAlign", "right").set("margin", "5%"))
}

/// Centered external documentation link.
pub fn doc_link(label: &str, href: &str) -> ContentNode {
    ContentNode::div(vec![ContentNode::link(label, href)]).with_style(centered())
}
