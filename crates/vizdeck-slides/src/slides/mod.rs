//! Slide content trees and the page shell around them.
//!
//! Every slide is built once at startup from the loaded [`Assets`]. The
//! alternatives shown by toggle cells live next to the slide they belong to.

pub mod closing;
pub mod components;
pub mod dash;
pub mod intro;
pub mod merit;
pub mod visualization;

use anyhow::Result;
use serde_json::{json, Value};
use vizdeck_common::{ContentNode, Style, WidgetKind};
use vizdeck_reactive::ViewRegistry;

use crate::assets::Assets;

/// Sidebar entries in presentation order. The first entry is the title slide,
/// which is the registry default rather than a registered route.
pub const NAVIGATION: [(&str, &str); 16] = [
    ("TiTle", "/"),
    ("Link_to_web_app", "/web-app"),
    ("自我介绍", "/self-introduce"),
    ("为什么我来这里", "/reasons"),
    ("Today's Menu", "/menu"),
    ("Merit of Interactive", "/merit"),
    ("数据可视化", "/datavisualization"),
    ("数据可视化2", "/datavisualization_human"),
    ("数据可视化3", "/interactive_visualization"),
    ("数据可视化4", "/visualization_tools"),
    ("about_dash", "/about_dash"),
    ("dash_basic", "/dash_basic"),
    ("dash_graphs", "/dash_graphs"),
    ("dash_components", "/dash_components"),
    ("deploy", "/deploy"),
    ("matome", "/matome"),
];

/// `{label, value}` pairs for dropdowns, radio items and checklists.
pub(crate) fn options<I>(values: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    let options: Vec<Value> = values
        .into_iter()
        .map(|v| {
            let label = match &v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            json!({"label": label, "value": v})
        })
        .collect();
    Value::Array(options)
}

/// Sidebar plus the routed content area.
pub fn layout() -> ContentNode {
    let mut nav: Vec<ContentNode> = vec![
        ContentNode::image("/assets/pyconchina.png")
            .with_style(Style::new().set("width", "90%").set("marginTop", "5%")),
        ContentNode::p("用Dash的可视化").with_style(Style::new().set("fontSize", 30)),
    ];
    nav.extend(
        NAVIGATION
            .iter()
            .map(|(label, href)| ContentNode::div(vec![ContentNode::link(*label, *href)])),
    );

    let sidebar = ContentNode::div(nav).with_id("title").with_style(
        Style::new()
            .set("width", "20%")
            .set("height", 900)
            .set("backgroundColor", "#C5E99B")
            .set("textAlign", "center")
            .set("float", "left")
            .set("borderRadius", "10px"),
    );
    let main = ContentNode::div(vec![
        ContentNode::widget(WidgetKind::Location).with_id("url").with_prop("refresh", false),
        ContentNode::div(Vec::new()).with_id("contents"),
    ])
    .with_style(
        Style::new()
            .set("width", "80%")
            .set("backgroundColor", "#D7FFF1")
            .set("display", "inline-block")
            .set("borderRadius", "10px"),
    );

    ContentNode::div(vec![sidebar, main])
        .with_style(Style::new().set("width", "95%").set("margin", "auto"))
}

/// Every slide keyed by route, with the title slide as the fallback.
pub fn views(assets: &Assets) -> Result<ViewRegistry> {
    let slides = [
        ("/web-app", intro::web_app()),
        ("/self-introduce", intro::self_intro(&assets.data)?),
        ("/reasons", intro::reasons()),
        ("/menu", intro::menu()),
        ("/merit", merit::merit(&assets.data)?),
        ("/datavisualization", visualization::why_visualize()),
        ("/datavisualization_human", visualization::for_humans()),
        ("/interactive_visualization", visualization::interactive(&assets.data)?),
        ("/visualization_tools", visualization::tools()),
        ("/about_dash", dash::about()),
        ("/dash_basic", dash::basic()),
        ("/dash_graphs", dash::graphs()),
        ("/dash_components", components::components(assets)?),
        ("/deploy", closing::deploy()),
        ("/matome", closing::conclusion()),
    ];

    let mut registry = ViewRegistry::new(intro::title());
    for (route, slide) in slides {
        registry.register(route, slide)?;
    }
    Ok(registry)
}
