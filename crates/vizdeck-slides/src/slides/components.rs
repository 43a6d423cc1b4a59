//! Component showcase: core components, data table, DAQ, canvas, cytoscape
//! and the molecule viewer.

use serde_json::{json, Map, Value};
use vizdeck_common::{ContentNode, Style, WidgetKind};
use vizdeck_network::element::{
    FOLLOWER_EDGE_CLASS, FOLLOWER_NODE_CLASS, FOLLOWING_EDGE_CLASS, FOLLOWING_NODE_CLASS,
    GENESIS_CLASS,
};

use super::options;
use crate::assets::Assets;
use crate::charts::GAPMINDER_MEASURES;
use crate::cells::tourism::data_table;
use crate::style::{doc_link, head_title, next_link, panel, section_title};

/// Numeric columns of the editable table, after `Model`.
pub const TABLE_PARAMS: [&str; 4] = ["Weight", "Torque", "Width", "Height"];

pub const CYTOSCAPE_LAYOUTS: [&str; 6] =
    ["random", "grid", "circle", "concentric", "breadthfirst", "cose"];

fn capitalized_options(values: &[&str]) -> Value {
    let options: Vec<Value> = values
        .iter()
        .map(|v| {
            let mut chars = v.chars();
            let label: String = match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            };
            json!({"label": label, "value": v})
        })
        .collect();
    Value::Array(options)
}

fn stylesheet() -> Value {
    let class = |c: &str| format!(".{c}");
    json!([
        {"selector": "node", "style": {"opacity": 0.65, "z-index": 9999}},
        {"selector": "edge", "style": {"curve-style": "bezier", "opacity": 0.45, "z-index": 5000}},
        {"selector": class(FOLLOWER_NODE_CLASS), "style": {"background-color": "#0074D9"}},
        {"selector": class(FOLLOWER_EDGE_CLASS), "style": {
            "mid-target-arrow-color": "blue", "mid-target-arrow-shape": "vee", "line-color": "#0074D9"
        }},
        {"selector": class(FOLLOWING_NODE_CLASS), "style": {"background-color": "#FF4136"}},
        {"selector": class(FOLLOWING_EDGE_CLASS), "style": {
            "mid-target-arrow-color": "red", "mid-target-arrow-shape": "vee", "line-color": "#FF4136"
        }},
        {"selector": class(GENESIS_CLASS), "style": {
            "background-color": "#B10DC9", "border-width": 2, "border-color": "purple",
            "border-opacity": 1, "opacity": 1, "label": "data(label)", "color": "#B10DC9",
            "text-opacity": 1, "font-size": 12, "z-index": 9999
        }},
        {"selector": ":selected", "style": {
            "border-width": 2, "border-color": "black", "border-opacity": 1, "opacity": 1,
            "label": "data(label)", "color": "black", "font-size": 12, "z-index": 9999
        }},
    ])
}

fn core_components() -> ContentNode {
    let axis = |label: &str, id: &str, value: &str| {
        ContentNode::div(vec![
            ContentNode::p(label).with_style(Style::new().set("fontSize", 25)),
            ContentNode::widget(WidgetKind::Dropdown)
                .with_id(id)
                .with_prop("options", options(GAPMINDER_MEASURES.iter().map(|m| json!(m))))
                .with_prop("value", value),
        ])
    };
    ContentNode::div(vec![
        section_title("Dash_Core_Components"),
        panel(
            r#"
Dash_Core_Components provides components like sliders, dropdowns, graphs and more.
Many components fire callbacks, and the application gets interactive.
"#,
        ),
        axis("X axis value: ", "dcc_dd_x", "lifeExp")
            .with_style(Style::new().set("width", "49%").set("float", "left")),
        axis("Y axis value: ", "dcc_dd_y", "pop")
            .with_style(Style::new().set("width", "49%").set("display", "inline-block")),
        ContentNode::div(Vec::new()).with_id("show_dccs_graph"),
        doc_link("Dash Core Components Document", "https://dash.plot.ly/dash-core-components"),
    ])
}

fn editable_table() -> ContentNode {
    let mut columns = vec!["Model"];
    columns.extend(TABLE_PARAMS);
    let rows: Vec<Map<String, Value>> = (1..=4)
        .map(|model| {
            let mut row = Map::new();
            row.insert("Model".to_string(), json!(model));
            for param in TABLE_PARAMS {
                row.insert(param.to_string(), json!(0));
            }
            row
        })
        .collect();

    ContentNode::div(vec![
        section_title("Dash Table"),
        panel(
            r#"
- Dash Datatable is an interactive table. It can be used like Excel.
- I will show you how the graph changes as I enter numbers in the table.
"#,
        ),
        data_table(&columns, rows, 25)
            .with_id("table-editing-simple")
            .with_prop("editable", true),
        ContentNode::widget(WidgetKind::Graph).with_id("table-editing-simple-output"),
        doc_link("Dash DataTable Document", "https://dash.plot.ly/datatable"),
    ])
}

fn daq() -> ContentNode {
    ContentNode::div(vec![
        section_title("Dash Daq"),
        panel(
            r#"
Dash Daq is for data acquisition. It can make beautiful UIs, tools for measuring
voltage, temperature, pressure and more.
"#,
        ),
        ContentNode::widget(WidgetKind::Interval)
            .with_id("daq-interval")
            .with_prop("interval", 1000)
            .with_prop("n_intervals", 0)
            .with_prop("disabled", true),
        ContentNode::widget(WidgetKind::PowerButton)
            .with_id("daq-powerbutton")
            .with_prop("on", false)
            .with_prop("size", 100)
            .with_prop("color", "green"),
        ContentNode::div(Vec::new()).with_id("daq-realtime"),
        doc_link("Dash Daq Document", "https://dash.plot.ly/dash-daq"),
    ])
}

fn canvas(image_url: &str) -> ContentNode {
    ContentNode::div(vec![
        section_title("Dash Canvas"),
        panel(
            r#"
Dash Canvas is drawing and annotation for image processing. Annotation for
Machine Learning training sets and more.
"#,
        ),
        ContentNode::div(vec![ContentNode::widget(WidgetKind::Canvas)
            .with_id("canvas-bg")
            .with_prop("width", 500)
            .with_prop("filename", image_url)
            .with_prop("lineWidth", 8)
            .with_prop("goButtonTitle", "Remove background")
            .with_prop("hide_buttons", json!(["line", "zoom", "pan"]))])
        .with_style(Style::new().set("display", "inline-block").set("marginRight", "5%")),
        ContentNode::div(vec![ContentNode::element("img", Vec::new())
            .with_id("seg-image")
            .with_prop("width", 500)])
        .with_style(Style::new().set("display", "inline-block")),
        doc_link("Dash Canvas Document", "https://dash.plot.ly/canvas"),
    ])
}

fn cytoscape(elements: Value) -> ContentNode {
    let controls = ContentNode::div(vec![
        ContentNode::h4("Control Panel"),
        ContentNode::p("Layout:"),
        ContentNode::widget(WidgetKind::Dropdown)
            .with_id("dropdown-layout")
            .with_prop("options", capitalized_options(&CYTOSCAPE_LAYOUTS))
            .with_prop("value", "grid")
            .with_prop("clearable", false),
        ContentNode::p("Expand:"),
        ContentNode::widget(WidgetKind::RadioItems)
            .with_id("radio-expand")
            .with_prop("options", capitalized_options(&["followers", "following"]))
            .with_prop("value", "followers"),
        ContentNode::h4("JSON"),
        ContentNode::p("Node Object JSON:"),
        ContentNode::element("pre", Vec::new()).with_id("tap-node-json-output"),
        ContentNode::p("Edge Object JSON:"),
        ContentNode::element("pre", Vec::new()).with_id("tap-edge-json-output"),
    ])
    .with_style(Style::new().set("width", "30%").set("display", "inline-block"));

    ContentNode::div(vec![
        section_title("Dash Cytoscape"),
        panel("[Dash Cytoscape](https://github.com/plotly/dash-cytoscape) is a network visualization component using Cytoscape.js."),
        ContentNode::div(vec![
            ContentNode::div(vec![ContentNode::widget(WidgetKind::Cytoscape)
                .with_id("cytoscape")
                .with_prop("elements", elements)
                .with_prop("stylesheet", stylesheet())
                .with_style(Style::new().set("height", "60vh"))])
            .with_style(Style::new().set("width", "70%").set("float", "left")),
            controls,
        ])
        .with_style(Style::new().set("height", "63vh")),
    ])
}

pub fn components(assets: &Assets) -> Result<ContentNode, serde_json::Error> {
    let elements = serde_json::to_value(assets.network.default_elements())?;

    let html_components = ContentNode::div(vec![
        section_title("dash_html_components"),
        panel(
            r#"
Dash_html_components provides HTML tags as Python classes.

If you want to write

```
<h1>Hello China!</h1>
```

with the Dash_html_components module

```
import dash_html_components as html
html.H1("Hello China!")
```
"#,
        ),
        doc_link("Dash HTML Components Document", "https://dash.plot.ly/dash-html-components"),
    ]);

    let bio = ContentNode::div(vec![
        section_title("Dash Bio"),
        panel("[Dash Bio](https://dash.plot.ly/dash-bio) is a set of bioinformatics components. Some of its graphs are useful outside bioinformatics too."),
        ContentNode::div(vec![ContentNode::widget(WidgetKind::Molecule2dViewer)
            .with_prop("modelData", assets.molecule.clone())
            .with_prop("width", 1500)])
        .with_style(Style::new().set("width", "80%").set("margin", "auto")),
    ]);

    Ok(ContentNode::div(vec![
        head_title("Components"),
        ContentNode::div(vec![
            panel(
                r#"
Dash's layout is made of components. Dash has 7 component libraries ready to use.
Today I will show you some of them.
"#,
            ),
            html_components,
            core_components(),
            editable_table(),
            daq(),
            canvas(&assets.image_url),
            cytoscape(elements),
            bio,
            panel("Samples of these components are in the [dash-gallery](https://dash-gallery.plotly.host/Portal/). Please check it out!"),
        ])
        .with_style(Style::new().set("margin", "5%")),
        next_link("Next: deploy", "/deploy"),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::testing::assets;

    fn prop(slide: &ContentNode, id: &str, key: &str) -> Option<Value> {
        slide
            .initial_props()
            .into_iter()
            .find(|(i, p, _)| i == id && p == key)
            .map(|(_, _, v)| v)
    }

    #[test]
    fn test_cytoscape_starts_at_genesis() {
        let slide = components(&assets()).unwrap();
        let elements = prop(&slide, "cytoscape", "elements").unwrap();
        assert_eq!(elements.as_array().unwrap().len(), 1);
        assert_eq!(elements[0]["data"]["id"], json!("1"));
        assert_eq!(elements[0]["classes"], json!("genesis"));
    }

    #[test]
    fn test_seeded_component_values() {
        let slide = components(&assets()).unwrap();
        assert_eq!(prop(&slide, "dropdown-layout", "value"), Some(json!("grid")));
        assert_eq!(prop(&slide, "radio-expand", "value"), Some(json!("followers")));
        assert_eq!(prop(&slide, "daq-powerbutton", "on"), Some(json!(false)));
        let rows = prop(&slide, "table-editing-simple", "data").unwrap();
        assert_eq!(rows.as_array().unwrap().len(), 4);
        assert_eq!(rows[3], json!({"Model": 4, "Weight": 0, "Torque": 0, "Width": 0, "Height": 0}));
    }

    #[test]
    fn test_layout_options_are_capitalized() {
        let opts = capitalized_options(&["breadthfirst"]);
        assert_eq!(opts, json!([{"label": "Breadthfirst", "value": "breadthfirst"}]));
    }
}
