//! Introducing the framework: what it is, a minimal app, and its graphs.

use serde_json::json;
use vizdeck_common::{ContentNode, Style, WidgetKind};

use super::options;
use crate::cells::gapminder::GRAPH_MODULES;
use crate::charts;
use crate::style::{head_title, next_link, panel, section_title};

pub fn about() -> ContentNode {
    ContentNode::div(vec![
        head_title("About Dash"),
        panel(
            r#"
- Dash is an Open Source Python library (MIT License).
    - Analytical web framework.
    - Made by [plotly](https://plot.ly/).
    - Write code with only Python.
    - Built on Flask, plotly.js and react.js.
    - [Document](https://dash.plot.ly/)
- With Dash it is easy to build interactive data visualization, and easy to share.
    - Data Visualization with Plotly.
    - A lot of data can be observed.
    - Easy to share on the web.
- There are many other components besides graphs.
    - Dash_Cytoscape, Dash-Bio and so on.
    - [You can build your own components!](https://dash.plot.ly/plugins)
"#,
        ),
        next_link("Next: dash_basic", "/dash_basic"),
    ])
}

const HELLO_CODE: &str = r#"
```python
import dash
import dash_core_components as dcc
import dash_html_components as html

app = dash.Dash(__name__)

# Create a layout
app.layout = html.Div(
    children=[
        dcc.Graph(
            id="hello-graph",
            figure={
                "data": [
                    {"x": [1, 2, 3], "y": [2, 3, 4], "type": "bar", "name": "Kyoto"},
                    {"x": [1, 2, 3], "y": [4, 2, 4], "type": "bar", "name": "Tokyo"},
                    {"x": [1, 2, 3], "y": [3, 1, 4], "type": "bar", "name": "Osaka"},
                ],
                "layout": {"title": "Dash DataViz", "height": 800},
            },
        ),
        html.Div(id="hello-graph-callback", style={"fontSize": 30}),
    ]
)

# Create a callback
@app.callback(Output("hello-graph-callback", "children"),
              [Input("hello-graph", "hoverData")])
def hello_graph_callback(hoverData):
    return json.dumps(hoverData)

if __name__ == "__main__":
    app.run_server(debug=True)
```
"#;

pub fn basic() -> ContentNode {
    let hello = ContentNode::div(vec![
        ContentNode::graph(&charts::hello_bars()).with_id("hello-graph"),
        ContentNode::div(Vec::new())
            .with_id("hello-graph-callback")
            .with_style(Style::new().set("fontSize", 30)),
    ])
    .with_style(Style::new().set("width", "70%").set("margin", "auto"));

    ContentNode::div(vec![
        head_title("how to build dash application."),
        hello,
        section_title("Dash application is made by layout and callbacks."),
        panel(
            r#"
- Layout
    - make what it looks like.
    - build with components.
- callbacks
    - Keys to make applications interactive.
    - Use Input State Output
"#,
        ),
        ContentNode::p("Code ").with_style(Style::new().set("fontSize", 30)),
        panel(HELLO_CODE),
        panel(
            r#"
- This app was written in just 38 lines! (including comments, formatted with black)
- With Dash we can build complex applications easily.
"#,
        ),
        next_link("Next: dash_graphs", "/dash_graphs"),
    ])
}

pub fn graphs() -> ContentNode {
    let picker = ContentNode::div(vec![
        section_title("Graph by Modules"),
        ContentNode::widget(WidgetKind::RadioItems)
            .with_id("graphs_radio")
            .with_prop("options", options(GRAPH_MODULES.iter().map(|m| json!(m))))
            .with_prop("value", GRAPH_MODULES[0])
            .with_prop("labelStyle", json!({"display": "inline-block", "margin": "1%"})),
    ])
    .with_style(Style::new().set("fontSize", 30));

    ContentNode::div(vec![
        head_title("Graphs"),
        ContentNode::div(vec![
            panel(
                r#"
Difference between a normal web framework and dash is that dash can use interactive graphs.

Dash can create graphs with Plotly.
And plotly has a wrapper named plotly.express, like matplotlib's seaborn.
Let's look at the difference between modules!
"#,
            ),
            picker,
            ContentNode::div(Vec::new()).with_id("graph_by_module"),
        ])
        .with_style(Style::new().set("margin", "5%")),
        next_link("Next: dash_components", "/dash_components"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphs_slide_seeds_dash_module() {
        let props = graphs().initial_props();
        assert!(props.contains(&("graphs_radio".to_string(), "value".to_string(), json!("dash"))));
    }

    #[test]
    fn test_basic_slide_hover_target() {
        let slide = basic();
        assert!(slide.find("hello-graph").is_some());
        assert!(slide.find("hello-graph-callback").is_some());
    }
}
