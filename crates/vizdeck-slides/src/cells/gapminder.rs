//! Gapminder projections: checked countries, module comparison, axis picker.

use std::sync::Arc;

use serde_json::{json, Value};
use vizdeck_common::{ContentNode, Figure};
use vizdeck_data::{DataError, Datasets, Table};
use vizdeck_reactive::{Args, Cell, CellError, CellSpec, Outcome};

use crate::charts::{self, GAPMINDER_MEASURES};
use crate::style;

fn fail(e: DataError) -> CellError {
    CellError::Failed(e.to_string())
}

fn graph(figure: &Figure) -> Value {
    ContentNode::graph(figure).to_value()
}

/// Toggle whose first alternative follows the country checklist and whose
/// second is the animated bubble chart.
pub struct InteractiveVisualization {
    data: Arc<Datasets>,
    bubbles: Value,
}

impl InteractiveVisualization {
    pub fn new(data: Arc<Datasets>) -> Result<Self, DataError> {
        let bubbles = graph(&charts::gapminder_bubbles(&data.gapminder)?);
        Ok(Self { data, bubbles })
    }
}

impl Cell for InteractiveVisualization {
    type State = ();

    fn spec(&self) -> CellSpec {
        CellSpec::new("interactive_visualization")
            .input("interactive_button", "n_clicks")
            .input("interactive_checklist", "value")
            .output("interactive_viz", "children")
    }

    fn update(&self, _: &(), args: &Args) -> Result<Outcome<()>, CellError> {
        if args.clicks("interactive_button", "n_clicks") % 2 == 1 {
            return Ok(Outcome::emit(vec![self.bubbles.clone()]));
        }
        let countries: Vec<Value> = args
            .parse::<Vec<String>>("interactive_checklist", "value")?
            .unwrap_or_default()
            .into_iter()
            .map(Value::String)
            .collect();
        let rows = self.data.gapminder.filter_in("country", &countries).map_err(fail)?;
        let figure = charts::lines_by(&rows, "year", "gdpPercap", "country", "Interactive Visualization")
            .map_err(fail)?;
        Ok(Outcome::emit(vec![graph(&figure)]))
    }
}

/// The same 2007 scatter written with each plotting module.
pub const GRAPH_MODULES: [&str; 3] = ["dash", "plotly.graph_objects", "plotly.express"];

fn module_code(module: &str) -> Option<(&'static str, &'static str)> {
    match module {
        "dash" => Some((
            "Graph by Dash",
            r#"```
dcc.Graph(figure={"data": [{"x": gapminder2007["gdpPercap"],
"y":gapminder2007["lifeExp"],"mode":"markers"}],
"layout": {"height": 400, "xaxis": {"title": "gdpPercap(log)",
 "type": "log"}, "yaxis":{"title": "lifeExp"},
 "title":"Graph by Dash"}})
```"#,
        )),
        "plotly.graph_objects" => Some((
            "Graph by plotly.graph_objects",
            r#"```
dcc.Graph(figure={"data": [go.Scatter(x=gapminder2007["gdpPercap"],
 y=gapminder2007["lifeExp"], mode="markers")],
"layout":go.Layout(height=400, xaxis={"title": "gdpPercap(log)",
"type":"log"}, yaxis={"title":"lifeExp"},
title= "Graph by plotly.graph_objects")})
```"#,
        )),
        "plotly.express" => Some((
            "Graph by plotly.express",
            r#"```
dcc.Graph(figure=px.scatter(gapminder2007, x="gdpPercap",
y="lifeExp", height=400, log_x=True, title="Graph by plotly.express"))
```"#,
        )),
        _ => None,
    }
}

/// `graphs_radio.value` → the 2007 scatter plus the code that drew it.
pub struct GraphByModule {
    year_2007: Table,
}

impl GraphByModule {
    pub fn new(data: &Datasets) -> Result<Self, DataError> {
        Ok(Self { year_2007: data.gapminder.filter_eq("year", &json!(2007))? })
    }
}

impl Cell for GraphByModule {
    type State = ();

    fn spec(&self) -> CellSpec {
        CellSpec::new("graph_by_module")
            .input("graphs_radio", "value")
            .output("graph_by_module", "children")
    }

    fn update(&self, _: &(), args: &Args) -> Result<Outcome<()>, CellError> {
        let Some((title, code)) = args.str("graphs_radio", "value").and_then(module_code) else {
            return Ok(Outcome::NoUpdate);
        };
        let figure = charts::gapminder_scatter(&self.year_2007, title).map_err(fail)?;
        let node = ContentNode::div(vec![ContentNode::graph(&figure), style::panel(code)]);
        Ok(Outcome::emit(vec![node.to_value()]))
    }
}

/// `dcc_dd_x.value`, `dcc_dd_y.value` → log-log scatter of the two measures.
pub struct MeasureScatter {
    data: Arc<Datasets>,
}

impl MeasureScatter {
    pub fn new(data: Arc<Datasets>) -> Self {
        Self { data }
    }
}

impl Cell for MeasureScatter {
    type State = ();

    fn spec(&self) -> CellSpec {
        CellSpec::new("measure_scatter")
            .input("dcc_dd_x", "value")
            .input("dcc_dd_y", "value")
            .output("show_dccs_graph", "children")
    }

    fn update(&self, _: &(), args: &Args) -> Result<Outcome<()>, CellError> {
        let measure = |id: &str| args.str(id, "value").filter(|m| GAPMINDER_MEASURES.contains(m));
        let (Some(x), Some(y)) = (measure("dcc_dd_x"), measure("dcc_dd_y")) else {
            return Ok(Outcome::NoUpdate);
        };
        let figure = charts::measure_scatter(&self.data.gapminder, x, y).map_err(fail)?;
        Ok(Outcome::emit(vec![graph(&figure)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::testing::assets;

    fn figure_of(outcome: &Outcome<()>) -> Value {
        outcome.outputs().unwrap()[0]["props"]["figure"].clone()
    }

    #[test]
    fn test_interactive_follows_checklist_on_even_clicks() {
        let cell = InteractiveVisualization::new(assets().data).unwrap();
        let args = Args::default()
            .with("interactive_button", "n_clicks", json!(2))
            .with("interactive_checklist", "value", json!(["Japan"]));
        let fig = figure_of(&cell.update(&(), &args).unwrap());
        assert_eq!(fig["data"].as_array().unwrap().len(), 1);
        assert_eq!(fig["data"][0]["name"], json!("Japan"));
    }

    #[test]
    fn test_interactive_odd_clicks_show_bubbles() {
        let cell = InteractiveVisualization::new(assets().data).unwrap();
        let args = Args::default()
            .with("interactive_button", "n_clicks", json!(1))
            .with_state("interactive_checklist", "value", json!(["Japan"]));
        let fig = figure_of(&cell.update(&(), &args).unwrap());
        assert_eq!(fig["frames"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_graph_by_module_titles() {
        let cell = GraphByModule::new(&assets().data).unwrap();
        for module in GRAPH_MODULES {
            let out = cell.update(&(), &Args::default().with("graphs_radio", "value", json!(module))).unwrap();
            let graph = &out.outputs().unwrap()[0]["children"][0];
            let title = graph["props"]["figure"]["layout"]["title"].as_str().unwrap();
            assert!(title.ends_with(if module == "dash" { "Dash" } else { module }));
            assert_eq!(graph["props"]["figure"]["data"][0]["x"].as_array().unwrap().len(), 3);
        }
        let unknown = cell.update(&(), &Args::default().with("graphs_radio", "value", json!("bokeh")));
        assert_eq!(unknown.unwrap(), Outcome::NoUpdate);
    }

    #[test]
    fn test_measure_scatter_rejects_unknown_columns() {
        let cell = MeasureScatter::new(assets().data);
        let ok = Args::default()
            .with("dcc_dd_x", "value", json!("lifeExp"))
            .with("dcc_dd_y", "value", json!("pop"));
        let fig = figure_of(&cell.update(&(), &ok).unwrap());
        assert_eq!(fig["layout"]["title"], json!("Gapminder Chart X: lifeExp, Y: pop"));
        assert_eq!(fig["layout"]["yaxis"]["type"], json!("log"));

        let bad = Args::default()
            .with("dcc_dd_x", "value", json!("country"))
            .with("dcc_dd_y", "value", json!("pop"));
        assert_eq!(cell.update(&(), &bad).unwrap(), Outcome::NoUpdate);
    }
}
