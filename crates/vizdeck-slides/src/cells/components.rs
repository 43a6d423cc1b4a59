//! Cells behind the component showcase: editable table, DAQ gauges and the
//! cytoscape layout picker.

use rand::Rng;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use vizdeck_common::{ContentNode, Figure, Layout, Style, Trace, TraceKind, WidgetKind};
use vizdeck_reactive::{Args, Cell, CellError, CellSpec, Outcome};

#[derive(Debug, Deserialize)]
struct Column {
    id: String,
    name: String,
}

/// Table cells arrive as text once edited.
fn numeric(value: Option<&Value>) -> Value {
    match value {
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(|n| serde_json::Number::from_f64(n).map(Value::Number))
            .unwrap_or_else(|| Value::String(s.clone())),
        Some(other) => other.clone(),
        None => Value::Null,
    }
}

/// Editable table rows → parallel coordinates, one axis per column.
pub struct TableParcoords;

impl Cell for TableParcoords {
    type State = ();

    fn spec(&self) -> CellSpec {
        CellSpec::new("table_parcoords")
            .input("table-editing-simple", "data")
            .input("table-editing-simple", "columns")
            .output("table-editing-simple-output", "figure")
    }

    fn update(&self, _: &(), args: &Args) -> Result<Outcome<()>, CellError> {
        let rows: Vec<Map<String, Value>> =
            args.parse("table-editing-simple", "data")?.unwrap_or_default();
        let columns: Vec<Column> = args.parse("table-editing-simple", "columns")?.unwrap_or_default();

        let dimensions = columns
            .iter()
            .map(|col| {
                let values: Vec<Value> = rows.iter().map(|row| numeric(row.get(&col.id))).collect();
                json!({"label": col.name, "values": values})
            })
            .collect();
        let trace = Trace { dimensions, ..Trace::new(TraceKind::Parcoords) };
        let figure = Figure::new(vec![trace], Layout::default());
        Ok(Outcome::emit(vec![figure.to_value()]))
    }
}

/// The interval only ticks while the power button is on.
pub struct DaqPower;

impl Cell for DaqPower {
    type State = ();

    fn spec(&self) -> CellSpec {
        CellSpec::new("daq_power")
            .input("daq-powerbutton", "on")
            .output("daq-interval", "disabled")
    }

    fn update(&self, _: &(), args: &Args) -> Result<Outcome<()>, CellError> {
        let on = args.get("daq-powerbutton", "on").and_then(Value::as_bool).unwrap_or(false);
        Ok(Outcome::emit(vec![json!(!on)]))
    }
}

pub const GAUGE_COUNT: usize = 7;
pub const GAUGE_MAX: f64 = 10.0;

fn gauge(value: f64, first: bool) -> ContentNode {
    let mut style = Style::new().set("display", "inline-block");
    if !first {
        style = style.set("marginLeft", "5%");
    }
    ContentNode::widget(WidgetKind::GraduatedBar)
        .with_prop(
            "color",
            json!({"gradient": true, "ranges": {"green": [0, 4], "yellow": [4, 7], "red": [7, 10]}}),
        )
        .with_prop("showCurrentValue", true)
        .with_prop("vertical", true)
        .with_prop("value", value)
        .with_prop("size", 400)
        .with_style(style)
}

/// Every interval tick draws fresh gauge readings and their sum.
pub struct DaqRealtime;

impl DaqRealtime {
    fn readings() -> Vec<f64> {
        let mut rng = rand::thread_rng();
        (0..GAUGE_COUNT).map(|_| rng.gen_range(0.0..GAUGE_MAX)).collect()
    }
}

impl Cell for DaqRealtime {
    type State = ();

    fn spec(&self) -> CellSpec {
        CellSpec::new("daq_realtime")
            .input("daq-interval", "n_intervals")
            .output("daq-realtime", "children")
    }

    fn update(&self, _: &(), args: &Args) -> Result<Outcome<()>, CellError> {
        if args.clicks("daq-interval", "n_intervals") == 0 {
            return Ok(Outcome::NoUpdate);
        }
        let readings = Self::readings();
        let sum: f64 = readings.iter().sum();

        let mut children: Vec<ContentNode> =
            readings.iter().enumerate().map(|(i, &v)| gauge(v, i == 0)).collect();
        children.push(ContentNode::widget(WidgetKind::LedDisplay).with_prop("value", sum));
        let panel = ContentNode::div(children)
            .with_style(Style::new().set("textAlign", "center").set("margin", "5%"));
        Ok(Outcome::emit(vec![panel.to_value()]))
    }
}

/// Layout dropdown → `{"name": layout}`.
pub struct CytoscapeLayout;

impl Cell for CytoscapeLayout {
    type State = ();

    fn spec(&self) -> CellSpec {
        CellSpec::new("cytoscape_layout")
            .input("dropdown-layout", "value")
            .output("cytoscape", "layout")
    }

    fn update(&self, _: &(), args: &Args) -> Result<Outcome<()>, CellError> {
        match args.str("dropdown-layout", "value") {
            Some(layout) => Ok(Outcome::emit(vec![json!({ "name": layout })])),
            None => Ok(Outcome::NoUpdate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parcoords_one_dimension_per_column() {
        let args = Args::default()
            .with(
                "table-editing-simple",
                "columns",
                json!([{"id": "Model", "name": "Model"}, {"id": "Weight", "name": "Weight"}]),
            )
            .with(
                "table-editing-simple",
                "data",
                json!([{"Model": 1, "Weight": 0}, {"Model": 2, "Weight": "3.5"}]),
            );
        let out = TableParcoords.update(&(), &args).unwrap();
        let fig = &out.outputs().unwrap()[0];
        assert_eq!(fig["data"][0]["type"], json!("parcoords"));
        assert_eq!(fig["data"][0]["dimensions"][1], json!({"label": "Weight", "values": [0, 3.5]}));
    }

    #[test]
    fn test_parcoords_keeps_unparseable_text() {
        assert_eq!(numeric(Some(&json!("heavy"))), json!("heavy"));
        assert_eq!(numeric(None), Value::Null);
    }

    #[test]
    fn test_power_toggles_interval() {
        let on = Args::default().with("daq-powerbutton", "on", json!(true));
        assert_eq!(DaqPower.update(&(), &on).unwrap().outputs().unwrap(), &[json!(false)]);
        let absent = DaqPower.update(&(), &Args::default()).unwrap();
        assert_eq!(absent.outputs().unwrap(), &[json!(true)]);
    }

    #[test]
    fn test_realtime_gauges_within_range_and_summed() {
        let args = Args::default().with("daq-interval", "n_intervals", json!(3));
        let out = DaqRealtime.update(&(), &args).unwrap();
        let children = out.outputs().unwrap()[0]["children"].as_array().unwrap().clone();
        assert_eq!(children.len(), GAUGE_COUNT + 1);

        let values: Vec<f64> = children[..GAUGE_COUNT]
            .iter()
            .map(|g| g["props"]["value"].as_f64().unwrap())
            .collect();
        assert!(values.iter().all(|v| (0.0..GAUGE_MAX).contains(v)));
        let sum = children[GAUGE_COUNT]["props"]["value"].as_f64().unwrap();
        assert!((sum - values.iter().sum::<f64>()).abs() < 1e-9);
    }

    #[test]
    fn test_realtime_idle_before_first_tick() {
        let zero = Args::default().with("daq-interval", "n_intervals", json!(0));
        assert_eq!(DaqRealtime.update(&(), &zero).unwrap(), Outcome::NoUpdate);
        assert_eq!(DaqRealtime.update(&(), &Args::default()).unwrap(), Outcome::NoUpdate);
    }

    #[test]
    fn test_layout_name() {
        let args = Args::default().with("dropdown-layout", "value", json!("circle"));
        let out = CytoscapeLayout.update(&(), &args).unwrap();
        assert_eq!(out.outputs().unwrap(), &[json!({"name": "circle"})]);
        assert_eq!(CytoscapeLayout.update(&(), &Args::default()).unwrap(), Outcome::NoUpdate);
    }
}
