//! Visitor statistics: the yearly ranking table and the monthly charts.

use std::sync::Arc;

use serde_json::{json, Map, Value};
use tracing::debug;
use vizdeck_common::{ContentNode, Figure, Layout, Trace, WidgetKind};
use vizdeck_data::datasets::TOURISM_TOTAL;
use vizdeck_data::projection::{positional_ratio, rank_desc};
use vizdeck_data::{DataError, Datasets};
use vizdeck_reactive::{Args, Cell, CellError, CellSpec, Outcome};

use crate::charts;

pub const RANKING_LIMIT: usize = 10;

fn data_error(e: DataError) -> CellError {
    CellError::Failed(e.to_string())
}

/// Integral totals serialise as integers, like the source column.
fn number(total: f64) -> Value {
    if total.fract() == 0.0 && total.abs() < 9.0e15 {
        json!(total as i64)
    } else {
        json!(total)
    }
}

/// A data table widget with one column per key.
pub fn data_table(columns: &[&str], rows: Vec<Map<String, Value>>, font_size: u32) -> ContentNode {
    let columns: Vec<Value> = columns.iter().map(|c| json!({"name": c, "id": c})).collect();
    ContentNode::widget(WidgetKind::DataTable)
        .with_prop("columns", columns)
        .with_prop("data", rows)
        .with_prop(
            "style_cell",
            json!({"height": 30, "whiteSpace": "normal", "fontSize": font_size, "textAlign": "center"}),
        )
}

/// `year_select_dd.value` → top countries of that year.
pub struct YearRanking {
    data: Arc<Datasets>,
}

impl YearRanking {
    pub fn new(data: Arc<Datasets>) -> Self {
        Self { data }
    }
}

impl Cell for YearRanking {
    type State = ();

    fn spec(&self) -> CellSpec {
        CellSpec::new("year_ranking")
            .input("year_select_dd", "value")
            .output("year_tourist_rank", "children")
    }

    fn update(&self, _: &(), args: &Args) -> Result<Outcome<()>, CellError> {
        let Some(year) = args.get("year_select_dd", "value") else {
            return Ok(Outcome::NoUpdate);
        };
        let groups = self
            .data
            .tourism_by_country()
            .and_then(|rows| rows.filter_eq("year", year))
            .and_then(|rows| rows.group_sum("country", "value"))
            .map_err(data_error)?;

        let rows: Vec<Map<String, Value>> = rank_desc(groups, RANKING_LIMIT)
            .into_iter()
            .map(|r| {
                let mut row = Map::new();
                row.insert("country".to_string(), r.key.to_value());
                row.insert("year".to_string(), year.clone());
                row.insert("value".to_string(), number(r.total));
                row
            })
            .collect();
        debug!("ranking for {} has {} rows", year, rows.len());

        let table = data_table(&["country", "year", "value"], rows, 30);
        Ok(Outcome::emit(vec![table.to_value()]))
    }
}

/// `tourist_country_dd.value` → the country's monthly bars, the total's
/// monthly bars and their ratio.
pub struct TouristGraphs {
    data: Arc<Datasets>,
}

impl TouristGraphs {
    pub fn new(data: Arc<Datasets>) -> Self {
        Self { data }
    }
}

impl Cell for TouristGraphs {
    type State = ();

    fn spec(&self) -> CellSpec {
        CellSpec::new("tourist_graphs")
            .input("tourist_country_dd", "value")
            .output("tourist_graph", "figure")
            .output("all_tourist_graph", "figure")
            .output("country_tourist_ratio", "figure")
    }

    fn update(&self, _: &(), args: &Args) -> Result<Outcome<()>, CellError> {
        let Some(country) = args.str("tourist_country_dd", "value") else {
            return Ok(Outcome::NoUpdate);
        };
        let tourism = &self.data.tourism;
        let build = || -> Result<Vec<Value>, DataError> {
            let chosen = tourism.filter_eq("country", &json!(country))?;
            let total = tourism.filter_eq("country", &json!(TOURISM_TOTAL))?;

            let first = charts::bars(
                &chosen,
                "date",
                "value",
                Layout::titled(format!("Visit from {country}")).height(400),
            )?;
            let second = charts::bars(
                &total,
                "date",
                "value",
                Layout::titled("Total Tourist(by month)").height(400),
            )?;
            let ratio = positional_ratio(&chosen.values("value")?, &total.values("value")?);
            let third = Figure::new(
                vec![Trace::bar(chosen.values("date")?, ratio)],
                Layout::titled(format!("Tourist ratio({country})")),
            );
            Ok(vec![first.to_value(), second.to_value(), third.to_value()])
        };
        Ok(Outcome::emit(build().map_err(data_error)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vizdeck_test_utils::write_assets;

    fn datasets() -> Arc<Datasets> {
        let dir = tempfile::tempdir().unwrap();
        let config = write_assets(dir.path());
        Arc::new(Datasets::load(&config).unwrap())
    }

    fn ranking(cell: &YearRanking, year: Value) -> Vec<Value> {
        let out = cell.update(&(), &Args::default().with("year_select_dd", "value", year)).unwrap();
        let table = &out.outputs().unwrap()[0];
        table["props"]["data"].as_array().unwrap().clone()
    }

    #[test]
    fn test_ranking_excludes_aggregates_and_breaks_ties_by_row_order() {
        let cell = YearRanking::new(datasets());
        let rows = ranking(&cell, json!(2019));
        let countries: Vec<&str> = rows.iter().map(|r| r["country"].as_str().unwrap()).collect();
        assert_eq!(countries, vec!["中国", "韓国", "台湾"]);
        assert_eq!(rows[0]["value"], json!(150));
        assert_eq!(rows[0]["year"], json!(2019));
    }

    #[test]
    fn test_ranking_is_capped_and_descending() {
        let cell = YearRanking::new(datasets());
        for year in [2018, 2019] {
            let rows = ranking(&cell, json!(year));
            assert!(rows.len() <= RANKING_LIMIT);
            let values: Vec<f64> = rows.iter().map(|r| r["value"].as_f64().unwrap()).collect();
            assert!(values.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn test_year_without_rows_is_empty_table() {
        let cell = YearRanking::new(datasets());
        assert!(ranking(&cell, json!(1999)).is_empty());
    }

    #[test]
    fn test_absent_year_is_no_update() {
        let cell = YearRanking::new(datasets());
        assert_eq!(cell.update(&(), &Args::default()).unwrap(), Outcome::NoUpdate);
    }

    #[test]
    fn test_tourist_graphs_are_memoryless() {
        let cell = TouristGraphs::new(datasets());
        let run = |c: &str| {
            cell.update(&(), &Args::default().with("tourist_country_dd", "value", json!(c)))
                .unwrap()
        };
        let direct = run("韓国");
        let _ = run("中国");
        assert_eq!(run("韓国"), direct);
    }

    #[test]
    fn test_tourist_ratio_aligns_by_position() {
        let cell = TouristGraphs::new(datasets());
        let out = cell
            .update(&(), &Args::default().with("tourist_country_dd", "value", json!("中国")))
            .unwrap();
        let outputs = out.outputs().unwrap();
        assert_eq!(outputs[0]["layout"]["title"], json!("Visit from 中国"));
        assert_eq!(outputs[0]["data"][0]["y"], json!([100, 50, 80]));
        assert_eq!(outputs[1]["data"][0]["y"], json!([300, 200, 150]));

        let ratio = outputs[2]["data"][0]["y"].as_array().unwrap();
        assert!((ratio[0].as_f64().unwrap() - 100.0 / 300.0).abs() < 1e-12);
        assert!((ratio[2].as_f64().unwrap() - 80.0 / 150.0).abs() < 1e-12);
    }
}
