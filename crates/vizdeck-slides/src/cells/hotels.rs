//! Kyoto hotels: clicking a year on the bar chart filters the map.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;
use vizdeck_data::{DataError, Datasets};
use vizdeck_reactive::{Args, Cell, CellError, CellSpec, Outcome};

use crate::charts;

/// Clicking this bar label restores every hotel.
pub const ALL_KEY: &str = "all";
/// The first (out-of-range) year on the bar chart also restores every hotel.
pub const FIRST_YEAR_KEY: i64 = 1946;

#[derive(Debug, Deserialize)]
struct ClickData {
    points: Vec<ClickPoint>,
}

#[derive(Debug, Deserialize)]
struct ClickPoint {
    x: Value,
}

/// The payload the bar chart starts with, before any click.
pub fn initial_click() -> Value {
    json!({"points": [{"x": ALL_KEY}]})
}

fn is_sentinel(key: &Value) -> bool {
    key.as_str() == Some(ALL_KEY) || key.as_f64() == Some(FIRST_YEAR_KEY as f64)
}

fn label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `kyoto-hotel-bar.clickData` → map figure and hotel count label.
pub struct HotelMap {
    data: Arc<Datasets>,
}

impl HotelMap {
    pub fn new(data: Arc<Datasets>) -> Self {
        Self { data }
    }
}

impl Cell for HotelMap {
    type State = ();

    fn spec(&self) -> CellSpec {
        CellSpec::new("hotel_map")
            .input("kyoto-hotel-bar", "clickData")
            .output("kyoto-hotelmap-yearcallback", "figure")
            .output("year-number", "children")
    }

    fn update(&self, _: &(), args: &Args) -> Result<Outcome<()>, CellError> {
        let Some(click) = args.parse::<ClickData>("kyoto-hotel-bar", "clickData")? else {
            return Ok(Outcome::NoUpdate);
        };
        let Some(key) = click.points.into_iter().next().map(|p| p.x) else {
            return Ok(Outcome::NoUpdate);
        };
        let hotels = &self.data.hotels;
        let fail = |e: DataError| CellError::Failed(e.to_string());

        if is_sentinel(&key) {
            let figure = charts::hotel_map_all(hotels).map_err(fail)?;
            let text = format!("Number of Kyoto hotels (2018/12)： {}", hotels.len());
            return Ok(Outcome::emit(vec![figure.to_value(), json!(text)]));
        }

        let subset = hotels.filter_eq("year", &key).map_err(fail)?;
        let counts = self.data.hotel_counts.filter_eq("year", &key).map_err(fail)?;
        let Some(count) = counts.values("count").map_err(fail)?.into_iter().next() else {
            debug!("no hotel count for {}", key);
            return Ok(Outcome::NoUpdate);
        };
        let figure = charts::hotel_map_subset(hotels, &subset).map_err(fail)?;
        let text = format!("Number of hotels built in {}: {}", label(&key), label(&count));
        Ok(Outcome::emit(vec![figure.to_value(), json!(text)]))
    }
}
