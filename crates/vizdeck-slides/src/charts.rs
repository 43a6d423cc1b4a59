//! Figure builders shared by slides and cells.
//!
//! Each builder recomputes its figure from the table it is given; nothing is
//! cached between calls.

use serde_json::{json, Value};
use vizdeck_common::figure::Frame;
use vizdeck_common::{Axis, Figure, Layout, Trace, TraceKind};
use vizdeck_data::{DataError, Datum, Table};

type Result<T> = std::result::Result<T, DataError>;

/// Countries shown before any interaction on the gapminder slides.
pub const GAPMINDER_FIVE: [&str; 5] = ["Canada", "Switzerland", "Denmark", "United States", "Australia"];

/// Numeric gapminder columns offered on the axis dropdowns.
pub const GAPMINDER_MEASURES: [&str; 3] = ["lifeExp", "pop", "gdpPercap"];

pub const IRIS_DIMENSIONS: [&str; 4] = ["sepal_width", "sepal_length", "petal_width", "petal_length"];

/// One line per distinct value of `group`, in first-appearance order.
pub fn lines_by(table: &Table, x: &str, y: &str, group: &str, title: &str) -> Result<Figure> {
    let mut traces = Vec::new();
    for key in table.unique(group)? {
        let rows = table.filter_eq(group, &key.to_value())?;
        traces.push(Trace::scatter(rows.values(x)?, rows.values(y)?, "lines").name(key.to_string()));
    }
    Ok(Figure::new(traces, Layout::titled(title)))
}

/// Plain bar chart of two columns.
pub fn bars(table: &Table, x: &str, y: &str, layout: Layout) -> Result<Figure> {
    Ok(Figure::new(vec![Trace::bar(table.values(x)?, table.values(y)?)], layout))
}

fn hotel_trace(rows: &Table) -> Result<Trace> {
    Ok(Trace {
        lat: rows.values("ido")?,
        lon: rows.values("keido")?,
        ..Trace::new(TraceKind::Scattermapbox)
    }
    .mode("markers")
    .marker(json!({"size": 9}))
    .text(rows.values("hotel_name")?))
}

/// Map layout centred on the mean position of every hotel, filtered or not.
fn hotel_layout(hotels: &Table) -> Result<Layout> {
    let center = json!({"lat": hotels.mean("ido")?, "lon": hotels.mean("keido")?});
    Ok(Layout {
        autosize: Some(true),
        hovermode: Some("closest".to_string()),
        mapbox: Some(json!({
            "style": "open-street-map",
            "center": center,
            "pitch": 90,
            "zoom": 12,
        })),
        height: Some(600),
        ..Layout::default()
    })
}

/// Every hotel, one trace per construction decade.
pub fn hotel_map_all(hotels: &Table) -> Result<Figure> {
    let mut traces = Vec::new();
    for age in hotels.unique("age")? {
        let rows = hotels.filter_eq("age", &age.to_value())?;
        traces.push(hotel_trace(&rows)?.name(age.to_string()));
    }
    Ok(Figure::new(traces, hotel_layout(hotels)?))
}

/// Only the hotels in `subset`, as a single trace.
pub fn hotel_map_subset(hotels: &Table, subset: &Table) -> Result<Figure> {
    Ok(Figure::new(vec![hotel_trace(subset)?], hotel_layout(hotels)?))
}

/// Scatter-plot matrix, one trace per `color` class.
pub fn scatter_matrix(table: &Table, dimensions: &[&str], color: &str) -> Result<Figure> {
    let mut traces = Vec::new();
    for class in table.unique(color)? {
        let rows = table.filter_eq(color, &class.to_value())?;
        let dims = dimensions
            .iter()
            .map(|d| Ok(json!({"label": d, "values": rows.values(d)?})))
            .collect::<Result<Vec<Value>>>()?;
        traces.push(Trace { dimensions: dims, ..Trace::new(TraceKind::Splom) }.name(class.to_string()));
    }
    Ok(Figure::new(traces, Layout::default()))
}

/// Log-x scatter of the chosen gapminder rows.
pub fn gapminder_scatter(rows: &Table, title: &str) -> Result<Figure> {
    let layout = Layout {
        xaxis: Some(Axis::titled("gdpPercap(log)").log()),
        yaxis: Some(Axis::titled("lifeExp")),
        ..Layout::titled(title).height(400)
    };
    Ok(Figure::new(
        vec![Trace::scatter(rows.values("gdpPercap")?, rows.values("lifeExp")?, "markers")],
        layout,
    ))
}

/// Log-log scatter of two measures, coloured by year.
pub fn measure_scatter(gapminder: &Table, x: &str, y: &str) -> Result<Figure> {
    let trace = Trace::scatter(gapminder.values(x)?, gapminder.values(y)?, "markers")
        .text(gapminder.values("country")?)
        .marker(json!({
            "color": gapminder.values("year")?,
            "colorscale": "Plasma",
            "showscale": true,
        }));
    let layout = Layout {
        xaxis: Some(Axis::titled(x).log()),
        yaxis: Some(Axis::titled(y).log()),
        ..Layout::titled(format!("Gapminder Chart X: {x}, Y: {y}"))
    };
    Ok(Figure::new(vec![trace], layout))
}

/// Bubble chart of life expectancy against income, animated by year.
pub fn gapminder_bubbles(gapminder: &Table) -> Result<Figure> {
    let max_pop = gapminder
        .column("pop")?
        .into_iter()
        .filter_map(Datum::as_f64)
        .fold(0.0, f64::max);
    // largest bubble about 45px across
    let sizeref = if max_pop > 0.0 { 2.0 * max_pop / 45f64.powi(2) } else { 1.0 };
    let continents = gapminder.unique("continent")?;

    let mut frames = Vec::new();
    for year in gapminder.unique("year")? {
        let rows = gapminder.filter_eq("year", &year.to_value())?;
        let mut data = Vec::new();
        for continent in &continents {
            let r = rows.filter_eq("continent", &continent.to_value())?;
            data.push(
                Trace::scatter(r.values("gdpPercap")?, r.values("lifeExp")?, "markers")
                    .name(continent.to_string())
                    .text(r.values("country")?)
                    .marker(json!({"size": r.values("pop")?, "sizemode": "area", "sizeref": sizeref})),
            );
        }
        frames.push(Frame { name: year.to_string(), data });
    }

    let steps: Vec<Value> = frames
        .iter()
        .map(|f| json!({"label": f.name, "method": "animate", "args": [[f.name]]}))
        .collect();
    let mut layout = Layout {
        xaxis: Some(Axis { range: Some([2.0, 5.0]), ..Axis::titled("gdpPercap").log() }),
        yaxis: Some(Axis { range: Some([30.0, 90.0]), ..Axis::titled("lifeExp") }),
        ..Layout::default()
    };
    layout.extra.insert("sliders".to_string(), json!([{ "steps": steps }]));

    Ok(Figure {
        data: frames.first().map(|f| f.data.clone()).unwrap_or_default(),
        layout,
        frames,
    })
}

/// Cities on a map, sized and coloured by population.
pub fn city_map(cities: &Table) -> Result<Figure> {
    let pops = cities.values("pop")?;
    let max_pop = pops.iter().filter_map(Value::as_f64).fold(0.0, f64::max);
    let sizeref = if max_pop > 0.0 { 2.0 * max_pop / 20f64.powi(2) } else { 1.0 };
    let trace = Trace {
        lat: cities.values("lat")?,
        lon: cities.values("long")?,
        ..Trace::new(TraceKind::Scattermapbox)
    }
    .mode("markers")
    .text(cities.values("city")?)
    .marker(json!({
        "size": pops,
        "sizemode": "area",
        "sizeref": sizeref,
        "color": pops,
        "colorscale": "Rainbow",
    }));
    let layout = Layout {
        mapbox: Some(json!({
            "style": "open-street-map",
            "center": {"lat": cities.mean("lat")?, "lon": cities.mean("long")?},
            "zoom": 3,
        })),
        ..Layout::default()
    };
    Ok(Figure::new(vec![trace], layout))
}

/// Grouped bars of the hello-world example.
pub fn hello_bars() -> Figure {
    let x = vec![json!(1), json!(2), json!(3)];
    let series = [("Kyoto", [2, 3, 4]), ("Tokyo", [4, 2, 4]), ("Osaka", [3, 1, 4])];
    let traces = series
        .iter()
        .map(|(name, ys)| Trace::bar(x.clone(), ys.iter().map(|y| json!(y)).collect()).name(*name))
        .collect();
    Figure::new(traces, Layout::titled("Dash DataViz").height(400))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use vizdeck_test_utils::{GAPMINDER_CSV, HOTELS_CSV, IRIS_CSV};

    fn table(csv: &str) -> Table {
        Table::from_reader(csv.as_bytes(), Path::new("fixture.csv")).unwrap()
    }

    #[test]
    fn test_hotel_map_all_splits_by_age() {
        let hotels = table(HOTELS_CSV);
        let fig = hotel_map_all(&hotels).unwrap();
        let names: Vec<_> = fig.data.iter().map(|t| t.name.clone().unwrap()).collect();
        assert_eq!(names, vec!["2010s", "1990s"]);
        assert_eq!(fig.point_count(), hotels.len());
    }

    #[test]
    fn test_lines_by_one_trace_per_group() {
        let g = table(GAPMINDER_CSV);
        let fig = lines_by(&g, "year", "gdpPercap", "country", "Normal Visualization").unwrap();
        assert_eq!(fig.data.len(), 3);
        assert_eq!(fig.data[0].x, vec![json!(2002), json!(2007)]);
        assert_eq!(fig.layout.title.as_deref(), Some("Normal Visualization"));
    }

    #[test]
    fn test_bubbles_have_a_frame_per_year() {
        let g = table(GAPMINDER_CSV);
        let fig = gapminder_bubbles(&g).unwrap();
        assert_eq!(fig.frames.len(), 2);
        assert_eq!(fig.frames[0].name, "2002");
        assert_eq!(fig.data, fig.frames[0].data);
    }

    #[test]
    fn test_scatter_matrix_dimensions() {
        let iris = table(IRIS_CSV);
        let fig = scatter_matrix(&iris, &IRIS_DIMENSIONS, "species").unwrap();
        assert_eq!(fig.data.len(), 3);
        assert_eq!(fig.data[0].dimensions.len(), 4);
        assert_eq!(fig.data[0].dimensions[0]["label"], json!("sepal_width"));
    }
}
