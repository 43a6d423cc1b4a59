//! Tourism and Kyoto hotels: the motivating example.

use vizdeck_common::{ContentNode, Layout, Style, WidgetKind};
use vizdeck_data::{DataError, Datasets};

use super::options;
use crate::cells::hotels::initial_click;
use crate::charts;
use crate::style::{centered, head_title, panel, section_title};

const DEFAULT_YEAR: i64 = 2019;
const DEFAULT_COUNTRY: &str = "中国";

fn graph_slot(id: &str) -> ContentNode {
    ContentNode::widget(WidgetKind::Graph).with_id(id)
}

pub fn merit(data: &Datasets) -> Result<ContentNode, DataError> {
    let years = data.tourism_by_country()?.unique("year")?;
    let countries = data.tourism.unique("country")?;

    let ranking = ContentNode::div(vec![
        section_title("Number of Foreign tourists in Japan(by country Top10: yearly)"),
        ContentNode::widget(WidgetKind::Dropdown)
            .with_id("year_select_dd")
            .with_prop("options", options(years.iter().map(|y| y.to_value())))
            .with_prop("value", DEFAULT_YEAR)
            .with_prop("clearable", false)
            .with_style(
                Style::new()
                    .set("width", "40%")
                    .set("margin", "auto")
                    .set("fontSize", 25)
                    .set("textAlign", "center"),
            ),
        ContentNode::div(Vec::new())
            .with_id("year_tourist_rank")
            .with_style(Style::new().set("width", "50%").set("margin", "5% auto 5%")),
    ]);

    let monthly = ContentNode::div(vec![
        section_title("Number of tourist in japan(monthly)"),
        ContentNode::div(vec![ContentNode::widget(WidgetKind::Dropdown)
            .with_id("tourist_country_dd")
            .with_prop("options", options(countries.iter().map(|c| c.to_value())))
            .with_prop("value", DEFAULT_COUNTRY)
            .with_prop("clearable", false)])
        .with_style(Style::new().set("width", "40%").set("margin", "auto")),
        ContentNode::div(vec![
            ContentNode::div(vec![graph_slot("tourist_graph")])
                .with_style(Style::new().set("float", "left").set("width", "50%")),
            ContentNode::div(vec![graph_slot("all_tourist_graph")])
                .with_style(Style::new().set("display", "inline-block").set("width", "50%")),
            graph_slot("country_tourist_ratio"),
        ])
        .with_style(Style::new().set("margin", "3%")),
    ]);

    let hotel_bars = charts::bars(&data.hotel_counts, "year", "count", Layout::default())?;
    let clickable_bars =
        charts::bars(&data.hotel_counts, "year", "count", Layout::default().height(300))?;

    let hotels = ContentNode::div(vec![
        section_title("What happens?: Lack of Hotels!"),
        panel("There are not enough rooms to stay. So people rushed buying rooms! And I wanted too!!"),
        section_title("Increase of kyoto hotel."),
        ContentNode::graph(&hotel_bars),
        panel(
            r#"
So I want information about real-estate. But no one gives me.
Graph like this is not for investment decision.
So I make my interactive data visualization!
"#,
        ),
        section_title("Interactive"),
        ContentNode::element("h4", Vec::new()).with_id("year-number").with_style(centered()),
        ContentNode::graph(&clickable_bars)
            .with_id("kyoto-hotel-bar")
            .with_prop("clickData", initial_click()),
        graph_slot("kyoto-hotelmap-yearcallback"),
        ContentNode::link(
            "Data from Kyoto City: I added geo data",
            "https://data.city.kyoto.lg.jp/node/100228",
        )
        .with_style(Style::new().set("marginLeft", "60%")),
        panel(
            r#"
* The map shows where hotels are and where is popular or unpopular.
* I think this sample shows merit of interactive data visualization.
* Interactive data visualization gives us more information and helps us to understand circumstances.
"#,
        ),
        panel(
            r#"
### How to Use Application.
- Click the 2010s legend near the map and the 2010s points turn off. Click once more to turn them on.
- Click a year on the upper bar graph and the map shows only that year.
- Click 1946 on the upper bar graph and all data appears.
"#,
        ),
        ContentNode::div(vec![ContentNode::link("Next: 数据可视化", "/datavisualization")])
            .with_style(Style::new().set("textAlign", "right").set("marginBottom", "5%")),
    ])
    .with_style(Style::new().set("width", "90%").set("margin", "3% auto 3%"));

    Ok(ContentNode::div(vec![
        head_title("Merit of Interactive data visualization"),
        panel(
            r#"
At first, Let's feel the merit of Interactive Data Visualization.
(Data: Number of Tourist in Japan, Number of permission of hotel in Kyoto)
"#,
        ),
        ranking,
        monthly,
        hotels,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::cells::testing::assets;

    #[test]
    fn test_merit_seeds_cell_inputs() {
        let slide = merit(&assets().data).unwrap();
        let props = slide.initial_props();
        let value = |id: &str, prop: &str| {
            props.iter().find(|(i, p, _)| i == id && p == prop).map(|(_, _, v)| v.clone())
        };
        assert_eq!(value("year_select_dd", "value"), Some(json!(2019)));
        assert_eq!(value("tourist_country_dd", "value"), Some(json!("中国")));
        assert_eq!(value("kyoto-hotel-bar", "clickData"), Some(initial_click()));
    }

    #[test]
    fn test_year_options_come_from_country_rows() {
        let slide = merit(&assets().data).unwrap();
        let Some(ContentNode::Widget { props, .. }) = slide.find("year_select_dd") else {
            panic!("year dropdown missing");
        };
        assert_eq!(props["options"].as_array().unwrap().len(), 2);
    }
}
