//! Why and how to visualise data, with the toggles that step through it.

use serde_json::{json, Value};
use vizdeck_common::{ContentNode, Style, WidgetKind};
use vizdeck_data::{DataError, Datasets};

use super::options;
use crate::cells::tourism::data_table;
use crate::charts::{self, GAPMINDER_FIVE, IRIS_DIMENSIONS};
use crate::style::{centered, head_title, markdown_inner, markdown_outer, next_link};

pub fn why_visualize() -> ContentNode {
    ContentNode::div(vec![
        head_title("关于数据可视化"),
        ContentNode::div(vec![ContentNode::div(Vec::new())
            .with_id("whywedata-v-child")
            .with_style(markdown_outer())])
        .with_id("whywedata-v")
        .with_prop("n_clicks", 0),
        next_link("数据可视化2", "/datavisualization_human"),
    ])
}

/// Shown in `whywedata-v-child`, one per click.
pub fn why_alternatives() -> Vec<ContentNode> {
    let steps = r#"
- Why do we visualize data?
    - When we analyze data, there are 5 steps.
        - 1.Define your questions & goals.
        - 2.Collect data.
        - 3.Data Preprocessing.
        - 4.Exploratory data analysis.
        - 5.Evaluate Model and Algorithms.
"#;
    let eda = r#"
## Exploratory data analysis
- Analyze data sets and summarize their main characters.
- To know business.
## This step often uses visual methods, because in this step we humans observe data.
## This step is important to make a good model.
"#;
    [steps, eda]
        .into_iter()
        .map(|source| ContentNode::markdown(source).with_style(markdown_inner()))
        .collect()
}

pub fn for_humans() -> ContentNode {
    ContentNode::div(vec![
        head_title("关于数据可视化2"),
        ContentNode::div(vec![
            ContentNode::button("change button", "table_to_chart"),
            ContentNode::div(Vec::new()).with_id("showdata_for_humans"),
        ])
        .with_style(Style::new().set("margin", "5%")),
        next_link("Next: 关于数据可视化3", "/interactive_visualization"),
    ])
}

/// The iris data as a table, then as a scatter matrix.
pub fn table_chart_alternatives(data: &Datasets) -> Result<Vec<ContentNode>, DataError> {
    let columns: Vec<&str> = data.iris.columns().iter().map(String::as_str).collect();
    let table = ContentNode::div(vec![
        ContentNode::h2("Table is difficult to understand.").with_style(centered()),
        data_table(&columns, data.iris.records(), 25),
    ]);
    let matrix = charts::scatter_matrix(&data.iris, &IRIS_DIMENSIONS, "species")?;
    let chart = ContentNode::div(vec![
        ContentNode::h2("Graph is easy to understand.").with_style(centered()),
        ContentNode::graph(&matrix),
    ]);
    Ok(vec![table, chart])
}

fn five_countries() -> Vec<Value> {
    GAPMINDER_FIVE.iter().map(|c| json!(c)).collect()
}

pub fn interactive(data: &Datasets) -> Result<ContentNode, DataError> {
    let countries = data.gapminder.unique("country")?;
    Ok(ContentNode::div(vec![
        head_title("关于数据可视化3"),
        ContentNode::div(vec![
            ContentNode::h2("Normal Visualization(with using gapminder data)").with_style(centered()),
            ContentNode::button("change button", "normal_button"),
            ContentNode::div(Vec::new()).with_id("normal_visualization"),
            ContentNode::div(vec![
                ContentNode::h2("Interactive Visualization").with_style(centered()),
                ContentNode::button("change button", "interactive_button"),
                ContentNode::div(Vec::new()).with_id("interactive_viz"),
                ContentNode::widget(WidgetKind::Checklist)
                    .with_id("interactive_checklist")
                    .with_prop("options", options(countries.iter().map(|c| c.to_value())))
                    .with_prop("labelStyle", json!({"display": "inline-block"}))
                    .with_prop("value", five_countries()),
            ]),
        ])
        .with_style(Style::new().set("margin", "5%")),
        next_link("Next: 关于数据可视化4", "/visualization_tools"),
    ]))
}

/// Five countries' income lines, then every country's.
pub fn normal_alternatives(data: &Datasets) -> Result<Vec<ContentNode>, DataError> {
    let five = data.gapminder.filter_in("country", &five_countries())?;
    let few = charts::lines_by(&five, "year", "gdpPercap", "country", "Normal Visualization")?;
    let all = charts::lines_by(
        &data.gapminder,
        "year",
        "gdpPercap",
        "country",
        "Normal Visualization(with more data)",
    )?;
    Ok(vec![ContentNode::graph(&few), ContentNode::graph(&all)])
}

pub fn tools() -> ContentNode {
    let report = ContentNode::div(vec![ContentNode::link(
        "(1) from gartner report",
        "https://www.gartner.com/reviews/market/analytics-business-intelligence-platforms",
    )])
    .with_style(Style::new().set("textAlign", "right"));

    ContentNode::div(vec![
        head_title("关于数据可视化4"),
        ContentNode::div(vec![
            ContentNode::h2("Visualization Tools").with_style(centered()),
            ContentNode::div(vec![
                ContentNode::markdown(
                    r#"
## There are many data visualization tools
### BI Tools:(1)
#### Tableau, Microsoft Power BI, Qlik, SAP BI, Google Data Studio
### Libraries
#### D3, Highcharts, Matplotlib, Bokeh, etc....
### Interactive Web Framework
#### Shiny(R), Dash(Python & R), Panel(Python)
### All of these are good tools and we can use whatever we like. It helps to understand data.
"#,
                )
                .with_style(markdown_inner()),
                report,
            ])
            .with_style(markdown_outer()),
        ])
        .with_style(Style::new().set("margin", "5%")),
        next_link("Next: About Dash", "/about_dash"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::testing::assets;

    #[test]
    fn test_table_alternative_lists_every_iris_row() {
        let data = assets().data;
        let alternatives = table_chart_alternatives(&data).unwrap();
        let table = &alternatives[0].children()[1];
        let ContentNode::Widget { kind, props, .. } = table else {
            panic!("expected a data table");
        };
        assert_eq!(*kind, WidgetKind::DataTable);
        assert_eq!(props["data"].as_array().unwrap().len(), data.iris.len());
    }

    #[test]
    fn test_normal_alternatives_grow_the_country_set() {
        let data = assets().data;
        let alternatives = normal_alternatives(&data).unwrap();
        let traces = |node: &ContentNode| match node {
            ContentNode::Widget { props, .. } => props["figure"]["data"].as_array().unwrap().len(),
            _ => 0,
        };
        // only Canada and Denmark of the five are in the fixture
        assert_eq!(traces(&alternatives[0]), 2);
        assert_eq!(traces(&alternatives[1]), 3);
    }

    #[test]
    fn test_why_slide_has_click_target() {
        let slide = why_visualize();
        assert!(slide.find("whywedata-v").unwrap().find("whywedata-v-child").is_some());
        assert!(why_alternatives()
            .iter()
            .all(|alt| matches!(alt, ContentNode::Markdown { .. })));
    }
}
