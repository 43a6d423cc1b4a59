//! Assembling the deck: route registry, router and the full cell graph.

use anyhow::{Context, Result};
use tracing::info;
use vizdeck_common::ContentNode;
use vizdeck_reactive::{CellGraph, Router};

use crate::assets::Assets;
use crate::cells::components::{CytoscapeLayout, DaqPower, DaqRealtime, TableParcoords};
use crate::cells::echo::Echo;
use crate::cells::gapminder::{GraphByModule, InteractiveVisualization, MeasureScatter};
use crate::cells::hotels::HotelMap;
use crate::cells::network::GraphExpansion;
use crate::cells::segmentation::Segmentation;
use crate::cells::tourism::{TouristGraphs, YearRanking};
use crate::cells::Toggle;
use crate::slides::{self, closing, visualization};

pub struct Deck {
    pub router: Router,
    pub graph: CellGraph,
    /// Page shell the router mounts slides into.
    pub layout: ContentNode,
}

impl Deck {
    pub fn build(assets: &Assets) -> Result<Self> {
        let views = slides::views(assets).context("building slides")?;
        let router = Router::new(views);
        let data = &assets.data;

        let graph = CellGraph::builder()
            .register(router.cell())
            .register(YearRanking::new(data.clone()))
            .register(TouristGraphs::new(data.clone()))
            .register(HotelMap::new(data.clone()))
            .register(Toggle::new(
                "why_visualize",
                "whywedata-v",
                "whywedata-v-child",
                visualization::why_alternatives(),
            ))
            .register(Toggle::new(
                "table_to_chart",
                "table_to_chart",
                "showdata_for_humans",
                visualization::table_chart_alternatives(data)?,
            ))
            .register(Toggle::new(
                "normal_visualization",
                "normal_button",
                "normal_visualization",
                visualization::normal_alternatives(data)?,
            ))
            .register(InteractiveVisualization::new(data.clone())?)
            .register(Echo::hover())
            .register(GraphByModule::new(data)?)
            .register(MeasureScatter::new(data.clone()))
            .register(TableParcoords)
            .register(DaqPower)
            .register(DaqRealtime)
            .register(Segmentation::new(assets.image.clone()))
            .register(Echo::tap_node())
            .register(Echo::tap_edge())
            .register(CytoscapeLayout)
            .register(GraphExpansion::new(assets.network.clone()))
            .register(Toggle::new(
                "conclusion",
                "conclusion-outside",
                "conclusion-div",
                closing::conclusion_alternatives(),
            ))
            .build()
            .context("building cell graph")?;

        info!(
            "Deck ready: {} routes, {} cells",
            router.views().len(),
            graph.specs().len()
        );
        Ok(Self { router, graph, layout: slides::layout() })
    }
}
