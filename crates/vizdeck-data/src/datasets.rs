//! The fixed set of tables the deck loads at startup.

use tracing::info;
use vizdeck_config::AssetsConfig;

use crate::error::Result;
use crate::table::Table;

/// Row label of the all-countries total in the tourism table.
pub const TOURISM_TOTAL: &str = "総数";

/// Regional aggregate rows excluded from per-country rankings.
pub const TOURISM_AGGREGATES: [&str; 7] = [
    "総数",
    "アジア計",
    "北アメリカ計",
    "ヨーロッパ計",
    "オセアニア計",
    "南アメリカ計",
    "アフリカ計",
];

/// Every backing table, read-only after [`Datasets::load`].
#[derive(Debug, Clone)]
pub struct Datasets {
    /// Monthly visitors to Japan by country: country, year, date, value.
    pub tourism: Table,
    /// Kyoto hotels: hotel_name, year, age, ido (lat), keido (lon).
    pub hotels: Table,
    /// Hotels opened per year: year, count.
    pub hotel_counts: Table,
    /// country, continent, year, lifeExp, pop, gdpPercap.
    pub gapminder: Table,
    /// sepal/petal measurements and species.
    pub iris: Table,
    /// city, lat, long, pop.
    pub cities: Table,
}

impl Datasets {
    /// Load and validate every table. Any missing file or column is fatal.
    pub fn load(assets: &AssetsConfig) -> Result<Self> {
        let load = |file: &str, required: &[&str]| -> Result<Table> {
            let table = Table::from_path(&assets.path(file))?;
            table.require_columns(required)?;
            Ok(table)
        };

        let datasets = Self {
            tourism: load(&assets.tourism, &["country", "year", "date", "value"])?,
            hotels: load(&assets.hotels, &["hotel_name", "year", "age", "ido", "keido"])?,
            hotel_counts: load(&assets.hotel_counts, &["year", "count"])?,
            gapminder: load(
                &assets.gapminder,
                &["country", "continent", "year", "lifeExp", "pop", "gdpPercap"],
            )?,
            iris: load(
                &assets.iris,
                &["sepal_length", "sepal_width", "petal_length", "petal_width", "species"],
            )?,
            cities: load(&assets.cities, &["city", "lat", "long", "pop"])?,
        };

        info!(
            "Datasets ready from {}: tourism={} hotels={} gapminder={} iris={}",
            assets.dir.display(),
            datasets.tourism.len(),
            datasets.hotels.len(),
            datasets.gapminder.len(),
            datasets.iris.len(),
        );
        Ok(datasets)
    }

    /// Tourism rows with regional aggregates removed.
    pub fn tourism_by_country(&self) -> Result<Table> {
        self.tourism.exclude_text("country", &TOURISM_AGGREGATES)
    }
}
