//! Fixture assets for tests across the workspace.
//!
//! [`write_assets`] lays out a miniature copy of every startup file in a
//! directory and returns an [`AssetsConfig`] pointing at it.

use std::path::Path;

use image::{Rgb, RgbImage};
use vizdeck_config::AssetsConfig;

pub use pretty_assertions;

pub const TOURISM_CSV: &str = "\
,country,year,date,value
0,総数,2019,2019-01,300
1,アジア計,2019,2019-01,250
2,中国,2019,2019-01,100
3,韓国,2019,2019-01,60
4,台湾,2019,2019-01,60
5,総数,2019,2019-02,200
6,中国,2019,2019-02,50
7,韓国,2019,2019-02,20
8,台湾,2019,2019-02,20
9,中国,2018,2018-12,80
10,総数,2018,2018-12,150
";

pub const HOTELS_CSV: &str = "\
,hotel_name,year,age,ido,keido
0,Hotel A,2015,2010s,35.00,135.75
1,Hotel B,2016,2010s,35.01,135.76
2,Hotel C,2016,2010s,35.02,135.77
3,Hotel D,1990,1990s,35.03,135.78
";

pub const HOTEL_COUNTS_CSV: &str = "\
,year,count
0,1990,1
1,2015,1
2,2016,2
";

pub const GAPMINDER_CSV: &str = "\
,country,continent,year,lifeExp,pop,gdpPercap
0,Canada,Americas,2002,79.77,31902268,33328.97
1,Canada,Americas,2007,80.65,33390141,36319.24
2,Japan,Asia,2002,82.0,127065841,28604.59
3,Japan,Asia,2007,82.6,127467972,31656.07
4,Denmark,Europe,2002,77.18,5374693,32166.5
5,Denmark,Europe,2007,78.33,5468120,35278.42
";

pub const IRIS_CSV: &str = "\
,sepal_length,sepal_width,petal_length,petal_width,species
0,5.1,3.5,1.4,0.2,setosa
1,7.0,3.2,4.7,1.4,versicolor
2,6.3,3.3,6.0,2.5,virginica
";

pub const CITIES_CSV: &str = "\
,city,lat,long,pop
0,Kyoto,35.01,135.77,1475000
1,Beijing,39.90,116.40,21540000
";

/// `1` is the first source, so it becomes the genesis node. The `lonely`
/// line has no separator and is skipped.
pub const EDGE_LIST: &str = "1 2\n1 3\n2 3\nlonely\n3 1\n4 1\n4 2\n";

pub const MOLECULE_JSON: &str = r#"{"nodes":[{"id":0,"atom":"C"},{"id":1,"atom":"O"}],"links":[{"source":0,"target":1,"bond":2}]}"#;

pub const IMAGE_SIZE: u32 = 16;

/// Left half red, right half blue.
pub fn sample_image() -> RgbImage {
    RgbImage::from_fn(IMAGE_SIZE, IMAGE_SIZE, |x, _| {
        if x < IMAGE_SIZE / 2 { Rgb([220, 20, 20]) } else { Rgb([20, 20, 220]) }
    })
}

/// Write every fixture file into `dir`.
pub fn write_assets(dir: &Path) -> AssetsConfig {
    let assets = AssetsConfig {
        dir: dir.to_path_buf(),
        image: "me.png".to_string(),
        ..AssetsConfig::default()
    };
    let files = [
        (&assets.tourism, TOURISM_CSV),
        (&assets.hotels, HOTELS_CSV),
        (&assets.hotel_counts, HOTEL_COUNTS_CSV),
        (&assets.gapminder, GAPMINDER_CSV),
        (&assets.iris, IRIS_CSV),
        (&assets.cities, CITIES_CSV),
        (&assets.network, EDGE_LIST),
        (&assets.molecule, MOLECULE_JSON),
    ];
    for (name, content) in files {
        std::fs::write(assets.path(name), content).expect("write fixture");
    }
    sample_image().save(assets.path(&assets.image)).expect("write fixture image");
    assets
}
