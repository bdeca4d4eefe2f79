use std::collections::HashMap;

use crate::models::ZipCoordinate;

/// Curated zip code centers for major US metro areas.
///
/// Deliberately partial: the service only guarantees coverage of the metros
/// the product launched in. A lookup miss is a normal outcome, not an error.
const BUNDLED_ZIP_COORDS: &[(&str, f64, f64)] = &[
    // New York metro
    ("10001", 40.7506, -73.9971),
    ("10002", 40.7157, -73.9861),
    ("10003", 40.7318, -73.9888),
    ("10011", 40.7420, -74.0000),
    ("10016", 40.7459, -73.9777),
    ("10021", 40.7685, -73.9588),
    ("10025", 40.7994, -73.9680),
    ("10128", 40.7816, -73.9509),
    ("10301", 40.6313, -74.0944),
    ("10451", 40.8205, -73.9250),
    ("11101", 40.7470, -73.9395),
    ("11201", 40.6944, -73.9907),
    ("11215", 40.6627, -73.9863),
    ("11217", 40.6824, -73.9787),
    ("11375", 40.7211, -73.8459),
    ("07030", 40.7453, -74.0279),
    ("07302", 40.7195, -74.0465),
    // Los Angeles metro
    ("90001", 33.9731, -118.2479),
    ("90012", 34.0614, -118.2385),
    ("90024", 34.0633, -118.4359),
    ("90210", 34.0901, -118.4065),
    ("90401", 34.0150, -118.4950),
    ("90802", 33.7670, -118.1892),
    ("91101", 34.1468, -118.1390),
    // Chicago metro
    ("60601", 41.8858, -87.6229),
    ("60614", 41.9227, -87.6533),
    ("60622", 41.9020, -87.6778),
    ("60657", 41.9400, -87.6537),
    ("60302", 41.8942, -87.7898),
    // Houston
    ("77002", 29.7563, -95.3657),
    ("77005", 29.7184, -95.4241),
    ("77019", 29.7523, -95.4022),
    // Phoenix
    ("85004", 33.4512, -112.0706),
    ("85251", 33.4937, -111.9220),
    // Philadelphia
    ("19103", 39.9523, -75.1740),
    ("19106", 39.9500, -75.1454),
    // San Antonio
    ("78205", 29.4237, -98.4925),
    // San Diego
    ("92101", 32.7195, -117.1629),
    ("92037", 32.8437, -117.2560),
    // Dallas
    ("75201", 32.7876, -96.7994),
    ("75204", 32.8021, -96.7889),
    // Bay Area
    ("94102", 37.7813, -122.4167),
    ("94110", 37.7485, -122.4156),
    ("94117", 37.7692, -122.4449),
    ("94611", 37.8288, -122.2217),
    ("94301", 37.4443, -122.1497),
    ("95112", 37.3541, -121.8830),
    // Austin
    ("78701", 30.2711, -97.7437),
    ("78704", 30.2430, -97.7653),
    // Seattle metro
    ("98101", 47.6114, -122.3347),
    ("98103", 47.6733, -122.3426),
    ("98004", 47.6187, -122.2045),
    // Denver / Boulder
    ("80202", 39.7500, -104.9970),
    ("80302", 40.0176, -105.2797),
    // Boston metro
    ("02108", 42.3583, -71.0626),
    ("02139", 42.3647, -71.1042),
    ("02446", 42.3429, -71.1190),
    // Miami
    ("33130", 25.7670, -80.2030),
    ("33139", 25.7847, -80.1342),
    // Atlanta
    ("30303", 33.7525, -84.3888),
    ("30306", 33.7879, -84.3508),
    // Washington DC metro
    ("20001", 38.9108, -77.0170),
    ("20009", 38.9186, -77.0375),
    ("22201", 38.8868, -77.0958),
    // Portland
    ("97201", 45.5084, -122.6916),
    ("97209", 45.5312, -122.6846),
    // Minneapolis
    ("55401", 44.9848, -93.2717),
    // Nashville
    ("37203", 36.1496, -86.7907),
    // Charlotte
    ("28202", 35.2286, -80.8448),
    // Detroit
    ("48226", 42.3316, -83.0466),
    // Tampa
    ("33602", 27.9539, -82.4570),
];

/// Immutable zip code to coordinate lookup
///
/// Built once at startup and shared read-only across requests. Constructed
/// explicitly and passed in rather than living as a mutable global.
#[derive(Debug, Clone)]
pub struct ZipDatabase {
    coords: HashMap<String, ZipCoordinate>,
}

impl ZipDatabase {
    /// Build the database from the bundled metro table
    pub fn bundled() -> Self {
        Self::from_entries(
            BUNDLED_ZIP_COORDS
                .iter()
                .map(|&(zip, lat, lng)| ZipCoordinate {
                    zip_code: zip.to_string(),
                    lat,
                    lng,
                }),
        )
    }

    /// Build the database from arbitrary entries (tests, custom datasets)
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ZipCoordinate>,
    {
        let coords = entries
            .into_iter()
            .map(|c| (c.zip_code.clone(), c))
            .collect();

        Self { coords }
    }

    /// Look up the coordinates for a zip code
    ///
    /// Returns `None` for zip codes outside the curated table.
    pub fn lookup(&self, zip_code: &str) -> Option<&ZipCoordinate> {
        self.coords.get(zip_code)
    }

    /// Number of zip codes in the table
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}
