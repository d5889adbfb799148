//! OpenStreetMap embed URLs.
//!
//! Both maps are read-only iframes with fixed bounding boxes. Nothing is
//! passed to them at runtime and they cannot report clicks back.

use urlencoding::encode;

const EMBED_BASE: &str = "https://www.openstreetmap.org/export/embed.html";

/// Bounding box of an embedded map, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapEmbed {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
    pub layer: &'static str,
}

/// Map shown in the dashboard's map section.
pub const DASHBOARD_MAP: MapEmbed = MapEmbed {
    min_lon: 2.16,
    min_lat: 41.35,
    max_lon: 2.19,
    max_lat: 41.39,
    layer: "mapnik",
};

/// Map shown inside the coordinate picker.
pub const PICKER_MAP: MapEmbed = MapEmbed {
    min_lon: 37.60,
    min_lat: 55.74,
    max_lon: 37.70,
    max_lat: 55.80,
    layer: "mapnik",
};

impl MapEmbed {
    pub fn bbox(&self) -> String {
        format!(
            "{:.2},{:.2},{:.2},{:.2}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }

    pub fn url(&self) -> String {
        format!(
            "{}?bbox={}&layer={}",
            EMBED_BASE,
            encode(&self.bbox()),
            encode(self.layer)
        )
    }
}
