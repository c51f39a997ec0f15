/// Response structures for the USGS GeoJSON FeatureCollection
/// Every property is optional so a partial response never fails the decode
/// step itself; required fields are checked during mapping instead.
#[derive(serde::Deserialize, Debug)]
pub struct FeatureCollection {
    /// Earthquake records matching the query, most significant first
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One GeoJSON record describing a single earthquake event
#[derive(serde::Deserialize, Debug)]
pub struct Feature {
    pub properties: Properties,
}

/// The subset of event properties this application consumes
#[derive(serde::Deserialize, Debug)]
pub struct Properties {
    /// Human-readable location description (e.g., "10km NW of Town")
    pub place: Option<String>,
    /// Magnitude of the event
    pub mag: Option<f64>,
    /// Number of "Did You Feel It" survey responses received
    pub felt: Option<u64>,
    /// Community Determined Intensity, a survey-derived severity value
    pub cdi: Option<f64>,
}
