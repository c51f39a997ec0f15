// Module containing response data structures for the USGS GeoJSON format
mod response;

use tracing::{debug, warn};

/// A single earthquake event as perceived by the people who felt it.
///
/// Built once from the first feature of a USGS response and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Human-readable description, composed from magnitude and place
    pub title: String,
    /// Number of survey respondents who reported feeling the event
    pub num_of_people: u64,
    /// Qualitative intensity label derived from the "cdi" value
    pub perceived_strength: String,
}

/// Parses a raw USGS response body into an [`Event`].
///
/// Returns `None` when the body is not valid JSON, the feature list is empty,
/// or the first feature lacks any of the place, magnitude, or cdi properties.
/// A missing "felt" count defaults to zero rather than failing.
pub fn parse_event(body: &str) -> Option<Event> {
    let collection: response::FeatureCollection = match serde_json::from_str(body) {
        Ok(collection) => collection,
        Err(e) => {
            warn!("Failed to parse earthquake response: {}", e);
            return None;
        }
    };

    // Only the first (most significant) feature is presented
    let feature = collection.features.into_iter().next()?;
    let properties = feature.properties;

    let place = properties.place?;
    let mag = properties.mag?;
    let cdi = properties.cdi?;

    let event = Event {
        title: format!("M {:.1} - {}", mag, place),
        num_of_people: properties.felt.unwrap_or(0),
        perceived_strength: perceived_strength(cdi).to_string(),
    };
    debug!("Parsed earthquake event: {:?}", event);
    Some(event)
}

/// Maps a CDI value onto the USGS "Did You Feel It" perceived-shaking labels.
fn perceived_strength(cdi: f64) -> &'static str {
    if cdi < 2.0 {
        "Not felt"
    } else if cdi < 3.0 {
        "Weak"
    } else if cdi < 4.0 {
        "Light"
    } else if cdi < 5.0 {
        "Moderate"
    } else if cdi < 6.0 {
        "Strong"
    } else if cdi < 7.0 {
        "Very strong"
    } else if cdi < 8.0 {
        "Severe"
    } else if cdi < 9.0 {
        "Violent"
    } else {
        "Extreme"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_with_properties(properties: serde_json::Value) -> String {
        serde_json::json!({
            "type": "FeatureCollection",
            "features": [{ "type": "Feature", "properties": properties }]
        })
        .to_string()
    }

    #[test]
    fn maps_all_fields_from_a_well_formed_feature() {
        let body = body_with_properties(serde_json::json!({
            "mag": 6.6,
            "place": "10km NW of Town",
            "felt": 157,
            "cdi": 7
        }));

        let event = parse_event(&body).expect("should produce an event");
        assert_eq!(event.title, "M 6.6 - 10km NW of Town");
        assert_eq!(event.num_of_people, 157);
        assert_eq!(event.perceived_strength, "Severe");
    }

    #[test]
    fn missing_felt_defaults_to_zero() {
        let body = body_with_properties(serde_json::json!({
            "mag": 5.2,
            "place": "offshore Chiapas, Mexico",
            "cdi": 4.3
        }));

        let event = parse_event(&body).expect("should produce an event");
        assert_eq!(event.num_of_people, 0);
        assert_eq!(event.perceived_strength, "Moderate");
    }

    #[test]
    fn whole_magnitude_keeps_one_decimal_in_title() {
        let body = body_with_properties(serde_json::json!({
            "mag": 5.0,
            "place": "Sumatra, Indonesia",
            "cdi": 2.0
        }));

        let event = parse_event(&body).expect("should produce an event");
        assert_eq!(event.title, "M 5.0 - Sumatra, Indonesia");
    }

    #[test]
    fn empty_feature_list_produces_nothing() {
        assert_eq!(parse_event(r#"{"features":[]}"#), None);
    }

    #[test]
    fn missing_required_property_produces_nothing() {
        // No cdi value, so no strength label can be derived
        let body = body_with_properties(serde_json::json!({
            "mag": 6.1,
            "place": "Fiji region",
            "felt": 80
        }));
        assert_eq!(parse_event(&body), None);
    }

    #[test]
    fn malformed_body_produces_nothing() {
        assert_eq!(parse_event("not json"), None);
        assert_eq!(parse_event(r#"{"features":[{"properties":"#), None);
        assert_eq!(parse_event(""), None);
    }

    #[test]
    fn strength_labels_follow_the_threshold_table() {
        assert_eq!(perceived_strength(1.9), "Not felt");
        assert_eq!(perceived_strength(2.0), "Weak");
        assert_eq!(perceived_strength(3.5), "Light");
        assert_eq!(perceived_strength(6.9), "Very strong");
        assert_eq!(perceived_strength(7.0), "Severe");
        assert_eq!(perceived_strength(8.4), "Violent");
        assert_eq!(perceived_strength(9.0), "Extreme");
        assert_eq!(perceived_strength(12.0), "Extreme");
    }
}
