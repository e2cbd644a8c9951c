//! Edge geolocation header extraction.

use http::HeaderMap;
use serde::Serialize;

/// Geolocation values stamped onto the request by the edge network.
///
/// A producer, not a filter: extraction never short-circuits the chain.
/// Values are kept as the raw header strings; absent headers are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeoHeaders {
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// Extract the geolocation headers from a request.
pub fn geo_headers(headers: &HeaderMap) -> GeoHeaders {
    GeoHeaders {
        country: header_value(headers, "x-country-code"),
        region: header_value(headers, "x-region-code"),
        city: header_value(headers, "x-city"),
        latitude: header_value(headers, "x-latitude"),
        longitude: header_value(headers, "x-longitude"),
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_headers_are_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert("x-country-code", "DE".parse().unwrap());
        headers.insert("x-region-code", "BE".parse().unwrap());
        headers.insert("x-city", "Berlin".parse().unwrap());
        headers.insert("x-latitude", "52.52".parse().unwrap());
        headers.insert("x-longitude", "13.40".parse().unwrap());

        let geo = geo_headers(&headers);
        assert_eq!(geo.country.as_deref(), Some("DE"));
        assert_eq!(geo.region.as_deref(), Some("BE"));
        assert_eq!(geo.city.as_deref(), Some("Berlin"));
        assert_eq!(geo.latitude.as_deref(), Some("52.52"));
        assert_eq!(geo.longitude.as_deref(), Some("13.40"));
    }

    #[test]
    fn missing_headers_are_none() {
        let mut headers = HeaderMap::new();
        headers.insert("x-country-code", "US".parse().unwrap());

        let geo = geo_headers(&headers);
        assert_eq!(geo.country.as_deref(), Some("US"));
        assert_eq!(geo.city, None);
        assert_eq!(geo.longitude, None);
    }

    #[test]
    fn no_headers_yields_the_empty_value() {
        assert_eq!(geo_headers(&HeaderMap::new()), GeoHeaders::default());
    }
}
