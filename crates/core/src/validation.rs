//! Search request validation
//!
//! Turns a raw [`SearchRequest`] into a [`Query`] the ranking pass can trust,
//! or an error of kind [`ErrorKind::ClientInput`](crate::error::ErrorKind).
//!
//! # Example
//!
//! ```rust
//! use servicesearch_core::validation::{validate_request, SearchRequest};
//! use servicesearch_geo::GeoPoint;
//!
//! let request = SearchRequest::new("plumb", GeoPoint::new(59.33, 18.06));
//! let query = validate_request(&request, 256).unwrap();
//! assert_eq!(query.term, "plumb");
//!
//! let missing = SearchRequest { service_name: None, geolocation: None };
//! assert!(validate_request(&missing, 256).is_err());
//! ```

use crate::error::{Error, ErrorCode, Result};
use serde::{Deserialize, Serialize};
use servicesearch_geo::GeoPoint;
use servicesearch_search::Query;

/// A search request as it arrives from the caller
///
/// Both parts are optional on the wire; presence of the origin is tracked by
/// the `Option`, not by the sign of its coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Text to look for in service names
    #[serde(default)]
    pub service_name: Option<String>,
    /// Point distances are measured from
    #[serde(default)]
    pub geolocation: Option<GeoPoint>,
}

impl SearchRequest {
    /// Create a request with both parts present
    pub fn new(service_name: impl Into<String>, geolocation: GeoPoint) -> Self {
        Self {
            service_name: Some(service_name.into()),
            geolocation: Some(geolocation),
        }
    }

    /// Parse a request body
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Validate a request and build the query
///
/// - the service name must be present and not blank; it is passed on as given
/// - the service name may not exceed `max_term_length` characters
/// - the geolocation must be present and within coordinate range
pub fn validate_request(request: &SearchRequest, max_term_length: usize) -> Result<Query> {
    let term = validate_term(request.service_name.as_deref(), max_term_length)?;
    let origin = validate_origin(request.geolocation.as_ref())?;
    Ok(Query::new(term, origin))
}

fn validate_term(term: Option<&str>, max_term_length: usize) -> Result<String> {
    let term = term.unwrap_or_default();
    if term.trim().is_empty() {
        return Err(Error::missing_service_name());
    }

    let length = term.chars().count();
    if length > max_term_length {
        return Err(Error::validation(
            ErrorCode::TermTooLong,
            format!(
                "Service Name is {} characters long; at most {} are allowed",
                length, max_term_length
            ),
        ));
    }

    Ok(term.to_string())
}

fn validate_origin(origin: Option<&GeoPoint>) -> Result<GeoPoint> {
    let origin = origin.ok_or_else(Error::missing_geolocation)?;
    origin.validate()?;
    Ok(*origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use proptest::prelude::*;

    const STOCKHOLM: GeoPoint = GeoPoint::new(59.3293, 18.0686);

    #[test]
    fn test_valid_request() {
        let query = validate_request(&SearchRequest::new("Plumbing", STOCKHOLM), 256).unwrap();
        assert_eq!(query, Query::new("Plumbing", STOCKHOLM));
    }

    #[test]
    fn test_term_kept_as_given() {
        let query = validate_request(&SearchRequest::new("  plumb ", STOCKHOLM), 256).unwrap();
        assert_eq!(query.term, "  plumb ");
    }

    #[test]
    fn test_missing_term() {
        let request = SearchRequest {
            service_name: None,
            geolocation: Some(STOCKHOLM),
        };
        let err = validate_request(&request, 256).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingServiceName);
        assert_eq!(err.kind(), ErrorKind::ClientInput);
    }

    #[test]
    fn test_blank_term() {
        for term in ["", "   ", "\t\n"] {
            let err = validate_request(&SearchRequest::new(term, STOCKHOLM), 256).unwrap_err();
            assert_eq!(err.code, ErrorCode::MissingServiceName, "term {:?}", term);
        }
    }

    #[test]
    fn test_term_too_long() {
        let err = validate_request(&SearchRequest::new("plumbing", STOCKHOLM), 4).unwrap_err();
        assert_eq!(err.code, ErrorCode::TermTooLong);

        // Length is counted in characters
        assert!(validate_request(&SearchRequest::new("städ", STOCKHOLM), 4).is_ok());
    }

    #[test]
    fn test_missing_origin() {
        let request = SearchRequest {
            service_name: Some("plumb".to_string()),
            geolocation: None,
        };
        let err = validate_request(&request, 256).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingGeolocation);
        assert_eq!(err.message, "Geolocation must be provided!");
    }

    #[test]
    fn test_term_checked_before_origin() {
        let err = validate_request(&SearchRequest::default(), 256).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingServiceName);
    }

    #[test]
    fn test_out_of_range_origin() {
        let request = SearchRequest::new("plumb", GeoPoint::new(91.0, 18.0));
        let err = validate_request(&request, 256).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidGeolocation);
        assert!(err.is_client_error());
    }

    #[test]
    fn test_southern_and_western_origins_accepted() {
        for origin in [
            GeoPoint::new(-33.8688, 151.2093),
            GeoPoint::new(40.7128, -74.0060),
            GeoPoint::new(-22.9068, -43.1729),
            GeoPoint::new(0.0, 0.0),
        ] {
            let query = validate_request(&SearchRequest::new("plumb", origin), 256).unwrap();
            assert_eq!(query.origin, origin);
        }
    }

    #[test]
    fn test_from_json() {
        let request = SearchRequest::from_json(
            r#"{"serviceName": "Massage", "geolocation": {"lat": 59.33, "lng": 18.06}}"#,
        )
        .unwrap();
        assert_eq!(request, SearchRequest::new("Massage", GeoPoint::new(59.33, 18.06)));

        let partial = SearchRequest::from_json(r#"{"serviceName": "Massage"}"#).unwrap();
        assert!(partial.geolocation.is_none());

        let err = SearchRequest::from_json("{not json").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert!(err.is_client_error());
    }

    proptest! {
        #[test]
        fn prop_in_range_origins_accepted(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            let origin = GeoPoint::new(lat, lng);
            let query = validate_request(&SearchRequest::new("plumb", origin), 256).unwrap();
            prop_assert_eq!(query.origin, origin);
        }

        #[test]
        fn prop_out_of_range_latitude_rejected(
            lat in prop_oneof![-1.0e6f64..-90.000_001, 90.000_001f64..1.0e6],
            lng in -180.0f64..=180.0,
        ) {
            let request = SearchRequest::new("plumb", GeoPoint::new(lat, lng));
            let err = validate_request(&request, 256).unwrap_err();
            prop_assert_eq!(err.code, ErrorCode::InvalidGeolocation);
        }

        #[test]
        fn prop_out_of_range_longitude_rejected(
            lat in -90.0f64..=90.0,
            lng in prop_oneof![-1.0e6f64..-180.000_001, 180.000_001f64..1.0e6],
        ) {
            let request = SearchRequest::new("plumb", GeoPoint::new(lat, lng));
            let err = validate_request(&request, 256).unwrap_err();
            prop_assert_eq!(err.code, ErrorCode::InvalidGeolocation);
        }

        #[test]
        fn prop_nan_origin_rejected(value in -90.0f64..=90.0, nan_latitude in any::<bool>()) {
            let origin = if nan_latitude {
                GeoPoint::new(f64::NAN, value)
            } else {
                GeoPoint::new(value, f64::NAN)
            };
            let err = validate_request(&SearchRequest::new("plumb", origin), 256).unwrap_err();
            prop_assert_eq!(err.code, ErrorCode::InvalidGeolocation);
        }

        #[test]
        fn prop_whitespace_terms_rejected(term in "[ \t\n]{0,8}") {
            let err = validate_request(&SearchRequest::new(term, STOCKHOLM), 256).unwrap_err();
            prop_assert_eq!(err.code, ErrorCode::MissingServiceName);
        }
    }
}
