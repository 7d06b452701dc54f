//! Integration tests for derived registration fields.
//!
//! These tests drive the public API the way the admin system does:
//! - Exported farm records (JSON) → FarmSizeResolver → resolved records
//! - Farm collections → AggregateHectareCalculator → dashboard totals
//! - Farmer records + farm counts → FarmerStatusResolver
//! - Many threads calling the same resolvers concurrently
//!
//! Run with: `cargo test --test registration_integration`

use std::thread;

use serde_json::{json, Value};

use farmgeo::area::{AreaCalculator, AreaStrategy};
use farmgeo::farm::{AggregateHectareCalculator, Farm, FarmSizeResolver, ResolverConfig};
use farmgeo::farmer::{Farmer, FarmerStatus, FarmerStatusResolver};
use farmgeo::geometry::{centroid, validate, GeoPolygon};
use farmgeo::units::{to_acres, to_hectares};

// ============================================================================
// Test Helpers
// ============================================================================

/// A batch of exported farm records in the admin system's shape.
fn exported_farms() -> Vec<Value> {
    vec![
        json!({
            "id": "FRM-001",
            "farmerId": "AGR-10",
            "farmSize": 5,
            "farmPolygon": {
                "type": "Polygon",
                "coordinates": [[[0, 0], [0.0027, 0], [0.0027, 0.0009], [0, 0.0009], [0, 0]]]
            }
        }),
        json!({
            "id": "FRM-002",
            "farmerId": "AGR-10",
            "farmPolygon": {
                "type": "Polygon",
                "coordinates": [[[0, 0], [0.0009, 0], [0.0009, 0.0009], [0, 0.0009], [0, 0]]]
            }
        }),
        json!({
            "id": "FRM-003",
            "farmerId": "AGR-11",
            "farmPolygon": [
                {"lat": 0, "lng": 0},
                {"lat": 0, "lng": 0.0018},
                {"lat": 0.0009, "lng": 0.0018},
                {"lat": 0.0009, "lng": 0}
            ]
        }),
        json!({
            "id": "FRM-004",
            "farmerId": "AGR-12",
            "farmPolygon": null,
            "farmSize": null
        }),
        json!({
            "id": "FRM-005",
            "farmerId": "AGR-12",
            "farmPolygon": {"type": "Polygon", "coordinates": [[[0, 0], [1, 1]]]}
        }),
    ]
}

fn load_farms() -> Vec<Farm> {
    exported_farms()
        .into_iter()
        .map(|v| serde_json::from_value(v).expect("farm record should deserialize"))
        .collect()
}

// ============================================================================
// Farm size resolution
// ============================================================================

#[test]
fn test_batch_resolution() {
    let resolver = FarmSizeResolver::default();
    let resolved: Vec<Farm> = load_farms().iter().map(|f| resolver.resolve(f)).collect();

    // Recorded size wins over a ~3 ha boundary.
    assert_eq!(resolved[0].farm_size, Some(5.0));
    assert_eq!(resolved[0].calculated_size, None);

    // Derived from a GeoJSON polygon.
    assert_eq!(resolved[1].farm_size, Some(1.0));
    assert_eq!(resolved[1].calculated_size, Some(true));

    // Derived from an open ring of {lat, lng} points.
    assert_eq!(resolved[2].farm_size, Some(2.0));
    assert_eq!(resolved[2].calculated_size, Some(true));

    // Nothing to derive from: stays unknown, never zero.
    assert_eq!(resolved[3].farm_size, None);
    assert_eq!(resolved[4].farm_size, None);
}

#[test]
fn test_resolved_records_keep_caller_fields() {
    let resolver = FarmSizeResolver::default();
    for farm in load_farms() {
        let resolved = serde_json::to_value(resolver.resolve(&farm)).unwrap();
        assert!(resolved["id"].as_str().unwrap().starts_with("FRM-"));
        assert!(resolved["farmerId"].as_str().unwrap().starts_with("AGR-"));
    }
}

#[test]
fn test_resolved_record_json_shape() {
    let farm = &load_farms()[1];
    let resolved = serde_json::to_value(FarmSizeResolver::default().resolve(farm)).unwrap();

    assert_eq!(resolved["farmSize"], 1.0);
    assert_eq!(resolved["calculatedSize"], true);
    assert!(resolved["farmArea"].as_f64().unwrap() > 9_500.0);
}

#[test]
fn test_unknown_size_serializes_absent() {
    let farm = &load_farms()[3];
    let resolved = serde_json::to_value(FarmSizeResolver::default().resolve(farm)).unwrap();
    assert!(resolved.get("farmSize").is_none());
}

#[test]
fn test_strict_resolver_rejects_open_ring() {
    let resolver = FarmSizeResolver::new(ResolverConfig::new().with_require_valid_polygon(true));
    let resolved = resolver.resolve(&load_farms()[2]);
    assert_eq!(resolved.farm_size, None);
}

#[test]
fn test_resolution_idempotent_for_batch() {
    let resolver = FarmSizeResolver::default();
    for farm in load_farms() {
        let once = resolver.resolve(&farm);
        assert_eq!(resolver.resolve(&once), once);
    }
}

// ============================================================================
// Aggregation
// ============================================================================

#[test]
fn test_dashboard_total() {
    let farms = load_farms();
    let calculator = AggregateHectareCalculator::default();

    assert_eq!(calculator.total_hectares(&farms), 8.0);

    let summary = calculator.summarize(&farms);
    assert_eq!(summary.farm_count, 5);
    assert_eq!(summary.authoritative_farms, 1);
    assert_eq!(summary.calculated_farms, 2);
    assert_eq!(summary.unknown_farms, 2);
}

#[test]
fn test_total_of_nothing() {
    assert_eq!(AggregateHectareCalculator::default().total_hectares(&[]), 0.0);
}

// ============================================================================
// Farmer status
// ============================================================================

#[test]
fn test_farmer_statuses_from_farm_counts() {
    let resolver = FarmerStatusResolver::new();
    let farmers: Vec<(Farmer, u32, FarmerStatus)> = vec![
        (
            serde_json::from_value(json!({"id": "AGR-10", "status": "Enrolled"})).unwrap(),
            2,
            FarmerStatus::FarmCaptured,
        ),
        (
            serde_json::from_value(json!({"id": "AGR-12", "status": "Enrolled"})).unwrap(),
            0,
            FarmerStatus::Enrolled,
        ),
        (
            serde_json::from_value(json!({"id": "AGR-13", "status": "Validated"})).unwrap(),
            0,
            FarmerStatus::Validated,
        ),
        (
            serde_json::from_value(json!({"id": "AGR-14", "status": "Verified"})).unwrap(),
            1,
            FarmerStatus::Verified,
        ),
    ];

    for (farmer, farm_count, expected) in farmers {
        assert_eq!(resolver.resolve(&farmer, farm_count), expected);
    }
}

#[test]
fn test_fresh_farmer_without_farms() {
    let farm = FarmSizeResolver::default().resolve(&Farm::new());
    assert!(farm.farm_size.is_none());

    let farmer = Farmer::with_status(FarmerStatus::Enrolled);
    assert_eq!(
        FarmerStatusResolver::new().resolve(&farmer, 0),
        FarmerStatus::Enrolled
    );
}

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn test_hundred_meter_square_end_to_end() {
    let value = json!({
        "type": "Polygon",
        "coordinates": [[[0, 0], [0.0009, 0], [0.0009, 0.0009], [0, 0.0009], [0, 0]]]
    });
    assert!(validate(&value));

    let polygon = GeoPolygon::from_value(&value).unwrap();
    let area = AreaCalculator::default().polygon_area(&polygon);
    assert!((area - 10_000.0).abs() / 10_000.0 < 0.05);
    assert!((to_hectares(area) - 1.0).abs() < 0.05);
    assert!((to_acres(area) - 2.47).abs() < 0.15);

    let center = centroid(&polygon.exterior()[..4]);
    assert!((center.lon - 0.00045).abs() < 1e-12);
    assert!((center.lat - 0.00045).abs() < 1e-12);
}

#[test]
fn test_degenerate_inputs_never_fail() {
    for value in [Value::Null, json!({}), json!([[0, 0], [1, 1]])] {
        assert!(!validate(&value));
        assert_eq!(AreaCalculator::default().value_area(&value), 0.0);
        assert_eq!(
            AreaCalculator::new(AreaStrategy::Planar).value_area(&value),
            0.0
        );
    }
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_concurrent_callers_agree() {
    let farms = load_farms();
    let calculator = AggregateHectareCalculator::default();
    let expected = calculator.total_hectares(&farms);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let farms = farms.clone();
            thread::spawn(move || calculator.total_hectares(&farms))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
