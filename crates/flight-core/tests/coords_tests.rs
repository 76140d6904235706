mod common;

use common::{approx, pose_deg};
use flight_core::{
    cartesian_from_degrees, CameraCoordinates, CameraField, CoordinatesUpdate, PlaceBook,
    HEIGHT_MAX_M, HEIGHT_MIN_M, WGS84_A,
};

#[test]
fn set_height_clamps_into_range() {
    let mut c = CameraCoordinates::default();
    c.set_height(10.0);
    assert_eq!(c.height_meters, HEIGHT_MIN_M);
    c.set_height(1.0e9);
    assert_eq!(c.height_meters, HEIGHT_MAX_M);
    c.set_height(5_000.0);
    assert_eq!(c.height_meters, 5_000.0);
}

#[test]
fn constructor_clamps_height() {
    let c = CameraCoordinates::new(0.0, 0.0, 40_000_000.0, 0.0, 0.0, 0.0);
    assert_eq!(c.height_meters, 32_768_000.0);
}

#[test]
fn apply_replaces_only_named_fields() {
    let base = CameraCoordinates::new(7.0, 46.0, 2_000.0, 10.0, -20.0, 0.0).named("Somewhere");
    let next = base.apply(&CoordinatesUpdate {
        pitch_deg: Some(-45.0),
        ..Default::default()
    });
    assert_eq!(next.pitch_deg, -45.0);
    assert_eq!(next.longitude_deg, 7.0);
    assert_eq!(next.latitude_deg, 46.0);
    assert_eq!(next.height_meters, 2_000.0);
    assert_eq!(next.heading_deg, 10.0);
    assert_eq!(next.name.as_deref(), Some("Somewhere"));
    // the source is untouched
    assert_eq!(base.pitch_deg, -20.0);
}

#[test]
fn apply_clamps_height_and_can_rename() {
    let base = CameraCoordinates::default();
    let next = base.apply(&CoordinatesUpdate {
        height_meters: Some(1.0),
        name: Some("Low".into()),
        ..Default::default()
    });
    assert_eq!(next.height_meters, HEIGHT_MIN_M);
    assert_eq!(next.name.as_deref(), Some("Low"));
}

#[test]
fn with_field_and_get_agree() {
    let base = CameraCoordinates::default();
    for (i, field) in CameraField::ALL.into_iter().enumerate() {
        let value = 1_000.0 + i as f64;
        let next = base.with_field(field, value);
        assert_eq!(next.get(field), value, "{field:?}");
    }
}

#[test]
fn field_keys_round_trip() {
    for field in CameraField::ALL {
        assert_eq!(CameraField::from_key(field.key()), Some(field));
    }
    assert_eq!(CameraField::from_key("yaw"), None);
}

#[test]
fn from_pose_converts_radians_and_clamps_height() {
    let pose = pose_deg(90.0, -45.0, 500.0, 180.0, -30.0, 2.0);
    let c = CameraCoordinates::from_pose(&pose);
    assert!(approx(c.longitude_deg, 90.0));
    assert!(approx(c.latitude_deg, -45.0));
    assert_eq!(c.height_meters, HEIGHT_MIN_M);
    assert!(approx(c.heading_deg, 180.0));
    assert!(approx(c.pitch_deg, -30.0));
    assert!(approx(c.roll_deg, 2.0));
    assert_eq!(c.name, None);
}

#[test]
fn cartesian_from_degrees_matches_ellipsoid_axes() {
    let equator = cartesian_from_degrees(0.0, 0.0, 0.0);
    assert!((equator.x - WGS84_A).abs() < 1e-6);
    assert!(equator.y.abs() < 1e-6 && equator.z.abs() < 1e-6);

    let east = cartesian_from_degrees(90.0, 0.0, 1_000.0);
    assert!(east.x.abs() < 1e-6);
    assert!((east.y - (WGS84_A + 1_000.0)).abs() < 1e-6);

    let pole = cartesian_from_degrees(0.0, 90.0, 0.0);
    assert!((pole.z - 6_356_752.314_245).abs() < 1e-3, "{}", pole.z);
}

#[test]
fn fly_to_request_uses_radians() {
    let c = CameraCoordinates::new(6.0, 46.0, 10_000.0, 180.0, -90.0, 0.0);
    let req = c.fly_to_request();
    assert!(approx(req.heading_rad, std::f64::consts::PI));
    assert!(approx(req.pitch_rad, -std::f64::consts::FRAC_PI_2));
    assert_eq!(req.roll_rad, 0.0);
    assert_eq!(req.destination, cartesian_from_degrees(6.0, 46.0, 10_000.0));
}

#[test]
fn coordinates_serialize_with_camel_case_keys() {
    let json = serde_json::to_value(CameraCoordinates::default()).unwrap();
    assert!(json.get("longitudeDeg").is_some());
    assert!(json.get("heightMeters").is_some());
    assert!(json.get("name").is_none());
}

#[test]
fn default_place_book_has_the_five_presets() {
    let places = PlaceBook::default();
    let names: Vec<&str> = places.names().collect();
    assert_eq!(
        names,
        ["Geneva", "Ecublens", "Grand Combin", "Zermatt", "Philadelphia"]
    );
    assert_eq!(places.first().map(|p| p.name.as_str()), Some("Geneva"));

    let zermatt = places.find("Zermatt").unwrap();
    assert_eq!(zermatt.coords.height_meters, 2_100.0);
    assert_eq!(zermatt.coords.heading_deg, 230.0);
    let coords = zermatt.to_coordinates();
    assert_eq!(coords.name.as_deref(), Some("Zermatt"));

    assert!(places.find("Atlantis").is_none());
}
