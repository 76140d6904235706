//! Camera position and orientation, in degrees and meters.
//!
//! The globe viewer works in radians and Earth-centred Cartesian meters;
//! conversion happens only in [`CameraCoordinates::from_pose`] and
//! [`CameraCoordinates::fly_to_request`].

use crate::constants::{
    DEFAULT_HEIGHT_M, DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG, DEFAULT_PITCH_DEG,
    HEIGHT_MAX_M, HEIGHT_MIN_M, WGS84_A, WGS84_E2,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// One of the six camera parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CameraField {
    Longitude,
    Latitude,
    Height,
    Heading,
    Pitch,
    Roll,
}

impl CameraField {
    pub const ALL: [CameraField; 6] = [
        CameraField::Longitude,
        CameraField::Latitude,
        CameraField::Height,
        CameraField::Heading,
        CameraField::Pitch,
        CameraField::Roll,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CameraField::Longitude => "Longitude",
            CameraField::Latitude => "Latitude",
            CameraField::Height => "Height",
            CameraField::Heading => "Heading",
            CameraField::Pitch => "Pitch",
            CameraField::Roll => "Roll",
        }
    }

    /// Stable lowercase key, used for DOM ids and data attributes.
    pub fn key(self) -> &'static str {
        match self {
            CameraField::Longitude => "longitude",
            CameraField::Latitude => "latitude",
            CameraField::Height => "height",
            CameraField::Heading => "heading",
            CameraField::Pitch => "pitch",
            CameraField::Roll => "roll",
        }
    }

    pub fn from_key(key: &str) -> Option<CameraField> {
        CameraField::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// Camera position and orientation.
///
/// `height_meters` stays within `[HEIGHT_MIN_M, HEIGHT_MAX_M]` as long as it
/// is written through `set_height`, `apply` or the constructors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraCoordinates {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub height_meters: f64,
    pub heading_deg: f64,
    pub pitch_deg: f64,
    pub roll_deg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Default for CameraCoordinates {
    fn default() -> Self {
        Self {
            longitude_deg: DEFAULT_LONGITUDE_DEG,
            latitude_deg: DEFAULT_LATITUDE_DEG,
            height_meters: DEFAULT_HEIGHT_M,
            heading_deg: 0.0,
            pitch_deg: DEFAULT_PITCH_DEG,
            roll_deg: 0.0,
            name: None,
        }
    }
}

/// Partial update; `None` keeps the current value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CoordinatesUpdate {
    pub longitude_deg: Option<f64>,
    pub latitude_deg: Option<f64>,
    pub height_meters: Option<f64>,
    pub heading_deg: Option<f64>,
    pub pitch_deg: Option<f64>,
    pub roll_deg: Option<f64>,
    pub name: Option<String>,
}

impl CoordinatesUpdate {
    pub fn field(field: CameraField, value: f64) -> Self {
        let mut update = Self::default();
        match field {
            CameraField::Longitude => update.longitude_deg = Some(value),
            CameraField::Latitude => update.latitude_deg = Some(value),
            CameraField::Height => update.height_meters = Some(value),
            CameraField::Heading => update.heading_deg = Some(value),
            CameraField::Pitch => update.pitch_deg = Some(value),
            CameraField::Roll => update.roll_deg = Some(value),
        }
        update
    }
}

/// Live camera pose as reported by the viewer: radians and meters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraPose {
    pub longitude_rad: f64,
    pub latitude_rad: f64,
    pub height_m: f64,
    pub heading_rad: f64,
    pub pitch_rad: f64,
    pub roll_rad: f64,
}

/// Parameters for a viewer fly-to, in the viewer's native units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlyToRequest {
    /// Earth-centred, Earth-fixed destination in meters.
    pub destination: DVec3,
    pub heading_rad: f64,
    pub pitch_rad: f64,
    pub roll_rad: f64,
}

#[inline]
pub fn clamp_height(height_m: f64) -> f64 {
    height_m.clamp(HEIGHT_MIN_M, HEIGHT_MAX_M)
}

/// Point on (or above) the WGS84 ellipsoid for a geodetic position in degrees.
pub fn cartesian_from_degrees(longitude_deg: f64, latitude_deg: f64, height_m: f64) -> DVec3 {
    let lon = longitude_deg.to_radians();
    let lat = latitude_deg.to_radians();
    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();
    let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
    DVec3::new(
        (n + height_m) * cos_lat * cos_lon,
        (n + height_m) * cos_lat * sin_lon,
        (n * (1.0 - WGS84_E2) + height_m) * sin_lat,
    )
}

impl CameraCoordinates {
    pub fn new(
        longitude_deg: f64,
        latitude_deg: f64,
        height_meters: f64,
        heading_deg: f64,
        pitch_deg: f64,
        roll_deg: f64,
    ) -> Self {
        Self {
            longitude_deg,
            latitude_deg,
            height_meters: clamp_height(height_meters),
            heading_deg,
            pitch_deg,
            roll_deg,
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Store `height_m` clamped into the allowed height range.
    pub fn set_height(&mut self, height_m: f64) {
        self.height_meters = clamp_height(height_m);
    }

    pub fn get(&self, field: CameraField) -> f64 {
        match field {
            CameraField::Longitude => self.longitude_deg,
            CameraField::Latitude => self.latitude_deg,
            CameraField::Height => self.height_meters,
            CameraField::Heading => self.heading_deg,
            CameraField::Pitch => self.pitch_deg,
            CameraField::Roll => self.roll_deg,
        }
    }

    /// New coordinates with the named fields of `update` replaced.
    pub fn apply(&self, update: &CoordinatesUpdate) -> CameraCoordinates {
        let mut next = CameraCoordinates {
            longitude_deg: update.longitude_deg.unwrap_or(self.longitude_deg),
            latitude_deg: update.latitude_deg.unwrap_or(self.latitude_deg),
            height_meters: self.height_meters,
            heading_deg: update.heading_deg.unwrap_or(self.heading_deg),
            pitch_deg: update.pitch_deg.unwrap_or(self.pitch_deg),
            roll_deg: update.roll_deg.unwrap_or(self.roll_deg),
            name: update.name.clone().or_else(|| self.name.clone()),
        };
        next.set_height(update.height_meters.unwrap_or(self.height_meters));
        next
    }

    pub fn with_field(&self, field: CameraField, value: f64) -> CameraCoordinates {
        self.apply(&CoordinatesUpdate::field(field, value))
    }

    /// Snapshot of a live viewer pose; the result carries no place name.
    pub fn from_pose(pose: &CameraPose) -> CameraCoordinates {
        CameraCoordinates::new(
            pose.longitude_rad.to_degrees(),
            pose.latitude_rad.to_degrees(),
            pose.height_m,
            pose.heading_rad.to_degrees(),
            pose.pitch_rad.to_degrees(),
            pose.roll_rad.to_degrees(),
        )
    }

    pub fn fly_to_request(&self) -> FlyToRequest {
        FlyToRequest {
            destination: cartesian_from_degrees(
                self.longitude_deg,
                self.latitude_deg,
                self.height_meters,
            ),
            heading_rad: self.heading_deg.to_radians(),
            pitch_rad: self.pitch_deg.to_radians(),
            roll_rad: self.roll_deg.to_radians(),
        }
    }
}
