// Shared helpers for the host-side integration tests.

#![allow(dead_code)]

use flight_core::{CameraPose, FlyToRequest, GlobeViewer};

/// Stand-in for the browser globe: records flights, reports a settable pose.
#[derive(Default, Debug)]
pub struct MockViewer {
    pub flights: Vec<FlyToRequest>,
    pub pose: Option<CameraPose>,
}

impl GlobeViewer for MockViewer {
    fn fly_to(&mut self, request: &FlyToRequest) {
        self.flights.push(*request);
    }

    fn camera_pose(&self) -> Option<CameraPose> {
        self.pose
    }
}

pub fn pose_deg(lon: f64, lat: f64, height: f64, heading: f64, pitch: f64, roll: f64) -> CameraPose {
    CameraPose {
        longitude_rad: lon.to_radians(),
        latitude_rad: lat.to_radians(),
        height_m: height,
        heading_rad: heading.to_radians(),
        pitch_rad: pitch.to_radians(),
        roll_rad: roll.to_radians(),
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
