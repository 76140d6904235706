//! Wrapper around an embedded 3D globe viewer.
//!
//! The viewer itself is an external collaborator reached through
//! [`GlobeViewer`]; the wrapper translates coordinates into fly-to calls and
//! turns the viewer's motion-ended signal into a [`CameraMoved`] snapshot.
//!
//! Flights are animated by the viewer and finish at an arbitrary later
//! time. The motion-ended signal is the only completion notice: there is no
//! timeout, and a viewer torn down mid-flight simply never reports back.

use crate::coords::{CameraCoordinates, CameraPose, FlyToRequest};
use crate::notify::{ListenerId, Listeners};
use instant::Instant;
use serde::{Deserialize, Serialize};

/// The subset of a globe viewer's API this crate relies on.
pub trait GlobeViewer {
    /// Start an animated flight. A new flight supersedes one in progress.
    fn fly_to(&mut self, request: &FlyToRequest);
    /// Current camera pose, if the viewer can report one.
    fn camera_pose(&self) -> Option<CameraPose>;
}

/// Construction options forwarded to the viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerOptions {
    pub home_button: bool,
    pub help_button: bool,
    pub world_terrain: bool,
    /// Access token for the imagery/terrain service; library default if unset.
    pub ion_token: Option<String>,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            home_button: false,
            help_button: false,
            world_terrain: true,
            ion_token: None,
        }
    }
}

/// Upward notification carrying the camera pose after it came to rest.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraMoved {
    pub coords: CameraCoordinates,
}

pub struct ViewerWrapper<V: GlobeViewer> {
    viewer: Option<V>,
    coords: CameraCoordinates,
    options: ViewerOptions,
    flight_started: Option<Instant>,
    listeners: Listeners<CameraMoved>,
}

impl<V: GlobeViewer> ViewerWrapper<V> {
    pub fn new(initial: CameraCoordinates, options: ViewerOptions) -> Self {
        Self {
            viewer: None,
            coords: initial,
            options,
            flight_started: None,
            listeners: Listeners::new(),
        }
    }

    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    /// Attach the constructed viewer and fly straight to the current coordinates.
    pub fn mount(&mut self, viewer: V) {
        self.viewer = Some(viewer);
        log::info!("[viewer] mounted");
        self.fly();
    }

    /// Detach the viewer. A flight still in progress will never be reported.
    pub fn unmount(&mut self) -> Option<V> {
        if self.flight_started.take().is_some() {
            log::debug!("[viewer] unmounted mid-flight");
        }
        self.viewer.take()
    }

    pub fn is_mounted(&self) -> bool {
        self.viewer.is_some()
    }

    pub fn viewer(&self) -> Option<&V> {
        self.viewer.as_ref()
    }

    pub fn viewer_mut(&mut self) -> Option<&mut V> {
        self.viewer.as_mut()
    }

    pub fn coordinates(&self) -> &CameraCoordinates {
        &self.coords
    }

    pub fn in_flight(&self) -> bool {
        self.flight_started.is_some()
    }

    /// Replace the target coordinates and fly there. Before mounting the
    /// coordinates are only stored and used by `mount`.
    pub fn set_coordinates(&mut self, coords: CameraCoordinates) {
        self.coords = coords;
        self.fly();
    }

    fn fly(&mut self) {
        let Some(viewer) = self.viewer.as_mut() else {
            return;
        };
        let request = self.coords.fly_to_request();
        log::debug!(
            "[viewer] fly to lon={:.6} lat={:.6} h={:.0}",
            self.coords.longitude_deg,
            self.coords.latitude_deg,
            self.coords.height_meters
        );
        viewer.fly_to(&request);
        self.flight_started = Some(Instant::now());
    }

    /// Handle the viewer's motion-ended signal: read the live pose back and
    /// notify listeners with the snapshot.
    pub fn motion_ended(&mut self) -> Option<CameraCoordinates> {
        if let Some(started) = self.flight_started.take() {
            log::info!(
                "[viewer] camera came to rest after {} ms",
                started.elapsed().as_millis()
            );
        }
        self.read_back()
    }

    /// Read the live pose on demand and notify listeners, as if motion ended.
    pub fn query_camera(&mut self) -> Option<CameraCoordinates> {
        self.read_back()
    }

    fn read_back(&mut self) -> Option<CameraCoordinates> {
        let pose = self.viewer.as_ref()?.camera_pose()?;
        let snapshot = CameraCoordinates::from_pose(&pose);
        self.coords = snapshot.clone();
        self.listeners.emit(&CameraMoved {
            coords: snapshot.clone(),
        });
        Some(snapshot)
    }

    pub fn on_camera_moved(&mut self, callback: impl FnMut(&CameraMoved) + 'static) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }
}
