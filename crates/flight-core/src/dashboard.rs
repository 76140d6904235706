//! Flight dashboard: place selection, one widget per camera parameter, and
//! the viewer wrapper, mediated through a single event queue.
//!
//! Widgets and the viewer wrapper never touch dashboard state directly;
//! their listeners post [`DashboardEvent`]s and `dispatch` applies them in
//! order, so the displayed coordinates always reflect the latest completed
//! mutation.

use crate::constants::{
    HEADING_RANGE_DEG, HEADING_STEP_DEG, HEIGHT_FACTOR, HEIGHT_MAX_M, HEIGHT_MIN_M,
    LATITUDE_RANGE_DEG, LATITUDE_STEP_DEG, LONGITUDE_RANGE_DEG, LONGITUDE_STEP_DEG,
    PITCH_RANGE_DEG, PITCH_STEP_DEG,
};
use crate::coords::{CameraCoordinates, CameraField};
use crate::cvar::{CvarLin, CvarLinWrap, CvarLog};
use crate::error::{CvarError, DashboardError};
use crate::notify::{ListenerId, Listeners};
use crate::places::PlaceBook;
use crate::viewer::{GlobeViewer, ViewerOptions, ViewerWrapper};
use crate::widget::{Button, IncDecWidget};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardEvent {
    PlaceSelected(String),
    ValueChanged { field: CameraField, value: f64 },
    CameraMoved(CameraCoordinates),
}

type EventQueue = Rc<RefCell<VecDeque<DashboardEvent>>>;

/// One widget per adjustable camera parameter. Roll has no widget.
#[derive(Debug)]
pub struct CvarBank {
    widgets: Vec<(CameraField, IncDecWidget)>,
}

impl CvarBank {
    pub fn for_coordinates(coords: &CameraCoordinates) -> Result<Self, CvarError> {
        let widgets = vec![
            (
                CameraField::Longitude,
                IncDecWidget::new(CvarLinWrap::new(
                    LONGITUDE_RANGE_DEG.0,
                    LONGITUDE_RANGE_DEG.1,
                    coords.longitude_deg,
                    LONGITUDE_STEP_DEG,
                    CameraField::Longitude.label(),
                )?),
            ),
            (
                CameraField::Latitude,
                IncDecWidget::new(CvarLin::new(
                    LATITUDE_RANGE_DEG.0,
                    LATITUDE_RANGE_DEG.1,
                    coords.latitude_deg,
                    LATITUDE_STEP_DEG,
                    CameraField::Latitude.label(),
                )?),
            ),
            (
                CameraField::Height,
                IncDecWidget::new(CvarLog::new(
                    HEIGHT_MIN_M,
                    HEIGHT_MAX_M,
                    coords.height_meters,
                    HEIGHT_FACTOR,
                    CameraField::Height.label(),
                )?),
            ),
            (
                CameraField::Heading,
                IncDecWidget::new(CvarLinWrap::new(
                    HEADING_RANGE_DEG.0,
                    HEADING_RANGE_DEG.1,
                    coords.heading_deg,
                    HEADING_STEP_DEG,
                    CameraField::Heading.label(),
                )?),
            ),
            (
                CameraField::Pitch,
                IncDecWidget::new(CvarLin::new(
                    PITCH_RANGE_DEG.0,
                    PITCH_RANGE_DEG.1,
                    coords.pitch_deg,
                    PITCH_STEP_DEG,
                    CameraField::Pitch.label(),
                )?),
            ),
        ];
        Ok(Self { widgets })
    }

    pub fn widget(&self, field: CameraField) -> Option<&IncDecWidget> {
        self.widgets
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, w)| w)
    }

    pub fn widget_mut(&mut self, field: CameraField) -> Option<&mut IncDecWidget> {
        self.widgets
            .iter_mut()
            .find(|(f, _)| *f == field)
            .map(|(_, w)| w)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CameraField, &IncDecWidget)> {
        self.widgets.iter().map(|(f, w)| (*f, w))
    }

    pub fn fields(&self) -> impl Iterator<Item = CameraField> + '_ {
        self.widgets.iter().map(|(f, _)| *f)
    }

    /// Set every cvar from `coords`. A value outside a cvar's domain leaves
    /// that cvar unchanged; the failures are returned.
    pub fn resync(&mut self, coords: &CameraCoordinates) -> Vec<CvarError> {
        self.widgets
            .iter_mut()
            .filter_map(|(field, widget)| widget.sync(coords.get(*field)).err())
            .collect()
    }
}

pub struct Dashboard<V: GlobeViewer> {
    places: PlaceBook,
    current: CameraCoordinates,
    bank: CvarBank,
    viewer: ViewerWrapper<V>,
    queue: EventQueue,
    listeners: Listeners<CameraCoordinates>,
}

impl<V: GlobeViewer> Dashboard<V> {
    /// The first place becomes current; an empty book starts from the
    /// default coordinates.
    pub fn new(places: PlaceBook, options: ViewerOptions) -> Result<Self, DashboardError> {
        let current = places
            .first()
            .map(|p| p.to_coordinates())
            .unwrap_or_default();
        let mut bank = CvarBank::for_coordinates(&current)?;
        let mut viewer = ViewerWrapper::new(current.clone(), options);
        let queue: EventQueue = Rc::new(RefCell::new(VecDeque::new()));

        let fields: Vec<CameraField> = bank.fields().collect();
        for field in fields {
            if let Some(widget) = bank.widget_mut(field) {
                let q = queue.clone();
                widget.on_change(move |ev| {
                    q.borrow_mut().push_back(DashboardEvent::ValueChanged {
                        field,
                        value: ev.value,
                    });
                });
            }
        }
        {
            let q = queue.clone();
            viewer.on_camera_moved(move |ev| {
                q.borrow_mut()
                    .push_back(DashboardEvent::CameraMoved(ev.coords.clone()));
            });
        }

        Ok(Self {
            places,
            current,
            bank,
            viewer,
            queue,
            listeners: Listeners::new(),
        })
    }

    pub fn current(&self) -> &CameraCoordinates {
        &self.current
    }

    pub fn places(&self) -> &PlaceBook {
        &self.places
    }

    pub fn bank(&self) -> &CvarBank {
        &self.bank
    }

    pub fn viewer(&self) -> &ViewerWrapper<V> {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut ViewerWrapper<V> {
        &mut self.viewer
    }

    /// Attach the globe viewer; it flies to the current place at once.
    pub fn mount(&mut self, viewer: V) {
        self.viewer.mount(viewer);
    }

    /// Register a re-render callback, called with the new current
    /// coordinates after every applied event.
    pub fn subscribe(&mut self, callback: impl FnMut(&CameraCoordinates) + 'static) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn select_place(&mut self, name: &str) -> Result<(), DashboardError> {
        if self.places.find(name).is_none() {
            return Err(DashboardError::UnknownPlace(name.to_string()));
        }
        self.queue
            .borrow_mut()
            .push_back(DashboardEvent::PlaceSelected(name.to_string()));
        self.dispatch();
        Ok(())
    }

    /// Press a widget button. Returns the widget's value afterwards, or
    /// `None` if the field has no widget.
    pub fn press(&mut self, field: CameraField, button: Button) -> Option<f64> {
        let value = self.bank.widget_mut(field)?.press(button);
        self.dispatch();
        Some(value)
    }

    /// Forward the viewer's motion-ended signal.
    pub fn motion_ended(&mut self) {
        self.viewer.motion_ended();
        self.dispatch();
    }

    /// Re-read the live camera pose into the dashboard.
    pub fn query_camera(&mut self) {
        self.viewer.query_camera();
        self.dispatch();
    }

    /// Apply queued events in arrival order.
    pub fn dispatch(&mut self) {
        loop {
            let next = self.queue.borrow_mut().pop_front();
            match next {
                Some(event) => self.apply(event),
                None => break,
            }
        }
    }

    fn apply(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::PlaceSelected(name) => {
                let Some(place) = self.places.find(&name) else {
                    log::warn!("[dashboard] place {} vanished before dispatch", name);
                    return;
                };
                log::info!("[dashboard] place selected: {}", name);
                self.current = place.to_coordinates();
                self.resync();
                self.viewer.set_coordinates(self.current.clone());
            }
            DashboardEvent::ValueChanged { field, value } => {
                self.current = self.current.with_field(field, value);
                self.viewer.set_coordinates(self.current.clone());
            }
            DashboardEvent::CameraMoved(coords) => {
                let name = self.current.name.take();
                self.current = CameraCoordinates { name, ..coords };
                self.resync();
            }
        }
        self.listeners.emit(&self.current);
    }

    fn resync(&mut self) {
        for err in self.bank.resync(&self.current) {
            log::warn!("[dashboard] resync skipped: {}", err);
        }
    }
}
