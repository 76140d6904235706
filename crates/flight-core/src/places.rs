use crate::coords::CameraCoordinates;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

/// A named camera preset offered for quick selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub coords: CameraCoordinates,
}

impl Place {
    pub fn new(name: impl Into<String>, coords: CameraCoordinates) -> Self {
        Self {
            name: name.into(),
            coords,
        }
    }

    /// Copy of the preset's coordinates, labelled with the place name.
    pub fn to_coordinates(&self) -> CameraCoordinates {
        self.coords.clone().named(self.name.clone())
    }
}

/// Ordered list of places with a by-name index.
#[derive(Clone, Debug)]
pub struct PlaceBook {
    places: Vec<Place>,
    by_name: FnvHashMap<String, usize>,
}

impl PlaceBook {
    /// Later duplicates of a name shadow earlier ones in `find`.
    pub fn new(places: Vec<Place>) -> Self {
        let by_name = places
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();
        Self { places, by_name }
    }

    pub fn find(&self, name: &str) -> Option<&Place> {
        self.by_name.get(name).and_then(|&i| self.places.get(i))
    }

    pub fn first(&self) -> Option<&Place> {
        self.places.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.places.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.places.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl Default for PlaceBook {
    fn default() -> Self {
        PlaceBook::new(vec![
            Place::new(
                "Geneva",
                CameraCoordinates::new(6.15444444, 46.20555556, 10_000.0, 0.0, -90.0, 0.0),
            ),
            Place::new(
                "Ecublens",
                CameraCoordinates::new(6.56362, 46.52474, 2_000.0, 0.0, -90.0, 0.0),
            ),
            Place::new(
                "Grand Combin",
                CameraCoordinates::new(7.286978, 46.02588, 3_902.0, 178.0, -5.294, 0.0),
            ),
            Place::new(
                "Zermatt",
                CameraCoordinates::new(7.752989, 46.017516, 2_100.0, 230.0, 10.0, 0.0),
            ),
            Place::new(
                "Philadelphia",
                CameraCoordinates::new(-75.165222, 39.952583, 20_000.0, 0.0, -90.0, 0.0),
            ),
        ])
    }
}
