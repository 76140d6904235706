//! Platform-neutral core of the flight dashboard: bounded control variables,
//! the widgets bound to them, camera coordinates, and the dashboard state
//! machine that sits between user input and a globe viewer.

pub mod constants;
pub mod coords;
pub mod cvar;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod notify;
pub mod places;
pub mod viewer;
pub mod widget;

pub use constants::*;
pub use coords::*;
pub use cvar::*;
pub use dashboard::*;
pub use error::*;
pub use format::*;
pub use notify::*;
pub use places::*;
pub use viewer::*;
pub use widget::*;
