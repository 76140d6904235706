// Shared tuning constants used by the core and the web front-end.

// Camera height range (meters). Heights are clamped, never wrapped.
pub const HEIGHT_MIN_M: f64 = 1_000.0;
pub const HEIGHT_MAX_M: f64 = 32_768_000.0;

// Default camera: Pierre du Niton, Geneva, looking straight down
pub const DEFAULT_LONGITUDE_DEG: f64 = 6.15444444;
pub const DEFAULT_LATITUDE_DEG: f64 = 46.20555556;
pub const DEFAULT_HEIGHT_M: f64 = 200_000.0;
pub const DEFAULT_PITCH_DEG: f64 = -90.0;

// Control variable domains and steps
pub const LONGITUDE_RANGE_DEG: (f64, f64) = (-180.0, 180.0);
pub const LONGITUDE_STEP_DEG: f64 = 0.1;
pub const LATITUDE_RANGE_DEG: (f64, f64) = (-90.0, 90.0);
pub const LATITUDE_STEP_DEG: f64 = 0.1;
pub const HEIGHT_FACTOR: f64 = 2.0;
pub const HEADING_RANGE_DEG: (f64, f64) = (0.0, 360.0);
pub const HEADING_STEP_DEG: f64 = 5.0;
pub const PITCH_RANGE_DEG: (f64, f64) = (-90.0, 90.0);
pub const PITCH_STEP_DEG: f64 = 5.0;

// Widget value display
pub const DISPLAY_WIDTH: usize = 12; // characters, values are right-aligned
pub const DISPLAY_MAX_FRACTION_DIGITS: usize = 4;

// WGS84 ellipsoid, used to build fly-to destinations
pub const WGS84_A: f64 = 6_378_137.0;
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;
pub const WGS84_E2: f64 = WGS84_F * (2.0 - WGS84_F);
