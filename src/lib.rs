//! Beacon exclusion zone: counting positions on a row that can't hold a
//! beacon, and locating the one position in a square that no sensor sees.

pub mod coverage;
pub mod edge;
pub mod error;
pub mod gap;
pub mod input;
pub mod merge;
pub mod point;
pub mod scan;
pub mod segment;

pub use coverage::{row_coverage, Interval};
pub use edge::outside_edges;
pub use error::{Error, Result};
pub use gap::{find_gap, tuning_frequency};
pub use input::{known_beacons, parse_line, read_sensors};
pub use merge::merge;
pub use point::{Point, Sensor};
pub use scan::count_excluded;
pub use segment::{Line, LineSegment};
