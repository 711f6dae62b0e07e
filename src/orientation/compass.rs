use crate::orientation::rotation::normalize_degrees;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compass resolution used when classifying a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompassMethod {
    /// North / East / South / West, 90-degree bands.
    FourPoint,
    /// Eight 45-degree bands, each centered on the named direction.
    #[default]
    EightPoint,
}

/// Classification of a building element's compass exposure.
///
/// This is a closed label set: the eight compass points plus two sentinels.
/// `Interior` means a space has no qualifying exterior wall; `Unknown` means
/// an element's parent chain could not be resolved. Neither sentinel is ever
/// produced for a valid azimuth value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
    Interior,
    Unknown,
}

/// The eight compass points in clockwise order, starting at north.
///
/// Indexing matches [`eight_point_index`].
pub const EIGHT_POINTS: [Orientation; 8] = [
    Orientation::North,
    Orientation::Northeast,
    Orientation::East,
    Orientation::Southeast,
    Orientation::South,
    Orientation::Southwest,
    Orientation::West,
    Orientation::Northwest,
];

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::North => "North",
            Orientation::Northeast => "Northeast",
            Orientation::East => "East",
            Orientation::Southeast => "Southeast",
            Orientation::South => "South",
            Orientation::Southwest => "Southwest",
            Orientation::West => "West",
            Orientation::Northwest => "Northwest",
            Orientation::Interior => "Interior",
            Orientation::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Index into [`EIGHT_POINTS`] for an azimuth in degrees.
///
/// Each band is 45 degrees wide, centered on the named direction and closed
/// on its lower edge: 22.5 falls into Northeast, 67.5 into East.
pub(crate) fn eight_point_index(azimuth_deg: f64) -> usize {
    let az = normalize_degrees(azimuth_deg);
    (((az + 22.5) / 45.0) as usize) % 8
}

/// Buckets one absolute azimuth into a compass label.
///
/// Band edges wrap at 0/360 and are lower-inclusive, upper-exclusive.
/// Every azimuth in `[0, 360)` maps to exactly one label; the sentinels
/// `Interior` and `Unknown` are never returned from here.
pub fn classify_azimuth(azimuth_deg: f64, method: CompassMethod) -> Orientation {
    let az = normalize_degrees(azimuth_deg);
    match method {
        CompassMethod::FourPoint => {
            if az < 45.0 {
                Orientation::North
            } else if az < 135.0 {
                Orientation::East
            } else if az < 225.0 {
                Orientation::South
            } else if az < 315.0 {
                Orientation::West
            } else {
                Orientation::North
            }
        }
        CompassMethod::EightPoint => EIGHT_POINTS[eight_point_index(az)],
    }
}
