use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }

    pub fn distance(&self, o: &Point) -> u64 {
        self.x.abs_diff(o.x) + self.y.abs_diff(o.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A sensor and the closest beacon it reported. Nothing within `radius()` of
/// the sensor can be an undetected beacon.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Sensor {
    pub position: Point,
    pub beacon: Point,
}

impl Sensor {
    pub fn new(position: Point, beacon: Point) -> Self {
        Sensor { position, beacon }
    }

    pub fn from_coords(sensor_x: i64, sensor_y: i64, beacon_x: i64, beacon_y: i64) -> Self {
        Self::new(Point::new(sensor_x, sensor_y), Point::new(beacon_x, beacon_y))
    }

    pub fn radius(&self) -> u64 {
        self.position.distance(&self.beacon)
    }

    pub fn covers(&self, p: &Point) -> bool {
        self.position.distance(p) <= self.radius()
    }
}
