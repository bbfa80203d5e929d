use crate::error::Result;
use crate::point::{Point, Sensor};
use crate::segment::LineSegment;

/// The four diagonal segments running one step outside the sensor's
/// coverage diamond: top-right, bottom-right, left-top and left-bottom.
pub fn outside_edges(sensor: &Sensor) -> Result<[LineSegment; 4]> {
    let Point { x, y } = sensor.position;
    let r = sensor.radius() as i64 + 1;

    let top = Point::new(x, y - r);
    let bottom = Point::new(x, y + r);
    let left = Point::new(x - r, y);
    let right = Point::new(x + r, y);

    Ok([
        LineSegment::new(top, right)?,
        LineSegment::new(bottom, right)?,
        LineSegment::new(left, top)?,
        LineSegment::new(left, bottom)?,
    ])
}
