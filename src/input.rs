use std::collections::HashSet;
use std::io::BufRead;

use once_cell::sync::Lazy;
use regex_lite::Regex;
use tracing::info;

use crate::error::{Error, Result};
use crate::point::{Point, Sensor};

static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"Sensor at x=(-?[0-9]+), y=(-?[0-9]+): closest beacon is at x=(-?[0-9]+), y=(-?[0-9]+)"#)
        .expect("sensor line regex should compile")
});

/// Parses one report line into `(sensor, beacon)` positions. `line_no` is only
/// used for the error message.
pub fn parse_line(line: &str, line_no: usize) -> Result<(Point, Point)> {
    let Some(caps) = LINE_RE.captures(line) else {
        return Err(Error::InvalidInputLine { line_no, line: line.to_string() });
    };
    let mut coords = [0i64; 4];
    for (i, c) in coords.iter_mut().enumerate() {
        let m = caps.get(i + 1)
            .ok_or_else(|| Error::InvalidInputLine { line_no, line: line.to_string() })?;
        *c = m.as_str().parse()?;
    }
    let [sx, sy, bx, by] = coords;
    Ok((Point::new(sx, sy), Point::new(bx, by)))
}

pub fn read_sensors(r: impl BufRead) -> Result<Vec<Sensor>> {
    let mut sensors = Vec::new();
    for (i, line) in r.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (position, beacon) = parse_line(&line, i + 1)?;
        sensors.push(Sensor::new(position, beacon));
    }
    info!(sensors = sensors.len(), "loaded sensor reports");
    Ok(sensors)
}

/// Beacon positions, each listed once even if several sensors report it.
pub fn known_beacons(sensors: &[Sensor]) -> HashSet<Point> {
    sensors.iter().map(|s| s.beacon).collect()
}
