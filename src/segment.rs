use std::fmt;

use crate::error::{Error, Result};
use crate::point::Point;

/// Infinite diagonal line `y = y0 + slope * x`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Line {
    pub y0: i64,
    pub slope: i64,
}

impl Line {
    pub fn new(y0: i64, slope: i64) -> Self {
        Line { y0, slope }
    }

    /// The lattice point where the two lines cross. Parallel lines and
    /// crossings that fall between lattice points give `None`.
    pub fn intersect(&self, o: &Line) -> Option<Point> {
        if self.slope == o.slope {
            return None;
        }
        let num = o.y0 - self.y0;
        let den = self.slope - o.slope;
        if num % den != 0 {
            return None;
        }
        let x = num / den;
        Some(Point::new(x, self.y0 + self.slope * x))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {} + {} * x", self.y0, self.slope)
    }
}

/// A piece of a diagonal line, with `start.x < end.x`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LineSegment {
    start: Point,
    end: Point,
    line: Line,
}

impl LineSegment {
    /// Builds the segment between `a` and `b`, in either order. The points must
    /// differ in x and lie on a line of slope 1 or -1.
    pub fn new(a: Point, b: Point) -> Result<Self> {
        let (start, end) = if a.x < b.x {
            (a, b)
        } else if b.x < a.x {
            (b, a)
        } else {
            return Err(Error::MalformedSegment { a, b });
        };
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        if dy.abs() != dx {
            return Err(Error::MalformedSegment { a, b });
        }
        let slope = dy / dx;
        let line = Line::new(start.y - start.x * slope, slope);
        Ok(LineSegment { start, end, line })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn line(&self) -> Line {
        self.line
    }

    pub fn slope(&self) -> i64 {
        self.line.slope
    }

    pub fn contains(&self, p: &Point) -> bool {
        if p.x < self.start.x || p.x > self.end.x {
            return false;
        }
        p.y - self.slope() * (p.x - self.start.x) == self.start.y
    }

    /// The lattice point shared by both segments, if any.
    pub fn intersect(&self, o: &LineSegment) -> Option<Point> {
        let p = self.line.intersect(&o.line)?;
        (self.contains(&p) && o.contains(&p)).then_some(p)
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.start, self.end)
    }
}
