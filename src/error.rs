use std::io;
use std::num::ParseIntError;

use thiserror::Error;

use crate::point::Point;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid points for line segment: {a} and {b}")]
    MalformedSegment { a: Point, b: Point },
    #[error("no uncovered point found in [0,{limit}]x[0,{limit}]")]
    NoGapFound { limit: i64 },
    #[error("unexpected line format on line {line_no}: {line}")]
    InvalidInputLine { line_no: usize, line: String },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    ParseInt(#[from] ParseIntError),
}
