//! Pipeline inputs: JSON records, file loading, and the reference samples.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::geometry::LineSegment;
use crate::math::Point2;

/// One thick line as written in an input file.
///
/// ```json
/// {"start": [1, 0], "end": [1, 7], "thickness": 2}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SegmentSpec {
    pub start: [f64; 2],
    pub end: [f64; 2],
    pub thickness: f64,
}

impl From<SegmentSpec> for LineSegment {
    fn from(spec: SegmentSpec) -> Self {
        LineSegment::new(
            Point2::new(spec.start[0], spec.start[1]),
            Point2::new(spec.end[0], spec.end[1]),
            spec.thickness,
        )
    }
}

/// An axis-aligned box given by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoxSpec {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl BoxSpec {
    #[must_use]
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn min_corner(&self) -> Point2 {
        Point2::new(self.min[0], self.min[1])
    }

    #[must_use]
    pub fn max_corner(&self) -> Point2 {
        Point2::new(self.max[0], self.max[1])
    }
}

/// Input of the box difference pipeline: `outer` with every box in `holes`
/// removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoxDifferenceSpec {
    pub outer: BoxSpec,
    #[serde(default)]
    pub holes: Vec<BoxSpec>,
}

/// Parses a JSON list of segment records.
///
/// # Errors
///
/// Returns `ConfigError::Parse` if the text is not a list of segment records.
pub fn parse_segments(json: &str) -> Result<Vec<LineSegment>> {
    let specs: Vec<SegmentSpec> = serde_json::from_str(json).map_err(ConfigError::from)?;
    Ok(specs.into_iter().map(LineSegment::from).collect())
}

/// Reads and parses a JSON file of segment records.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read, or
/// `ConfigError::Parse` if its content is malformed.
pub fn load_segments(path: &Path) -> Result<Vec<LineSegment>> {
    parse_segments(&read(path)?)
}

/// Parses a JSON box difference record.
///
/// # Errors
///
/// Returns `ConfigError::Parse` if the text is malformed.
pub fn parse_box_difference(json: &str) -> Result<BoxDifferenceSpec> {
    Ok(serde_json::from_str(json).map_err(ConfigError::from)?)
}

/// Reads and parses a JSON box difference file.
///
/// # Errors
///
/// Returns `ConfigError::Io` if the file cannot be read, or
/// `ConfigError::Parse` if its content is malformed.
pub fn load_box_difference(path: &Path) -> Result<BoxDifferenceSpec> {
    parse_box_difference(&read(path)?)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        ConfigError::Io {
            path: path.display().to_string(),
            source,
        }
        .into()
    })
}

/// A 2-unit square frame (outer extent 8 x 7) with a short 1-unit bar inside.
#[must_use]
pub fn sample_segments() -> Vec<LineSegment> {
    [
        ([1.0, 0.0], [1.0, 7.0], 2.0),
        ([2.0, 6.0], [6.0, 6.0], 2.0),
        ([7.0, 7.0], [7.0, 0.0], 2.0),
        ([6.0, 1.0], [2.0, 1.0], 2.0),
        ([4.0, 3.0], [4.0, 4.0], 1.0),
    ]
    .into_iter()
    .map(|(start, end, thickness)| {
        LineSegment::from(SegmentSpec {
            start,
            end,
            thickness,
        })
    })
    .collect()
}

/// A 10 x 10 box with two 2 x 2 boxes removed.
#[must_use]
pub fn sample_box_difference() -> BoxDifferenceSpec {
    BoxDifferenceSpec {
        outer: BoxSpec::new([0.0, 0.0], [10.0, 10.0]),
        holes: vec![
            BoxSpec::new([2.0, 2.0], [4.0, 4.0]),
            BoxSpec::new([6.0, 6.0], [8.0, 8.0]),
        ],
    }
}
