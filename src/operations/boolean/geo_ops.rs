use geo::{BooleanOps, Coord, LineString, MultiPolygon, Polygon};

use super::PolygonSetOps;
use crate::error::{OperationError, Result};
use crate::geometry::{MergedRegion, Region, Ring};
use crate::math::Point2;

/// [`PolygonSetOps`] backed by the `geo` crate's boolean operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoBooleanOps;

impl PolygonSetOps for GeoBooleanOps {
    fn union(&self, polygons: &[Ring]) -> Result<MergedRegion> {
        let Some((first, rest)) = polygons.split_first() else {
            return Ok(MergedRegion::default());
        };
        check_finite(polygons.iter())?;

        let mut merged = MultiPolygon::new(vec![to_geo_polygon(first, &[])]);
        for ring in rest {
            let next = MultiPolygon::new(vec![to_geo_polygon(ring, &[])]);
            merged = merged.union(&next);
        }
        from_geo(&merged)
    }

    fn difference(&self, subject: &MergedRegion, tool: &MergedRegion) -> Result<MergedRegion> {
        check_finite(all_rings(subject).chain(all_rings(tool)))?;
        if subject.is_empty() {
            return Ok(MergedRegion::default());
        }
        if tool.is_empty() {
            return Ok(normalize(subject));
        }
        let result = to_geo(subject).difference(&to_geo(tool));
        from_geo(&result)
    }
}

fn all_rings(region: &MergedRegion) -> impl Iterator<Item = &Ring> {
    region
        .regions()
        .iter()
        .flat_map(|r| std::iter::once(&r.exterior).chain(r.interiors.iter()))
}

fn check_finite<'a>(mut rings: impl Iterator<Item = &'a Ring>) -> Result<()> {
    let bad = rings.any(|ring| {
        ring.points()
            .iter()
            .any(|p| !p.x.is_finite() || !p.y.is_finite())
    });
    if bad {
        return Err(OperationError::Failed("polygon has a non-finite coordinate".to_owned()).into());
    }
    Ok(())
}

fn to_line_string(ring: &Ring) -> LineString<f64> {
    ring.points()
        .iter()
        .map(|p| Coord { x: p.x, y: p.y })
        .collect::<Vec<_>>()
        .into()
}

fn to_geo_polygon(exterior: &Ring, interiors: &[Ring]) -> Polygon<f64> {
    // `Polygon::new` closes every ring.
    Polygon::new(
        to_line_string(exterior),
        interiors.iter().map(to_line_string).collect(),
    )
}

fn to_geo(region: &MergedRegion) -> MultiPolygon<f64> {
    MultiPolygon::new(
        region
            .regions()
            .iter()
            .map(|r| to_geo_polygon(&r.exterior, &r.interiors))
            .collect(),
    )
}

fn from_line_string(ls: &LineString<f64>) -> Ring {
    Ring::new(ls.coords().map(|c| Point2::new(c.x, c.y)).collect())
}

/// Converts `geo` output to regions with exteriors counter-clockwise and
/// holes clockwise, dropping rings that collapsed below a triangle.
fn from_geo(mp: &MultiPolygon<f64>) -> Result<MergedRegion> {
    let mut regions = Vec::with_capacity(mp.0.len());
    for polygon in mp {
        let exterior = from_line_string(polygon.exterior());
        if exterior.len() < 3 {
            continue;
        }
        let interiors = polygon
            .interiors()
            .iter()
            .map(from_line_string)
            .filter(|ring| ring.len() >= 3)
            .map(|ring| ring.with_winding(false))
            .collect();
        regions.push(Region::new(exterior.with_winding(true), interiors));
    }
    if regions.is_empty() && !mp.0.is_empty() {
        return Err(OperationError::Failed(format!(
            "boolean operation produced {} degenerate polygon(s)",
            mp.0.len()
        ))
        .into());
    }
    Ok(MergedRegion::new(regions))
}

fn normalize(region: &MergedRegion) -> MergedRegion {
    MergedRegion::new(
        region
            .regions()
            .iter()
            .map(|r| {
                Region::new(
                    r.exterior.clone().with_winding(true),
                    r.interiors
                        .iter()
                        .map(|h| h.clone().with_winding(false))
                        .collect(),
                )
            })
            .collect(),
    )
}
