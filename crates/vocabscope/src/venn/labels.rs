//! # Venn Label Placement

use crate::venn::geometry::{Bounds, Circle, Point};

/// Grid resolution (per axis) used to search for region label positions.
const REGION_GRID_STEPS: usize = 240;

/// A positioned text label.
#[derive(Debug, Clone, PartialEq)]
pub struct VennLabel {
    /// Where the label is centered, in layout coordinates.
    pub position: Point,

    /// The label text; may be empty.
    pub text: String,
}

/// Set label positions, just outside each circle.
///
/// 2 sets: below each circle;
/// 3 sets: the first two above (offset outward), the third below.
pub fn set_label_positions(circles: &[Circle]) -> Vec<Point> {
    let padding = circles.iter().map(|c| c.radius * 0.1).sum::<f64>() / circles.len() as f64;

    circles
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let r = c.radius;
            match (circles.len(), i) {
                (3, 0) => c.center.offset(-r / 2.0, r + padding),
                (3, 1) => c.center.offset(r / 2.0, r + padding),
                _ => c.center.offset(0.0, -r - padding),
            }
        })
        .collect()
}

/// The membership mask of `point`: bit `i` is set when circle `i` contains it.
fn membership_mask(
    circles: &[Circle],
    point: &Point,
) -> usize {
    circles
        .iter()
        .enumerate()
        .filter(|(_, c)| c.contains(point))
        .fold(0, |mask, (i, _)| mask | (1 << i))
}

/// A visual center for every exclusive region, indexed by `mask - 1`.
///
/// The visual center of a region is the sampled point of that region that is
/// farthest from every circle boundary. Regions with no sampled area are `None`.
pub fn region_centers(circles: &[Circle]) -> Vec<Option<Point>> {
    let region_count = (1 << circles.len()) - 1;
    let mut best: Vec<Option<(f64, Point)>> = vec![None; region_count];

    let Some(bounds) = Bounds::enclosing(circles) else {
        return vec![None; region_count];
    };

    let step_x = bounds.width() / REGION_GRID_STEPS as f64;
    let step_y = bounds.height() / REGION_GRID_STEPS as f64;
    for ix in 0..=REGION_GRID_STEPS {
        for iy in 0..=REGION_GRID_STEPS {
            let point = Point::new(
                bounds.x_min + ix as f64 * step_x,
                bounds.y_min + iy as f64 * step_y,
            );
            let mask = membership_mask(circles, &point);
            if mask == 0 {
                continue;
            }

            let clearance = circles
                .iter()
                .map(|c| c.boundary_distance(&point))
                .fold(f64::INFINITY, f64::min);
            if clearance <= 0.0 {
                continue;
            }

            let slot = &mut best[mask - 1];
            if slot.is_none_or(|(current, _)| clearance > current) {
                *slot = Some((clearance, point));
            }
        }
    }

    best.into_iter()
        .map(|slot| slot.map(|(_, point)| point))
        .collect()
}

/// The mean center of the circles in `mask`.
pub fn member_centroid(
    circles: &[Circle],
    mask: usize,
) -> Point {
    let members = circles
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, c)| c.center)
        .collect::<Vec<_>>();
    let n = members.len().max(1) as f64;
    let (x, y) = members
        .iter()
        .fold((0.0, 0.0), |(x, y), p| (x + p.x, y + p.y));
    Point::new(x / n, y / n)
}

/// Subset labels for `sizes`, indexed by `mask - 1`.
///
/// A region with area in the layout is labeled at its visual center with its size.
/// A region without area is placed at its member centroid; it is labeled
/// with its size when that size is non-zero, and left blank otherwise.
pub fn subset_labels(
    circles: &[Circle],
    sizes: &[usize],
) -> Vec<VennLabel> {
    region_centers(circles)
        .into_iter()
        .zip(sizes)
        .enumerate()
        .map(|(index, (center, &size))| match center {
            Some(position) => VennLabel {
                position,
                text: size.to_string(),
            },
            None => VennLabel {
                position: member_centroid(circles, index + 1),
                text: if size == 0 {
                    String::new()
                } else {
                    size.to_string()
                },
            },
        })
        .collect()
}
