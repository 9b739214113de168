//! # Area-Proportional Circle Placement
//!
//! Subset sizes are normalized to a total area of 1; each set becomes a
//! circle of its normalized area, and pairwise center distances are solved
//! so that each lens has the area of that pair's intersection.

use core::f64::consts::PI;

use crate::venn::geometry::{AREA_TOLERANCE, Circle, Point, distance_for_intersection_area};

/// Per-set area used when every subset is empty.
const DEGENERATE_SET_AREA: f64 = 1e-6;

/// Normalize `sizes` to sum to 1; `None` when they sum to (near) 0.
fn normalized(sizes: &[usize]) -> Option<Vec<f64>> {
    let total: f64 = sizes.iter().map(|&s| s as f64).sum();
    if total < AREA_TOLERANCE {
        return None;
    }
    Some(sizes.iter().map(|&s| s as f64 / total).collect())
}

/// Set and intersection areas for 2 sets: `[A, B, AB]`.
///
/// `sizes` is ordered `[A-only, B-only, A∩B]`.
pub fn venn2_areas(sizes: &[usize; 3]) -> [f64; 3] {
    match normalized(sizes) {
        None => [DEGENERATE_SET_AREA, DEGENERATE_SET_AREA, 0.0],
        Some(a) => [a[0] + a[2], a[1] + a[2], a[2]],
    }
}

/// Set and intersection areas for 3 sets: `[A, B, C, AB, BC, AC, ABC]`.
///
/// `sizes` is ordered `[A, B, AB, C, AC, BC, ABC]` (exclusive regions).
pub fn venn3_areas(sizes: &[usize; 7]) -> [f64; 7] {
    match normalized(sizes) {
        None => [
            DEGENERATE_SET_AREA,
            DEGENERATE_SET_AREA,
            DEGENERATE_SET_AREA,
            0.0,
            0.0,
            0.0,
            0.0,
        ],
        Some(a) => [
            a[0] + a[2] + a[4] + a[6],
            a[1] + a[2] + a[5] + a[6],
            a[3] + a[4] + a[5] + a[6],
            a[2] + a[6],
            a[5] + a[6],
            a[4] + a[6],
            a[6],
        ],
    }
}

fn radius_for_area(area: f64) -> f64 {
    (area / PI).sqrt()
}

/// Translate `centers` so that the area-weighted center of mass sits at the origin.
fn center_on_mass(
    centers: &mut [Point],
    radii: &[f64],
) {
    let weight: f64 = radii.iter().map(|r| r * r).sum();
    if weight <= 0.0 {
        return;
    }
    let (sx, sy) = centers
        .iter()
        .zip(radii)
        .fold((0.0, 0.0), |(sx, sy), (c, r)| {
            (sx + c.x * r * r, sy + c.y * r * r)
        });
    let (mx, my) = (sx / weight, sy / weight);
    for c in centers.iter_mut() {
        *c = c.offset(-mx, -my);
    }
}

fn circles(
    centers: &[Point],
    radii: &[f64],
) -> Vec<Circle> {
    centers
        .iter()
        .zip(radii)
        .map(|(&center, &radius)| Circle::new(center, radius))
        .collect()
}

/// Place two circles for the `[A, B, AB]` areas of [`venn2_areas`].
pub fn solve_venn2(areas: &[f64; 3]) -> Vec<Circle> {
    let [a, b, ab] = *areas;
    let radii = [radius_for_area(a), radius_for_area(b)];

    let mut centers = [Point::default(); 2];
    centers[1].x = if ab > AREA_TOLERANCE {
        distance_for_intersection_area(radii[0], radii[1], ab)
    } else {
        let mean = 0.5 * (radii[0] + radii[1]);
        radii[0] + radii[1] + (1.1 * mean).max(0.2)
    };

    center_on_mass(&mut centers, &radii);
    circles(&centers, &radii)
}

/// Place three circles for the `[A, B, C, AB, BC, AC, ABC]` areas of [`venn3_areas`].
///
/// The triple intersection is not fit; only set and pairwise areas are.
pub fn solve_venn3(areas: &[f64; 7]) -> Vec<Circle> {
    let [a, b, c, ab, bc, ac, _abc] = *areas;
    let radii = [radius_for_area(a), radius_for_area(b), radius_for_area(c)];

    // Pair i is (i, (i + 1) % 3).
    let pair_areas = [ab, bc, ac];
    let mut dists = [0.0; 3];
    for i in 0..3 {
        dists[i] = distance_for_intersection_area(radii[i], radii[(i + 1) % 3], pair_areas[i]);
    }

    let overlapping = pair_areas.iter().filter(|&&a| a > AREA_TOLERANCE).count();
    log::debug!("venn3: radii={radii:?} dists={dists:?} overlapping_pairs={overlapping}");

    let mut centers = match overlapping {
        3 => triangle_centers(&mut dists),
        2 => chain_centers(&pair_areas, &dists, &radii),
        1 => pair_and_free_centers(&pair_areas, &dists, &radii),
        _ => {
            let mut centers = [Point::default(); 3];
            centers[1].x = radii[0] + radii[1] * 1.1;
            centers[2].x = centers[1].x + radii[1] + radii[2] * 1.1;
            centers
        }
    };

    center_on_mass(&mut centers, &radii);
    circles(&centers, &radii)
}

/// Every pair overlaps: put the centers on a triangle with side lengths `dists`.
fn triangle_centers(dists: &mut [f64; 3]) -> [Point; 3] {
    for i in 0..3 {
        let (j, k) = ((i + 1) % 3, (i + 2) % 3);
        if dists[i] > dists[j] + dists[k] {
            let (shorter, longer) = if dists[j] < dists[k] { (j, k) } else { (k, j) };
            dists[i] = dists[longer] + dists[shorter] * 0.8;
            log::warn!("venn3: pairwise distances do not form a triangle; shrinking side {i}");
        }
    }

    let [d_ab, d_bc, d_ac] = *dists;
    let c_x = if d_ab.abs() > AREA_TOLERANCE {
        (d_ac * d_ac - d_bc * d_bc + d_ab * d_ab) / 2.0 / d_ab
    } else {
        0.0
    };
    let c_y = -(d_ac * d_ac - c_x * c_x).max(0.0).sqrt();

    [
        Point::new(0.0, 0.0),
        Point::new(d_ab, 0.0),
        Point::new(c_x, c_y),
    ]
}

/// Exactly one pair is disjoint: chain all three on a line, the disjoint pair on the ends.
fn chain_centers(
    pair_areas: &[f64; 3],
    dists: &[f64; 3],
    radii: &[f64; 3],
) -> [Point; 3] {
    let mut centers = [Point::default(); 3];
    if let Some(left) = (0..3).find(|&i| pair_areas[i] <= AREA_TOLERANCE) {
        let (right, middle) = ((left + 1) % 3, (left + 2) % 3);
        centers[middle].x = dists[middle];
        centers[right].x = dists[middle] + dists[right];

        // Keep the ends from touching.
        let gap = (centers[right].x - radii[right]) - (centers[left].x + radii[left]);
        if gap < 0.0 {
            let mid = 0.5 * (centers[left].x + radii[left] + centers[right].x - radii[right]);
            centers[left].x = mid - radii[left] - 1e-5;
            centers[right].x = mid + radii[right] + 1e-5;
        }
    }
    centers
}

/// Exactly one pair overlaps: place that pair, then the free circle past it.
fn pair_and_free_centers(
    pair_areas: &[f64; 3],
    dists: &[f64; 3],
    radii: &[f64; 3],
) -> [Point; 3] {
    let mut centers = [Point::default(); 3];
    if let Some(left) = (0..3).find(|&i| pair_areas[i] > AREA_TOLERANCE) {
        let (right, side) = ((left + 1) % 3, (left + 2) % 3);
        centers[right].x = dists[left];
        centers[side].x = dists[left] + radii[right] + radii[side] * 1.1;
    }
    centers
}
