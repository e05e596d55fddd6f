//! Circle geometry for a symmetric three-set diagram
//!
//! The three circles share one radius `r` and their centers sit on an
//! equilateral triangle of side `r`. Set 1 is upper-left, set 2 upper-right,
//! set 3 at the bottom. All coordinates are in pixels, y pointing down.

use log::debug;

use crate::{Region, Viewport};

const SQRT_3: f32 = 1.732_050_8;

/// Distance from the diagram centroid to each circle center, in units of `r`.
const CENTER_DIST: f32 = 1.0 / SQRT_3;
/// Distance of single-region anchors from the centroid, in units of `r`.
const SINGLE_DIST: f32 = CENTER_DIST + 0.5;
/// Distance of pairwise-region anchors from the centroid, in units of `r`.
const PAIR_DIST: f32 = 0.75;
/// Gap between a circle edge and its label, in units of `r`.
const LABEL_GAP: f32 = 0.12;
/// Padding around the drawing in pixels.
const PAD: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    fn offset(self, dir: (f32, f32), dist: f32) -> Point {
        Point {
            x: self.x + dir.0 * dist,
            y: self.y + dir.1 * dist,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    /// Strict containment: points on the outline are outside.
    pub fn contains(&self, p: Point) -> bool {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        dx * dx + dy * dy < self.radius * self.radius
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VennLayout {
    pub circles: [Circle; 3],
    /// Label position for each set, outside its circle
    pub label_anchors: [Point; 3],
    pub title_anchor: Option<Point>,
    region_anchors: [Point; 7],
}

impl VennLayout {
    /// A point strictly inside `region`, used to place its annotation.
    pub fn region_anchor(&self, region: Region) -> Point {
        let idx = Region::ALL
            .iter()
            .position(|&r| r == region)
            .unwrap_or(Region::ALL.len() - 1);
        self.region_anchors[idx]
    }

    /// The region containing `p`, or `None` outside all circles.
    pub fn region_at(&self, p: Point) -> Option<Region> {
        Region::of(
            self.circles[0].contains(p),
            self.circles[1].contains(p),
            self.circles[2].contains(p),
        )
    }
}

/// Unit vector from the centroid towards circle `i`.
fn direction(i: usize) -> (f32, f32) {
    match i {
        0 => (-SQRT_3 / 2.0, -0.5),
        1 => (SQRT_3 / 2.0, -0.5),
        _ => (0.0, 1.0),
    }
}

/// Fit the three circles, their labels and an optional title into the viewport.
pub fn layout_venn3(viewport: Viewport, label_font_size: f32, title: bool) -> VennLayout {
    let width = viewport.width as f32;
    let height = viewport.height as f32;

    let title_band = if title { label_font_size * 2.0 } else { 0.0 };
    let avail_h = (height - title_band).max(1.0);

    // Horizontal extent is 3r plus room for the side labels; vertical extent
    // runs from the top of the upper circles to the bottom label.
    let top_extent = 1.0 + 0.5 * CENTER_DIST;
    let bottom_extent = CENTER_DIST + 1.0 + LABEL_GAP;
    let side_room = 1.5 * label_font_size + PAD;
    let r_w = (width - 2.0 * side_room) / 3.0;
    let r_h = (avail_h - label_font_size - 2.0 * PAD) / (top_extent + bottom_extent);
    let r = r_w.min(r_h).max(1.0);

    let total_h = (top_extent + bottom_extent) * r + label_font_size;
    let centroid = Point {
        x: width / 2.0,
        y: title_band + ((avail_h - total_h) / 2.0).max(0.0) + top_extent * r,
    };

    let circles = [0, 1, 2].map(|i| Circle {
        center: centroid.offset(direction(i), CENTER_DIST * r),
        radius: r,
    });

    let label_dist = CENTER_DIST * r + r + LABEL_GAP * r + label_font_size * 0.5;
    let label_anchors = [0, 1, 2].map(|i| centroid.offset(direction(i), label_dist));

    let opposite = |i: usize| {
        let (dx, dy) = direction(i);
        (-dx, -dy)
    };
    let region_anchors = Region::ALL.map(|region| match region {
        Region::OnlyFirst => centroid.offset(direction(0), SINGLE_DIST * r),
        Region::OnlySecond => centroid.offset(direction(1), SINGLE_DIST * r),
        Region::OnlyThird => centroid.offset(direction(2), SINGLE_DIST * r),
        Region::FirstSecond => centroid.offset(opposite(2), PAIR_DIST * r),
        Region::FirstThird => centroid.offset(opposite(1), PAIR_DIST * r),
        Region::SecondThird => centroid.offset(opposite(0), PAIR_DIST * r),
        Region::All => centroid,
    });

    let title_anchor = title.then(|| Point {
        x: width / 2.0,
        y: title_band / 2.0,
    });

    debug!(
        "layout: viewport {}x{}, radius {:.1}, centroid ({:.1}, {:.1})",
        viewport.width, viewport.height, r, centroid.x, centroid.y
    );

    VennLayout {
        circles,
        label_anchors,
        title_anchor,
        region_anchors,
    }
}
