//! Plane-geometry checks.
//!
//! Rectangles use canvas coordinate space: the origin is the top-left corner
//! and `top` grows downward, the convention of the 2D canvas APIs rather
//! than the Cartesian one.

use serde::{Deserialize, Serialize};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// A circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius.
    pub radius: f64,
}

/// An axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Distance from the canvas top to the rectangle's upper edge.
    pub top: f64,
    /// Distance from the canvas left to the rectangle's left edge.
    pub left: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

/// Whether sides `a`, `b`, `c` can form a triangle.
///
/// The strict [triangle inequality](https://en.wikipedia.org/wiki/Triangle_inequality)
/// must hold for all three sides, so degenerate zero-area triangles fail.
#[must_use]
pub fn is_triangle(a: f64, b: f64, c: f64) -> bool {
    a + b > c && b + c > a && c + a > b
}

/// Whether two rectangles overlap with positive area.
///
/// Rectangles that merely touch along an edge or at a corner do not count as
/// overlapping.
#[must_use]
pub fn rects_overlap(first: Rect, second: Rect) -> bool {
    first.left < second.left + second.width
        && second.left < first.left + first.width
        && first.top < second.top + second.height
        && second.top < first.top + first.height
}

/// Whether `point` lies strictly inside `circle`.
///
/// Points on the boundary circle are outside.
#[must_use]
pub fn is_inside_circle(circle: Circle, point: Point) -> bool {
    let dx = circle.center.x - point.x;
    let dy = circle.center.y - point.y;
    dx.hypot(dy) < circle.radius
}
