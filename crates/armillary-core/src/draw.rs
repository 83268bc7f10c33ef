//! Attribute primitives describing how shapes are painted.
//!
//! This module provides the immutable value objects shared by shape
//! nodes:
//!
//! - [`Paint`]: a fill descriptor (currently solid color)
//! - [`Stroke`]: an outline descriptor (color, width, cap, join, miter
//!   limit, dash pattern, dash phase)
//! - [`StrokeCap`] / [`StrokeJoin`]: endpoint and corner styles
//! - [`apply_stroke!`](crate::apply_stroke!): macro applying a stroke's
//!   attributes to an SVG element
//!
//! Paints and strokes are shared by handle (`Rc`) between a node and its
//! clones; the tree structure itself is what deep-clones.

mod paint;
mod stroke;

pub use paint::Paint;
pub use stroke::{Stroke, StrokeCap, StrokeJoin};
