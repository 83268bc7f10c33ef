//! Stroke (outline) descriptors.
//!
//! [`Stroke`] is an immutable value object describing how a shape's
//! outline is drawn. Construction uses `with_*` builders; once a stroke
//! is wrapped in an `Rc` and handed to a node there is no way to mutate
//! it, which is what makes sharing it across clones safe.
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |---------------|---------------|----------------|
//! | `fill` | `stroke`, `stroke-opacity` | `"#000000"`, `0.5` |
//! | `width` | `stroke-width` | `2.0` |
//! | `cap` | `stroke-linecap` | `"butt"`, `"round"`, `"square"` |
//! | `join` | `stroke-linejoin` | `"miter"`, `"round"`, `"bevel"` |
//! | `miter_limit` | `stroke-miterlimit` | `4.0` |
//! | `dashes` | `stroke-dasharray` | `"5,5"` |
//! | `offset` | `stroke-dashoffset` | `2.5` |

use std::str::FromStr;

use crate::{
    color::Color,
    serialize::{SerializeScene, Serializer},
};

/// Defines how line endpoints are rendered.
///
/// Maps directly to SVG `stroke-linecap` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint (SVG default)
    #[default]
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
    /// Square cap extending beyond the endpoint by half the stroke width
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

impl FromStr for StrokeCap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "butt" => Ok(Self::Butt),
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            _ => Err(format!(
                "invalid stroke cap `{s}`, valid values: butt, round, square"
            )),
        }
    }
}

/// Defines how line corners (joins) are rendered.
///
/// Maps directly to SVG `stroke-linejoin` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    /// Sharp corner with mitered point (SVG default)
    #[default]
    Miter,
    /// Rounded corner
    Round,
    /// Beveled (cut-off) corner
    Bevel,
}

impl StrokeJoin {
    /// Returns the SVG stroke-linejoin value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

impl FromStr for StrokeJoin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "miter" => Ok(Self::Miter),
            "round" => Ok(Self::Round),
            "bevel" => Ok(Self::Bevel),
            _ => Err(format!(
                "invalid stroke join `{s}`, valid values: miter, round, bevel"
            )),
        }
    }
}

/// An outline-drawing descriptor.
///
/// Out-of-range inputs clamp rather than fail: `width` below 0 becomes
/// 0, `miter_limit` below 1 becomes 1, and negative dash lengths become
/// 0. Construction is infallible.
///
/// # Examples
///
/// ```
/// use armillary_core::color::Color;
/// use armillary_core::draw::{Stroke, StrokeCap};
///
/// // Default stroke: black, 1px, solid
/// let stroke = Stroke::default();
/// assert_eq!(stroke.width(), 1.0);
///
/// // Dashed stroke with rounded caps
/// let stroke = Stroke::new(Color::new("blue").unwrap(), 1.5)
///     .with_dashes(vec![4.0, 2.0])
///     .with_cap(StrokeCap::Round);
/// assert!(!stroke.is_solid());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    fill: Color,
    width: f32,
    cap: StrokeCap,
    join: StrokeJoin,
    miter_limit: f32,
    dashes: Vec<f32>,
    offset: f32,
}

impl Stroke {
    /// Creates a solid stroke with the given color and width; other
    /// properties take their defaults (butt cap, miter join, miter limit
    /// 10, no dashes).
    pub fn new(fill: Color, width: f32) -> Self {
        Self {
            fill,
            width: width.max(0.0),
            ..Self::default()
        }
    }

    /// Returns the stroke with the given endpoint cap.
    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    /// Returns the stroke with the given corner join.
    pub fn with_join(mut self, join: StrokeJoin) -> Self {
        self.join = join;
        self
    }

    /// Returns the stroke with the given miter limit (clamped to ≥ 1).
    pub fn with_miter_limit(mut self, miter_limit: f32) -> Self {
        self.miter_limit = miter_limit.max(1.0);
        self
    }

    /// Returns the stroke with the given dash pattern. Negative lengths
    /// clamp to 0; an empty pattern means a solid line.
    pub fn with_dashes(mut self, dashes: Vec<f32>) -> Self {
        self.dashes = dashes.into_iter().map(|dash| dash.max(0.0)).collect();
        self
    }

    /// Returns the stroke with the given dash phase.
    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Returns the stroke color.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the endpoint cap style.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Returns the corner join style.
    pub fn join(&self) -> StrokeJoin {
        self.join
    }

    /// Returns the miter limit.
    pub fn miter_limit(&self) -> f32 {
        self.miter_limit
    }

    /// Returns the dash pattern; empty means solid.
    pub fn dashes(&self) -> &[f32] {
        &self.dashes
    }

    /// Returns the dash phase.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Returns true when the stroke has no dash pattern.
    pub fn is_solid(&self) -> bool {
        self.dashes.is_empty()
    }

    /// Returns the dash pattern encoded for an SVG `stroke-dasharray`
    /// attribute, or `None` for solid strokes.
    pub fn dash_array(&self) -> Option<String> {
        if self.dashes.is_empty() {
            return None;
        }
        let encoded: Vec<String> = self.dashes.iter().map(ToString::to_string).collect();
        Some(encoded.join(","))
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            fill: Color::default(),
            width: 1.0,
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
            miter_limit: 10.0,
            dashes: Vec::new(),
            offset: 0.0,
        }
    }
}

impl SerializeScene for Stroke {
    // miter_limit and offset are intentionally never written; this
    // mirrors the serialized form the rest of the pipeline round-trips.
    fn serialize(&self, serializer: &mut Serializer) {
        serializer.add("fill", self.fill);
        serializer.add_default("width", self.width, 1.0);
        serializer.add("cap", self.cap.to_svg_value());
        serializer.add("join", self.join.to_svg_value());
        if let Some(dash_array) = self.dash_array() {
            serializer.add("dashes", dash_array);
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// This applies the complete stroke definition including color, opacity,
/// width, line cap, line join, miter limit, dash pattern, and dash phase
/// to any SVG element.
///
/// # Examples
///
/// ```
/// use armillary_core::color::Color;
/// use armillary_core::draw::Stroke;
/// use svg::node::element as svg_element;
///
/// let stroke = Stroke::new(Color::new("black").unwrap(), 2.0);
/// let line = svg_element::Line::new()
///     .set("x1", 0)
///     .set("y1", 0)
///     .set("x2", 100)
///     .set("y2", 0);
///
/// let line = armillary_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element;
        ::svg::Node::assign(&mut elem, "stroke", &$stroke.fill());
        ::svg::Node::assign(&mut elem, "stroke-opacity", $stroke.fill().alpha());
        ::svg::Node::assign(&mut elem, "stroke-width", $stroke.width());
        ::svg::Node::assign(&mut elem, "stroke-linecap", $stroke.cap().to_svg_value());
        ::svg::Node::assign(&mut elem, "stroke-linejoin", $stroke.join().to_svg_value());
        ::svg::Node::assign(&mut elem, "stroke-miterlimit", $stroke.miter_limit());

        if let Some(dasharray) = $stroke.dash_array() {
            ::svg::Node::assign(&mut elem, "stroke-dasharray", dasharray);
        }
        if $stroke.offset() != 0.0 {
            ::svg::Node::assign(&mut elem, "stroke-dashoffset", $stroke.offset());
        }

        elem
    }};
}
