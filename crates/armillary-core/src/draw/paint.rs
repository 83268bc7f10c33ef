//! Fill paint descriptors.

use crate::{color::Color, serialize::Serializer};

/// Describes how the interior of a shape is filled.
///
/// Today the only paint is a solid color; the enum exists so gradient
/// kinds can join the model without touching shape code. Paints are
/// immutable and shared by handle between a node and its clones.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// A solid color fill.
    Color(Color),
}

impl Paint {
    /// Creates a solid color paint from a CSS color string.
    ///
    /// # Examples
    ///
    /// ```
    /// use armillary_core::draw::Paint;
    ///
    /// let red = Paint::color("red").unwrap();
    /// assert!(Paint::color("no-such-color").is_err());
    /// ```
    pub fn color(color_str: &str) -> Result<Self, String> {
        Ok(Self::Color(Color::new(color_str)?))
    }

    /// Serializes this paint under the caller's key.
    ///
    /// The paint is key-aware rather than a nested block so a solid color
    /// can collapse to a single scalar field.
    pub fn serialize(&self, key: &str, serializer: &mut Serializer) {
        match self {
            Self::Color(color) => serializer.add(key, *color),
        }
    }

    /// Returns the paint's value for an SVG `fill` attribute.
    pub fn to_svg_value(&self) -> svg::node::Value {
        match self {
            Self::Color(color) => color.into(),
        }
    }

    /// Returns the opacity contributed by the paint itself.
    pub fn fill_opacity(&self) -> f32 {
        match self {
            Self::Color(color) => color.alpha(),
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_serializes_under_caller_key() {
        let paint = Paint::color("red").unwrap();

        let mut serializer = Serializer::new();
        paint.serialize("fill", &mut serializer);

        let value = serializer.finish();
        assert_eq!(value["fill"], "red");
    }

    #[test]
    fn test_paint_fill_opacity_tracks_alpha() {
        let paint = Paint::Color(Color::new("blue").unwrap().with_alpha(0.5));
        assert!((paint.fill_opacity() - 0.5).abs() < 0.001);
    }
}
