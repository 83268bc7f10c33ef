//! Text nodes.

use std::rc::Rc;

use crate::{
    draw::{Paint, Stroke},
    geometry::{Bounds, Point, Size},
    serialize::Serializer,
};

/// Horizontal alignment of a text run relative to its origin.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Origin is the start of the run (default).
    #[default]
    Start,
    /// Origin is the middle of the run.
    Middle,
    /// Origin is the end of the run.
    End,
}

impl TextAnchor {
    /// Returns the SVG text-anchor value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// A text run with font size and anchor.
///
/// Real glyph measurement belongs to the host toolkit's text layout; the
/// frame here uses a fixed average-advance estimate (0.6 em per
/// character) so bounds queries stay usable headlessly.
#[derive(Debug, Clone)]
pub struct Text {
    content: String,
    font_size: f32,
    anchor: TextAnchor,
    fill: Option<Rc<Paint>>,
    stroke: Option<Rc<Stroke>>,
}

/// Approximate advance width of one glyph, in em.
const AVERAGE_ADVANCE: f32 = 0.6;

/// Approximate ascent above the baseline, in em.
const ASCENT: f32 = 0.8;

impl Text {
    /// Default font size in user units.
    pub const DEFAULT_FONT_SIZE: f32 = 16.0;

    /// Creates a text run with the default font size and start anchor.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font_size: Self::DEFAULT_FONT_SIZE,
            anchor: TextAnchor::default(),
            fill: None,
            stroke: None,
        }
    }

    /// Sets the font size (builder form).
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the anchor (builder form).
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the fill paint (builder form).
    pub fn with_fill(mut self, fill: impl Into<Rc<Paint>>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Sets the stroke (builder form).
    pub fn with_stroke(mut self, stroke: impl Into<Rc<Stroke>>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    /// Returns the text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the font size.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the anchor.
    pub fn anchor(&self) -> TextAnchor {
        self.anchor
    }

    /// Returns the fill paint handle, if any.
    pub fn fill(&self) -> Option<&Rc<Paint>> {
        self.fill.as_ref()
    }

    /// Returns the stroke handle, if any.
    pub fn stroke(&self) -> Option<&Rc<Stroke>> {
        self.stroke.as_ref()
    }

    /// Returns an estimated frame: origin on the baseline, width from
    /// the average-advance metric, shifted by the anchor.
    pub fn frame(&self) -> Bounds {
        let width = self.content.chars().count() as f32 * self.font_size * AVERAGE_ADVANCE;
        let min_x = match self.anchor {
            TextAnchor::Start => 0.0,
            TextAnchor::Middle => -width / 2.0,
            TextAnchor::End => -width,
        };
        Bounds::new_from_top_left(
            Point::new(min_x, -self.font_size * ASCENT),
            Size::new(width, self.font_size),
        )
    }

    pub(crate) fn serialize(&self, serializer: &mut Serializer) {
        serializer.add("text", self.content.as_str());
        serializer.add_default("fontSize", self.font_size, Self::DEFAULT_FONT_SIZE);
        if self.anchor != TextAnchor::default() {
            serializer.add("anchor", self.anchor.to_svg_value());
        }
        if let Some(fill) = &self.fill {
            fill.serialize("fill", serializer);
        }
        serializer.add_optional_block("stroke", self.stroke.as_deref());
    }
}
