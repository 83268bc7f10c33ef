//! Image nodes referencing raster or vector content.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::{
    geometry::{Bounds, Point, Size},
    serialize::Serializer,
};

/// Encoding of inline image bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Svg,
}

impl ImageFormat {
    /// Returns the MIME type used in data URIs.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Svg => "image/svg+xml",
        }
    }
}

/// Where an image's pixels come from: inline bytes or an external URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageContent {
    /// Raw bytes embedded in the scene, encoded into a data URI on
    /// output.
    Data {
        /// The image bytes.
        data: Vec<u8>,
        /// The byte encoding, deciding the data URI's MIME type.
        format: ImageFormat,
    },
    /// A reference resolved by the consumer; the scene never fetches it.
    Url {
        /// The reference as given.
        url: String,
    },
}

/// An image placed at the local origin with an explicit display size.
///
/// The display size is independent of the content's intrinsic pixel
/// dimensions; decoding is a consumer concern.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    content: ImageContent,
    width: f32,
    height: f32,
}

impl Image {
    /// Creates an image from inline bytes.
    pub fn from_data(data: Vec<u8>, format: ImageFormat, width: f32, height: f32) -> Self {
        Self {
            content: ImageContent::Data { data, format },
            width,
            height,
        }
    }

    /// Creates an image referencing an external URL.
    pub fn from_url(url: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            content: ImageContent::Url { url: url.into() },
            width,
            height,
        }
    }

    /// Returns the image content.
    pub fn content(&self) -> &ImageContent {
        &self.content
    }

    /// Returns the display width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the display height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the `href` value for output: the URL as given, or a
    /// base64 data URI for inline bytes.
    pub fn href(&self) -> String {
        match &self.content {
            ImageContent::Url { url } => url.clone(),
            ImageContent::Data { data, format } => {
                format!("data:{};base64,{}", format.mime_type(), BASE64.encode(data))
            }
        }
    }

    /// Returns the display rectangle at the local origin.
    pub fn frame(&self) -> Bounds {
        Bounds::new_from_top_left(Point::default(), Size::new(self.width, self.height))
    }

    pub(crate) fn serialize(&self, serializer: &mut Serializer) {
        serializer.add("src", self.href());
        serializer.add("width", self.width);
        serializer.add("height", self.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_is_origin_anchored_display_rect() {
        let image = Image::from_url("sprites/cat.png", 64.0, 32.0);
        let frame = image.frame();
        assert_eq!(frame.min_point(), Point::default());
        assert_eq!(frame.to_size(), Size::new(64.0, 32.0));
    }

    #[test]
    fn test_url_href_passes_through() {
        let image = Image::from_url("https://example.com/a.png", 1.0, 1.0);
        assert_eq!(image.href(), "https://example.com/a.png");
    }

    #[test]
    fn test_data_href_is_data_uri() {
        let image = Image::from_data(vec![0x89, 0x50, 0x4e, 0x47], ImageFormat::Png, 1.0, 1.0);
        assert_eq!(image.href(), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_serialize_writes_src_and_size() {
        let mut serializer = Serializer::new();
        Image::from_url("a.svg", 10.0, 20.0).serialize(&mut serializer);
        let value = serializer.finish();

        assert_eq!(value["src"], "a.svg");
        assert_eq!(value["width"], 10.0);
        assert_eq!(value["height"], 20.0);
    }
}
