use image::DynamicImage;

/// Channel layout of a decoded image. Samples are always 8-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    Gray,
    GrayAlpha,
    Rgb,
    Rgba,
}

impl ChannelLayout {
    /// Samples per pixel.
    pub fn channels(self) -> usize {
        match self {
            ChannelLayout::Gray => 1,
            ChannelLayout::GrayAlpha => 2,
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
        }
    }

    /// Index of the alpha sample within a pixel, if the layout carries one.
    pub fn alpha_index(self) -> Option<usize> {
        match self {
            ChannelLayout::Gray | ChannelLayout::Rgb => None,
            ChannelLayout::GrayAlpha => Some(1),
            ChannelLayout::Rgba => Some(3),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChannelLayout::Gray => "Gray",
            ChannelLayout::GrayAlpha => "Gray+Alpha",
            ChannelLayout::Rgb => "RGB",
            ChannelLayout::Rgba => "RGBA",
        }
    }
}

/// An 8-bit pixel grid. Loaded once and treated as immutable; every
/// transform produces a fresh `ImageData` instead of mutating in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub width: usize,
    pub height: usize,
    pub layout: ChannelLayout,
    pub data: Vec<u8>,
}

impl ImageData {
    pub fn from_raw(width: usize, height: usize, layout: ChannelLayout, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height * layout.channels());
        Self {
            width,
            height,
            layout,
            data,
        }
    }

    /// Convert a decoded image, keeping 8-bit layouts as-is and flattening
    /// everything else (16-bit, float) to RGBA8.
    pub fn from_dynamic(img: &DynamicImage) -> Self {
        let width = img.width() as usize;
        let height = img.height() as usize;
        match img {
            DynamicImage::ImageLuma8(buf) => {
                Self::from_raw(width, height, ChannelLayout::Gray, buf.as_raw().clone())
            }
            DynamicImage::ImageLumaA8(buf) => {
                Self::from_raw(width, height, ChannelLayout::GrayAlpha, buf.as_raw().clone())
            }
            DynamicImage::ImageRgb8(buf) => {
                Self::from_raw(width, height, ChannelLayout::Rgb, buf.as_raw().clone())
            }
            DynamicImage::ImageRgba8(buf) => {
                Self::from_raw(width, height, ChannelLayout::Rgba, buf.as_raw().clone())
            }
            other => Self::from_raw(
                width,
                height,
                ChannelLayout::Rgba,
                other.to_rgba8().into_raw(),
            ),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Expand to interleaved RGBA bytes for the display surface. Gray maps
    /// to equal R/G/B; missing alpha becomes opaque.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let channels = self.layout.channels();
        let mut bytes = Vec::with_capacity(self.width * self.height * 4);
        for px in self.data.chunks_exact(channels) {
            match self.layout {
                ChannelLayout::Gray => bytes.extend_from_slice(&[px[0], px[0], px[0], 255]),
                ChannelLayout::GrayAlpha => {
                    bytes.extend_from_slice(&[px[0], px[0], px[0], px[1]])
                }
                ChannelLayout::Rgb => bytes.extend_from_slice(&[px[0], px[1], px[2], 255]),
                ChannelLayout::Rgba => bytes.extend_from_slice(px),
            }
        }
        bytes
    }
}
