//! Immutable raster snapshots of composed frames.

use std::fmt;
use thiserror::Error;

/// Errors raised while composing a frame with Cairo.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface pixel data unavailable: {0}")]
    SurfaceData(#[from] cairo::BorrowError),
}

/// Owned copy of a composed ARGB32 frame.
///
/// Pixels are premultiplied, native-endian 32-bit ARGB values laid out row by
/// row with `stride` bytes per row (the Cairo `Format::ARgb32` layout). The
/// snapshot owns its bytes and is `Send`, so it can be handed to a worker
/// thread while the surface keeps receiving input.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameSnapshot {
    width: i32,
    height: i32,
    stride: i32,
    data: Vec<u8>,
}

impl FrameSnapshot {
    /// Copies the pixels out of a Cairo image surface.
    ///
    /// The surface must not be referenced by any live `cairo::Context`.
    pub fn from_surface(mut surface: cairo::ImageSurface) -> Result<Self, RenderError> {
        surface.flush();
        let width = surface.width();
        let height = surface.height();
        let stride = surface.stride();
        let data = surface.data()?.to_vec();
        Ok(Self {
            width,
            height,
            stride,
            data,
        })
    }

    /// Rebuilds a Cairo image surface that takes ownership of the pixel data.
    pub fn into_surface(self) -> Result<cairo::ImageSurface, cairo::Error> {
        cairo::ImageSurface::create_for_data(
            self.data,
            cairo::Format::ARgb32,
            self.width,
            self.height,
            self.stride,
        )
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn stride(&self) -> i32 {
        self.stride
    }

    /// Raw premultiplied ARGB32 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the premultiplied ARGB value at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize) * (self.stride as usize) + (x as usize) * 4;
        let bytes = self.data.get(offset..offset + 4)?;
        Some(u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// True when every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|byte| *byte == 0)
    }
}

impl fmt::Debug for FrameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameSnapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .field("bytes", &self.data.len())
            .finish()
    }
}
