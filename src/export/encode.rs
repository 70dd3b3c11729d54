//! PNG encoding of frame snapshots.

use super::types::EncodingError;
use crate::draw::{Color, FrameSnapshot, fill_background};

/// Flattens a frame over an optional background color and encodes it as PNG.
///
/// Takes the snapshot by value: once handed over, the encoder is its only owner.
pub fn encode_png(frame: FrameSnapshot, background: Option<Color>) -> Result<Vec<u8>, EncodingError> {
    let target =
        cairo::ImageSurface::create(cairo::Format::ARgb32, frame.width(), frame.height())?;
    {
        let ctx = cairo::Context::new(&target)?;
        if let Some(color) = background {
            fill_background(&ctx, color)?;
        }
        let source = frame.into_surface()?;
        ctx.set_source_surface(&source, 0.0, 0.0)?;
        ctx.paint()?;
    }

    let mut buffer = Vec::new();
    target.write_to_png(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::WHITE;
    use crate::input::DrawingSurface;

    const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    fn decode(png: &[u8]) -> FrameSnapshot {
        let mut reader = std::io::Cursor::new(png);
        let surface = cairo::ImageSurface::create_from_png(&mut reader).unwrap();
        FrameSnapshot::from_surface(surface).unwrap()
    }

    #[test]
    fn encodes_blank_frame_at_surface_size() {
        let surface = DrawingSurface::new(40, 30, 1.0).unwrap();
        let png = encode_png(surface.compose_frame().unwrap(), None).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);

        let decoded = decode(&png);
        assert_eq!((decoded.width(), decoded.height()), (40, 30));
        assert!(decoded.is_blank());
    }

    #[test]
    fn background_sits_beneath_strokes() {
        let mut surface = DrawingSurface::new(50, 50, 1.0).unwrap();
        surface.set_brush_thickness(10.0);
        surface.set_color("#FF0000").unwrap();
        surface.on_pointer_down(5.0, 25.0);
        surface.on_pointer_move(45.0, 25.0);
        surface.on_pointer_up();

        let png = encode_png(surface.compose_frame().unwrap(), Some(WHITE)).unwrap();
        let decoded = decode(&png);
        assert_eq!(decoded.pixel(25, 25), Some(0xFFFF_0000));
        assert_eq!(decoded.pixel(25, 2), Some(0xFFFF_FFFF));
    }
}
