//! Frame acquisition and encoding

use crate::error::VisionError;
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

/// Capability seam over the camera: a live source of RGB frames.
///
/// Exclusively owned by the active session; started on activation,
/// released on return to idle.
#[async_trait]
pub trait FrameSource: Send + Sync {
    /// Begin producing frames. Permission failures surface here.
    async fn start(&self) -> Result<(), VisionError>;

    /// Release the underlying device.
    fn stop(&self);

    /// Current frame dimensions; (0, 0) until the source is ready.
    fn dimensions(&self) -> (u32, u32);

    /// Grab one frame.
    async fn capture(&self) -> Result<RgbImage, VisionError>;
}

/// Encode a frame as a JPEG data URI at the given lossy quality.
pub fn encode_jpeg_data_uri(frame: &RgbImage, quality: u8) -> Result<String, VisionError> {
    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    encoder.encode(
        frame.as_raw(),
        frame.width(),
        frame.height(),
        image::ColorType::Rgb8,
    )?;

    Ok(format!(
        "data:image/jpeg;base64,{}",
        general_purpose::STANDARD.encode(&buf)
    ))
}
