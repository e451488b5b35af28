//! Single-frame webcam capture.
//!
//! Real capture needs the `camera` cargo feature (backed by `nokhwa`). Without
//! it [`capture_frame`] always fails with a message the UI shows inline, so the
//! grayscale converter still builds on machines without camera libraries.

use anyhow::Result;
use image::DynamicImage;

/// Whether this build can talk to a camera at all.
pub const fn is_available() -> bool {
    cfg!(feature = "camera")
}

/// Grab one RGB frame from camera number `index` (0 is the system default).
#[cfg(feature = "camera")]
pub fn capture_frame(index: u32) -> Result<DynamicImage> {
    use anyhow::Context;
    use nokhwa::Camera;
    use nokhwa::pixel_format::RgbFormat;
    use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};

    let requested =
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);
    let mut camera = Camera::new(CameraIndex::Index(index), requested)
        .with_context(|| format!("opening camera {index}"))?;
    camera.open_stream().context("starting camera stream")?;

    let frame = camera.frame().context("reading camera frame")?;
    let decoded = frame
        .decode_image::<RgbFormat>()
        .context("decoding camera frame")?;
    if let Err(e) = camera.stop_stream() {
        log::warn!("Failed to stop camera {index} stream: {e}");
    }

    // Rebuild through raw bytes so the frame does not depend on nokhwa's `image` version.
    let (width, height) = (decoded.width(), decoded.height());
    let rgb = image::RgbImage::from_raw(width, height, decoded.into_raw())
        .context("camera frame has an unexpected buffer size")?;

    log::info!("Captured {width}x{height} frame from camera {index}");
    Ok(DynamicImage::ImageRgb8(rgb))
}

#[cfg(not(feature = "camera"))]
pub fn capture_frame(index: u32) -> Result<DynamicImage> {
    log::warn!("Camera {index} requested but camera support is not compiled in");
    anyhow::bail!(
        "Camera support is not enabled in this build (rebuild with `--features camera`)"
    )
}
