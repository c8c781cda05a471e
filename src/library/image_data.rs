/// Decoded RGBA image, ready for texture upload on the UI side.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Longest edge of a decoded cover; larger sources are downscaled.
const THUMB_MAX_EDGE: u32 = 512;

impl ImageData {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba,
        }
    }

    /// Decode raw file bytes into a bounded-size thumbnail.
    pub fn decode_thumbnail(bytes: &[u8]) -> Result<Self, String> {
        let img = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
        let img = if img.width() > THUMB_MAX_EDGE || img.height() > THUMB_MAX_EDGE {
            img.thumbnail(THUMB_MAX_EDGE, THUMB_MAX_EDGE)
        } else {
            img
        };
        let rgba = img.to_rgba8();
        let (w, h) = rgba.dimensions();
        Ok(Self::new(w, h, rgba.into_vec()))
    }
}
