//! Usage: Tray icon provisioning (load from disk, create a default when missing).

use crate::app_paths;
use crate::shared::fs as shared_fs;

const ICON_FILE: &str = "icon.png";
const ICON_SIZE: u32 = 64;
const ICON_INSET: u32 = 10;
const ICON_BACKGROUND: image::Rgba<u8> = image::Rgba([30, 144, 255, 255]);
const ICON_FOREGROUND: image::Rgba<u8> = image::Rgba([255, 255, 255, 255]);

/// Loads `icon.png` from the data directory, synthesizing and persisting a
/// default one first when it is missing. Any failure here is critical for a
/// tray-resident app; the caller decides how to surface it.
pub(crate) fn load_or_create(app: &tauri::AppHandle) -> Result<tauri::image::Image<'static>, String> {
    let path = app_paths::app_data_dir(app)?.join(ICON_FILE);

    if !path.exists() {
        tracing::info!(path = %path.display(), "tray icon missing; writing default");
        shared_fs::write_file_atomic(&path, &default_icon_png()?)?;
    }

    let bytes = std::fs::read(&path)
        .map_err(|e| format!("failed to read tray icon {}: {e}", path.display()))?;

    tauri::image::Image::from_bytes(&bytes)
        .map_err(|e| format!("failed to decode tray icon {}: {e}", path.display()))
}

fn default_icon_png() -> Result<Vec<u8>, String> {
    let mut img = image::RgbaImage::from_pixel(ICON_SIZE, ICON_SIZE, ICON_BACKGROUND);
    for y in ICON_INSET..ICON_SIZE - ICON_INSET {
        for x in ICON_INSET..ICON_SIZE - ICON_INSET {
            img.put_pixel(x, y, ICON_FOREGROUND);
        }
    }

    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageOutputFormat::Png,
        )
        .map_err(|e| format!("failed to encode default tray icon: {e}"))?;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_icon_is_a_decodable_png_of_expected_size() {
        let bytes = default_icon_png().expect("encode default icon");
        let decoded = image::load_from_memory(&bytes).expect("decode png");
        assert_eq!(decoded.width(), ICON_SIZE);
        assert_eq!(decoded.height(), ICON_SIZE);
    }
}
