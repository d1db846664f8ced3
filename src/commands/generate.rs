use std::path::Path;

use boxtag_core::{IconError, IconStyle, render_icon, write_icon_set};

/// Render the icon and write the full-size PNG plus every down-sampled copy.
pub fn run(size: u32, margin: u32, corner_radius: u32, out_dir: &Path) -> Result<(), IconError> {
    let style = IconStyle {
        margin,
        corner_radius,
        ..IconStyle::default()
    };

    println!("Rendering {}x{} icon...", size, size);
    let image = render_icon(size, &style)?;

    let written = write_icon_set(&image, out_dir)?;
    for path in &written {
        println!("Created {}", path.display());
    }

    println!("Icon generation complete ({} files)", written.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_all_pngs() {
        let out = tempdir().unwrap();

        run(1024, 100, 180, out.path()).unwrap();

        assert!(out.path().join("icon.png").exists());
        for size in boxtag_core::PNG_SIZES {
            assert!(out.path().join(format!("icon_{}x{}.png", size, size)).exists());
        }
    }

    #[test]
    fn small_canvas_skips_larger_copies() {
        let out = tempdir().unwrap();

        run(300, 100, 180, out.path()).unwrap();

        assert_eq!(image::image_dimensions(out.path().join("icon.png")).unwrap(), (300, 300));
        assert!(out.path().join("icon_256x256.png").exists());
        assert!(!out.path().join("icon_512x512.png").exists());
    }

    #[test]
    fn too_small_canvas_fails_without_writing() {
        let out = tempdir().unwrap();

        let result = run(100, 100, 180, out.path());

        assert!(matches!(result, Err(IconError::InvalidCanvas { .. })));
        assert!(!out.path().join("icon.png").exists());
    }
}
