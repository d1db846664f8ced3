use std::path::Path;

use boxtag_core::{IcoEntryInfo, IconError, read_ico_entries};

/// Print the dimensions and encoding of every entry in an ICO file.
pub fn run(file: &Path) -> Result<Vec<IcoEntryInfo>, IconError> {
    let entries = read_ico_entries(file)?;

    println!("{}: {} entries", file.display(), entries.len());
    for entry in &entries {
        let encoding = if entry.is_png { "png" } else { "bmp" };
        println!("  {}x{} {}", entry.width, entry.height, encoding);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn rejects_non_ico_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icon.ico");
        fs::write(&path, b"plain text").unwrap();

        assert!(matches!(run(&path), Err(IconError::IcoDecode { .. })));
    }

    #[test]
    fn lists_packed_icon() {
        let dir = tempdir().unwrap();
        crate::commands::generate::run(512, 100, 180, dir.path()).unwrap();
        let output = dir.path().join("icon.ico");
        crate::commands::ico::run(&dir.path().join("icon.png"), &output).unwrap();

        let entries = run(&output).unwrap();

        let sizes: Vec<(u32, u32)> = entries.iter().map(|e| (e.width, e.height)).collect();
        assert_eq!(
            sizes,
            [(16, 16), (32, 32), (48, 48), (64, 64), (128, 128), (256, 256)]
        );
        let largest = entries.iter().find(|e| e.width == 256).unwrap();
        assert!(largest.is_png);
    }
}
