use std::path::{Path, PathBuf};

/// Extensions the dominant color extractor will try to decode.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "gif"];

/// Check the extension only; the file is not opened.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| {
            let ext = e.to_lowercase();
            IMAGE_EXTENSIONS.iter().any(|&supported| supported == ext)
        })
}

/// Expand a leading `~` or `~/` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Platform data directory for outfitmatch, falling back to the working directory.
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "mrmattias", "outfitmatch")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("shirt.PNG")));
        assert!(is_image_file(Path::new("photos/jacket.jpeg")));
        assert!(!is_image_file(Path::new("wardrobe.json")));
        assert!(!is_image_file(Path::new("no_extension")));
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/tmp/w.json"), PathBuf::from("/tmp/w.json"));
        assert_eq!(expand_tilde("a/~/b"), PathBuf::from("a/~/b"));
    }

    #[test]
    fn test_expand_tilde_uses_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/w.json"), home.join("w.json"));
            assert_eq!(expand_tilde("~"), home);
        }
    }
}
