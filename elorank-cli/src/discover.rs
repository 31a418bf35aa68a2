/// Item discovery: comparable files in a directory.
use std::io;
use std::path::Path;

use log::debug;

pub const DEFAULT_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn has_extension(name: &str, extensions: &[String]) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            extensions.iter().any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
        }
        _ => false,
    }
}

/// File names (not paths) in `dir` with one of `extensions`, sorted.
/// Subdirectories are not searched.
pub fn discover_items(dir: &Path, extensions: &[String]) -> io::Result<Vec<String>> {
    let mut items = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        // Non-UTF-8 names can't round-trip through the JSON state file.
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            debug!("Skipping non UTF-8 file name {:?}", entry.file_name());
            continue;
        };
        if has_extension(&name, extensions) {
            items.push(name);
        }
    }
    items.sort();
    debug!("Discovered {} items in {}", items.len(), dir.display());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn default_exts() -> Vec<String> {
        DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extension_matching_is_case_insensitive() {
        let exts = default_exts();
        assert!(has_extension("photo.JPG", &exts));
        assert!(has_extension("a.b.png", &exts));
        assert!(!has_extension("notes.txt", &exts));
        assert!(!has_extension("png", &exts));
        assert!(!has_extension(".png", &exts));
    }

    #[test]
    fn test_leading_dot_in_configured_extension() {
        assert!(has_extension("x.webp", &[".webp".to_string()]));
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = tempfile::TempDir::new().unwrap();
        for name in ["b.png", "a.JPEG", "readme.md", "c.gif"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("sub.png")).unwrap();

        let items = discover_items(dir.path(), &default_exts()).unwrap();
        assert_eq!(items, vec!["a.JPEG", "b.png", "c.gif"]);
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(discover_items(&dir.path().join("nope"), &default_exts()).is_err());
    }
}
