//! Classification rules for candidate sample files
//!
//! These are heuristics. A file can look like data and still be irrelevant,
//! and the other way round; the rules only need to be predictable.

use std::path::Path;

use crate::analysis::Classification;

/// Files at or above this size are never sniffed
pub const SNIFF_SIZE_LIMIT: u64 = 1024 * 1024;

/// Text longer than this many characters counts as a resource
pub const MIN_TEXT_LENGTH: usize = 100;

pub const DATA_EXTENSIONS: &[&str] = &["json", "yaml", "yml", "xml", "csv", "txt", "md", "log"];
pub const CODE_EXTENSIONS: &[&str] = &["js", "ts", "py", "java", "go", "rs", "cpp", "c"];
pub const CONFIG_EXTENSIONS: &[&str] = &["config", "conf", "ini", "env"];

/// Lower-cased extension of `path`. Dotfiles such as `.env` have none.
pub fn extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn has_extension_in(path: &Path, set: &[&str]) -> bool {
    extension(path).is_some_and(|ext| set.contains(&ext.as_str()))
}

pub fn is_data_extension(path: &Path) -> bool {
    has_extension_in(path, DATA_EXTENSIONS)
}

/// Data extension, or a file name mentioning data or content
pub fn is_data_file(path: &Path) -> bool {
    let name = file_name(path);
    is_data_extension(path) || name.contains("data") || name.contains("content")
}

pub fn is_code_file(path: &Path) -> bool {
    has_extension_in(path, CODE_EXTENSIONS)
}

/// Config extension, or a file name mentioning config
pub fn is_config_file(path: &Path) -> bool {
    has_extension_in(path, CONFIG_EXTENSIONS) || file_name(path).contains("config")
}

/// Classify a directory by the extensions of its immediate children
pub fn classify_directory<P: AsRef<Path>>(children: &[P]) -> Classification {
    if children.iter().any(|c| is_data_extension(c.as_ref())) {
        Classification::DataDirectory
    } else {
        Classification::PlainDirectory
    }
}

/// Classify raw file content
pub fn sniff(bytes: &[u8]) -> Classification {
    let Ok(text) = std::str::from_utf8(bytes) else {
        return Classification::Binary;
    };

    let trimmed = text.trim_start_matches('\u{feff}').trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        Classification::JsonLike
    } else if text.contains("---") && (text.contains(':') || text.contains('-')) {
        Classification::YamlLike
    } else if text.chars().count() > MIN_TEXT_LENGTH {
        Classification::TextContent
    } else {
        Classification::ShortText
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_lowercased() {
        assert_eq!(extension(Path::new("REPORT.CSV")).as_deref(), Some("csv"));
        assert_eq!(extension(Path::new(".env")), None);
        assert_eq!(extension(Path::new("Makefile")), None);
    }

    #[test]
    fn test_data_file_rule() {
        assert!(is_data_file(Path::new("data.json")));
        assert!(is_data_file(Path::new("notes.MD")));
        assert!(is_data_file(Path::new("raw_data.bin")));
        assert!(is_data_file(Path::new("content_dump")));
        assert!(!is_data_file(Path::new("main.py")));
    }

    #[test]
    fn test_code_and_config_rules() {
        assert!(is_code_file(Path::new("src/lib.rs")));
        assert!(is_code_file(Path::new("index.ts")));
        assert!(!is_code_file(Path::new("index.tsx")));

        assert!(is_config_file(Path::new("app.ini")));
        assert!(is_config_file(Path::new("production.env")));
        assert!(is_config_file(Path::new("webpack.config.js")));
        assert!(!is_config_file(Path::new(".env")));
    }

    #[test]
    fn test_classify_directory() {
        assert_eq!(
            classify_directory(&["a.py", "b.csv"]),
            Classification::DataDirectory
        );
        assert_eq!(
            classify_directory(&["a.py", "b.rs"]),
            Classification::PlainDirectory
        );
        let empty: [&str; 0] = [];
        assert_eq!(classify_directory(&empty), Classification::PlainDirectory);
    }

    #[test]
    fn test_sniff_content() {
        assert_eq!(sniff(b"  {\"a\": 1}"), Classification::JsonLike);
        assert_eq!(sniff(b"\n[1, 2, 3]"), Classification::JsonLike);
        assert_eq!(sniff(b"---\ntitle: hello\n"), Classification::YamlLike);
        assert_eq!(sniff("x".repeat(101).as_bytes()), Classification::TextContent);
        assert_eq!(sniff("x".repeat(100).as_bytes()), Classification::ShortText);
        assert_eq!(sniff(b"hello"), Classification::ShortText);
        assert_eq!(sniff(&[0xff, 0xfe, 0x00, 0x9f]), Classification::Binary);
    }
}
