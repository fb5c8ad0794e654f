//! Caption font lookup.
//!
//! Which font to use is policy: an explicit name (from `CAPTION_FONT` or the
//! config file) is used alone, otherwise [`DEFAULT_FONTS`] are tried in
//! order. Names that are not existing paths are searched for in the
//! platform font directories.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ConfigError;
use crate::imaging::CaptionFont;

/// Tried in order when no font is requested.
pub const DEFAULT_FONTS: &[&str] = &[
    "arial.ttf",
    "DejaVuSans.ttf",
    "LiberationSans-Regular.ttf",
    "FreeSans.ttf",
];

/// Maps a font name to a font file.
pub trait FontResolver {
    fn resolve(&self, name: &str) -> Result<PathBuf, ConfigError>;
}

/// Resolves names against the filesystem and a list of font directories.
#[derive(Debug, Clone)]
pub struct SystemFontResolver {
    search_dirs: Vec<PathBuf>,
}

impl SystemFontResolver {
    /// Search the platform's usual font directories.
    pub fn new() -> Self {
        Self::with_dirs(platform_font_dirs())
    }

    pub fn with_dirs(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }
}

impl Default for SystemFontResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl FontResolver for SystemFontResolver {
    fn resolve(&self, name: &str) -> Result<PathBuf, ConfigError> {
        let direct = Path::new(name);
        if direct.is_file() {
            return Ok(direct.to_path_buf());
        }

        let not_found = || ConfigError::FontNotFound {
            name: name.to_string(),
        };
        let file_name = direct
            .file_name()
            .and_then(|f| f.to_str())
            .ok_or_else(not_found)?;

        self.search_dirs
            .iter()
            .filter(|dir| dir.is_dir())
            .find_map(|dir| find_font_file(dir, file_name))
            .inspect(|path| tracing::debug!(name, path = %path.display(), "resolved caption font"))
            .ok_or_else(not_found)
    }
}

/// Case-insensitive recursive search for `file_name` under `dir`.
fn find_font_file(dir: &Path, file_name: &str) -> Option<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .find(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|f| f.eq_ignore_ascii_case(file_name))
        })
        .map(|entry| entry.into_path())
}

/// Font directories for the current platform, user directories first.
pub fn platform_font_dirs() -> Vec<PathBuf> {
    let mut dirs_out = Vec::new();
    if let Some(user_fonts) = dirs::font_dir() {
        dirs_out.push(user_fonts);
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(windir) = std::env::var_os("WINDIR") {
            dirs_out.push(PathBuf::from(windir).join("Fonts"));
        }
    }

    #[cfg(target_os = "macos")]
    {
        dirs_out.push(PathBuf::from("/Library/Fonts"));
        dirs_out.push(PathBuf::from("/System/Library/Fonts"));
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        if let Some(home) = dirs::home_dir() {
            dirs_out.push(home.join(".fonts"));
        }
        dirs_out.push(PathBuf::from("/usr/local/share/fonts"));
        dirs_out.push(PathBuf::from("/usr/share/fonts"));
    }

    dirs_out
}

/// Resolve and load the caption font.
///
/// With `requested` set only that name is tried; otherwise the first of
/// [`DEFAULT_FONTS`] that resolves is used.
pub fn load_caption_font(
    resolver: &impl FontResolver,
    requested: Option<&str>,
    size: f32,
) -> Result<CaptionFont, ConfigError> {
    let path = match requested {
        Some(name) => resolver.resolve(name)?,
        None => DEFAULT_FONTS
            .iter()
            .find_map(|name| resolver.resolve(name).ok())
            .ok_or_else(|| ConfigError::FontNotFound {
                name: DEFAULT_FONTS.join(", "),
            })?,
    };
    CaptionFont::load(&path, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn existing_path_is_used_directly() {
        let tmp = TempDir::new().unwrap();
        let font = tmp.path().join("custom.ttf");
        fs::write(&font, b"").unwrap();

        let resolver = SystemFontResolver::with_dirs(Vec::new());
        assert_eq!(resolver.resolve(font.to_str().unwrap()).unwrap(), font);
    }

    #[test]
    fn name_found_in_nested_search_dir() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("truetype/dejavu");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("DejaVuSans.ttf"), b"").unwrap();

        let resolver = SystemFontResolver::with_dirs(vec![tmp.path().to_path_buf()]);
        let found = resolver.resolve("dejavusans.TTF").unwrap();
        assert_eq!(found, nested.join("DejaVuSans.ttf"));
    }

    #[test]
    fn earlier_search_dir_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(first.path().join("arial.ttf"), b"").unwrap();
        fs::write(second.path().join("arial.ttf"), b"").unwrap();

        let resolver = SystemFontResolver::with_dirs(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        assert!(resolver.resolve("arial.ttf").unwrap().starts_with(first.path()));
    }

    #[test]
    fn missing_name_is_font_not_found() {
        let tmp = TempDir::new().unwrap();
        let resolver = SystemFontResolver::with_dirs(vec![
            tmp.path().to_path_buf(),
            tmp.path().join("does-not-exist"),
        ]);
        assert!(matches!(
            resolver.resolve("arial.ttf"),
            Err(ConfigError::FontNotFound { name }) if name == "arial.ttf"
        ));
    }

    #[test]
    fn requested_font_is_not_replaced_by_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("arial.ttf"), b"").unwrap();
        let resolver = SystemFontResolver::with_dirs(vec![tmp.path().to_path_buf()]);

        let result = load_caption_font(&resolver, Some("missing.ttf"), 14.0);
        assert!(matches!(
            result,
            Err(ConfigError::FontNotFound { name }) if name == "missing.ttf"
        ));
    }

    #[test]
    fn no_defaults_available_lists_them() {
        let resolver = SystemFontResolver::with_dirs(Vec::new());
        match load_caption_font(&resolver, None, 14.0) {
            Err(ConfigError::FontNotFound { name }) => assert!(name.contains("DejaVuSans.ttf")),
            other => panic!("expected FontNotFound, got {other:?}"),
        }
    }

    #[test]
    fn resolved_but_unparsable_font_is_invalid() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("DejaVuSans.ttf"), b"garbage").unwrap();
        let resolver = SystemFontResolver::with_dirs(vec![tmp.path().to_path_buf()]);

        let result = load_caption_font(&resolver, None, 14.0);
        assert!(matches!(result, Err(ConfigError::InvalidFont { .. })));
    }

    #[test]
    fn platform_dirs_are_absolute() {
        for dir in platform_font_dirs() {
            assert!(dir.is_absolute(), "{} is relative", dir.display());
        }
    }
}
