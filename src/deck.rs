//! Loading a slide deck from a directory.
//!
//! A deck directory either carries a `deck.toml` manifest listing its slides,
//! or is a plain folder of images shown in file name order. In the latter
//! case the theme of each slide comes from its file name: `03-ember.jpg` is
//! themed `ember`.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::constants::{DEFAULT_THEME, MANIFEST_FILE};
use crate::error::DeckError;
use crate::navigator::NavigatorConfig;
use crate::slide::Slide;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    debounce_ms: Option<u64>,
    #[serde(default, rename = "slide")]
    slides: Vec<ManifestSlide>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestSlide {
    theme: String,
    title: Option<String>,
    image: Option<PathBuf>,
}

#[derive(Debug)]
pub struct Deck {
    slides: Vec<Slide>,
    debounce_ms: Option<u64>,
}

impl Deck {
    pub fn load(dir: &Path) -> Result<Deck, DeckError> {
        let manifest_path = dir.join(MANIFEST_FILE);
        let deck = if manifest_path.is_file() {
            debug!(path = ?manifest_path, "loading deck manifest");
            Self::from_manifest(dir, &manifest_path)?
        } else {
            let slides = load_sorted_image_paths(dir)?
                .into_iter()
                .map(|path| Slide::new(theme_from_path(&path)).with_image(path))
                .collect();
            Deck { slides, debounce_ms: None }
        };

        if deck.slides.is_empty() {
            return Err(DeckError::NoSlides(dir.to_path_buf()));
        }
        Ok(deck)
    }

    fn from_manifest(dir: &Path, manifest_path: &Path) -> Result<Deck, DeckError> {
        let text = fs::read_to_string(manifest_path).map_err(|source| DeckError::Io {
            path: manifest_path.to_path_buf(),
            source,
        })?;
        let manifest: Manifest = toml::from_str(&text).map_err(|source| DeckError::Manifest {
            path: manifest_path.to_path_buf(),
            source,
        })?;

        let mut slides = Vec::with_capacity(manifest.slides.len());
        for (index, entry) in manifest.slides.into_iter().enumerate() {
            let mut slide = Slide::new(entry.theme);
            if let Some(title) = entry.title {
                slide = slide.with_title(title);
            }
            if let Some(image) = entry.image {
                let path = dir.join(image);
                if !path.is_file() {
                    return Err(DeckError::MissingImage { index, path });
                }
                slide = slide.with_image(path);
            }
            slides.push(slide);
        }

        Ok(Deck {
            slides,
            debounce_ms: manifest.debounce_ms,
        })
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn into_slides(self) -> Vec<Slide> {
        self.slides
    }

    pub fn debounce_ms(&self) -> Option<u64> {
        self.debounce_ms
    }

    /// Command line value first, then the manifest, then the default lock.
    pub fn navigator_config(&self, override_ms: Option<u64>) -> NavigatorConfig {
        match override_ms.or(self.debounce_ms) {
            Some(ms) => NavigatorConfig::from_millis(ms),
            None => NavigatorConfig::default(),
        }
    }
}

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>, DeckError> {
    let io_err = |source: std::io::Error| DeckError::Io { path: dir.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

const ORDINAL_SEPARATORS: [char; 4] = ['-', '_', '.', ' '];

/// `03-ember.jpg` -> `ember`, `intro.png` -> `intro`, `07.jpg` -> `default`.
/// Digits only count as an ordinal when a separator or the end of the name follows.
pub fn theme_from_path(path: &Path) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let rest = stem.trim_start_matches(|c: char| c.is_ascii_digit());
    let theme = if rest.len() == stem.len() {
        stem
    } else if rest.is_empty() {
        rest
    } else if rest.starts_with(ORDINAL_SEPARATORS) {
        rest.trim_start_matches(ORDINAL_SEPARATORS)
    } else {
        stem
    };
    if theme.is_empty() {
        DEFAULT_THEME.to_string()
    } else {
        theme.to_string()
    }
}

/// EXIF orientation of an already loaded JPEG file; 1 (no rotation) for
/// anything else. `path` only selects the container and names the file in logs.
pub fn read_orientation(path: &Path, bytes: &[u8]) -> u16 {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    if extension != "jpg" && extension != "jpeg" {
        return 1;
    }

    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
            Some(Value::Short(values)) if !values.is_empty() => values[0],
            _ => 1,
        },
        Err(e) => {
            // Non-critical: proceed without rotation
            warn!(?path, error = %e, "could not read EXIF data");
            1
        }
    }
}
