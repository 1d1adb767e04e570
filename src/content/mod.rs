//! Static game content: localization strings and entity prototypes.
//!
//! Content lives on disk as `locale/<lang>/*.ftl` and `prototypes/*.json`
//! under a content root (see `assets/`). The English bundle and the built-in
//! prototypes are compiled in so a server can start without a content root.

pub mod locale;
pub mod prototypes;

use std::path::{Path, PathBuf};

pub use locale::Localization;
pub use prototypes::{EntityPrototype, PrototypeRegistry};

/// Errors raised while loading content from disk or strings.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid prototype json: {0}")]
    Json(#[from] serde_json::Error),

    /// A non-comment line in a locale file without a `key = value` shape.
    #[error("malformed locale line {line}: {text:?}")]
    MalformedLocale { line: usize, text: String },

    #[error("duplicate prototype id: {0}")]
    DuplicatePrototype(String),
}

pub(crate) const BUILTIN_LOCALE: &str = include_str!("../../assets/locale/en-US/pai.ftl");
pub(crate) const BUILTIN_PROTOTYPES: &str = include_str!("../../assets/prototypes/pai.json");

/// Load the locale files for `lang` and every prototype file under `root`.
///
/// Files are read in name order so later files override earlier locale keys
/// deterministically. A missing `prototypes/` directory is treated as empty.
pub fn load_dir(root: &Path, lang: &str) -> Result<(Localization, PrototypeRegistry), ContentError> {
    let mut localization = Localization::new();
    for path in sorted_files(&root.join("locale").join(lang), "ftl")? {
        localization.extend_from_ftl(&read(&path)?)?;
    }

    let mut registry = PrototypeRegistry::new();
    for path in sorted_files(&root.join("prototypes"), "json")? {
        registry.extend_from_json(&read(&path)?)?;
    }

    Ok((localization, registry))
}

fn read(path: &Path) -> Result<String, ContentError> {
    std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn sorted_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, ContentError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let entries = std::fs::read_dir(dir).map_err(|source| ContentError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ContentError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
