//! One exercise file, classified by its path.
//!
//! Layout (last three path components):
//!   <topic> / <level_prefix><N> / <exercise_prefix><slug>[<solved_suffix>].<ext>
//!
//! e.g. `03_loops/level_4/ex_prime-solved.cpp`
//!   topic = 03_loops, level = 4, slug = prime, variant = Solved, language = C++

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;
use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Solved,
    Unsolved,
}

/// Identity shared by the solved and unsolved files of one exercise.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ExerciseKey {
    pub topic: String,
    pub level: u32,
    pub slug: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseFile {
    pub key: ExerciseKey,
    pub variant: Variant,
    pub path: PathBuf,
}

impl ExerciseFile {
    pub fn parse(path: &Path, config: &CatalogConfig) -> Result<Self, CatalogError> {
        let shown = path.display().to_string();
        let parts = trailing_components(path, 3)?;
        let &[topic, level_dir, file] = parts.as_slice() else {
            return Err(CatalogError::Layout { path: shown, depth: parts.len() });
        };

        let level = level_dir
            .strip_prefix(config.level_prefix.as_str())
            .and_then(|n| n.parse::<u32>().ok())
            .ok_or_else(|| CatalogError::Level {
                path: shown.clone(),
                dir: level_dir.to_string(),
                prefix: config.level_prefix.clone(),
            })?;

        let (stem, extension) = file.rsplit_once('.').unwrap_or((file, ""));
        let language = config
            .language_for(extension)
            .ok_or_else(|| CatalogError::Language {
                path: shown.clone(),
                extension: extension.to_string(),
            })?
            .to_string();

        let name = stem
            .strip_prefix(config.exercise_prefix.as_str())
            .ok_or_else(|| CatalogError::Prefix {
                path: shown.clone(),
                prefix: config.exercise_prefix.clone(),
            })?;
        let (slug, variant) = match name.strip_suffix(config.solved_suffix.as_str()) {
            Some(slug) => (slug, Variant::Solved),
            None => (name, Variant::Unsolved),
        };
        if slug.is_empty() {
            return Err(CatalogError::EmptySlug { path: shown });
        }

        Ok(Self {
            key: ExerciseKey {
                topic: topic.to_string(),
                level,
                slug: slug.to_string(),
                language,
            },
            variant,
            path: path.to_path_buf(),
        })
    }
}

/// The last `count` normal components of `path` as UTF-8, or fewer when the
/// path is shorter. A non-UTF-8 component inside that window is an error.
pub(crate) fn trailing_components(path: &Path, count: usize) -> Result<Vec<&str>, CatalogError> {
    let normal: Vec<_> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s),
            _ => None,
        })
        .collect();
    normal[normal.len().saturating_sub(count)..]
        .iter()
        .map(|s| {
            s.to_str()
                .ok_or_else(|| CatalogError::NonUtf8 { path: path.display().to_string() })
        })
        .collect()
}
