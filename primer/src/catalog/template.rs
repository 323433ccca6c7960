//! Snippet templates, keyed by language and file stem.
//!
//! Layout: `.../<templates_dir>/[<NN_Category>/]<name>.<ext>`, e.g.
//! `cpp/templates/06_Algorithms/search-binary.cpp` or `python/templates/gcd.py`.

use std::cmp::Ordering;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;
use crate::error::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TemplateKey {
    pub language: String,
    pub id: String,
}

/// Grouping directory such as `06_Algorithms`: order 6, name "Algorithms".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateCategory {
    pub order: Option<u32>,
    pub name: String,
}

impl TemplateCategory {
    fn from_dir(dir: &str) -> Self {
        match dir.split_once('_') {
            Some((digits, rest)) if !rest.is_empty() => match digits.parse() {
                Ok(order) => Self { order: Some(order), name: rest.replace('_', " ") },
                Err(_) => Self { order: None, name: dir.replace('_', " ") },
            },
            _ => Self { order: None, name: dir.replace('_', " ") },
        }
    }
}

impl Ord for TemplateCategory {
    // Numbered categories first, in order; the rest by name.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.order, other.order) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.name.cmp(&other.name)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.name.cmp(&other.name),
        }
    }
}

impl PartialOrd for TemplateCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateFile {
    #[serde(flatten)]
    pub key: TemplateKey,
    /// `None` for templates placed directly in the templates directory.
    pub category: Option<TemplateCategory>,
    pub path: PathBuf,
}

impl TemplateFile {
    /// True when `path` has a component named `config.templates_dir`.
    pub fn is_template_path(path: &Path, config: &CatalogConfig) -> bool {
        path.components()
            .any(|c| matches!(c, Component::Normal(s) if s == config.templates_dir.as_str()))
    }

    pub fn parse(path: &Path, config: &CatalogConfig) -> Result<Self, CatalogError> {
        let shown = path.display().to_string();
        let layout = || CatalogError::TemplateLayout {
            path: shown.clone(),
            dir: config.templates_dir.clone(),
        };

        let normal: Vec<_> = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s),
                _ => None,
            })
            .collect();
        let anchor = normal
            .iter()
            .rposition(|s| *s == config.templates_dir.as_str())
            .ok_or_else(layout)?;
        let below = normal[anchor + 1..]
            .iter()
            .map(|s| s.to_str().ok_or_else(|| CatalogError::NonUtf8 { path: shown.clone() }))
            .collect::<Result<Vec<_>, _>>()?;

        let (category, file) = match below.as_slice() {
            &[file] => (None, file),
            &[dir, file] => (Some(TemplateCategory::from_dir(dir)), file),
            _ => return Err(layout()),
        };

        let (id, extension) = file.rsplit_once('.').ok_or_else(layout)?;
        if id.is_empty() {
            return Err(layout());
        }
        let language = config
            .language_for(extension)
            .ok_or_else(|| CatalogError::Language {
                path: shown.clone(),
                extension: extension.to_string(),
            })?
            .to_string();

        Ok(Self {
            key: TemplateKey { language, id: id.to_string() },
            category,
            path: path.to_path_buf(),
        })
    }
}
