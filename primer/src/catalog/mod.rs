//! Exercise catalog: pairs the solved and unsolved files of each exercise
//! and registers the snippet templates of each language.
//!
//! The catalog only classifies paths. It never reads, fills or grades the
//! exercises themselves.

pub mod exercise;
pub mod template;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::CatalogConfig;
use crate::error::CatalogError;

pub use exercise::{ExerciseFile, ExerciseKey, Variant};
pub use template::{TemplateCategory, TemplateFile, TemplateKey};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseEntry {
    #[serde(flatten)]
    pub key: ExerciseKey,
    pub solved: Option<PathBuf>,
    pub unsolved: Option<PathBuf>,
}

impl ExerciseEntry {
    fn new(key: ExerciseKey) -> Self {
        Self { key, solved: None, unsolved: None }
    }

    /// Both the solved and the unsolved file are present.
    pub fn is_complete(&self) -> bool {
        self.solved.is_some() && self.unsolved.is_some()
    }

    fn slot(&mut self, variant: Variant) -> &mut Option<PathBuf> {
        match variant {
            Variant::Solved => &mut self.solved,
            Variant::Unsolved => &mut self.unsolved,
        }
    }
}

/// Entries ordered by (topic, level, slug, language); templates by
/// (language, category, id), with uncategorised templates first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    entries: Vec<ExerciseEntry>,
    templates: Vec<TemplateFile>,
    skipped: Vec<PathBuf>,
}

impl Catalog {
    /// Walk `root` and catalog every file, storing paths relative to `root`.
    pub fn scan(root: &Path, config: &CatalogConfig) -> Result<Self, CatalogError> {
        if !root.is_dir() {
            return Err(CatalogError::Root { root: root.display().to_string() });
        }
        let relative = |p: &Path| p.strip_prefix(root).unwrap_or(p).to_path_buf();
        let mut files = Vec::new();
        let mut unreadable = Vec::new();
        let walker = WalkDir::new(root).follow_links(true).sort_by_file_name();
        for entry_result in walker {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(%err, "unreadable entry in exercise tree");
                    if let Some(path) = err.path() {
                        unreadable.push(relative(path));
                    }
                    continue;
                }
            };
            if entry.file_type().is_file() {
                files.push(relative(entry.path()));
            }
        }

        let mut catalog = Self::from_paths(files, config);
        catalog.skipped.extend(unreadable);
        debug!(
            root = %root.display(),
            entries = catalog.entries.len(),
            templates = catalog.templates.len(),
            skipped = catalog.skipped.len(),
            "scanned exercise tree"
        );
        Ok(catalog)
    }

    pub fn from_paths<I, P>(paths: I, config: &CatalogConfig) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut grouped: BTreeMap<ExerciseKey, ExerciseEntry> = BTreeMap::new();
        let mut templates: BTreeMap<TemplateKey, TemplateFile> = BTreeMap::new();
        let mut skipped = Vec::new();

        for path in paths {
            let path = path.as_ref();
            if TemplateFile::is_template_path(path, config) {
                match TemplateFile::parse(path, config) {
                    Ok(template) => {
                        if let Some(existing) = templates.get(&template.key) {
                            warn!(
                                kept = %existing.path.display(),
                                dropped = %template.path.display(),
                                "duplicate template"
                            );
                            skipped.push(template.path);
                        } else {
                            templates.insert(template.key.clone(), template);
                        }
                    }
                    Err(err) => {
                        warn!(%err, "skipping file in templates directory");
                        skipped.push(path.to_path_buf());
                    }
                }
                continue;
            }

            let file = match ExerciseFile::parse(path, config) {
                Ok(file) => file,
                Err(err @ CatalogError::Language { .. }) => {
                    debug!(%err, "ignoring file");
                    skipped.push(path.to_path_buf());
                    continue;
                }
                Err(err) => {
                    warn!(%err, "skipping file outside the exercise layout");
                    skipped.push(path.to_path_buf());
                    continue;
                }
            };

            let entry = grouped
                .entry(file.key.clone())
                .or_insert_with(|| ExerciseEntry::new(file.key.clone()));
            let slot = entry.slot(file.variant);
            if let Some(existing) = slot.as_ref() {
                warn!(
                    kept = %existing.display(),
                    dropped = %file.path.display(),
                    "duplicate exercise file"
                );
                skipped.push(file.path);
                continue;
            }
            *slot = Some(file.path);
        }

        let mut templates: Vec<TemplateFile> = templates.into_values().collect();
        templates.sort_by(|a, b| {
            let rank = |t: &TemplateFile| {
                (t.key.language.clone(), t.category.clone(), t.key.id.clone())
            };
            rank(a).cmp(&rank(b))
        });
        Self { entries: grouped.into_values().collect(), templates, skipped }
    }

    pub fn entries(&self) -> &[ExerciseEntry] {
        &self.entries
    }

    pub fn templates(&self) -> &[TemplateFile] {
        &self.templates
    }

    /// Templates of one language, grouped by category, as a picker lists them.
    pub fn templates_for<'a>(
        &'a self,
        language: &'a str,
    ) -> impl Iterator<Item = &'a TemplateFile> + 'a {
        self.templates.iter().filter(move |t| t.key.language == language)
    }

    pub fn template(&self, language: &str, id: &str) -> Option<&TemplateFile> {
        self.templates.iter().find(|t| t.key.language == language && t.key.id == id)
    }

    /// Paths that did not match the layout, duplicated an earlier file, or
    /// could not be read while walking.
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn by_topic<'a>(
        &'a self,
        topic: &'a str,
    ) -> impl Iterator<Item = &'a ExerciseEntry> + 'a {
        self.entries.iter().filter(move |e| e.key.topic == topic)
    }

    /// Entries missing either their solved or their unsolved file.
    pub fn incomplete(&self) -> impl Iterator<Item = &ExerciseEntry> {
        self.entries.iter().filter(|e| !e.is_complete())
    }

    pub fn topics(&self) -> Vec<&str> {
        let mut topics: Vec<&str> =
            self.entries.iter().map(|e| e.key.topic.as_str()).collect();
        topics.dedup();
        topics
    }

    /// Distinct levels present under `topic`, ascending.
    pub fn levels(&self, topic: &str) -> Vec<u32> {
        let mut levels: Vec<u32> = self.by_topic(topic).map(|e| e.key.level).collect();
        levels.dedup();
        levels
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
