//! Error types shared across the crate.
//!
//! Each module owns a narrow enum; `PrimerError` folds them together for
//! callers that touch several modules at once.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error("{operation} overflows u64 at step {step}")]
    Overflow { operation: &'static str, step: u64 },
    #[error("{requested} terms requested, limit is {limit}")]
    LimitExceeded { requested: usize, limit: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExerciseError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("coefficient a is zero, the equation is not quadratic")]
    NotQuadratic,
    #[error("unknown operator `{0}`")]
    UnknownOperator(char),
    #[error("{name} is out of range: {value}")]
    InvalidMeasurement { name: &'static str, value: f64 },
}

#[derive(Debug, Error)]
pub enum FileError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config field `{field}` must not be empty")]
    Empty { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{path}: expected <topic>/<level>/<file>, found {depth} component(s)")]
    Layout { path: String, depth: usize },
    #[error("{path}: level directory `{dir}` is not of the form {prefix}<N>")]
    Level { path: String, dir: String, prefix: String },
    #[error("{path}: file name does not start with `{prefix}`")]
    Prefix { path: String, prefix: String },
    #[error("{path}: unsupported extension `{extension}`")]
    Language { path: String, extension: String },
    #[error("{path}: exercise slug is empty")]
    EmptySlug { path: String },
    #[error("{path}: path component is not valid UTF-8")]
    NonUtf8 { path: String },
    #[error("{path}: expected {dir}/[<category>/]<name>.<ext>")]
    TemplateLayout { path: String, dir: String },
    #[error("catalog root {root} is not a directory")]
    Root { root: String },
}

#[derive(Debug, Error)]
pub enum PrimerError {
    #[error(transparent)]
    Numeric(#[from] NumericError),
    #[error(transparent)]
    Exercise(#[from] ExerciseError),
    #[error(transparent)]
    File(#[from] FileError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
