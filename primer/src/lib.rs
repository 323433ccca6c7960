//! # Primer
//!
//! Typed building blocks for a graded collection of introductory
//! programming exercises.
//!
//! ## Modules
//!
//! - `numerical` – GCD, primality, sieve, Fibonacci, factorial, digit loops
//! - `searching` – Linear and binary search
//! - `extrema` – Min/max scans
//! - `sorting` – Bubble sort
//! - `control_flow` – Loop/branch primitives and the exercise kernels built on them
//! - `records` – The `Person` record
//! - `file_io` – Line-oriented text files
//! - `catalog` – Pairs solved and unsolved exercise files
//! - `config` – JSON configuration
//! - `error` – Error enums
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use primer::numerical::gcd::gcd;
//! use primer::searching::binary_search::binary_search;
//!
//! assert_eq!(gcd(48, 18), 6);
//! assert_eq!(binary_search(&[1, 2, 3, 5, 7, 9, 11, 13], &7), Some(4));
//! ```

pub mod catalog;
pub mod computation_map;
pub mod config;
pub mod control_flow;
pub mod error;
pub mod extrema;
pub mod file_io;
pub mod numerical;
pub mod records;
pub mod searching;
pub mod sorting;

pub use catalog::Catalog;
pub use config::{CatalogConfig, PrimerConfig};
pub use error::PrimerError;
