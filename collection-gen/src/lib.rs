//! # collection-gen
//!
//! Generator engine for Go collection helpers.
//!
//! A container author writes a generic type together with a
//! `FromIterator[T](iterator.Iterator[T])` constructor and an `Iter()` method.
//! This crate emits the rest: free functions such as `Find`, `Map`, `Fold`,
//! `Zip` and `Sum` that delegate to the shared iterator package.
//!
//! ## Quick Start
//!
//! ```rust
//! use collection_gen::{generate, GenerationParams};
//!
//! let params = GenerationParams::new("list", "*List");
//! let source = generate(&params, "Zip").unwrap();
//!
//! assert!(source.starts_with("// Code generated by gen-collection; DO NOT EDIT."));
//! assert!(source.contains("func Map[T, U any](xs *List[T], fn func(T) U) *List[U] {"));
//! assert!(!source.contains("func Zip"));
//! ```
//!
//! ## Pipeline
//!
//! | Step | Module | Function |
//! |------|--------|----------|
//! | Look up templates | [`catalogue`] | [`Catalogue::lookup`] |
//! | Apply exclusions | [`selection`] | [`resolve`] |
//! | Concatenate in name order | [`assembler`] | [`assemble`] |
//! | Bind parameters | [`template`] | [`parametrize`] |
//!
//! [`Generator`] runs all four steps. Output is byte-for-byte reproducible
//! for the same parameters and exclusions.

pub mod assembler;
pub mod catalogue;
pub mod error;
pub mod generator;
pub mod selection;
pub mod template;

pub use assembler::{assemble, Section, Template};
pub use catalogue::{Catalogue, Fragment};
pub use error::{GenerateError, GenerateResult};
pub use generator::{generate, GeneratedUnit, Generator};
pub use selection::{resolve, ExclusionSet, RetainedSet};
pub use template::{parametrize, GenerationParams, Param, DEFAULT_CONSTRAINT};
