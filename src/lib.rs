//! Library crate for library-catalog.
//!
//! This crate exposes the building blocks of the interactive catalog:
//! - Items, the catalog and operation outcomes (`catalog`)
//! - Session state, menu and run loop (`app`)
//! - Text rendering of menus, listings and prompts (`ui`)
//! - Command-line arguments (`cli`) and logging setup (`logger`)
//!
//! It is used by the `library-catalog` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod app;
pub mod catalog;
pub mod cli;
pub mod logger;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
pub use catalog::{Catalog, Item, Outcome};
