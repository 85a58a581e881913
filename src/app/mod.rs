//! Interactive session state and entry glue.
//!
//! A [`Session`] owns the one [`Catalog`] for its lifetime together with the
//! text streams it reads selections from and writes results to. The loop
//! itself lives in [`update`] and is re-exported as `run`.
//!
pub mod config;
pub mod menu;
pub mod update;

use std::io::{BufRead, Write};

use crate::catalog::Catalog;

pub struct Session<R, W> {
    catalog: Catalog,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(catalog: Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    /// Hand back the output stream, e.g. to inspect what a scripted run printed.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Re-export the application loop entry function.
pub use update::run_app as run;
