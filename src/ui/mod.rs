//! Line-oriented text rendering for the session.
//!
//! Everything here writes to an arbitrary `Write` so the session can run
//! against stdout or an in-memory buffer alike.

use std::io::{self, Write};

use crate::app::menu::MenuOption;
use crate::catalog::{Item, Outcome};

pub const PROMPT_SELECTION: &str = "Choose an option: ";
pub const PROMPT_TITLE: &str = "Item title: ";
pub const PROMPT_AUTHOR: &str = "Item author: ";
pub const PROMPT_ID: &str = "Item ID: ";
pub const PROMPT_MODIFY_ID: &str = "ID of the item to modify: ";
pub const PROMPT_NEW_TITLE: &str = "New title (leave blank to keep): ";
pub const PROMPT_NEW_AUTHOR: &str = "New author (leave blank to keep): ";
pub const PROMPT_DELETE_ID: &str = "ID of the item to delete: ";
pub const PROMPT_LEND_ID: &str = "ID of the item to lend: ";
pub const PROMPT_RETURN_ID: &str = "ID of the item to return: ";

pub const AVAILABLE_HEADER: &str = "Available items:";
pub const INVALID_OPTION: &str = "Invalid option. Please try again.";

pub fn render_menu(out: &mut impl Write, catalog_name: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{catalog_name} menu")?;
    for option in MenuOption::ALL {
        writeln!(out, "{}. {}", option.token(), option.label())?;
    }
    Ok(())
}

pub fn render_available<'a>(
    out: &mut impl Write,
    items: impl IntoIterator<Item = &'a Item>,
) -> io::Result<()> {
    writeln!(out, "{AVAILABLE_HEADER}")?;
    for item in items {
        writeln!(out, "{item}")?;
    }
    Ok(())
}

pub fn render_outcome(out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
    writeln!(out, "{outcome}")
}

/// Print a prompt without a trailing newline and flush so it shows before input.
pub fn render_prompt(out: &mut impl Write, label: &str) -> io::Result<()> {
    write!(out, "{label}")?;
    out.flush()
}
