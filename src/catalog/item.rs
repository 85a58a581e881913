use std::fmt::{Display, Formatter};

use super::Outcome;

/// A single catalog record.
///
/// The availability flag starts out `true` and is only flipped by
/// [`Item::lend`] and [`Item::return_item`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    pub author: String,
    pub id: String,
    available: bool,
}

impl Item {
    pub fn new(title: impl Into<String>, author: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            id: id.into(),
            available: true,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Mark the item as on loan. No-op with `NotAvailable` when it already is.
    pub fn lend(&mut self) -> Outcome {
        let title = self.title.clone();
        if self.available {
            self.available = false;
            Outcome::Lent { title }
        } else {
            Outcome::NotAvailable { title }
        }
    }

    /// Mark the item as back on the shelf. No-op with `AlreadyAvailable` when it is.
    pub fn return_item(&mut self) -> Outcome {
        let title = self.title.clone();
        if self.available {
            Outcome::AlreadyAvailable { title }
        } else {
            self.available = true;
            Outcome::Returned { title }
        }
    }

    /// Overwrite title and/or author. `None` and empty strings leave the field as is.
    pub fn apply_changes(&mut self, new_title: Option<&str>, new_author: Option<&str>) {
        if let Some(t) = new_title.filter(|t| !t.is_empty()) {
            self.title = t.to_string();
        }
        if let Some(a) = new_author.filter(|a| !a.is_empty()) {
            self.author = a.to_string();
        }
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Title: {}, Author: {}, ID: {}", self.title, self.author, self.id)
    }
}
