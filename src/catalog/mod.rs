//! In-memory catalog of library items.
//!
//! Items are kept in insertion order and identifiers are not required to be
//! unique. Every id-based operation resolves to the first match through
//! [`Catalog::position`].
//!
pub mod item;
pub mod outcome;

pub use item::Item;
pub use outcome::Outcome;

#[derive(Clone, Debug)]
pub struct Catalog {
    name: String,
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the first item with `id`, scanning in insertion order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.position(id).map(|idx| &self.items[idx])
    }

    pub fn add(&mut self, item: Item) -> Outcome {
        let title = item.title.clone();
        tracing::debug!(id = %item.id, title = %title, "adding item");
        self.items.push(item);
        Outcome::Added { title }
    }

    /// Available items in insertion order. Borrowing, so it can be re-run freely.
    pub fn available(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().filter(|i| i.is_available())
    }

    pub fn modify(&mut self, id: &str, new_title: Option<&str>, new_author: Option<&str>) -> Outcome {
        match self.position(id) {
            Some(idx) => {
                self.items[idx].apply_changes(new_title, new_author);
                Outcome::Modified { id: id.to_string() }
            }
            None => Outcome::NotFound { id: id.to_string() },
        }
    }

    pub fn delete(&mut self, id: &str) -> Outcome {
        match self.position(id) {
            Some(idx) => {
                // Vec::remove shifts the tail, keeping relative order.
                let removed = self.items.remove(idx);
                tracing::debug!(id = %removed.id, title = %removed.title, "deleted item");
                Outcome::Deleted { id: id.to_string() }
            }
            None => Outcome::NotFound { id: id.to_string() },
        }
    }

    pub fn lend(&mut self, id: &str) -> Outcome {
        match self.position(id) {
            Some(idx) => self.items[idx].lend(),
            None => Outcome::NotFound { id: id.to_string() },
        }
    }

    pub fn return_item(&mut self, id: &str) -> Outcome {
        match self.position(id) {
            Some(idx) => self.items[idx].return_item(),
            None => Outcome::NotFound { id: id.to_string() },
        }
    }
}
