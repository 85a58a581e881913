use std::fmt::{Display, Formatter};

/// Result of a catalog or item operation, rendered as a status line.
///
/// None of these are failures in the `Result` sense: a missing identifier or
/// a lend on an item already out is reported to the user and the session
/// carries on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Added { title: String },
    Modified { id: String },
    Deleted { id: String },
    Lent { title: String },
    NotAvailable { title: String },
    Returned { title: String },
    AlreadyAvailable { title: String },
    NotFound { id: String },
}

impl Outcome {
    /// Whether the operation changed the catalog.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Outcome::Added { .. }
                | Outcome::Modified { .. }
                | Outcome::Deleted { .. }
                | Outcome::Lent { .. }
                | Outcome::Returned { .. }
        )
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Added { title } => write!(f, "Item '{title}' has been added to the catalog."),
            Outcome::Modified { id } => write!(f, "Item with ID {id} has been modified."),
            Outcome::Deleted { id } => write!(f, "Item with ID {id} has been deleted."),
            Outcome::Lent { title } => write!(f, "Item '{title}' has been lent."),
            Outcome::NotAvailable { title } => write!(f, "Item '{title}' is not available."),
            Outcome::Returned { title } => write!(f, "Item '{title}' has been returned."),
            Outcome::AlreadyAvailable { title } => {
                write!(f, "Item '{title}' was already available.")
            }
            Outcome::NotFound { id } => write!(f, "No item found with ID {id}."),
        }
    }
}
