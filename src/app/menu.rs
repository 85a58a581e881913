//! Menu options and selection parsing.
//!
//! Each option is selected by a fixed token. Parsing trims surrounding
//! whitespace and then requires an exact match, so `"1"` and `" 1 "` select
//! [`MenuOption::Add`] while `"01"` or `"add"` are rejected.

/// Actions offered by the main menu, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuOption {
    /// Create an item and append it to the catalog.
    Add,
    /// Print every item that is not on loan.
    ListAvailable,
    /// Change the title and/or author of an item.
    Modify,
    /// Remove an item.
    Delete,
    /// Put an item on loan.
    Lend,
    /// Bring an item back from loan.
    Return,
    /// Leave the session.
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 7] = [
        MenuOption::Add,
        MenuOption::ListAvailable,
        MenuOption::Modify,
        MenuOption::Delete,
        MenuOption::Lend,
        MenuOption::Return,
        MenuOption::Exit,
    ];

    /// Resolve a line of input to an option. `None` means "invalid option".
    pub fn parse(line: &str) -> Option<Self> {
        let token = line.trim();
        Self::ALL.into_iter().find(|o| o.token() == token)
    }

    pub fn token(self) -> &'static str {
        match self {
            MenuOption::Add => "1",
            MenuOption::ListAvailable => "2",
            MenuOption::Modify => "3",
            MenuOption::Delete => "4",
            MenuOption::Lend => "5",
            MenuOption::Return => "6",
            MenuOption::Exit => "7",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Add => "Add item",
            MenuOption::ListAvailable => "List available items",
            MenuOption::Modify => "Modify item",
            MenuOption::Delete => "Delete item",
            MenuOption::Lend => "Lend item",
            MenuOption::Return => "Return item",
            MenuOption::Exit => "Exit",
        }
    }
}
