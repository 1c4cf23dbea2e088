//! Menu text and choice parsing.

/// Printed before every choice prompt.
pub const MENU: &str = "\
Menu:
1. List all items in inventory
2. List items in shopping cart
3. Add an item to the shopping cart
4. Remove an item from the shopping cart
5. Checkout
6. Exit";

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListInventory,
    ShowCart,
    AddItem,
    RemoveItem,
    Checkout,
    Exit,
    /// Anything that is not `1` to `6`.
    Invalid,
}

impl From<&str> for MenuChoice {
    fn from(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::ListInventory,
            "2" => MenuChoice::ShowCart,
            "3" => MenuChoice::AddItem,
            "4" => MenuChoice::RemoveItem,
            "5" => MenuChoice::Checkout,
            "6" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_parsing() {
        assert_eq!(MenuChoice::from("1"), MenuChoice::ListInventory);
        assert_eq!(MenuChoice::from(" 5 "), MenuChoice::Checkout);
        assert_eq!(MenuChoice::from("6"), MenuChoice::Exit);
        assert_eq!(MenuChoice::from("7"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::from("exit"), MenuChoice::Invalid);
        assert_eq!(MenuChoice::from(""), MenuChoice::Invalid);
    }
}
