use std::fmt;

use crate::menu::course::Course;

/// Session-unique menu item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A committed menu entry. Never modified after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: f64,
}
