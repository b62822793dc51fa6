use crate::config::loader::ConfigError;
use crate::config::types::SeedItem;
use crate::menu::{Draft, MenuStateMachine};

impl SeedItem {
    /// Form input equivalent to typing this item into the add form.
    pub fn to_draft(&self) -> Draft {
        Draft::new(
            self.name.clone(),
            self.description.clone(),
            self.course,
            self.price.to_string(),
        )
    }
}

/// Builds a session with `seed` already added, in order.
///
/// Fails on the first seed item the add-item form would reject.
pub fn seeded_menu(seed: &[SeedItem]) -> Result<MenuStateMachine, ConfigError> {
    let mut machine = MenuStateMachine::new();
    for (index, item) in seed.iter().enumerate() {
        machine
            .add_item(item.to_draft())
            .map_err(|source| ConfigError::InvalidSeed {
                index,
                name: item.name.clone(),
                source,
            })?;
    }
    Ok(machine)
}
