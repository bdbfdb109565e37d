use std::io::BufRead;

use crate::input::InputError;
use crate::model::item::FridgeItem;

pub fn parse_catalog_json(reader: impl BufRead) -> Result<Vec<FridgeItem>, InputError> {
    let items: Vec<FridgeItem> = serde_json::from_reader(reader)?;
    for (idx, item) in items.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(InputError::InvalidEntry {
                index: idx + 1,
                msg: format!("item {} has no name", item.id),
            });
        }
    }
    Ok(items)
}
