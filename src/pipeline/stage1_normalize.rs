use crate::model::item::{FridgeItem, ItemId, Presence};

pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Debug, Clone)]
pub struct IndexedItem {
    pub item: FridgeItem,
    pub normalized: String,
}

/// Catalog with every name normalized once up front.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    entries: Vec<IndexedItem>,
}

impl NameIndex {
    pub fn build(items: &[FridgeItem]) -> Self {
        let entries = items
            .iter()
            .map(|item| IndexedItem {
                item: item.clone(),
                normalized: normalize_name(&item.name),
            })
            .collect::<Vec<_>>();
        tracing::debug!(items = entries.len(), "name index built");
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[IndexedItem] {
        &self.entries
    }

    pub fn get(&self, id: ItemId) -> Option<&FridgeItem> {
        self.entries
            .iter()
            .find(|e| e.item.id == id)
            .map(|e| &e.item)
    }

    /// Items whose normalized name equals `query` but whose presence is not `presence`.
    pub fn same_name(
        &self,
        query: &str,
        presence: Presence,
        exclude: Option<ItemId>,
    ) -> Vec<FridgeItem> {
        let needle = normalize_name(query);
        self.entries
            .iter()
            .filter(|e| Some(e.item.id) != exclude)
            .filter(|e| e.item.presence == presence.other() && e.normalized == needle)
            .map(|e| e.item.clone())
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_normalize.rs"]
mod tests;
