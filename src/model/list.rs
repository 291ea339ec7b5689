use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AppError;

/// Identifier of a shopping list item, unique for the lifetime of its list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingItem {
    pub id: ItemId,
    pub count: Option<f64>,
    pub unit: String,
    pub ingredient: String,
}

/// Items to buy, in insertion order
#[derive(Debug, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    next_id: u64,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item under a fresh identifier; identifiers are never reused
    pub fn add_item(
        &mut self,
        count: Option<f64>,
        unit: impl Into<String>,
        ingredient: impl Into<String>,
    ) -> ShoppingItem {
        let item = ShoppingItem {
            id: ItemId(self.next_id),
            count,
            unit: unit.into(),
            ingredient: ingredient.into(),
        };
        self.next_id += 1;
        self.items.push(item.clone());
        item
    }

    pub fn delete_item(&mut self, id: ItemId) -> Result<ShoppingItem, AppError> {
        let index = self.position(id)?;
        Ok(self.items.remove(index))
    }

    pub fn update_count(
        &mut self,
        id: ItemId,
        count: Option<f64>,
    ) -> Result<&ShoppingItem, AppError> {
        let index = self.position(id)?;
        let item = &mut self.items[index];
        item.count = count;
        Ok(item)
    }

    pub fn get(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: ItemId) -> Result<usize, AppError> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(AppError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_zero_and_increase() {
        let mut list = ShoppingList::new();
        let first = list.add_item(Some(2.0), "cup", "flour");
        let second = list.add_item(None, "", "salt");

        assert_eq!(first.id, ItemId(0));
        assert_eq!(second.id, ItemId(1));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_deleted_ids_are_not_reused() {
        let mut list = ShoppingList::new();
        let a = list.add_item(Some(1.0), "", "egg");
        let b = list.add_item(Some(1.0), "", "milk");

        list.delete_item(b.id).unwrap();
        let c = list.add_item(Some(1.0), "", "butter");

        assert!(c.id > a.id);
        assert!(c.id > b.id);
        assert_eq!(list.get(a.id).unwrap().ingredient, "egg");
    }

    #[test]
    fn test_delete_missing_item() {
        let mut list = ShoppingList::new();
        list.add_item(None, "", "salt");

        assert!(matches!(list.delete_item(ItemId(7)), Err(AppError::NotFound(ItemId(7)))));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_delete_keeps_other_ids() {
        let mut list = ShoppingList::new();
        list.add_item(None, "", "a");
        list.add_item(None, "", "b");
        list.add_item(None, "", "c");

        let removed = list.delete_item(ItemId(1)).unwrap();
        assert_eq!(removed.ingredient, "b");

        let ids: Vec<ItemId> = list.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![ItemId(0), ItemId(2)]);
    }

    #[test]
    fn test_update_count() {
        let mut list = ShoppingList::new();
        let item = list.add_item(Some(1.0), "kg", "potatoes");

        let updated = list.update_count(item.id, Some(2.5)).unwrap();
        assert_eq!(updated.count, Some(2.5));
        assert!(matches!(
            list.update_count(ItemId(99), Some(1.0)),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_empty() {
        let list = ShoppingList::new();
        assert!(list.is_empty());
        assert!(list.items().is_empty());
    }
}
