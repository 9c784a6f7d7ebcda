//! Items removed from the desktop, kept with their first-load coordinates for restore.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{AppId, Point};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecycleItem {
    pub id: AppId,
    pub title: String,
    pub icon: String,
    pub original_position: Point,
}

/// Rejection raised when a recycle batch contains applications that still have open windows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecycleError {
    #[error("{}", blocked_message(.0))]
    ApplicationsOpen(Vec<String>),
}

fn blocked_message(titles: &[String]) -> String {
    match titles {
        [] => "Nothing to recycle.".to_string(),
        [single] => format!(
            "Cannot move {single} to the Recycle Bin because the application is currently open. \
             Close it and try again."
        ),
        [rest @ .., last] => format!(
            "Cannot move {} and {last} to the Recycle Bin because these applications are \
             currently open. Close them and try again.",
            rest.join(", ")
        ),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecycleStore {
    items: Vec<RecycleItem>,
}

impl RecycleStore {
    pub fn items(&self) -> &[RecycleItem] {
        &self.items
    }

    pub fn get(&self, id: &AppId) -> Option<&RecycleItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    pub fn contains(&self, id: &AppId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `item`, replacing an older entry with the same id.
    pub fn insert(&mut self, item: RecycleItem) {
        self.items.retain(|existing| existing.id != item.id);
        self.items.push(item);
    }

    /// Takes the item out of the store so its icon can be reinstated.
    pub fn restore(&mut self, id: &AppId) -> Option<RecycleItem> {
        let index = self.items.iter().position(|item| item.id == *id)?;
        Some(self.items.remove(index))
    }

    /// Permanently removes the item.
    pub fn delete(&mut self, id: &AppId) -> bool {
        self.restore(id).is_some()
    }

    /// Permanently removes every item and returns their ids.
    pub fn empty(&mut self) -> Vec<AppId> {
        self.items.drain(..).map(|item| item.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(id: &str) -> RecycleItem {
        RecycleItem {
            id: AppId::from(id),
            title: id.to_uppercase(),
            icon: "folder".to_string(),
            original_position: Point::new(20, 20),
        }
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let mut store = RecycleStore::default();
        store.insert(item("a"));
        store.insert(item("a"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn restore_and_delete_remove_the_entry() {
        let mut store = RecycleStore::default();
        store.insert(item("a"));
        store.insert(item("b"));

        assert_eq!(store.restore(&AppId::from("a")), Some(item("a")));
        assert!(store.delete(&AppId::from("b")));
        assert!(!store.delete(&AppId::from("b")));
        assert!(store.is_empty());
    }

    #[test]
    fn empty_drains_all_ids() {
        let mut store = RecycleStore::default();
        store.insert(item("a"));
        store.insert(item("b"));
        assert_eq!(store.empty(), vec![AppId::from("a"), AppId::from("b")]);
        assert!(store.is_empty());
    }

    #[test]
    fn blocked_message_is_pluralized() {
        let single = RecycleError::ApplicationsOpen(vec!["My Projects".to_string()]);
        assert_eq!(
            single.to_string(),
            "Cannot move My Projects to the Recycle Bin because the application is currently \
             open. Close it and try again."
        );

        let many = RecycleError::ApplicationsOpen(vec![
            "My Projects".to_string(),
            "My Resume".to_string(),
            "Contact Me".to_string(),
        ]);
        assert_eq!(
            many.to_string(),
            "Cannot move My Projects, My Resume and Contact Me to the Recycle Bin because these \
             applications are currently open. Close them and try again."
        );
    }
}
