use serde::{Deserialize, Serialize};

use crate::mvi::UiState;
use crate::repository::CartItem;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CartContent {
    #[default]
    Loading,
    Empty,
    Loaded(Vec<CartItem>),
}

/// Removal confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfirmDialog {
    #[default]
    Hidden,
    Shown { id: String, title: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartState {
    pub content: CartContent,
    pub confirm: ConfirmDialog,
}

impl UiState for CartState {}

impl CartState {
    pub fn items(&self) -> &[CartItem] {
        match &self.content {
            CartContent::Loaded(items) => items,
            _ => &[],
        }
    }

    /// Order total in minor currency units.
    pub fn total_price(&self) -> u32 {
        self.items().iter().map(|item| item.price * item.count).sum()
    }
}
