use serde::{Deserialize, Serialize};

/// A dish from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    /// Price in minor currency units.
    pub price: u32,
    #[serde(default)]
    pub old_price: Option<u32>,
}

impl Dish {
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            image: String::new(),
            price,
            old_price: None,
        }
    }
}

/// A cart line joined with the dish it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image: String,
    pub price: u32,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    /// Milliseconds since the Unix epoch.
    pub date: i64,
    pub rating: u8,
    pub text: String,
}

/// One page of a paginated remote listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub more_available: bool,
}
