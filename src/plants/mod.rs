mod shop;

pub use shop::PlantShop;

use crate::Item;

use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PlantDetail {
    pub title: Option<String>,
}

impl Item for PlantDetail {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}
