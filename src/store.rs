//! Persistent wardrobe and saved outfits.
//!
//! A single JSON file holds every garment the user owns plus the outfits they
//! chose to keep. The search engine never touches this file; it is handed a
//! [`Wardrobe`] snapshot instead.

use crate::color::Color;
use crate::outfit::Outfit;
use crate::wardrobe::{Category, Garment, ItemId, Wardrobe};
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// A garment in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredItem {
    pub id: ItemId,
    pub category: Category,
    pub color: Color,
    /// Path of the photo the color was taken from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub added_at: DateTime<Utc>,
}

impl StoredItem {
    pub fn to_garment(&self) -> Garment {
        let garment = Garment::owned(self.id, self.category, self.color);
        match &self.image {
            Some(image) => garment.with_image(image.clone()),
            None => garment,
        }
    }
}

/// An outfit the user kept, by item id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedOutfit {
    pub id: u64,
    pub top: ItemId,
    pub pants: ItemId,
    pub shoes: ItemId,
    #[serde(default)]
    pub jacket: Option<ItemId>,
    pub score: f64,
    pub saved_at: DateTime<Utc>,
}

impl SavedOutfit {
    pub fn item_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        [self.top, self.pants, self.shoes]
            .into_iter()
            .chain(self.jacket)
    }

    fn same_pieces(&self, top: ItemId, pants: ItemId, shoes: ItemId, jacket: Option<ItemId>) -> bool {
        self.top == top && self.pants == pants && self.shoes == shoes && self.jacket == jacket
    }
}

fn first_id() -> u64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardrobeStore {
    #[serde(skip)]
    path: PathBuf,
    #[serde(default = "first_id")]
    next_item_id: u64,
    #[serde(default = "first_id")]
    next_outfit_id: u64,
    #[serde(default)]
    items: Vec<StoredItem>,
    #[serde(default)]
    outfits: Vec<SavedOutfit>,
}

impl WardrobeStore {
    /// Open the store at `path`; a missing file is an empty wardrobe.
    pub fn load(path: &Path) -> Result<Self> {
        let mut store = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read wardrobe file {}", path.display()))?;
            serde_json::from_str::<Self>(&content)
                .with_context(|| format!("Failed to parse wardrobe file {}", path.display()))?
        } else {
            Self {
                path: PathBuf::new(),
                next_item_id: first_id(),
                next_outfit_id: first_id(),
                items: Vec::new(),
                outfits: Vec::new(),
            }
        };
        store.path = path.to_path_buf();
        Ok(store)
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write wardrobe file {}", self.path.display()))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn items(&self) -> &[StoredItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&StoredItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn add_item(
        &mut self,
        category: Category,
        color: Color,
        image: Option<String>,
    ) -> Result<ItemId> {
        let id = ItemId(self.next_item_id);
        self.next_item_id += 1;
        self.items.push(StoredItem {
            id,
            category,
            color,
            image,
            added_at: Utc::now(),
        });

        self.save()?;
        info!(%id, %category, %color, "added item");
        Ok(id)
    }

    /// Remove an item and every saved outfit that wears it.
    pub fn remove_item(&mut self, id: ItemId) -> Result<bool> {
        let initial_len = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == initial_len {
            return Ok(false);
        }

        let initial_outfits = self.outfits.len();
        self.outfits.retain(|outfit| outfit.item_ids().all(|item| item != id));
        self.save()?;
        info!(
            %id,
            dropped_outfits = initial_outfits - self.outfits.len(),
            "removed item"
        );
        Ok(true)
    }

    pub fn find_by_color(&self, category: Category, color: Color) -> Option<&StoredItem> {
        self.items
            .iter()
            .find(|item| item.category == category && item.color == color)
    }

    /// Read-only view for the search engine.
    pub fn snapshot(&self) -> Wardrobe {
        self.items.iter().map(StoredItem::to_garment).collect()
    }

    /// Keep an outfit. Every id must exist in the slot's category, and an
    /// outfit with the same pieces cannot be saved twice.
    pub fn save_outfit(
        &mut self,
        top: ItemId,
        pants: ItemId,
        shoes: ItemId,
        jacket: Option<ItemId>,
    ) -> Result<SavedOutfit> {
        if self
            .outfits
            .iter()
            .any(|saved| saved.same_pieces(top, pants, shoes, jacket))
        {
            bail!("This outfit is already saved");
        }

        let outfit = Outfit {
            top: self.garment_in(top, Category::Top)?,
            pants: self.garment_in(pants, Category::Pants)?,
            shoes: self.garment_in(shoes, Category::Shoes)?,
            jacket: jacket
                .map(|id| self.garment_in(id, Category::Jacket))
                .transpose()?,
        };

        let saved = SavedOutfit {
            id: self.next_outfit_id,
            top,
            pants,
            shoes,
            jacket,
            score: outfit.score(),
            saved_at: Utc::now(),
        };
        self.next_outfit_id += 1;
        self.outfits.push(saved.clone());

        self.save()?;
        info!(id = saved.id, score = saved.score, "saved outfit");
        Ok(saved)
    }

    pub fn remove_outfit(&mut self, id: u64) -> Result<bool> {
        let initial_len = self.outfits.len();
        self.outfits.retain(|outfit| outfit.id != id);

        if self.outfits.len() < initial_len {
            self.save()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn saved_outfits(&self) -> &[SavedOutfit] {
        &self.outfits
    }

    /// Resolve a saved outfit back into garments.
    pub fn outfit_of(&self, saved: &SavedOutfit) -> Option<Outfit> {
        let garment = |id: ItemId| self.item(id).map(StoredItem::to_garment);
        Some(Outfit {
            top: garment(saved.top)?,
            pants: garment(saved.pants)?,
            shoes: garment(saved.shoes)?,
            jacket: match saved.jacket {
                Some(id) => Some(garment(id)?),
                None => None,
            },
        })
    }

    fn garment_in(&self, id: ItemId, category: Category) -> Result<Garment> {
        let Some(item) = self.item(id) else {
            bail!("No item with id {id}");
        };
        if item.category != category {
            bail!(
                "Item {id} is a {}, not a {}",
                item.category.display_name().to_lowercase(),
                category.display_name().to_lowercase()
            );
        }
        Ok(item.to_garment())
    }
}
