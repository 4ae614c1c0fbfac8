//! Garments and the per-request wardrobe snapshot the search engine reads.

use crate::color::Color;
use crate::error::MatchError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Pants,
    Shoes,
    Jacket,
}

impl Category {
    /// Slot order of an outfit.
    pub const ALL: [Category; 4] = [
        Category::Top,
        Category::Pants,
        Category::Shoes,
        Category::Jacket,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Top => "Top",
            Category::Pants => "Pants",
            Category::Shoes => "Shoes",
            Category::Jacket => "Jacket",
        }
    }

    /// Plural tag used as the wardrobe key.
    pub fn plural(self) -> &'static str {
        match self {
            Category::Top => "tops",
            Category::Pants => "pants",
            Category::Shoes => "shoes",
            Category::Jacket => "jackets",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Category::Jacket)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" | "tops" => Ok(Category::Top),
            "pant" | "pants" => Ok(Category::Pants),
            "shoe" | "shoes" => Ok(Category::Shoes),
            "jacket" | "jackets" => Ok(Category::Jacket),
            _ => Err(MatchError::InvalidCategory(s.to_string())),
        }
    }
}

/// Identity of a garment the user owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a garment in a result came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GarmentSource {
    /// A piece from the user's wardrobe.
    Owned { id: ItemId },
    /// A piece the caller described but that is not stored anywhere.
    Hypothetical,
    /// A generated palette entry, never a real inventory item.
    Swatch { label: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Garment {
    pub category: Category,
    pub color: Color,
    pub source: GarmentSource,
    /// Opaque image reference, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Garment {
    pub fn owned(id: ItemId, category: Category, color: Color) -> Self {
        Self {
            category,
            color,
            source: GarmentSource::Owned { id },
            image: None,
        }
    }

    pub fn hypothetical(category: Category, color: Color) -> Self {
        Self {
            category,
            color,
            source: GarmentSource::Hypothetical,
            image: None,
        }
    }

    pub fn swatch(category: Category, color: Color, label: impl Into<String>) -> Self {
        Self {
            category,
            color,
            source: GarmentSource::Swatch {
                label: label.into(),
            },
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn id(&self) -> Option<ItemId> {
        match self.source {
            GarmentSource::Owned { id } => Some(id),
            _ => None,
        }
    }

    pub fn swatch_label(&self) -> Option<&str> {
        match &self.source {
            GarmentSource::Swatch { label } => Some(label),
            _ => None,
        }
    }
}

/// Point-in-time view of a wardrobe, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Wardrobe {
    tops: Vec<Garment>,
    pants: Vec<Garment>,
    shoes: Vec<Garment>,
    jackets: Vec<Garment>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SnapshotItem {
    #[serde(default)]
    id: Option<u64>,
    color: Vec<i64>,
    #[serde(default)]
    image: Option<String>,
}

impl Wardrobe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owned garments with ids assigned 1, 2, 3... in iteration order.
    pub fn from_colors(items: impl IntoIterator<Item = (Category, Color)>) -> Self {
        items
            .into_iter()
            .zip(1u64..)
            .map(|((category, color), id)| Garment::owned(ItemId(id), category, color))
            .collect()
    }

    /// Parse a snapshot shaped as `{ "tops": [{ "id": 1, "color": [r, g, b] }], ... }`.
    pub fn from_json(json: &str) -> Result<Self, MatchError> {
        let raw: BTreeMap<String, Vec<SnapshotItem>> = serde_json::from_str(json)
            .map_err(|e| MatchError::MalformedSnapshot(e.to_string()))?;

        let mut wardrobe = Self::new();
        for (tag, items) in raw {
            let category: Category = tag.parse()?;
            for item in items {
                let color = Color::try_from(item.color)?;
                let mut garment = match item.id {
                    Some(id) => Garment::owned(ItemId(id), category, color),
                    None => Garment::hypothetical(category, color),
                };
                garment.image = item.image;
                wardrobe.push(garment);
            }
        }
        Ok(wardrobe)
    }

    pub fn push(&mut self, garment: Garment) {
        self.slot_mut(garment.category).push(garment);
    }

    pub fn items(&self, category: Category) -> &[Garment] {
        match category {
            Category::Top => &self.tops,
            Category::Pants => &self.pants,
            Category::Shoes => &self.shoes,
            Category::Jacket => &self.jackets,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Vec<Garment> {
        match category {
            Category::Top => &mut self.tops,
            Category::Pants => &mut self.pants,
            Category::Shoes => &mut self.shoes,
            Category::Jacket => &mut self.jackets,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Garment> {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.items(category).iter())
    }

    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.items(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find_by_color(&self, category: Category, color: Color) -> Option<&Garment> {
        self.items(category).iter().find(|g| g.color == color)
    }

    /// Piece to hold fixed in a single-item search: the owned garment with
    /// this color when there is one, otherwise an unsaved piece.
    pub fn fixed_piece(&self, category: Category, color: Color) -> Garment {
        self.find_by_color(category, color)
            .cloned()
            .unwrap_or_else(|| Garment::hypothetical(category, color))
    }
}

impl FromIterator<Garment> for Wardrobe {
    fn from_iter<I: IntoIterator<Item = Garment>>(iter: I) -> Self {
        let mut wardrobe = Self::new();
        for garment in iter {
            wardrobe.push(garment);
        }
        wardrobe
    }
}
