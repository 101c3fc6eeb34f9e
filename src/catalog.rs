use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Identifier of a purchasable variant, unique within a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub u32);

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One colour of the product with its own image and stock count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub color: String,
    pub image: String,
    pub quantity: u32,
}

impl Variant {
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// Fixed product data shown by the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub brand: String,
    pub name: String,
    #[serde(default)]
    pub details: Vec<String>,
    pub variants: Vec<Variant>,
}

impl Catalog {
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.name)
    }

    pub fn variant(&self, index: usize) -> Option<&Variant> {
        self.variants.get(index)
    }

    pub fn contains(&self, id: VariantId) -> bool {
        self.variants.iter().any(|v| v.id == id)
    }

    /// First id that appears more than once, if any.
    pub fn duplicate_id(&self) -> Option<VariantId> {
        let mut seen = HashSet::new();
        self.variants
            .iter()
            .map(|v| v.id)
            .find(|id| !seen.insert(*id))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            brand: "Vue Mastery".to_string(),
            name: "Socks".to_string(),
            details: vec![
                "80% cotton".to_string(),
                "20% polyester".to_string(),
                "Gender-neutral".to_string(),
            ],
            variants: vec![
                Variant {
                    id: VariantId(2234),
                    color: "green".to_string(),
                    image: "./assets/vmSocks-green-onWhite.png".to_string(),
                    quantity: 10,
                },
                Variant {
                    id: VariantId(2235),
                    color: "blue".to_string(),
                    image: "./assets/vmSocks-green-onBlue.png".to_string(),
                    quantity: 0,
                },
            ],
        }
    }
}
