//! Static storefront data: cookies, box tiers and testimonials
//!
//! The catalog is supplied once at startup and never mutated. Image
//! references are opaque strings handed through to the presentation layer.

pub mod loader;

pub use loader::{load_catalog, parse_catalog};

use crate::error::{ErrorCode, Result, ShopError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A purchasable cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in whole SEK
    pub unit_price: u32,
    #[serde(default)]
    pub image_ref: String,
}

/// A box size and its flat price.
///
/// The tier with `size == 1` is the individual mode and carries no price;
/// every other tier has a fixed price independent of the flavors chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleTier {
    pub size: usize,
    #[serde(default)]
    pub fixed_price: Option<u32>,
    pub label: String,
}

impl BundleTier {
    pub fn is_individual(&self) -> bool {
        self.size == 1
    }
}

/// A customer review shown alongside the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub rating: u8,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub items: Vec<CatalogItem>,
    pub tiers: Vec<BundleTier>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

impl Catalog {
    /// The built-in Stockholm storefront
    pub fn stockholm() -> Self {
        let items = vec![
            cookie(
                "biscoff",
                "Biscoff Cookie",
                "Spiced Belgian cookie butter core with crunchy biscuit bits.",
                35,
                "https://images.unsplash.com/photo-1499636136210-6f4ee915583e?auto=format&fit=crop&q=80&w=400",
            ),
            cookie(
                "chocochip",
                "Choco Chip",
                "Brown butter dough with 70% dark chocolate chunks and sea salt.",
                25,
                "https://images.unsplash.com/photo-1558961363-fa8fdf82db35?auto=format&fit=crop&q=80&w=400",
            ),
            cookie(
                "pistachio",
                "Pistachio Cream",
                "Rich roasted pistachio filling with white chocolate drizzle.",
                40,
                "https://images.unsplash.com/photo-1590080875515-8a3a8dc5735e?auto=format&fit=crop&q=80&w=400",
            ),
            cookie(
                "raspberry",
                "Raspberry White Choco",
                "Tart Swedish raspberries paired with creamy white chocolate.",
                38,
                "https://images.unsplash.com/photo-1603532648955-039310d9ed75?auto=format&fit=crop&q=80&w=400",
            ),
            cookie(
                "blueberry",
                "Blueberry Cheese",
                "Wild Swedish blueberries with a tangy cream cheese center.",
                38,
                "https://images.unsplash.com/photo-1583182332473-b31ba08929c8?auto=format&fit=crop&q=80&w=400",
            ),
        ];

        let tiers = vec![
            BundleTier {
                size: 1,
                fixed_price: None,
                label: "Choose Your Cookies".to_string(),
            },
            BundleTier {
                size: 5,
                fixed_price: Some(199),
                label: "Small Box".to_string(),
            },
            BundleTier {
                size: 10,
                fixed_price: Some(379),
                label: "Medium Box".to_string(),
            },
            BundleTier {
                size: 15,
                fixed_price: Some(549),
                label: "Large Box".to_string(),
            },
        ];

        let testimonials = vec![
            Testimonial {
                name: "Lars S.".to_string(),
                rating: 5,
                text: "The Pistachio Cream is life-changing. Best fika in Stockholm!".to_string(),
            },
            Testimonial {
                name: "Emma W.".to_string(),
                rating: 5,
                text: "Sent a box of 10 to the office, they disappeared in minutes.".to_string(),
            },
        ];

        Self {
            items,
            tiers,
            testimonials,
        }
    }

    pub fn item(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn tier(&self, size: usize) -> Option<&BundleTier> {
        self.tiers.iter().find(|tier| tier.size == size)
    }

    pub fn individual_tier(&self) -> Option<&BundleTier> {
        self.tiers.iter().find(|tier| tier.is_individual())
    }

    pub fn bundle_tiers(&self) -> impl Iterator<Item = &BundleTier> {
        self.tiers.iter().filter(|tier| !tier.is_individual())
    }

    /// Lowest unit price, advertised as "From N SEK" on the individual tier
    pub fn starting_price(&self) -> Option<u32> {
        self.items.iter().map(|item| item.unit_price).min()
    }

    /// Check the structural rules every catalog must satisfy.
    ///
    /// Stops at the first violation.
    pub fn validate(&self) -> Result<()> {
        let mut seen_items = HashSet::new();
        for item in &self.items {
            if !seen_items.insert(item.id.as_str()) {
                return Err(ShopError::catalog_with_code(
                    ErrorCode::CATALOG_DUPLICATE_ITEM,
                    "item id appears more than once",
                    Some(item.id.clone()),
                ));
            }
        }

        let mut seen_sizes = HashSet::new();
        for tier in &self.tiers {
            if tier.size == 0 {
                return Err(ShopError::catalog_with_code(
                    ErrorCode::CATALOG_EMPTY_TIER,
                    "box size must be at least 1",
                    Some(tier.label.clone()),
                ));
            }
            if !seen_sizes.insert(tier.size) {
                return Err(ShopError::catalog_with_code(
                    ErrorCode::CATALOG_DUPLICATE_TIER,
                    format!("box size {} is offered more than once", tier.size),
                    Some(tier.label.clone()),
                ));
            }
            match (tier.is_individual(), tier.fixed_price) {
                (true, Some(_)) => {
                    return Err(ShopError::catalog_with_code(
                        ErrorCode::CATALOG_TIER_PRICE,
                        "individual tier must not carry a fixed price",
                        Some(tier.label.clone()),
                    ));
                }
                (false, None) => {
                    return Err(ShopError::catalog_with_code(
                        ErrorCode::CATALOG_TIER_PRICE,
                        format!("box of {} has no fixed price", tier.size),
                        Some(tier.label.clone()),
                    ));
                }
                _ => {}
            }
        }

        if self.individual_tier().is_none() {
            return Err(ShopError::catalog_with_code(
                ErrorCode::CATALOG_INDIVIDUAL_TIER,
                "catalog must offer an individual (size 1) tier",
                None,
            ));
        }

        for testimonial in &self.testimonials {
            if !(1..=5).contains(&testimonial.rating) {
                return Err(ShopError::catalog_with_code(
                    ErrorCode::CATALOG_RATING_RANGE,
                    format!("rating {} is outside 1..=5", testimonial.rating),
                    Some(testimonial.name.clone()),
                ));
            }
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::stockholm()
    }
}

fn cookie(id: &str, name: &str, description: &str, unit_price: u32, image_ref: &str) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        unit_price,
        image_ref: image_ref.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stockholm_catalog_is_valid() {
        let catalog = Catalog::stockholm();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.items.len(), 5);
        assert_eq!(catalog.tiers.len(), 4);
        assert_eq!(catalog.testimonials.len(), 2);
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::stockholm();
        assert_eq!(catalog.item("chocochip").unwrap().unit_price, 25);
        assert!(catalog.item("oatmeal").is_none());
        assert_eq!(catalog.tier(5).unwrap().fixed_price, Some(199));
        assert_eq!(catalog.tier(10).unwrap().fixed_price, Some(379));
        assert_eq!(catalog.tier(15).unwrap().fixed_price, Some(549));
        assert!(catalog.tier(7).is_none());
        assert_eq!(catalog.individual_tier().unwrap().size, 1);
        assert_eq!(catalog.bundle_tiers().count(), 3);
    }

    #[test]
    fn test_starting_price() {
        assert_eq!(Catalog::stockholm().starting_price(), Some(25));

        let empty = Catalog {
            items: vec![],
            tiers: vec![],
            testimonials: vec![],
        };
        assert_eq!(empty.starting_price(), None);
    }

    #[test]
    fn test_duplicate_item_rejected() {
        let mut catalog = Catalog::stockholm();
        let duplicate = catalog.items[0].clone();
        catalog.items.push(duplicate);

        let err = catalog.validate().unwrap_err();
        assert_eq!(err.code(), ErrorCode::CATALOG_DUPLICATE_ITEM);
    }

    #[test]
    fn test_missing_individual_tier_rejected() {
        let mut catalog = Catalog::stockholm();
        catalog.tiers.retain(|tier| tier.size != 1);

        let err = catalog.validate().unwrap_err();
        assert_eq!(err.code(), ErrorCode::CATALOG_INDIVIDUAL_TIER);
    }

    #[test]
    fn test_tier_price_rules() {
        let mut catalog = Catalog::stockholm();
        catalog.tiers[0].fixed_price = Some(10);
        assert_eq!(
            catalog.validate().unwrap_err().code(),
            ErrorCode::CATALOG_TIER_PRICE
        );

        let mut catalog = Catalog::stockholm();
        catalog.tiers[1].fixed_price = None;
        assert_eq!(
            catalog.validate().unwrap_err().code(),
            ErrorCode::CATALOG_TIER_PRICE
        );
    }

    #[test]
    fn test_duplicate_and_empty_tiers_rejected() {
        let mut catalog = Catalog::stockholm();
        catalog.tiers.push(BundleTier {
            size: 5,
            fixed_price: Some(150),
            label: "Promo Box".to_string(),
        });
        assert_eq!(
            catalog.validate().unwrap_err().code(),
            ErrorCode::CATALOG_DUPLICATE_TIER
        );

        let mut catalog = Catalog::stockholm();
        catalog.tiers.push(BundleTier {
            size: 0,
            fixed_price: Some(0),
            label: "Empty Box".to_string(),
        });
        assert_eq!(
            catalog.validate().unwrap_err().code(),
            ErrorCode::CATALOG_EMPTY_TIER
        );
    }

    #[test]
    fn test_testimonial_rating_range() {
        let mut catalog = Catalog::stockholm();
        catalog.testimonials[0].rating = 6;
        assert_eq!(
            catalog.validate().unwrap_err().code(),
            ErrorCode::CATALOG_RATING_RANGE
        );
    }
}
