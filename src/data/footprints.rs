/// Scan categories with their fixed point multipliers.
///
/// Multipliers stay in the 1.0-1.5 band; labels an engine caller supplies
/// that match no variant fall back to 1.0 rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Clothing,
    Plastic,
    Appliances,
    Transportation,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Clothing,
        Category::Plastic,
        Category::Appliances,
        Category::Transportation,
    ];

    /// Display label, as the classifier reports it.
    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food Items",
            Category::Clothing => "Clothing",
            Category::Plastic => "Plastic & Waste",
            Category::Appliances => "Appliances",
            Category::Transportation => "Transportation",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Clothing => "clothing",
            Category::Plastic => "plastic",
            Category::Appliances => "appliances",
            Category::Transportation => "transportation",
        }
    }

    /// Accepts either the display label or the short key, case-insensitively.
    pub fn from_label(label: &str) -> Option<Category> {
        let normalized = label.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.key() == normalized || c.label().to_lowercase() == normalized)
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Category::Food => 1.0,
            Category::Appliances => 1.1,
            Category::Clothing => 1.2,
            Category::Transportation => 1.3,
            Category::Plastic => 1.5,
        }
    }
}

/// Multiplier for a caller-supplied label; unknown labels score at 1.0.
pub fn multiplier_for_label(label: &str) -> f64 {
    Category::from_label(label).map_or(1.0, Category::multiplier)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl ImpactLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ImpactLevel::Low => "low",
            ImpactLevel::Medium => "medium",
            ImpactLevel::High => "high",
        }
    }
}

/// One reference entry in the CO2 footprint database.
#[derive(Debug, Clone, Copy)]
pub struct ItemFootprint {
    pub key: &'static str,
    pub category: Category,
    /// Grams CO2-equivalent per `unit`.
    pub co2_grams: f64,
    pub unit: &'static str,
    pub impact: ImpactLevel,
    pub description: &'static str,
    pub eco_tip: &'static str,
}

use Category::{Appliances, Clothing, Food, Plastic, Transportation};
use ImpactLevel::{High, Low, Medium};

pub static FOOTPRINTS: &[ItemFootprint] = &[
    // Food
    ItemFootprint {
        key: "apple",
        category: Food,
        co2_grams: 12.0,
        unit: "per piece",
        impact: Low,
        description: "Fresh fruit with minimal processing and packaging",
        eco_tip: "Choose local, seasonal apples to reduce transport emissions",
    },
    ItemFootprint {
        key: "banana",
        category: Food,
        co2_grams: 18.0,
        unit: "per piece",
        impact: Low,
        description: "Tropical fruit with moderate transport impact",
        eco_tip: "Look for fair-trade bananas to support sustainable farming",
    },
    ItemFootprint {
        key: "orange",
        category: Food,
        co2_grams: 15.0,
        unit: "per piece",
        impact: Low,
        description: "Citrus fruit with low environmental impact",
        eco_tip: "Buy organic oranges to avoid pesticide-related emissions",
    },
    ItemFootprint {
        key: "lettuce",
        category: Food,
        co2_grams: 8.0,
        unit: "per 100g",
        impact: Low,
        description: "Leafy green with very low carbon footprint",
        eco_tip: "Grow your own lettuce to achieve near-zero emissions",
    },
    ItemFootprint {
        key: "tomato",
        category: Food,
        co2_grams: 22.0,
        unit: "per 100g",
        impact: Low,
        description: "Fresh vegetable with minimal environmental impact",
        eco_tip: "Choose locally grown tomatoes to reduce transport emissions",
    },
    ItemFootprint {
        key: "bread",
        category: Food,
        co2_grams: 340.0,
        unit: "per loaf",
        impact: Medium,
        description: "Processed grain product with moderate impact",
        eco_tip: "Choose whole grain bread from local bakeries",
    },
    ItemFootprint {
        key: "rice",
        category: Food,
        co2_grams: 150.0,
        unit: "per 100g cooked",
        impact: Medium,
        description: "Staple grain with methane emissions from cultivation",
        eco_tip: "Try quinoa or other grains with lower water requirements",
    },
    ItemFootprint {
        key: "milk",
        category: Food,
        co2_grams: 320.0,
        unit: "per 250ml",
        impact: Medium,
        description: "Dairy product with significant livestock emissions",
        eco_tip: "Try plant-based milk alternatives like oat or almond milk",
    },
    ItemFootprint {
        key: "cheese",
        category: Food,
        co2_grams: 850.0,
        unit: "per 100g",
        impact: High,
        description: "Dairy product with high processing and livestock emissions",
        eco_tip: "Reduce cheese consumption or try plant-based alternatives",
    },
    ItemFootprint {
        key: "beef",
        category: Food,
        co2_grams: 6100.0,
        unit: "per 100g",
        impact: High,
        description: "Red meat with highest carbon footprint among foods",
        eco_tip: "Replace with plant-based proteins to reduce emissions by 90%",
    },
    ItemFootprint {
        key: "chicken",
        category: Food,
        co2_grams: 690.0,
        unit: "per 100g",
        impact: Medium,
        description: "Poultry with moderate livestock emissions",
        eco_tip: "Choose free-range chicken or plant-based alternatives",
    },
    ItemFootprint {
        key: "pork",
        category: Food,
        co2_grams: 1200.0,
        unit: "per 100g",
        impact: High,
        description: "Red meat with significant environmental impact",
        eco_tip: "Try plant-based meat substitutes for similar taste",
    },
    ItemFootprint {
        key: "fish",
        category: Food,
        co2_grams: 280.0,
        unit: "per 100g",
        impact: Medium,
        description: "Seafood with variable impact depending on fishing method",
        eco_tip: "Choose sustainably caught fish with MSC certification",
    },
    // Clothing
    ItemFootprint {
        key: "cotton_tshirt",
        category: Clothing,
        co2_grams: 2100.0,
        unit: "per item",
        impact: Medium,
        description: "Cotton garment with water-intensive production",
        eco_tip: "Choose organic cotton or recycled materials",
    },
    ItemFootprint {
        key: "polyester_shirt",
        category: Clothing,
        co2_grams: 3200.0,
        unit: "per item",
        impact: High,
        description: "Synthetic fabric with petroleum-based production",
        eco_tip: "Look for recycled polyester or natural fiber alternatives",
    },
    ItemFootprint {
        key: "jeans",
        category: Clothing,
        co2_grams: 3300.0,
        unit: "per pair",
        impact: High,
        description: "Denim with water and chemical-intensive production",
        eco_tip: "Buy quality jeans that last longer and wash less frequently",
    },
    ItemFootprint {
        key: "wool_sweater",
        category: Clothing,
        co2_grams: 4500.0,
        unit: "per item",
        impact: High,
        description: "Wool garment with livestock and processing emissions",
        eco_tip: "Choose recycled wool or plant-based alternatives",
    },
    ItemFootprint {
        key: "leather_shoes",
        category: Clothing,
        co2_grams: 8500.0,
        unit: "per pair",
        impact: High,
        description: "Leather product with high livestock and tanning emissions",
        eco_tip: "Consider vegan leather or recycled material shoes",
    },
    ItemFootprint {
        key: "synthetic_shoes",
        category: Clothing,
        co2_grams: 4200.0,
        unit: "per pair",
        impact: Medium,
        description: "Synthetic footwear with petroleum-based materials",
        eco_tip: "Look for shoes made from recycled or bio-based materials",
    },
    // Plastic & Waste
    ItemFootprint {
        key: "plastic_bottle",
        category: Plastic,
        co2_grams: 82.0,
        unit: "per 500ml bottle",
        impact: High,
        description: "Single-use plastic with high production and disposal impact",
        eco_tip: "Use a reusable water bottle to save 1,460 bottles per year",
    },
    ItemFootprint {
        key: "plastic_bag",
        category: Plastic,
        co2_grams: 6.0,
        unit: "per bag",
        impact: Medium,
        description: "Single-use plastic bag with pollution concerns",
        eco_tip: "Bring reusable bags to eliminate plastic bag waste",
    },
    ItemFootprint {
        key: "plastic_cup",
        category: Plastic,
        co2_grams: 25.0,
        unit: "per cup",
        impact: Medium,
        description: "Disposable plastic cup with single-use waste",
        eco_tip: "Use a reusable cup or mug for beverages",
    },
    ItemFootprint {
        key: "plastic_straw",
        category: Plastic,
        co2_grams: 2.0,
        unit: "per straw",
        impact: Medium,
        description: "Single-use plastic with marine pollution impact",
        eco_tip: "Use metal, bamboo, or paper straws instead",
    },
    ItemFootprint {
        key: "plastic_container",
        category: Plastic,
        co2_grams: 45.0,
        unit: "per container",
        impact: Medium,
        description: "Food packaging with recycling potential",
        eco_tip: "Reuse containers or choose products with minimal packaging",
    },
    // Appliances
    ItemFootprint {
        key: "refrigerator",
        category: Appliances,
        co2_grams: 1200.0,
        unit: "per day (kWh)",
        impact: High,
        description: "Large appliance with continuous energy consumption",
        eco_tip: "Choose Energy Star models and maintain proper temperature settings",
    },
    ItemFootprint {
        key: "washing_machine",
        category: Appliances,
        co2_grams: 800.0,
        unit: "per load",
        impact: Medium,
        description: "Appliance with water and energy consumption",
        eco_tip: "Wash in cold water and run full loads to reduce impact",
    },
    ItemFootprint {
        key: "dishwasher",
        category: Appliances,
        co2_grams: 600.0,
        unit: "per load",
        impact: Medium,
        description: "Kitchen appliance with water and energy use",
        eco_tip: "Run full loads and use eco mode to save energy",
    },
    ItemFootprint {
        key: "air_conditioner",
        category: Appliances,
        co2_grams: 2500.0,
        unit: "per day",
        impact: High,
        description: "High-energy appliance with significant emissions",
        eco_tip: "Set temperature to 78F and use fans to reduce usage",
    },
    ItemFootprint {
        key: "television",
        category: Appliances,
        co2_grams: 150.0,
        unit: "per day (8 hours)",
        impact: Medium,
        description: "Entertainment device with moderate energy consumption",
        eco_tip: "Turn off when not in use and choose energy-efficient models",
    },
    ItemFootprint {
        key: "laptop",
        category: Appliances,
        co2_grams: 65.0,
        unit: "per day (8 hours)",
        impact: Low,
        description: "Computing device with relatively low energy use",
        eco_tip: "Use power saving mode and unplug when fully charged",
    },
    // Transportation
    ItemFootprint {
        key: "car_gasoline",
        category: Transportation,
        co2_grams: 250.0,
        unit: "per km",
        impact: High,
        description: "Fossil fuel vehicle with direct emissions",
        eco_tip: "Consider electric vehicles, public transport, or cycling",
    },
    ItemFootprint {
        key: "car_electric",
        category: Transportation,
        co2_grams: 50.0,
        unit: "per km",
        impact: Medium,
        description: "Electric vehicle with grid electricity emissions",
        eco_tip: "Charge with renewable energy for even lower impact",
    },
    ItemFootprint {
        key: "bus",
        category: Transportation,
        co2_grams: 80.0,
        unit: "per km per passenger",
        impact: Medium,
        description: "Public transport with shared emissions",
        eco_tip: "Excellent choice for reducing individual transport emissions",
    },
    ItemFootprint {
        key: "train",
        category: Transportation,
        co2_grams: 45.0,
        unit: "per km per passenger",
        impact: Low,
        description: "Rail transport with efficient mass transit",
        eco_tip: "One of the most efficient forms of long-distance travel",
    },
    ItemFootprint {
        key: "bicycle",
        category: Transportation,
        co2_grams: 0.0,
        unit: "per km",
        impact: Low,
        description: "Zero-emission human-powered transport",
        eco_tip: "Perfect choice! Cycling produces no emissions and improves health",
    },
    ItemFootprint {
        key: "airplane",
        category: Transportation,
        co2_grams: 285.0,
        unit: "per km per passenger",
        impact: High,
        description: "Aviation with high altitude emissions impact",
        eco_tip: "Consider train travel for shorter distances or offset flights",
    },
    ItemFootprint {
        key: "motorcycle",
        category: Transportation,
        co2_grams: 120.0,
        unit: "per km",
        impact: Medium,
        description: "Two-wheeler with moderate fuel consumption",
        eco_tip: "Consider electric motorcycles or scooters",
    },
];

fn normalize_key(item: &str) -> String {
    item.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Exact lookup by category and item name; item names are normalized the
/// same way as catalog keys (lowercase, whitespace joined with underscores).
pub fn lookup(category: Category, item: &str) -> Option<&'static ItemFootprint> {
    let key = normalize_key(item);
    FOOTPRINTS
        .iter()
        .find(|entry| entry.category == category && entry.key == key)
}

/// Substring search over keys and descriptions, across all categories.
pub fn search(term: &str) -> Vec<&'static ItemFootprint> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }
    FOOTPRINTS
        .iter()
        .filter(|entry| {
            entry.key.contains(&term) || entry.description.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keys_are_unique_per_category() {
        for (i, a) in FOOTPRINTS.iter().enumerate() {
            for b in FOOTPRINTS.iter().skip(i + 1) {
                assert!(
                    !(a.category == b.category && a.key == b.key),
                    "duplicate entry {}",
                    a.key
                );
            }
        }
    }

    #[test]
    fn lookup_normalizes_item_names() {
        let entry = lookup(Category::Clothing, "  Cotton  Tshirt ").expect("entry");
        assert_eq!(entry.key, "cotton_tshirt");
        assert_eq!(entry.co2_grams, 2100.0);
        assert!(lookup(Category::Food, "spaceship").is_none());
        assert!(lookup(Category::Plastic, "apple").is_none());
    }

    #[test]
    fn search_matches_keys_and_descriptions() {
        let hits = search("plastic");
        assert!(hits.iter().any(|e| e.key == "plastic_bottle"));
        assert!(search("").is_empty());
    }

    #[test]
    fn labels_round_trip_and_unknowns_fall_back() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
            assert_eq!(Category::from_label(category.key()), Some(category));
        }
        assert_eq!(Category::from_label("Food Items"), Some(Category::Food));
        assert!(Category::from_label("gadgets").is_none());
        assert_eq!(multiplier_for_label("gadgets"), 1.0);
    }

    #[test]
    fn multipliers_stay_in_band() {
        for category in Category::ALL {
            let m = category.multiplier();
            assert!((1.0..=1.5).contains(&m));
        }
    }
}
