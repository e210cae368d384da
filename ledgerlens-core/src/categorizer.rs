//! Keyword-driven spending categorization.
//!
//! No LLM needed — lowercase substring match against a fixed vocabulary
//! covers typical statement descriptions.

use crate::transaction::Category;

/// Priority-ordered keyword table. Earlier entries win when a description
/// matches more than one category.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Groceries,
        &[
            "supermarket",
            "grocery",
            "tesco",
            "coles",
            "woolworths",
            "aldi",
            "fresh",
            "markets",
            "food store",
        ],
    ),
    (
        Category::Transport,
        &[
            "uber", "lyft", "taxi", "bus", "train", "railway", "ptv", "metro", "parking",
            "gas station", "fuel", "petrol", "diesel",
        ],
    ),
    (
        Category::Utilities,
        &[
            "electricity",
            "water",
            "gas",
            "internet",
            "phone",
            "mobile",
            "telecom",
            "utility",
        ],
    ),
    (Category::Rent, &["rent", "landlord", "property", "housing"]),
    (
        Category::Education,
        &[
            "tuition",
            "school",
            "university",
            "college",
            "course",
            "training",
            "books",
            "education",
        ],
    ),
    (
        Category::Shopping,
        &[
            "mall", "store", "amazon", "ebay", "shopping", "boutique", "fashion", "retail",
            "target", "walmart",
        ],
    ),
    (
        Category::Food,
        &[
            "restaurant",
            "cafe",
            "coffee",
            "pizza",
            "burger",
            "diner",
            "bistro",
            "bar",
            "pub",
            "fast food",
            "delivery",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "cinema", "movie", "theater", "concert", "music", "gaming", "netflix", "spotify",
            "game",
        ],
    ),
    (
        Category::Healthcare,
        &[
            "pharmacy", "hospital", "doctor", "clinic", "medical", "dental", "health",
        ],
    ),
];

/// Categorize a transaction description. Total: unknown descriptions fall
/// through to [`Category::Misc`].
pub fn categorize(description: &str) -> Category {
    let desc = description.to_lowercase();

    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| desc.contains(keyword)) {
            return *category;
        }
    }

    Category::Misc
}
