//! Pre-built datasets for common query scenarios.

use serde::{Deserialize, Serialize};

/// A catalogue product, the running example for filter/order/group tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SampleProduct {
    pub id: u32,
    pub name: String,
    pub price: u32,
    pub category: String,
}

/// A product category, joinable to [`SampleProduct::category`] by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SampleCategory {
    pub name: String,
    pub aisle: u8,
}

/// Four products across two categories.
///
/// # Example
///
/// ```
/// use sequery::testing::sample_products;
///
/// let products = sample_products();
/// assert_eq!(products.len(), 4);
/// assert_eq!(products[0].name, "Laptop");
/// ```
#[must_use]
pub fn sample_products() -> Vec<SampleProduct> {
    [
        (1, "Laptop", 1000, "Electronics"),
        (2, "Mouse", 25, "Electronics"),
        (3, "Desk", 300, "Furniture"),
        (4, "Chair", 150, "Furniture"),
    ]
    .into_iter()
    .map(|(id, name, price, category)| SampleProduct {
        id,
        name: name.to_string(),
        price,
        category: category.to_string(),
    })
    .collect()
}

/// Categories for [`sample_products`], plus one (`"Garden"`) no product uses.
#[must_use]
pub fn sample_categories() -> Vec<SampleCategory> {
    vec![
        SampleCategory {
            name: "Electronics".to_string(),
            aisle: 4,
        },
        SampleCategory {
            name: "Furniture".to_string(),
            aisle: 9,
        },
        SampleCategory {
            name: "Garden".to_string(),
            aisle: 12,
        },
    ]
}
