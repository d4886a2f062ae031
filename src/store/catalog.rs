// SPDX-License-Identifier: MPL-2.0
//! Static supplement catalog.

/// Stable identifier of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub u32);

/// One catalog entry. Product copy is literal data, not translation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: &'static str,
    pub tagline: &'static str,
    pub price_cents: u32,
    pub servings: u32,
}

impl Product {
    /// Price formatted for display.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

const PRODUCTS: &[Product] = &[
    Product {
        id: ProductId(1),
        name: "Vitamin D3 2000 IU",
        tagline: "Immune and bone support",
        price_cents: 1299,
        servings: 90,
    },
    Product {
        id: ProductId(2),
        name: "Magnesium Glycinate",
        tagline: "Calm, absorbable magnesium",
        price_cents: 1849,
        servings: 60,
    },
    Product {
        id: ProductId(3),
        name: "Omega-3 Fish Oil",
        tagline: "EPA/DHA from wild-caught fish",
        price_cents: 2399,
        servings: 120,
    },
    Product {
        id: ProductId(4),
        name: "Ashwagandha KSM-66",
        tagline: "Stress and recovery support",
        price_cents: 1999,
        servings: 60,
    },
    Product {
        id: ProductId(5),
        name: "Zinc Picolinate 25 mg",
        tagline: "Daily trace mineral",
        price_cents: 899,
        servings: 100,
    },
    Product {
        id: ProductId(6),
        name: "Creatine Monohydrate",
        tagline: "Micronized, unflavored",
        price_cents: 2799,
        servings: 80,
    },
];

/// All catalog products, in display order.
#[must_use]
pub fn all() -> &'static [Product] {
    PRODUCTS
}

/// Looks up a product by id.
#[must_use]
pub fn by_id(id: ProductId) -> Option<&'static Product> {
    PRODUCTS.iter().find(|product| product.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = all().iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn by_id_finds_known_products() {
        let product = by_id(ProductId(3)).expect("omega-3 exists");
        assert!(product.name.contains("Omega-3"));
        assert!(by_id(ProductId(999)).is_none());
    }

    #[test]
    fn price_label_formats_cents() {
        let product = by_id(ProductId(5)).unwrap();
        assert_eq!(product.price_label(), "$8.99");
    }
}
