#![forbid(unsafe_code)]

use crate::ids::ItemId;
use crate::model::Product;

pub const CATEGORIES: &[&str] = &["electronics", "clothing", "books", "home"];

const fn product(
    id: u64,
    name: &'static str,
    category: &'static str,
    price: u32,
    rating: f32,
    image: &'static str,
) -> Product {
    Product {
        id: ItemId::new(id),
        name,
        category,
        price,
        rating,
        image,
    }
}

static PRODUCTS: [Product; 12] = [
    product(1, "Smartphone", "electronics", 15000, 4.5, "https://via.placeholder.com/200x150?text=Smartphone"),
    product(2, "Laptop", "electronics", 25000, 4.7, "https://via.placeholder.com/200x150?text=Laptop"),
    product(3, "T-shirt", "clothing", 1500, 4.2, "https://via.placeholder.com/200x150?text=T-shirt"),
    product(4, "Jeans", "clothing", 3000, 4.4, "https://via.placeholder.com/200x150?text=Jeans"),
    product(5, "Book: JavaScript Guide", "books", 30, 4.8, "https://via.placeholder.com/200x150?text=Book"),
    product(6, "Garden Hose", "home", 50, 4.1, "https://via.placeholder.com/200x150?text=Hose"),
    product(7, "Headphones", "electronics", 3000, 4.6, "https://via.placeholder.com/200x150?text=Headphones"),
    product(8, "Sneakers", "clothing", 2500, 4.3, "https://via.placeholder.com/200x150?text=Sneakers"),
    product(9, "Tablet", "electronics", 20000, 4.4, "https://via.placeholder.com/200x150?text=Tablet"),
    product(10, "Cookbook", "books", 20, 4.0, "https://via.placeholder.com/200x150?text=Cookbook"),
    product(11, "Lamp", "home", 35, 4.2, "https://via.placeholder.com/200x150?text=Lamp"),
    product(12, "Mouse", "electronics", 500, 4.1, "https://via.placeholder.com/200x150?text=Mouse"),
];

pub fn products() -> &'static [Product] {
    &PRODUCTS
}

pub fn find(products: &[Product], id: ItemId) -> Option<&Product> {
    products.iter().find(|product| product.id == id)
}

/// Star bar shown next to a rating: one star per whole point.
pub fn stars(rating: f32) -> String {
    let whole = rating.max(0.0).floor() as usize;
    "⭐".repeat(whole)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique_and_resolvable() {
        let mut ids = products().iter().map(|p| p.id).collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), products().len());
        assert_eq!(find(products(), ItemId::new(6)).map(|p| p.name), Some("Garden Hose"));
        assert!(find(products(), ItemId::new(99)).is_none());
    }

    #[test]
    fn every_product_uses_a_known_category() {
        assert!(products().iter().all(|p| CATEGORIES.contains(&p.category)));
    }

    #[test]
    fn stars_floor_the_rating() {
        assert_eq!(stars(4.7), "⭐⭐⭐⭐");
        assert_eq!(stars(0.4), "");
    }
}
