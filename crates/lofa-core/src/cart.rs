//! Shopping cart state owned by a single shopper session.
//!
//! The cart is a plain value: every action is a read-modify-write on `items`
//! (find by id, then replace or append). Persisting it between requests is
//! the caller's concern; the type round-trips through serde unchanged.

use serde::{Deserialize, Serialize};

use crate::products::NormalizedProduct;

/// Image shown for cart lines whose product has no images.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product id, matching [`NormalizedProduct::id`].
    pub id: String,
    pub name: String,
    /// Unit price captured when the item was added.
    pub price: f64,
    pub quantity: u32,
    pub image: String,
    pub sku: String,
}

impl CartItem {
    /// Builds a cart line for `quantity` units of `product`, priced at the
    /// product's current effective price and illustrated by its primary image.
    #[must_use]
    pub fn from_product(product: &NormalizedProduct, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.effective_price(),
            quantity,
            image: product
                .primary_image()
                .map_or_else(|| PLACEHOLDER_IMAGE.to_owned(), |img| img.url.clone()),
            sku: product.slug.clone(),
        }
    }

    fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item. If a line with the same id exists, its quantity grows
    /// by the new item's quantity and the existing line is otherwise kept.
    pub fn add_item(&mut self, item: CartItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
        } else {
            self.items.push(item);
        }
    }

    /// Removes the line with `id`. Returns `true` if a line was removed.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() < len_before
    }

    /// Sets the quantity of the line with `id`; a quantity of zero removes it.
    ///
    /// Returns `true` if a matching line was found.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_item(id);
        }

        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
