//! # Product Catalog Module
//!
//! Read-only catalog lookups and WhatsApp text formatting. The catalog store
//! itself is an external collaborator; this module carries a static snapshot
//! of the product and offer tables plus the formatters that turn them into
//! outbound message text.

/// One sellable product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub category: &'static str,
    pub price: f64,
    pub available: bool,
}

/// A running promotion over part of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialOffer {
    pub title: &'static str,
    pub description: &'static str,
    pub discount_percent: f64,
    pub code: &'static str,
}

/// Static product snapshot, grouped by category name.
pub const PRODUCTS: &[Product] = &[
    Product { name: "Milanesas de carne", category: "Milanesas clásicas", price: 4200.0, available: true },
    Product { name: "Milanesas de pollo", category: "Milanesas clásicas", price: 3800.0, available: true },
    Product { name: "Milanesas de cerdo", category: "Milanesas clásicas", price: 3900.0, available: true },
    Product { name: "Medallones de carne", category: "Medallones", price: 3600.0, available: true },
    Product { name: "Medallones de pollo", category: "Medallones", price: 3400.0, available: true },
    Product { name: "Medallones de espinaca", category: "Medallones", price: 3200.0, available: false },
    Product { name: "Milanesa napolitana lista", category: "Milanesas rellenas", price: 4800.0, available: true },
    Product { name: "Milanesa rellena jamón y queso", category: "Milanesas rellenas", price: 5000.0, available: true },
    Product { name: "Milanesas de soja", category: "Línea veggie", price: 2900.0, available: true },
    Product { name: "Milanesas de lentejas", category: "Línea veggie", price: 3100.0, available: true },
];

/// Currently running promotions.
pub const SPECIAL_OFFERS: &[SpecialOffer] = &[
    SpecialOffer {
        title: "2x1 en milanesas de pollo",
        description: "Todos los martes, llevando 2 kg pagás 1 kg.",
        discount_percent: 50.0,
        code: "POLLO2X1",
    },
    SpecialOffer {
        title: "Primera compra",
        description: "30% de descuento en tu primer pedido.",
        discount_percent: 30.0,
        code: "BIENVENIDA30",
    },
];

/// Products belonging to one category, in catalog order.
pub fn products_by_category(category: &str) -> Vec<&'static Product> {
    PRODUCTS.iter().filter(|p| p.category == category).collect()
}

/// Format a numbered product list for WhatsApp.
pub fn format_product_list(products: &[&Product]) -> String {
    if products.is_empty() {
        return "No se encontraron productos disponibles.".to_string();
    }

    let mut result = String::from("📋 *PRODUCTOS DISPONIBLES*\n\n");
    for (i, product) in products.iter().enumerate() {
        let availability = if product.available {
            "✅ Disponible"
        } else {
            "❌ No disponible"
        };
        result.push_str(&format!(
            "{}. *{}*\n   💰 ${:.2}/kg\n   {}\n\n",
            i + 1,
            product.name,
            product.price,
            availability
        ));
    }
    result.push_str("Para ver detalles de un producto, responde con el número o nombre del producto.");
    result
}

/// Format the running promotions for WhatsApp.
pub fn format_special_offers(offers: &[SpecialOffer]) -> String {
    if offers.is_empty() {
        return "Actualmente no hay ofertas especiales disponibles.".to_string();
    }

    let mut result = String::from("🔥 *OFERTAS ESPECIALES* 🔥\n\n");
    for (i, offer) in offers.iter().enumerate() {
        result.push_str(&format!(
            "{}. *{}*\n   {}\n   🏷️ *Descuento:* {}%\n   🎫 *Código:* {}\n\n",
            i + 1,
            offer.title,
            offer.description,
            offer.discount_percent,
            offer.code
        ));
    }
    result.push_str("Para aprovechar una oferta, responde con el código de la oferta.");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_by_category_filters() {
        let medallones = products_by_category("Medallones");
        assert_eq!(medallones.len(), 3);
        assert!(medallones.iter().all(|p| p.category == "Medallones"));
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(products_by_category("Pizzas").is_empty());
    }

    #[test]
    fn test_format_product_list_is_numbered() {
        let products = products_by_category("Milanesas clásicas");
        let text = format_product_list(&products);

        assert!(text.starts_with("📋 *PRODUCTOS DISPONIBLES*"));
        assert!(text.contains("1. *Milanesas de carne*"));
        assert!(text.contains("3. *Milanesas de cerdo*"));
    }

    #[test]
    fn test_format_product_list_empty() {
        assert_eq!(
            format_product_list(&[]),
            "No se encontraron productos disponibles."
        );
    }

    #[test]
    fn test_format_special_offers_includes_codes() {
        let text = format_special_offers(SPECIAL_OFFERS);
        assert!(text.contains("POLLO2X1"));
        assert!(text.contains("BIENVENIDA30"));
        assert!(text.contains("🔥 *OFERTAS ESPECIALES* 🔥"));
    }

    #[test]
    fn test_format_special_offers_empty() {
        assert_eq!(
            format_special_offers(&[]),
            "Actualmente no hay ofertas especiales disponibles."
        );
    }

    #[test]
    fn test_unavailable_product_is_flagged() {
        let medallones = products_by_category("Medallones");
        let text = format_product_list(&medallones);
        assert!(text.contains("❌ No disponible"));
    }
}
