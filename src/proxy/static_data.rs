//! Fixed example payloads served while the live upstreams are unavailable.
//!
//! These responders never contact an upstream; the front end can point at
//! them during development and keep rendering real-looking data.

use serde_json::{json, Value};

/// Example property listings in the WooCommerce product shape
pub fn example_properties() -> Vec<Value> {
    vec![
        json!({
            "id": 101,
            "name": "Piso luminoso en Chamberí",
            "price": "420000",
            "short_description": "3 habitaciones, 2 baños, orientación sur",
            "images": [{ "src": "/uploads/fotos/chamberi-salon.jpg" }],
            "meta_data": [
                { "key": "living_area", "value": "110" },
                { "key": "bedrooms", "value": "3" }
            ]
        }),
        json!({
            "id": 102,
            "name": "Ático con terraza en Malasaña",
            "price": "560000",
            "short_description": "2 habitaciones, terraza de 30 m²",
            "images": [{ "src": "/uploads/fotos/malasana-terraza.jpg" }],
            "meta_data": [
                { "key": "living_area", "value": "85" },
                { "key": "bedrooms", "value": "2" }
            ]
        }),
        json!({
            "id": 103,
            "name": "Chalet adosado en Las Rozas",
            "price": "690000",
            "short_description": "4 habitaciones, jardín y garaje",
            "images": [{ "src": "/uploads/fotos/lasrozas-fachada.jpg" }],
            "meta_data": [
                { "key": "living_area", "value": "210" },
                { "key": "bedrooms", "value": "4" }
            ]
        }),
    ]
}

/// Example blog posts in the WordPress REST shape
pub fn example_posts() -> Vec<Value> {
    vec![
        json!({
            "id": 11,
            "slug": "mercado-inmobiliario-madrid-2026",
            "title": { "rendered": "El mercado inmobiliario de Madrid en 2026" },
            "excerpt": { "rendered": "Qué esperar de los precios este año." },
            "date": "2026-01-20T09:00:00"
        }),
        json!({
            "id": 12,
            "slug": "consejos-vender-piso",
            "title": { "rendered": "Cinco consejos para vender tu piso" },
            "excerpt": { "rendered": "Preparar la vivienda marca la diferencia." },
            "date": "2026-03-05T09:00:00"
        }),
    ]
}

/// Arithmetic pagination: page 1 is the first slice
pub fn paginate(items: Vec<Value>, page: usize, limit: usize) -> Vec<Value> {
    let start = page.saturating_sub(1).saturating_mul(limit);
    items.into_iter().skip(start).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_two_limit_one_is_second_item() {
        let all = example_properties();
        let expected = all[1].clone();
        let page = paginate(all, 2, 1);
        assert_eq!(page, vec![expected]);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        assert!(paginate(example_posts(), 5, 10).is_empty());
    }

    #[test]
    fn test_limit_larger_than_list_returns_all() {
        assert_eq!(paginate(example_posts(), 1, 50).len(), 2);
    }

    #[test]
    fn test_zero_limit_returns_nothing() {
        assert!(paginate(example_properties(), 1, 0).is_empty());
    }
}
