//! Text blocks shown on screen and appended to the transcript file.
//!
//! The layout is consumed by whatever reads the transcript, so labels,
//! indentation and line breaks must stay exactly as they are.

use std::fmt::Write;

use bigdecimal::BigDecimal;

use crate::domain::order::{Order, OrderLineItem};
use crate::domain::pricing::PriceReferenceGroup;

const HEADER_INDENT: &str = "    ";

/// `12.5` -> `12.50 €`.
pub fn format_money(value: &BigDecimal) -> String {
    format!("{:.2} €", value)
}

/// One line of the order list.
pub fn format_order_summary(order: &Order) -> String {
    format!(
        "{} - {} - {} {} - {}",
        order.id,
        order.reference,
        order.customer_first_name,
        order.customer_last_name,
        format_money(&order.total_paid)
    )
}

pub fn format_order(order: &Order, items: &[OrderLineItem]) -> String {
    let header = [
        format!("Pedido ID: {}", order.id),
        format!("Referencia: {}", order.reference),
        format!("Total: {}", format_money(&order.total_paid)),
        format!("Fecha: {}", order.date_added),
        format!(
            "Cliente: {} {}",
            order.customer_first_name, order.customer_last_name
        ),
        format!("Correo: {}", order.customer_email),
        format!(
            "Dirección: {}, {} - {}",
            order.delivery_address, order.city, order.postal_code
        ),
    ];

    let mut out = String::from("\n");
    for line in header {
        let _ = writeln!(out, "{HEADER_INDENT}{line}");
    }
    out.push_str(HEADER_INDENT);
    out.push_str("\nProductos:\n");
    for item in items {
        let _ = writeln!(
            out,
            "{} - Referencia: {} - Cantidad: {} - Precio: {}",
            item.product_name,
            item.product_reference,
            item.quantity,
            format_money(&item.unit_price)
        );
    }
    out
}

/// One paragraph per group, each followed by a blank line.
pub fn format_price_groups(groups: &[PriceReferenceGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        let _ = writeln!(
            out,
            "Referencia: {} - {}",
            group.effective_reference, group.product_name
        );
        for price in &group.prices {
            match price {
                Some(price) => {
                    let _ = writeln!(out, "Precio: {}", format_money(price));
                }
                None => out.push_str("Precio: N/A\n"),
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use chrono::NaiveDate;

    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).expect("valid decimal")
    }

    fn order() -> Order {
        Order {
            id: 42,
            reference: "XKBKNABJK".to_string(),
            total_paid: dec("61.800000"),
            date_added: NaiveDate::from_ymd_opt(2024, 1, 2)
                .and_then(|d| d.and_hms_opt(10, 30, 0))
                .expect("valid date"),
            current_state: 2,
            customer_first_name: "José".to_string(),
            customer_last_name: "Núñez".to_string(),
            customer_email: "jose@example.com".to_string(),
            delivery_address: "Calle Mayor 1".to_string(),
            city: "Madrid".to_string(),
            postal_code: "28013".to_string(),
        }
    }

    #[test]
    fn money_has_two_decimals_and_unit() {
        assert_eq!(format_money(&dec("12.5")), "12.50 €");
        assert_eq!(format_money(&dec("7")), "7.00 €");
        assert_eq!(format_money(&dec("19.990000")), "19.99 €");
        assert_eq!(format_money(&dec("0.000000")), "0.00 €");
        assert_eq!(format_money(&dec("0")), "0.00 €");
    }

    #[test]
    fn summary_line() {
        assert_eq!(
            format_order_summary(&order()),
            "42 - XKBKNABJK - José Núñez - 61.80 €"
        );
    }

    #[test]
    fn order_block_layout() {
        let items = vec![
            OrderLineItem {
                product_name: "Taza - Color : Blanco".to_string(),
                product_reference: "demo_13".to_string(),
                quantity: 2,
                unit_price: dec("11.900000"),
            },
            OrderLineItem {
                product_name: "Cuaderno".to_string(),
                product_reference: "demo_8".to_string(),
                quantity: 1,
                unit_price: dec("38"),
            },
        ];

        let expected = "\n    Pedido ID: 42\n    Referencia: XKBKNABJK\n    Total: 61.80 €\n    Fecha: 2024-01-02 10:30:00\n    Cliente: José Núñez\n    Correo: jose@example.com\n    Dirección: Calle Mayor 1, Madrid - 28013\n    \nProductos:\nTaza - Color : Blanco - Referencia: demo_13 - Cantidad: 2 - Precio: 11.90 €\nCuaderno - Referencia: demo_8 - Cantidad: 1 - Precio: 38.00 €\n";
        assert_eq!(format_order(&order(), &items), expected);
    }

    #[test]
    fn order_block_without_items_keeps_products_header() {
        assert!(format_order(&order(), &[]).ends_with("    \nProductos:\n"));
    }

    #[test]
    fn price_groups_render_paragraphs() {
        let groups = vec![
            PriceReferenceGroup {
                effective_reference: "A".to_string(),
                product_name: "Mesa".to_string(),
                prices: vec![Some(dec("10.0")), Some(dec("12.5"))],
            },
            PriceReferenceGroup {
                effective_reference: "B".to_string(),
                product_name: "Silla".to_string(),
                prices: vec![None, Some(dec("0.000000"))],
            },
        ];

        assert_eq!(
            format_price_groups(&groups),
            "Referencia: A - Mesa\nPrecio: 10.00 €\nPrecio: 12.50 €\n\nReferencia: B - Silla\nPrecio: N/A\nPrecio: 0.00 €\n\n"
        );
    }

    #[test]
    fn null_price_is_not_formatted_as_number() {
        let groups = vec![PriceReferenceGroup {
            effective_reference: "R".to_string(),
            product_name: "P".to_string(),
            prices: vec![None],
        }];
        let text = format_price_groups(&groups);
        assert!(text.contains("Precio: N/A\n"));
        assert!(!text.contains('€'));
    }
}
