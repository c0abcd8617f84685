//! Derived read-only views over fetched collections.
//!
//! All functions here are pure: they iterate a borrowed slice and never
//! mutate it. Collections in this system are small (hundreds of rows), so
//! recomputing on render is fine.

use crate::models::commerce::{Expenditure, Sale};
use crate::models::inventory::Consumable;
use crate::models::livestock::Livestock;
use crate::models::produce::{ProduceRecord, ProduceType};

/// Lenient decimal-string parse. The backend serializes decimals as strings;
/// blanks and garbage count as zero rather than poisoning a total.
pub fn parse_amount(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

/// Gross revenue across all sales.
pub fn total_sales(sales: &[Sale]) -> f64 {
    sales.iter().map(|s| parse_amount(&s.total_amount)).sum()
}

/// Gross spend across all expenditures.
pub fn total_expenditure(expenses: &[Expenditure]) -> f64 {
    expenses.iter().map(|e| parse_amount(&e.amount)).sum()
}

/// Head count: sum of per-record quantities (poultry records batch many
/// birds into one row).
pub fn total_livestock(animals: &[Livestock]) -> u32 {
    animals.iter().map(|a| a.quantity).sum()
}

/// Total quantity of one produce type recorded on one date.
pub fn daily_yield(records: &[ProduceRecord], produce_type: ProduceType, date: &str) -> f64 {
    records
        .iter()
        .filter(|r| r.produce_type == produce_type && r.date == date)
        .map(|r| parse_amount(&r.quantity))
        .sum()
}

/// Consumables at or below their reorder threshold.
pub fn low_stock(consumables: &[Consumable]) -> Vec<&Consumable> {
    consumables
        .iter()
        .filter(|c| parse_amount(&c.quantity_on_hand) <= parse_amount(&c.reorder_threshold))
        .collect()
}

/// Inclusive ISO-date range check. ISO-8601 dates compare correctly as
/// strings; empty bounds are open.
pub fn in_date_range(date: &str, from: &str, to: &str) -> bool {
    (from.is_empty() || date >= from) && (to.is_empty() || date <= to)
}

/// Case-insensitive substring match for free-text search boxes.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::commerce::{ExpenseCategory, PaymentStatus, Product};

    fn sale(total: &str) -> Sale {
        Sale {
            id: "s".to_string(),
            date: "2025-06-01".to_string(),
            product: Product::Milk,
            quantity: "10".to_string(),
            unit: "liters".to_string(),
            unit_price: "50".to_string(),
            total_amount: total.to_string(),
            customer_name: String::new(),
            payment_status: PaymentStatus::Paid,
            invoice_number: String::new(),
        }
    }

    fn record(produce_type: ProduceType, date: &str, quantity: &str) -> ProduceRecord {
        ProduceRecord {
            id: "p".to_string(),
            date: date.to_string(),
            produce_type,
            quantity: quantity.to_string(),
            unit: String::new(),
            morning_yield: None,
            noon_yield: None,
            evening_yield: None,
            crates: None,
        }
    }

    fn consumable(on_hand: &str, threshold: &str) -> Consumable {
        Consumable {
            id: "c".to_string(),
            item_name: "Dairy meal".to_string(),
            sku: String::new(),
            unit: "kg".to_string(),
            quantity_on_hand: on_hand.to_string(),
            reorder_threshold: threshold.to_string(),
            unit_price: None,
        }
    }

    #[test]
    fn test_parse_amount_tolerates_blanks() {
        assert_eq!(parse_amount("500.50"), 500.5);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("n/a"), 0.0);
    }

    #[test]
    fn test_totals() {
        let sales = vec![sale("100.00"), sale("250.50"), sale("")];
        assert_eq!(total_sales(&sales), 350.5);

        let expenses = vec![Expenditure {
            id: "e".to_string(),
            date: "2025-06-01".to_string(),
            category: ExpenseCategory::Feed,
            amount: "1200".to_string(),
            description: String::new(),
        }];
        assert_eq!(total_expenditure(&expenses), 1200.0);
    }

    #[test]
    fn test_daily_yield_filters_type_and_date() {
        let records = vec![
            record(ProduceType::Milk, "2025-06-01", "12.5"),
            record(ProduceType::Milk, "2025-06-01", "7.5"),
            record(ProduceType::Milk, "2025-06-02", "9.0"),
            record(ProduceType::Eggs, "2025-06-01", "30"),
        ];
        assert_eq!(daily_yield(&records, ProduceType::Milk, "2025-06-01"), 20.0);
        assert_eq!(daily_yield(&records, ProduceType::Eggs, "2025-06-02"), 0.0);
    }

    #[test]
    fn test_low_stock_is_inclusive_at_threshold() {
        let items = vec![consumable("5", "10"), consumable("10", "10"), consumable("11", "10")];
        assert_eq!(low_stock(&items).len(), 2);
    }

    #[test]
    fn test_date_range_bounds_are_optional() {
        assert!(in_date_range("2025-06-15", "", ""));
        assert!(in_date_range("2025-06-15", "2025-06-01", "2025-06-30"));
        assert!(!in_date_range("2025-05-31", "2025-06-01", ""));
        assert!(!in_date_range("2025-07-01", "", "2025-06-30"));
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Friesian Cross", "friesian"));
        assert!(contains_ci("anything", ""));
        assert!(!contains_ci("C001", "c002"));
    }
}
