use serde::{Deserialize, Serialize};

use super::choice_field;

choice_field!(Product {
    Eggs => "EGGS", "Eggs";
    Milk => "MILK", "Milk";
    Tomatoes => "TOMATOES", "Tomatoes";
    Manure => "MANURE", "Manure";
    Other => "OTHER", "Other";
});

choice_field!(PaymentStatus {
    Paid => "PAID", "Paid";
    Partial => "PARTIAL", "Partial";
    Pending => "PENDING", "Pending";
});

choice_field!(ExpenseCategory {
    Feed => "FEED", "Feed";
    Labor => "LABOR", "Labor";
    Fuel => "FUEL", "Fuel";
    Maintenance => "MAINTENANCE", "Maintenance";
    Treatment => "TREATMENT", "Treatment";
    Other => "OTHER", "Other";
});

/// A recorded sale. `total_amount` is computed server-side when omitted, so
/// local state always takes the backend's version of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,
    pub date: String,
    pub product: Product,
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
    pub unit_price: String,
    #[serde(default)]
    pub total_amount: String,
    #[serde(default)]
    pub customer_name: String,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub invoice_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleFields {
    pub date: String,
    pub product: Product,
    pub quantity: String,
    pub unit: String,
    pub unit_price: String,
    pub total_amount: String,
    pub customer_name: String,
    pub payment_status: PaymentStatus,
}

impl Default for SaleFields {
    fn default() -> Self {
        Self {
            date: String::new(),
            product: Product::Eggs,
            quantity: String::new(),
            unit: String::new(),
            unit_price: String::new(),
            total_amount: String::new(),
            customer_name: String::new(),
            payment_status: PaymentStatus::Paid,
        }
    }
}

impl From<&Sale> for SaleFields {
    fn from(sale: &Sale) -> Self {
        Self {
            date: sale.date.clone(),
            product: sale.product,
            quantity: sale.quantity.clone(),
            unit: sale.unit.clone(),
            unit_price: sale.unit_price.clone(),
            total_amount: sale.total_amount.clone(),
            customer_name: sale.customer_name.clone(),
            payment_status: sale.payment_status,
        }
    }
}

/// A recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expenditure {
    pub id: String,
    pub date: String,
    pub category: ExpenseCategory,
    pub amount: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenditureFields {
    pub date: String,
    pub category: ExpenseCategory,
    pub amount: String,
    pub description: String,
}

impl Default for ExpenditureFields {
    fn default() -> Self {
        Self {
            date: String::new(),
            category: ExpenseCategory::Feed,
            amount: String::new(),
            description: String::new(),
        }
    }
}

impl From<&Expenditure> for ExpenditureFields {
    fn from(expense: &Expenditure) -> Self {
        Self {
            date: expense.date.clone(),
            category: expense.category,
            amount: expense.amount.clone(),
            description: expense.description.clone(),
        }
    }
}
