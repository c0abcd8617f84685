use serde::{Deserialize, Serialize};

use super::choice_field;

choice_field!(Condition {
    New => "NEW", "New";
    Good => "GOOD", "Good";
    NeedsRepair => "NEEDS_REPAIR", "Needs Repair";
    Broken => "BROKEN", "Broken";
});

/// A durable piece of equipment (waterpump, slasher, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sku: String,
    pub quantity: u32,
    pub condition: Condition,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub purchase_price: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolFields {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub condition: Condition,
    pub location: String,
    pub notes: String,
}

impl Default for ToolFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            quantity: 1,
            condition: Condition::Good,
            location: String::new(),
            notes: String::new(),
        }
    }
}

impl From<&Tool> for ToolFields {
    fn from(tool: &Tool) -> Self {
        Self {
            name: tool.name.clone(),
            category: tool.category.clone(),
            quantity: tool.quantity,
            condition: tool.condition,
            location: tool.location.clone(),
            notes: tool.notes.clone(),
        }
    }
}

/// A stocked supply (feed, medicine, fuel) tracked against a reorder level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumable {
    pub id: String,
    pub item_name: String,
    #[serde(default)]
    pub sku: String,
    pub unit: String,
    pub quantity_on_hand: String,
    pub reorder_threshold: String,
    #[serde(default)]
    pub unit_price: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ConsumableFields {
    pub item_name: String,
    pub sku: String,
    pub unit: String,
    pub quantity_on_hand: String,
    pub reorder_threshold: String,
    pub unit_price: Option<String>,
}

impl From<&Consumable> for ConsumableFields {
    fn from(item: &Consumable) -> Self {
        Self {
            item_name: item.item_name.clone(),
            sku: item.sku.clone(),
            unit: item.unit.clone(),
            quantity_on_hand: item.quantity_on_hand.clone(),
            reorder_threshold: item.reorder_threshold.clone(),
            unit_price: item.unit_price.clone(),
        }
    }
}
