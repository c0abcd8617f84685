use serde::{Deserialize, Serialize};

use super::choice_field;

choice_field!(ProduceType {
    Milk => "MILK", "Milk";
    Eggs => "EGGS", "Eggs";
    Maize => "MAIZE", "Maize";
    Other => "OTHER", "Other";
});

/// One day's produce entry. Milk records carry session yields and the
/// backend derives `quantity` from them; everything else records `quantity`
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProduceRecord {
    pub id: String,
    pub date: String,
    pub produce_type: ProduceType,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub morning_yield: Option<String>,
    #[serde(default)]
    pub noon_yield: Option<String>,
    #[serde(default)]
    pub evening_yield: Option<String>,
    #[serde(default)]
    pub crates: Option<String>,
}

/// Create/update payload. Session yields are sent only for milk; `quantity`
/// only for the rest (the backend computes milk totals itself).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProduceFields {
    pub date: String,
    pub produce_type: ProduceType,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morning_yield: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noon_yield: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evening_yield: Option<String>,
}

impl ProduceFields {
    /// Blank form for a given tab, with the unit the type conventionally uses.
    pub fn for_type(produce_type: ProduceType, date: String) -> Self {
        let unit = match produce_type {
            ProduceType::Milk => "liters",
            ProduceType::Eggs => "eggs",
            _ => "bags",
        };
        Self {
            date,
            produce_type,
            unit: unit.to_string(),
            quantity: None,
            morning_yield: None,
            noon_yield: None,
            evening_yield: None,
        }
    }
}

impl From<&ProduceRecord> for ProduceFields {
    fn from(record: &ProduceRecord) -> Self {
        Self {
            date: record.date.clone(),
            produce_type: record.produce_type,
            unit: record.unit.clone(),
            quantity: Some(record.quantity.clone()).filter(|q| !q.is_empty()),
            morning_yield: record.morning_yield.clone(),
            noon_yield: record.noon_yield.clone(),
            evening_yield: record.evening_yield.clone(),
        }
    }
}
