use serde::{Deserialize, Serialize};

use super::choice_field;

choice_field!(Species {
    Cattle => "CATTLE", "Cattle";
    Poultry => "POULTRY", "Poultry";
    Goat => "GOAT", "Goat";
    Sheep => "SHEEP", "Sheep";
    Other => "OTHER", "Other";
});

choice_field!(LivestockCategory {
    Heifer => "HEIFER", "Heifer";
    Calf => "CALF", "Calf";
    Bull => "BULL", "Bull";
    Cow => "COW", "Cow";
    Buck => "BUCK", "Buck";
    Doe => "DOE", "Doe";
    Kid => "KID", "Kid";
    Ram => "RAM", "Ram";
    Ewe => "EWE", "Ewe";
    Lamb => "LAMB", "Lamb";
    Layer => "LAYER", "Layer";
    Broiler => "BROILER", "Broiler";
    Kienyeji => "KIENYEJI", "Kienyeji";
    Chick => "CHICK", "Chick";
    Other => "OTHER", "Other";
});

choice_field!(Sex {
    Male => "MALE", "Male";
    Female => "FEMALE", "Female";
});

choice_field!(LivestockStatus {
    Active => "ACTIVE", "Active";
    Sold => "SOLD", "Sold";
    Deceased => "DECEASED", "Deceased";
    Sick => "SICK", "Sick";
});

/// One animal (or flock, via `quantity`) as the backend serializes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Livestock {
    pub id: String,
    pub tag_id: String,
    #[serde(default)]
    pub name: String,
    pub species: Species,
    pub category: LivestockCategory,
    #[serde(default)]
    pub breed: String,
    pub sex: Sex,
    pub quantity: u32,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub purchase_price: Option<String>,
    pub status: LivestockStatus,
    #[serde(default)]
    pub current_weight: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub notes: String,
}

/// Create/update payload; the id is always server-assigned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LivestockFields {
    pub tag_id: String,
    pub name: String,
    pub species: Species,
    pub category: LivestockCategory,
    pub breed: String,
    pub sex: Sex,
    pub quantity: u32,
    pub status: LivestockStatus,
    pub dob: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_price: Option<String>,
    pub current_weight: Option<String>,
    pub notes: String,
}

impl Default for LivestockFields {
    fn default() -> Self {
        Self {
            tag_id: String::new(),
            name: String::new(),
            species: Species::Cattle,
            category: LivestockCategory::Other,
            breed: String::new(),
            sex: Sex::Female,
            quantity: 1,
            status: LivestockStatus::Active,
            dob: None,
            purchase_date: None,
            purchase_price: None,
            current_weight: None,
            notes: String::new(),
        }
    }
}

impl From<&Livestock> for LivestockFields {
    fn from(animal: &Livestock) -> Self {
        Self {
            tag_id: animal.tag_id.clone(),
            name: animal.name.clone(),
            species: animal.species,
            category: animal.category,
            breed: animal.breed.clone(),
            sex: animal.sex,
            quantity: animal.quantity,
            status: animal.status,
            dob: animal.dob.clone(),
            purchase_date: animal.purchase_date.clone(),
            purchase_price: animal.purchase_price.clone(),
            current_weight: animal.current_weight.clone(),
            notes: animal.notes.clone(),
        }
    }
}
