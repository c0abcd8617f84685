use serde::{Deserialize, Serialize};

use super::choice_field;

choice_field!(EmploymentType {
    Permanent => "PERMANENT", "Permanent";
    Contract => "CONTRACT", "Contract";
    Casual => "CASUAL", "Casual";
});

/// An employed worker on the payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    pub id: String,
    pub full_name: String,
    #[serde(default)]
    pub national_id: String,
    pub role: String,
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub hired_date: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerFields {
    pub full_name: String,
    pub national_id: String,
    pub role: String,
    pub employment_type: EmploymentType,
    pub phone: String,
    pub address: String,
    pub hired_date: Option<String>,
    pub salary: Option<String>,
    pub notes: String,
}

impl Default for WorkerFields {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            national_id: String::new(),
            role: String::new(),
            employment_type: EmploymentType::Permanent,
            phone: String::new(),
            address: String::new(),
            hired_date: None,
            salary: None,
            notes: String::new(),
        }
    }
}

impl From<&Worker> for WorkerFields {
    fn from(worker: &Worker) -> Self {
        Self {
            full_name: worker.full_name.clone(),
            national_id: worker.national_id.clone(),
            role: worker.role.clone(),
            employment_type: worker.employment_type,
            phone: worker.phone.clone(),
            address: worker.address.clone(),
            hired_date: worker.hired_date.clone(),
            salary: worker.salary.clone(),
            notes: worker.notes.clone(),
        }
    }
}

/// A casual/day-labor payment entry. The worker link is optional; informal
/// laborers are recorded by name only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kibarua {
    pub id: String,
    #[serde(default)]
    pub worker: Option<String>,
    #[serde(default)]
    pub worker_name: String,
    pub date: String,
    pub work_description: String,
    pub amount_paid: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct KibaruaFields {
    pub worker_name: String,
    pub date: String,
    pub work_description: String,
    pub amount_paid: String,
}

impl From<&Kibarua> for KibaruaFields {
    fn from(entry: &Kibarua) -> Self {
        Self {
            worker_name: entry.worker_name.clone(),
            date: entry.date.clone(),
            work_description: entry.work_description.clone(),
            amount_paid: entry.amount_paid.clone(),
        }
    }
}
