use serde::{Deserialize, Serialize};

use super::choice_field;

choice_field!(Role {
    SuperAdmin => "SUPER_ADMIN", "Super Admin";
    FarmManager => "FARM_MANAGER", "Farm Manager";
    Veterinarian => "VETERINARIAN", "Veterinarian";
    Worker => "WORKER", "Worker";
    Accountant => "ACCOUNTANT", "Accountant";
});

/// The authenticated user, as returned by `GET users/me/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Body of `POST auth/login/`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Response of `POST auth/login/`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_backend_shape() {
        let user: User = serde_json::from_str(
            r#"{
                "id": 7,
                "email": "a@b.com",
                "full_name": "Asha B",
                "role": "FARM_MANAGER",
                "phone": "+254700000000",
                "avatar": null
            }"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::FarmManager);
        assert_eq!(user.avatar, None);
    }
}
