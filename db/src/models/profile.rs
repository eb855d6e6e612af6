use chrono::{DateTime, Utc};
use common::error::{AppError, Res};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::AccountType;

/// Per-user profile record, stored at `profile:<userId>`. Individual
/// profiles carry only a display name; company profiles carry the public
/// company fields. The record is created at signup and never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub account_type: AccountType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_jobs: Option<i64>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn individual(user_id: Uuid, email: String, name: String, now: DateTime<Utc>) -> Self {
        UserProfile {
            id: user_id,
            user_id,
            email,
            account_type: AccountType::Individual,
            name: Some(name),
            company_name: None,
            description: None,
            category: None,
            website: None,
            phone: None,
            location: None,
            rating: None,
            completed_jobs: None,
            created_at: now,
            updated_at: None,
            converted_at: None,
        }
    }

    pub fn company(user_id: Uuid, email: String, company_name: String, now: DateTime<Utc>) -> Self {
        UserProfile {
            id: user_id,
            user_id,
            email,
            account_type: AccountType::Company,
            name: None,
            company_name: Some(company_name),
            description: Some(String::new()),
            category: Some(String::new()),
            website: Some(String::new()),
            phone: Some(String::new()),
            location: Some(String::new()),
            rating: Some(0.0),
            completed_jobs: Some(0),
            created_at: now,
            updated_at: None,
            converted_at: None,
        }
    }

    pub fn is_company(&self) -> bool {
        self.account_type == AccountType::Company
    }

    /// One-way individual -> company conversion. The display name is
    /// dropped, company fields start empty and the original creation date
    /// is kept. A second conversion attempt is rejected.
    pub fn convert_to_company(mut self, company_name: &str, now: DateTime<Utc>) -> Res<Self> {
        if self.is_company() {
            return Err(AppError::BadRequest(
                "Account is already a company account".to_string(),
            ));
        }

        self.account_type = AccountType::Company;
        self.name = None;
        self.company_name = Some(company_name.trim().to_string());
        self.description = Some(String::new());
        self.category = Some(String::new());
        self.website = Some(String::new());
        self.phone = Some(String::new());
        self.location = Some(String::new());
        self.rating = Some(0.0);
        self.completed_jobs = Some(0);
        self.converted_at = Some(now);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_is_one_way() {
        let now = Utc::now();
        let profile = UserProfile::individual(
            Uuid::new_v4(),
            "hans@example.ch".to_string(),
            "Hans Muster".to_string(),
            now,
        );

        let converted = profile.convert_to_company("Muster GmbH", now).unwrap();
        assert_eq!(converted.account_type, AccountType::Company);
        assert_eq!(converted.company_name.as_deref(), Some("Muster GmbH"));
        assert_eq!(converted.name, None);
        assert_eq!(converted.rating, Some(0.0));
        assert_eq!(converted.created_at, now);

        // already a company, second attempt is rejected
        assert!(converted.convert_to_company("Again AG", now).is_err());
    }

    #[test]
    fn company_signup_profile_shape() {
        let profile = UserProfile::company(
            Uuid::new_v4(),
            "a@b.ch".to_string(),
            "Acme AG".to_string(),
            Utc::now(),
        );
        assert_eq!(profile.account_type, AccountType::Company);
        assert_eq!(profile.company_name.as_deref(), Some("Acme AG"));
        assert_eq!(profile.rating, Some(0.0));
        assert_eq!(profile.completed_jobs, Some(0));
    }
}
