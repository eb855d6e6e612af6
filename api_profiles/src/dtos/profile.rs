use serde::Deserialize;

/// Partial profile update; only present fields are merged into the stored
/// record. `accountType` is deliberately absent, the only way to change it
/// is the convert-to-company operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertToCompanyRequest {
    pub company_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}
