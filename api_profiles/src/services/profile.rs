use chrono::{DateTime, Utc};
use common::{
    error::{AppError, Res},
    format,
};
use db::models::profile::UserProfile;

use crate::dtos::profile::ProfileUpdateRequest;

/// Merges an update into the stored profile and stamps `updatedAt`.
/// The merged result is validated against the rules for its account type.
pub fn apply_update(
    mut profile: UserProfile,
    update: ProfileUpdateRequest,
    now: DateTime<Utc>,
) -> Res<UserProfile> {
    if let Some(name) = update.name {
        profile.name = Some(name);
    }
    if let Some(company_name) = update.company_name {
        profile.company_name = Some(company_name);
    }
    if let Some(description) = update.description {
        profile.description = Some(description);
    }
    if let Some(category) = update.category {
        profile.category = Some(category);
    }
    if let Some(website) = update.website {
        profile.website = Some(website);
    }
    if let Some(phone) = update.phone {
        profile.phone = Some(format::format_phone_number(&phone));
    }
    if let Some(location) = update.location {
        profile.location = Some(location);
    }
    profile.updated_at = Some(now);

    validate_profile(&profile)?;
    Ok(profile)
}

fn validate_profile(profile: &UserProfile) -> Res<()> {
    if profile.is_company() {
        if profile
            .company_name
            .as_deref()
            .is_none_or(|name| name.trim().is_empty())
        {
            return Err(AppError::BadRequest(
                "Firmenname ist erforderlich".to_string(),
            ));
        }
        if profile
            .category
            .as_deref()
            .is_none_or(|category| category.is_empty())
        {
            return Err(AppError::BadRequest(
                "Kategorie ist erforderlich".to_string(),
            ));
        }
        if let Some(website) = profile.website.as_deref() {
            if !website.is_empty() && !format::is_valid_url(website) {
                return Err(AppError::BadRequest(
                    "Ungültige Website-URL".to_string(),
                ));
            }
        }
    } else if profile.name.as_deref().is_none_or(|name| name.trim().is_empty()) {
        return Err(AppError::BadRequest("Name ist erforderlich".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn company_profile() -> UserProfile {
        let mut profile = UserProfile::company(
            Uuid::new_v4(),
            "a@b.ch".to_string(),
            "Acme AG".to_string(),
            Utc::now(),
        );
        profile.category = Some("Grafikdesign".to_string());
        profile
    }

    #[test]
    fn merge_keeps_untouched_fields() {
        let profile = company_profile();
        let updated = apply_update(
            profile.clone(),
            ProfileUpdateRequest {
                description: Some("Wir gestalten Logos".to_string()),
                location: Some("Zürich".to_string()),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap();

        assert_eq!(updated.company_name, profile.company_name);
        assert_eq!(updated.description.as_deref(), Some("Wir gestalten Logos"));
        assert_eq!(updated.location.as_deref(), Some("Zürich"));
        assert!(updated.updated_at.is_some());
    }

    #[test]
    fn company_requires_name_and_category() {
        let err = apply_update(
            company_profile(),
            ProfileUpdateRequest {
                company_name: Some("  ".to_string()),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Firmenname"));

        let err = apply_update(
            company_profile(),
            ProfileUpdateRequest {
                category: Some(String::new()),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Kategorie"));
    }

    #[test]
    fn company_website_must_be_a_url() {
        let err = apply_update(
            company_profile(),
            ProfileUpdateRequest {
                website: Some("keine-url".to_string()),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Website"));
    }

    #[test]
    fn individual_requires_display_name() {
        let profile = UserProfile::individual(
            Uuid::new_v4(),
            "h@m.ch".to_string(),
            "Hans".to_string(),
            Utc::now(),
        );
        let err = apply_update(
            profile,
            ProfileUpdateRequest {
                name: Some(String::new()),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Name"));
    }

    #[test]
    fn phone_numbers_are_normalized() {
        let updated = apply_update(
            company_profile(),
            ProfileUpdateRequest {
                phone: Some("+41 (0)79-123.45.67".replace("(0)", "")),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap();
        assert_eq!(updated.phone.as_deref(), Some("+41 79 123 45 67"));
    }
}
