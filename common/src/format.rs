use chrono::{DateTime, Datelike, Utc};

/// Formats a CHF budget for display. Amounts from 1000 up are shown in
/// thousands with one decimal, e.g. 5000 -> "CHF 5.0k".
pub fn format_budget(budget: i64) -> String {
    if budget >= 1000 {
        format!("CHF {:.1}k", budget as f64 / 1000.0)
    } else {
        format!("CHF {}", budget)
    }
}

/// German relative-time string for a creation timestamp.
pub fn time_ago(date: DateTime<Utc>) -> String {
    let diff_in_hours = (Utc::now() - date).num_hours();

    if diff_in_hours < 1 {
        "Vor weniger als einer Stunde".to_string()
    } else if diff_in_hours < 24 {
        format!(
            "Vor {} Stunde{}",
            diff_in_hours,
            if diff_in_hours > 1 { "n" } else { "" }
        )
    } else {
        let diff_in_days = diff_in_hours / 24;
        format!(
            "Vor {} Tag{}",
            diff_in_days,
            if diff_in_days > 1 { "en" } else { "" }
        )
    }
}

pub fn joined_year(date: DateTime<Utc>) -> i32 {
    date.year()
}

pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let (local, domain) = match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if email.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    // domain needs a dot with something on both sides
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn is_valid_url(url: &str) -> bool {
    url::Url::parse(url).is_ok()
}

/// Strips formatting characters and regroups Swiss numbers as
/// "+41 XX XXX XX XX". Anything else is returned digits-only.
pub fn format_phone_number(phone: &str) -> String {
    let cleaned: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if let Some(rest) = cleaned.strip_prefix("+41") {
        if rest.len() == 9 && rest.chars().all(|c| c.is_ascii_digit()) {
            return format!(
                "+41 {} {} {} {}",
                &rest[0..2],
                &rest[2..5],
                &rest[5..7],
                &rest[7..9]
            );
        }
    }

    cleaned
}

pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_length).collect();
    format!("{}...", cut.trim_end())
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn budget_formatting() {
        assert_eq!(format_budget(500), "CHF 500");
        assert_eq!(format_budget(999), "CHF 999");
        assert_eq!(format_budget(1000), "CHF 1.0k");
        assert_eq!(format_budget(5000), "CHF 5.0k");
        assert_eq!(format_budget(12500), "CHF 12.5k");
    }

    #[test]
    fn relative_times_in_german() {
        assert_eq!(
            time_ago(Utc::now() - Duration::minutes(10)),
            "Vor weniger als einer Stunde"
        );
        assert_eq!(time_ago(Utc::now() - Duration::hours(1)), "Vor 1 Stunde");
        assert_eq!(time_ago(Utc::now() - Duration::hours(5)), "Vor 5 Stunden");
        assert_eq!(time_ago(Utc::now() - Duration::days(1)), "Vor 1 Tag");
        assert_eq!(time_ago(Utc::now() - Duration::days(3)), "Vor 3 Tagen");
    }

    #[test]
    fn email_validation() {
        assert!(is_valid_email("a@b.ch"));
        assert!(is_valid_email("hans.muster@example.com"));
        assert!(!is_valid_email("nope"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.ch"));
        assert!(!is_valid_email("@b.ch"));
    }

    #[test]
    fn swiss_phone_grouping() {
        assert_eq!(format_phone_number("+41 79 123 45 67"), "+41 79 123 45 67");
        assert_eq!(format_phone_number("+41791234567"), "+41 79 123 45 67");
        assert_eq!(format_phone_number("044-123-4567"), "0441234567");
    }

    #[test]
    fn truncation_and_initials() {
        assert_eq!(truncate_text("kurz", 10), "kurz");
        assert_eq!(truncate_text("ein langer Text", 10), "ein langer...");
        assert_eq!(initials("Acme AG"), "AA");
        assert_eq!(initials("hans"), "H");
    }
}
