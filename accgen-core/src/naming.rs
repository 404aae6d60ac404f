//! Identifier transforms used to derive accessor method names.
//!
//! Generated method names are part of the public API of the generated code,
//! so these functions must stay byte-for-byte stable across releases.

/// Convert a property identifier to an upper-camel-case word
/// (e.g., "full_name" -> "FullName", "first-name" -> "FirstName").
///
/// Underscores and dashes act as word separators. Only the first character of
/// every word is uppercased; the rest of the word is kept as written, so
/// "userID" becomes "UserID".
pub fn classify(word: &str) -> String {
    word.replace(['_', '-'], " ")
        .split(' ')
        .map(upper_first)
        .collect()
}

/// Convert a property identifier to lower-camel-case
/// (e.g., "is_active" -> "isActive").
pub fn camelize(word: &str) -> String {
    let classified = classify(word);
    let mut chars = classified.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_ascii_lowercase().to_string() + chars.as_str(),
    }
}

/// Returns true if `name` already reads like a boolean accessor.
///
/// Matches names starting with `is` directly followed by an underscore, an
/// uppercase ASCII letter or a digit (`is_active`, `isActive`, `is2fa`), but
/// not words that merely start with the letters "is" (`issue`, `island`).
pub fn has_is_prefix(name: &str) -> bool {
    name.strip_prefix("is")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c == '_' || c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Plural words that do not follow the suffix rules.
const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("teeth", "tooth"),
    ("feet", "foot"),
];

/// Words that are the same in singular and plural.
const UNCOUNTABLE: &[&str] = &[
    "data",
    "equipment",
    "information",
    "media",
    "metadata",
    "money",
    "news",
    "series",
    "species",
];

/// Best-effort English singular form of the last word of an identifier
/// (e.g., "addresses" -> "address", "user_categories" -> "user_category").
///
/// Used for the element parameter of collection add/remove methods.
pub fn singularize(word: &str) -> String {
    let (head, last) = split_last_word(word);
    let lower = last.to_ascii_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    if let Some((_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == lower) {
        return format!("{}{}", head, match_case(last, singular));
    }

    let singular = if lower.len() > 3 && lower.ends_with("ies") {
        format!("{}y", &last[..last.len() - 3])
    } else if lower.ends_with("sses")
        || lower.ends_with("xes")
        || lower.ends_with("ches")
        || lower.ends_with("shes")
        || lower.ends_with("zzes")
    {
        last[..last.len() - 2].to_string()
    } else if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        last.to_string()
    } else if let Some(stripped) = last.strip_suffix(['s', 'S']) {
        stripped.to_string()
    } else {
        last.to_string()
    };

    format!("{}{}", head, singular)
}

/// Split an identifier before its last word, honouring `_`, `-` and
/// camel-case boundaries.
fn split_last_word(word: &str) -> (&str, &str) {
    let boundary = word
        .char_indices()
        .rev()
        .find(|(i, c)| *c == '_' || *c == '-' || (*i > 0 && c.is_ascii_uppercase()))
        .map(|(i, c)| if c.is_ascii_uppercase() { i } else { i + 1 });

    match boundary {
        Some(i) => word.split_at(i),
        None => ("", word),
    }
}

fn match_case(original: &str, replacement: &str) -> String {
    if original.starts_with(|c: char| c.is_ascii_uppercase()) {
        upper_first(replacement)
    } else {
        replacement.to_string()
    }
}

fn upper_first(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("name"), "Name");
        assert_eq!(classify("full_name"), "FullName");
        assert_eq!(classify("first-name"), "FirstName");
        assert_eq!(classify("fullName"), "FullName");
        assert_eq!(classify("userID"), "UserID");
        assert_eq!(classify("double__underscore"), "DoubleUnderscore");
        assert_eq!(classify("_leading"), "Leading");
        assert_eq!(classify(""), "");
    }

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("is_active"), "isActive");
        assert_eq!(camelize("isActive"), "isActive");
        assert_eq!(camelize("IsActive"), "isActive");
        assert_eq!(camelize("is_2fa_enabled"), "is2faEnabled");
        assert_eq!(camelize(""), "");
    }

    #[test]
    fn test_has_is_prefix() {
        assert!(has_is_prefix("is_active"));
        assert!(has_is_prefix("isActive"));
        assert!(has_is_prefix("is2fa"));
        assert!(!has_is_prefix("issue"));
        assert!(!has_is_prefix("island"));
        assert!(!has_is_prefix("is"));
        assert!(!has_is_prefix("active"));
        assert!(!has_is_prefix("Is_active"));
    }

    #[test]
    fn test_singularize_suffix_rules() {
        assert_eq!(singularize("users"), "user");
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("addresses"), "address");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("matches"), "match");
        assert_eq!(singularize("status"), "status");
        assert_eq!(singularize("analysis"), "analysis");
        assert_eq!(singularize("item"), "item");
    }

    #[test]
    fn test_singularize_last_word_only() {
        assert_eq!(singularize("user_categories"), "user_category");
        assert_eq!(singularize("orderLines"), "orderLine");
        assert_eq!(singularize("school_children"), "school_child");
        assert_eq!(singularize("adultPeople"), "adultPerson");
    }

    #[test]
    fn test_singularize_uncountable() {
        assert_eq!(singularize("news"), "news");
        assert_eq!(singularize("meta_data"), "meta_data");
    }
}
