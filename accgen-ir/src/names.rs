//! Helpers for namespaced type names.

/// Separator between namespace segments.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Returns true if the name starts at the namespace root (`\Foo\Bar`).
pub fn is_absolute(name: &str) -> bool {
    name.starts_with(NAMESPACE_SEPARATOR)
}

/// The last segment of a name (`Foo\Bar` -> `Bar`).
pub fn trailing_segment(name: &str) -> &str {
    name.rsplit(NAMESPACE_SEPARATOR).next().unwrap_or(name)
}

/// The first segment of a relative name if it has more than one segment
/// (`Sub\Type` -> `Some("Sub")`, `Type` -> `None`).
pub fn first_segment(name: &str) -> Option<&str> {
    name.split_once(NAMESPACE_SEPARATOR)
        .map(|(first, _)| first)
        .filter(|first| !first.is_empty())
}

/// Join a namespace and a name, leaving the name alone in the global namespace.
pub fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}{}{}", namespace, NAMESPACE_SEPARATOR, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments() {
        assert_eq!(trailing_segment("App\\Entity\\User"), "User");
        assert_eq!(trailing_segment("User"), "User");
        assert_eq!(first_segment("Sub\\Type"), Some("Sub"));
        assert_eq!(first_segment("Type"), None);
        assert_eq!(first_segment("\\Type"), None);
    }

    #[test]
    fn test_qualify() {
        assert_eq!(qualify("App\\Entity", "User"), "App\\Entity\\User");
        assert_eq!(qualify("", "User"), "User");
    }

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute("\\DateTime"));
        assert!(!is_absolute("DateTime"));
    }
}
