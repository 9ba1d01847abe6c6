//! Shared naming helpers for Java code generation.

use std::path::PathBuf;

/// Uppercase the first character (e.g., "firstName" -> "FirstName")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a camelCase name to a constant name (e.g., "firstName" -> "FIRST_NAME")
///
/// An underscore is inserted before an uppercase letter that follows a
/// lowercase letter or digit, so acronyms stay together ("userID" -> "USER_ID").
pub fn constantize(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c == '-' {
            result.push('_');
            prev = Some('_');
            continue;
        }
        if c.is_uppercase()
            && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit())
        {
            result.push('_');
        }
        result.extend(c.to_uppercase());
        prev = Some(c);
    }
    result
}

/// Check that a name is lowerCamelCase (e.g., "firstName", "id", "x2")
pub fn is_lower_camel_case(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric())
}

/// Directory for a Java package (e.g., "com.example.model" -> "com/example/model")
pub fn package_path(package: &str) -> PathBuf {
    package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("age"), "Age");
        assert_eq!(capitalize("firstName"), "FirstName");
        assert_eq!(capitalize("URL"), "URL");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_constantize() {
        assert_eq!(constantize("age"), "AGE");
        assert_eq!(constantize("firstName"), "FIRST_NAME");
        assert_eq!(constantize("lastLoginAt"), "LAST_LOGIN_AT");
        assert_eq!(constantize("userID"), "USER_ID");
        assert_eq!(constantize("address2Line"), "ADDRESS2_LINE");
        assert_eq!(constantize(""), "");
    }

    #[test]
    fn test_is_lower_camel_case() {
        assert!(is_lower_camel_case("firstName"));
        assert!(is_lower_camel_case("id"));
        assert!(is_lower_camel_case("line2"));
        assert!(!is_lower_camel_case("FirstName"));
        assert!(!is_lower_camel_case("first_name"));
        assert!(!is_lower_camel_case(""));
    }

    #[test]
    fn test_package_path() {
        assert_eq!(
            package_path("com.example.model"),
            PathBuf::from("com").join("example").join("model")
        );
        assert_eq!(package_path(""), PathBuf::new());
    }
}
