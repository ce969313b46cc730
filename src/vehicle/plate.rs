use regex::Regex;

lazy_static::lazy_static! {
    static ref PLATE_PATTERN: Regex =
        Regex::new(r"^[A-Z]{3}[0-9]{3}$").expect("licence plate pattern compiles");
}

/// Plate in canonical form: three capital letters followed by three digits.
pub fn is_valid_plate(plate: &str) -> bool {
    PLATE_PATTERN.is_match(plate)
}

/// Search form: any letter case is accepted and upper-cased.
pub fn normalize_plate(input: &str) -> Option<String> {
    let upper = input.trim().to_ascii_uppercase();
    is_valid_plate(&upper).then_some(upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_plates() {
        assert!(is_valid_plate("ABC123"));
        assert!(!is_valid_plate("abc123"));
        assert!(!is_valid_plate("AB1234"));
        assert!(!is_valid_plate("ABC12"));
        assert!(!is_valid_plate(" ABC123"));
    }

    #[test]
    fn test_normalize_plate() {
        assert_eq!(normalize_plate(" car123 ").as_deref(), Some("CAR123"));
        assert_eq!(normalize_plate("ÅBC123"), None);
        assert_eq!(normalize_plate(""), None);
    }
}
