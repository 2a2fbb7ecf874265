//! Filename validation.

/// Characters rejected in portable file names. The first six are Windows
/// restrictions; NUL and `:` also break common Unix tooling.
pub const INVALID_FILE_NAME_CHARS: [char; 8] = ['"', '*', '<', '>', '?', '|', '\0', ':'];

/// True when `name` contains none of the reserved characters.
pub fn is_file_name_valid(name: &str) -> bool {
    !name.chars().any(|c| INVALID_FILE_NAME_CHARS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinary_names_are_valid() {
        assert!(is_file_name_valid("report.txt"));
        assert!(is_file_name_valid("with space"));
        assert!(is_file_name_valid("dash-dot._ok"));
        assert!(is_file_name_valid(""));
    }

    #[test]
    fn each_reserved_character_is_rejected() {
        for c in INVALID_FILE_NAME_CHARS {
            let name = format!("bad{c}name");
            assert!(!is_file_name_valid(&name), "accepted {c:?}");
        }
    }
}
