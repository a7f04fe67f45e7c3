/// Environment variable holding the optional text-generation credential
pub const ENV_GEMINI_KEY_VAR: &str = "GEMINI_API_KEY";

/// Check for a generator key in the GEMINI_API_KEY environment variable.
/// Returns Some(key) if the env var is set and non-empty, None otherwise.
pub fn get_gemini_key_from_env() -> Option<String> {
    gemini_key_from(|name| std::env::var(name).ok())
}

fn gemini_key_from<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(ENV_GEMINI_KEY_VAR)
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_present() {
        let key = gemini_key_from(|name| (name == ENV_GEMINI_KEY_VAR).then(|| " abc ".to_string()));
        assert_eq!(key.as_deref(), Some("abc"));
    }

    #[test]
    fn test_blank_key_is_absent() {
        assert!(gemini_key_from(|_| Some("   ".to_string())).is_none());
    }

    #[test]
    fn test_missing_key_is_absent() {
        assert!(gemini_key_from(|_| None).is_none());
    }
}
