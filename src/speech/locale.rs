/// Locale tag used when no language code is given or the code is unknown
pub const DEFAULT_LOCALE: &str = "en-US";

/// Resolve a short UI-facing language code to a capture-engine locale tag
///
/// Total over all inputs: unknown or absent codes resolve to [`DEFAULT_LOCALE`].
pub fn resolve_locale(language: Option<&str>) -> &'static str {
    match language {
        Some("en") => "en-US",
        Some("hi") => "hi-IN",
        Some("ta") => "ta-IN",
        Some("te") => "te-IN",
        Some("bn") => "bn-IN",
        Some("mr") => "mr-IN",
        Some("gu") => "gu-IN",
        Some("kn") => "kn-IN",
        Some("ml") => "ml-IN",
        Some("pa") => "pa-IN",
        _ => DEFAULT_LOCALE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_regional_tags() {
        assert_eq!(resolve_locale(Some("en")), "en-US");
        assert_eq!(resolve_locale(Some("hi")), "hi-IN");
        assert_eq!(resolve_locale(Some("ta")), "ta-IN");
        assert_eq!(resolve_locale(Some("pa")), "pa-IN");
    }

    #[test]
    fn unknown_code_falls_back_to_default() {
        assert_eq!(resolve_locale(Some("xx")), DEFAULT_LOCALE);
        assert_eq!(resolve_locale(Some("")), DEFAULT_LOCALE);
        assert_eq!(resolve_locale(Some("en-US")), DEFAULT_LOCALE);
    }

    #[test]
    fn absent_code_falls_back_to_default() {
        assert_eq!(resolve_locale(None), DEFAULT_LOCALE);
    }
}
