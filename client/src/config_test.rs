use super::*;

#[test]
fn from_lookup_reads_access_key() {
    let cfg = SiteConfig::from_lookup(|key| (key == ACCESS_KEY_VAR).then(|| "abc-123".to_owned()));
    assert_eq!(cfg.access_key(), Some("abc-123"));
    assert!(cfg.reservations_enabled());
}

#[test]
fn from_lookup_trims_surrounding_whitespace() {
    let cfg = SiteConfig::from_lookup(|_| Some("  key  ".to_owned()));
    assert_eq!(cfg.access_key(), Some("key"));
}

#[test]
fn from_lookup_treats_blank_as_unset() {
    let cfg = SiteConfig::from_lookup(|_| Some("   ".to_owned()));
    assert_eq!(cfg.access_key(), None);
    assert!(!cfg.reservations_enabled());
}

#[test]
fn from_lookup_missing_key_disables_reservations() {
    let cfg = SiteConfig::from_lookup(|_| None);
    assert_eq!(cfg, SiteConfig::default());
    assert!(!cfg.reservations_enabled());
}

#[test]
fn from_build_env_matches_compile_time_value() {
    let cfg = SiteConfig::from_build_env();
    let expected = option_env!("WEB3FORMS_ACCESS_KEY")
        .map(str::trim)
        .filter(|v| !v.is_empty());
    assert_eq!(cfg.access_key(), expected);
}
