use std::collections::HashMap;
use std::sync::Mutex;

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
}

#[test]
fn from_lookup_reads_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("STATIC_DIR", "/srv/prithi")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.static_dir, PathBuf::from("/srv/prithi"));
}

#[test]
fn from_lookup_treats_blank_values_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "  "), ("STATIC_DIR", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
}

#[test]
fn from_lookup_rejects_invalid_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidPort { ref value } if value == "70000"));
    assert!(err.to_string().contains("70000"));

    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidPort { .. }));
}

#[test]
fn bind_addr_listens_on_all_interfaces() {
    let cfg = ServerConfig { port: 4000, static_dir: PathBuf::from("public") };
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:4000");
}

#[test]
fn from_env_reads_process_environment() {
    let _guard = ENV_LOCK.lock().unwrap();
    unsafe {
        std::env::set_var("PORT", "5050");
        std::env::remove_var("STATIC_DIR");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 5050);
    assert_eq!(cfg.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));

    unsafe { std::env::remove_var("PORT") };
}
