//! Site configuration captured from the build environment.
//!
//! The reservation relay key is baked in at compile time so the SSR binary
//! and the WASM bundle agree on whether the form is operative. A missing key
//! is not an error here; the contact page reports it when a guest submits.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable holding the Web3Forms access key.
pub const ACCESS_KEY_VAR: &str = "WEB3FORMS_ACCESS_KEY";

/// Read-only configuration shared through Leptos context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub web3forms_access_key: Option<String>,
}

impl SiteConfig {
    /// Build config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let web3forms_access_key = lookup(ACCESS_KEY_VAR)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty());
        Self { web3forms_access_key }
    }

    /// Build config from `WEB3FORMS_ACCESS_KEY` as seen by the compiler.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            ACCESS_KEY_VAR => option_env!("WEB3FORMS_ACCESS_KEY").map(str::to_owned),
            _ => None,
        })
    }

    /// Access key for the reservation relay, if one is configured.
    pub fn access_key(&self) -> Option<&str> {
        self.web3forms_access_key.as_deref()
    }

    pub fn reservations_enabled(&self) -> bool {
        self.web3forms_access_key.is_some()
    }
}
