//! Environment-driven tuning for property suites.
//!
//! Every suite reads the same two variables so CI can raise case counts or
//! enable forking in one place.

use std::env;

/// Overrides the number of cases per property.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Runs each case in a forked subprocess when truthy.
pub const HAKIMI_PBT_FORK_ENV_KEY: &str = "HAKIMI_PBT_FORK";

/// Case count and fork setting for one property-suite run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Reads the profile from the environment, falling back to the supplied
    /// defaults for missing or malformed values.
    ///
    /// # Examples
    ///
    /// ```
    /// use hakimi_test_support::proptest_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: env_override(PROGTEST_CASES_ENV_KEY, parse_cases).unwrap_or(default_cases),
            fork: env_override(HAKIMI_PBT_FORK_ENV_KEY, parse_switch).unwrap_or(default_fork),
        }
    }

    /// Cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cases(&self) -> u32 { self.cases }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    #[rustfmt::skip]
    pub const fn fork(&self) -> bool { self.fork }
}

/// Parses `key` when it is set, warning and returning `None` when the value
/// is malformed.
fn env_override<T>(key: &'static str, parse: fn(&str) -> Result<T, String>) -> Option<T> {
    let raw = env::var(key).ok()?;
    parse(&raw)
        .inspect_err(|reason| {
            tracing::warn!(
                env = key,
                raw = %raw,
                reason = %reason,
                "ignoring malformed property-test override",
            );
        })
        .ok()
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

fn parse_switch(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("`{other}` is not a boolean switch")),
    }
}
