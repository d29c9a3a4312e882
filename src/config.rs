//! Client configuration resolved at build time.
//!
//! The WASM bundle has no process environment, so overrides are baked in
//! through `option_env!` when the crate is compiled.
//!
//! Optional:
//! - `OPTITRACK_API_URL`: API origin, default `http://localhost:5000`
//! - `OPTITRACK_REDIRECT_DELAY_MS`: pause before leaving the set-password
//!   success screen, default 2000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 2000;

/// Client-side routes this crate navigates to but does not own (except `login`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePaths {
    pub admin_dashboard: String,
    pub hr_dashboard: String,
    pub employee_dashboard: String,
    pub login: String,
}

impl Default for RoutePaths {
    fn default() -> Self {
        Self {
            admin_dashboard: "/admin/dashboard".to_owned(),
            hr_dashboard: "/hr/dashboard".to_owned(),
            employee_dashboard: "/employee/dashboard".to_owned(),
            login: "/login".to_owned(),
        }
    }
}

impl RoutePaths {
    /// Dashboard for a role returned by the login endpoint.
    ///
    /// Only `admin` and `hr` have dedicated dashboards; every other value,
    /// including unknown ones, lands on the employee dashboard.
    pub fn dashboard_for_role(&self, role: &str) -> &str {
        match role {
            "admin" => &self.admin_dashboard,
            "hr" => &self.hr_dashboard,
            _ => &self.employee_dashboard,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub routes: RoutePaths,
    pub redirect_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl ClientConfig {
    /// Build config from the values baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("OPTITRACK_API_URL"), option_env!("OPTITRACK_REDIRECT_DELAY_MS"))
    }

    fn from_values(api_url: Option<&str>, redirect_delay_ms: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let delay_ms = redirect_delay_ms
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_REDIRECT_DELAY_MS);

        Self { api_base_url, routes: RoutePaths::default(), redirect_delay: Duration::from_millis(delay_ms) }
    }
}
