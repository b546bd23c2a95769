use portal_core::PortalConfig;

const PORTAL_JSON: &str = include_str!("../static/config/portal.json");

/// Portal configuration bundled with the client. A broken file falls back to defaults.
#[must_use]
pub fn portal_config() -> PortalConfig {
    PortalConfig::from_json(PORTAL_JSON).unwrap_or_else(|err| {
        log::warn!("invalid portal.json, using defaults: {err}");
        PortalConfig::default()
    })
}
