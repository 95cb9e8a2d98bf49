use pyeveryday_core::LandingConfig;

/// JSON overrides baked in at build time, e.g.
/// `PYEVERYDAY_CONFIG='{"particle_count": 40}' dx build`
const CONFIG_OVERRIDE: Option<&str> = option_env!("PYEVERYDAY_CONFIG");

/// Landing page settings; invalid overrides fall back to the defaults
pub fn landing_config() -> LandingConfig {
    let Some(json) = CONFIG_OVERRIDE else {
        return LandingConfig::default();
    };
    match LandingConfig::from_json(json) {
        Ok(config) => {
            tracing::debug!("Using landing config override: {:?}", config);
            config
        }
        Err(e) => {
            tracing::error!("Ignoring PYEVERYDAY_CONFIG: {}", e);
            LandingConfig::default()
        }
    }
}
