use serde::Deserialize;

/// Months used to spread an annual figure across a year.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Convert an annual figure to its equivalent monthly average.
pub fn amortize(annual: f64) -> f64 {
    annual / MONTHS_PER_YEAR
}

/// Root application configuration. Loaded from environment variables
/// with the prefix `PURPLE_SUITE__` and an optional TOML config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub rewards: RewardsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

// ─── Rewards Config ─────────────────────────────────────────────────────────

/// Fees and fixed service values of the Purple Suite. Field names carry
/// their unit: `_monthly`/`_fee` figures are per month, `_annual` per year.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RewardsConfig {
    #[serde(default = "default_monthly_account_fee")]
    pub monthly_account_fee: f64,
    #[serde(default = "default_annual_card_fee")]
    pub annual_card_fee: f64,
    #[serde(default = "default_gym_collection_monthly")]
    pub gym_collection_monthly: f64,
    #[serde(default = "default_lounge_value_per_visit")]
    pub lounge_value_per_visit: f64,
    #[serde(default = "default_priority_fast_track_annual")]
    pub priority_fast_track_annual: f64,
    #[serde(default = "default_relationship_banker_monthly")]
    pub relationship_banker_monthly: f64,
    #[serde(default = "default_concierge_monthly")]
    pub concierge_monthly: f64,
    #[serde(default = "default_virtual_cards_annual")]
    pub virtual_cards_annual: f64,
}

fn default_monthly_account_fee() -> f64 {
    684.0
}
fn default_annual_card_fee() -> f64 {
    4000.0
}
fn default_gym_collection_monthly() -> f64 {
    1300.0
}
fn default_lounge_value_per_visit() -> f64 {
    500.0
}
fn default_priority_fast_track_annual() -> f64 {
    200.0
}
fn default_relationship_banker_monthly() -> f64 {
    500.0
}
fn default_concierge_monthly() -> f64 {
    300.0
}
fn default_virtual_cards_annual() -> f64 {
    200.0
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            monthly_account_fee: default_monthly_account_fee(),
            annual_card_fee: default_annual_card_fee(),
            gym_collection_monthly: default_gym_collection_monthly(),
            lounge_value_per_visit: default_lounge_value_per_visit(),
            priority_fast_track_annual: default_priority_fast_track_annual(),
            relationship_banker_monthly: default_relationship_banker_monthly(),
            concierge_monthly: default_concierge_monthly(),
            virtual_cards_annual: default_virtual_cards_annual(),
        }
    }
}

impl RewardsConfig {
    pub fn priority_fast_track_monthly(&self) -> f64 {
        amortize(self.priority_fast_track_annual)
    }

    pub fn virtual_cards_monthly(&self) -> f64 {
        amortize(self.virtual_cards_annual)
    }

    /// Lounge value for a year of visits, spread per month.
    pub fn lounge_value_monthly(&self, visits_per_year: u32) -> f64 {
        amortize(visits_per_year as f64 * self.lounge_value_per_visit)
    }

    /// Everything the member pays in a year: twelve account fees plus the card fee.
    pub fn total_annual_fees(&self) -> f64 {
        self.monthly_account_fee * MONTHS_PER_YEAR + self.annual_card_fee
    }
}

// ─── Output Config ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Hide categories worth exactly zero in table output.
    #[serde(default = "default_hide_zero_categories")]
    pub hide_zero_categories: bool,
}

fn default_hide_zero_categories() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            hide_zero_categories: default_hide_zero_categories(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and an optional config file.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Same as [`AppConfig::load`], reading variables from `env` instead of
    /// the process environment when it is given.
    pub fn load_with_env(
        path: Option<&str>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            tracing::debug!(path = %path, "Reading config file");
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("PURPLE_SUITE")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;
        config.try_deserialize()
    }
}
