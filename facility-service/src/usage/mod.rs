pub mod aggregate;
pub mod billing;
pub mod recorder;
pub mod window;

pub use aggregate::{aggregate, summarize, DatedReading, UsageSummary};
pub use billing::{bill, Bill, UsageRates};
pub use recorder::record;
pub use window::month_window;

use time::{Duration, UtcOffset};

use crate::config::{parse_utc_offset, UsageConfig};

/// Resolved usage settings handed to the recorder/aggregator. Built once from
/// the config file; nothing here is read from ambient state.
#[derive(Debug, Clone)]
pub struct UsageSettings {
    pub retention: Duration,
    pub reference_offset: UtcOffset,
    pub rates: UsageRates,
    pub currency: String,
}

impl UsageSettings {
    pub fn from_config(cfg: &UsageConfig) -> anyhow::Result<Self> {
        Ok(Self {
            retention: Duration::days(i64::from(cfg.retention_days)),
            reference_offset: parse_utc_offset(&cfg.reference_offset)?,
            rates: UsageRates {
                water_per_liter: cfg.water_rate_per_liter,
                energy_per_kwh: cfg.energy_rate_per_kwh,
            },
            currency: cfg.currency.clone(),
        })
    }
}
