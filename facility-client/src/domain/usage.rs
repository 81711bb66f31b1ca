use time::OffsetDateTime;
use uuid::Uuid;

/// The two metered utilities. Each kind has its own readings table with an
/// identical shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageKind {
    Water,
    Energy,
}

impl UsageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Energy => "energy",
        }
    }

    pub fn table(self) -> &'static str {
        match self {
            Self::Water => "water_usage",
            Self::Energy => "energy_usage",
        }
    }
}

/// One timestamped usage measurement. `location` is copied from the sensor at
/// insert time; `ts` is always UTC.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UsageReading {
    pub id: Uuid,
    pub sensor_id: String,
    pub location: String,
    pub quantity: f64,
    pub ts: OffsetDateTime,
}
