use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Garbage,
    Fire,
}

impl AlertKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Garbage => "garbage",
            Self::Fire => "fire",
        }
    }
}

/// A persisted emergency report. Written once per trigger; duplicate triggers
/// produce duplicate rows.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AlertRecord {
    pub id: Uuid,
    pub location: String,
    pub alert_kind: String,
    pub sensor_id: String,
    pub ts: OffsetDateTime,
}
