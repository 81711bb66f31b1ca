use std::fmt;
use std::str::FromStr;

/// A registered facility sensor. `sensor_name` is the primary key; `kind` is
/// one of the values of [`SensorKind`], stored as text.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Sensor {
    pub sensor_name: String,
    pub location: String,
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    Parking,
    Garbage,
    Fire,
    Energy,
    Water,
}

impl SensorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Parking => "parking",
            Self::Garbage => "garbage",
            Self::Fire => "fire",
            Self::Energy => "energy",
            Self::Water => "water",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensorKind {
    type Err = UnknownSensorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parking" => Ok(Self::Parking),
            "garbage" => Ok(Self::Garbage),
            "fire" => Ok(Self::Fire),
            "energy" => Ok(Self::Energy),
            "water" => Ok(Self::Water),
            other => Err(UnknownSensorKind(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown sensor kind: {0}")]
pub struct UnknownSensorKind(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensor_kind_round_trips_through_str() {
        for kind in [
            SensorKind::Parking,
            SensorKind::Garbage,
            SensorKind::Fire,
            SensorKind::Energy,
            SensorKind::Water,
        ] {
            assert_eq!(kind.as_str().parse::<SensorKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_sensor_kind_is_rejected() {
        assert!("humidity".parse::<SensorKind>().is_err());
    }
}
