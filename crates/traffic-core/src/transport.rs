//! Generated transport records.

use crate::types::{EngineType, TransportType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One synthetic vehicle.
///
/// Records have no identity; each generation call produces a fresh value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transport {
    #[serde(rename = "type")]
    pub transport_type: TransportType,
    pub weight: i64,
    pub color: String,
    pub engine: EngineType,
    pub cargo_permission: bool,
    pub cargo: String,
    pub speed: i64,
    pub direction_is_right: bool,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transport instance:")?;
        writeln!(f, "Type: {}", self.transport_type)?;
        writeln!(f, "Weight: {}", self.weight)?;
        writeln!(f, "Color: {}", self.color)?;
        writeln!(f, "Engine: {}", self.engine)?;
        writeln!(f, "Cargo_permission: {}", self.cargo_permission)?;
        writeln!(f, "Cargo: {}", self.cargo)?;
        writeln!(f, "Speed: {}", self.speed)?;
        writeln!(f, "Direction: {}", self.direction_is_right)?;
        write!(f, "-------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transport {
        Transport {
            transport_type: TransportType::Truck,
            weight: 7200,
            color: "white".to_string(),
            engine: EngineType::Gasoline,
            cargo_permission: true,
            cargo: "timber".to_string(),
            speed: 80,
            direction_is_right: false,
        }
    }

    #[test]
    fn test_display_block() {
        let rendered = sample().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Transport instance:");
        assert_eq!(lines[1], "Type: truck");
        assert_eq!(lines[4], "Engine: gasoline");
        assert_eq!(lines[8], "Direction: false");
        assert_eq!(lines.last(), Some(&"-------------------"));
    }

    #[test]
    fn test_json_uses_configuration_tags() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["type"], "truck");
        assert_eq!(json["engine"], "gasoline");
        assert_eq!(json["weight"], 7200);
        assert_eq!(json["direction_is_right"], false);
    }
}
