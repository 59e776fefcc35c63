use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three supported temperature scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Every unit, in declaration order.
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    /// Lowercase wire name (`celsius`, `fahrenheit`, `kelvin`).
    pub fn name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }

    /// Symbol used inside formula strings.
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    /// Absolute zero expressed in this scale.
    ///
    /// Each floor is a literal constant rather than a conversion of the Kelvin
    /// floor, so the three values can be audited independently.
    pub fn absolute_zero(&self) -> f64 {
        match self {
            TemperatureUnit::Celsius => -273.15,
            TemperatureUnit::Fahrenheit => -459.67,
            TemperatureUnit::Kelvin => 0.0,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a supported unit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown temperature unit '{0}', expected one of: celsius, fahrenheit, kelvin")]
pub struct UnknownUnit(pub String);

impl FromStr for TemperatureUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "celsius" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            "kelvin" => Ok(TemperatureUnit::Kelvin),
            other => Err(UnknownUnit(other.to_string())),
        }
    }
}

/// A single conversion to perform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub from: TemperatureUnit,
    pub to: TemperatureUnit,
}

impl ConversionRequest {
    pub fn new(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> Self {
        Self { value, from, to }
    }
}

/// Outcome of a conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Source scale
    pub from: TemperatureUnit,
    /// Target scale
    pub to: TemperatureUnit,
    /// Input value, as given
    pub value: f64,
    /// Input re-expressed in `to`, rounded to two decimals
    pub result: f64,
    /// Human-readable derivation, for display only
    pub formula: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_declaration_order() {
        assert_eq!(
            TemperatureUnit::ALL,
            [
                TemperatureUnit::Celsius,
                TemperatureUnit::Fahrenheit,
                TemperatureUnit::Kelvin
            ]
        );
    }

    #[test]
    fn test_from_str_round_trips_display() {
        for unit in TemperatureUnit::ALL {
            let parsed: TemperatureUnit = unit.to_string().parse().unwrap();
            assert_eq!(parsed, unit);
        }
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("Celsius".parse::<TemperatureUnit>().is_err());
        assert!("rankine".parse::<TemperatureUnit>().is_err());
        assert!("".parse::<TemperatureUnit>().is_err());
    }

    #[test]
    fn test_unknown_unit_message() {
        let err = "rankine".parse::<TemperatureUnit>().unwrap_err();
        assert!(err.to_string().contains("rankine"));
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&TemperatureUnit::Fahrenheit).unwrap();
        assert_eq!(json, "\"fahrenheit\"");

        let unit: TemperatureUnit = serde_json::from_str("\"kelvin\"").unwrap();
        assert_eq!(unit, TemperatureUnit::Kelvin);

        assert!(serde_json::from_str::<TemperatureUnit>("\"KELVIN\"").is_err());
    }

    #[test]
    fn test_symbols() {
        assert_eq!(TemperatureUnit::Celsius.symbol(), "°C");
        assert_eq!(TemperatureUnit::Fahrenheit.symbol(), "°F");
        assert_eq!(TemperatureUnit::Kelvin.symbol(), "K");
    }

    #[test]
    fn test_absolute_zero_floors() {
        assert_eq!(TemperatureUnit::Kelvin.absolute_zero(), 0.0);
        assert_eq!(TemperatureUnit::Celsius.absolute_zero(), -273.15);
        assert_eq!(TemperatureUnit::Fahrenheit.absolute_zero(), -459.67);
    }

    #[test]
    fn test_conversion_result_field_names() {
        let result = ConversionResult {
            from: TemperatureUnit::Celsius,
            to: TemperatureUnit::Kelvin,
            value: 0.0,
            result: 273.15,
            formula: "0°C + 273.15 = 273.15K".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["from"], "celsius");
        assert_eq!(json["to"], "kelvin");
        assert_eq!(json["value"], 0.0);
        assert_eq!(json["result"], 273.15);
        assert_eq!(json["formula"], "0°C + 273.15 = 273.15K");
    }
}
