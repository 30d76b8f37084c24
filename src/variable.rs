use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::terms::Term;

/// One of the three quantities the fan controller reasons about.
///
/// Each variable owns a fixed closed domain and three fuzzy sets whose
/// breakpoints never change at runtime.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinguisticVariable {
    /// Ambient temperature in °C, domain `[0, 40]`
    Temperature,
    /// Relative humidity in %, domain `[0, 100]`
    Humidity,
    /// Fan speed in % of maximum, domain `[0, 100]`
    FanSpeed,
}

impl LinguisticVariable {
    pub const ALL: [LinguisticVariable; 3] = [Self::Temperature, Self::Humidity, Self::FanSpeed];

    pub fn domain(self) -> RangeInclusive<f64> {
        self.lower()..=self.upper()
    }

    pub fn lower(self) -> f64 {
        0.
    }

    pub fn upper(self) -> f64 {
        match self {
            Self::Temperature => 40.,
            Self::Humidity | Self::FanSpeed => 100.,
        }
    }

    pub fn span(self) -> f64 {
        self.upper() - self.lower()
    }

    pub fn contains(self, x: f64) -> bool {
        self.domain().contains(&x)
    }

    /// Validates a crisp input before it reaches [`evaluate`](crate::evaluate).
    ///
    /// Returns the value unchanged when it is finite and inside the domain.
    pub fn check(self, x: f64) -> Result<f64> {
        if !x.is_finite() {
            tracing::debug!(variable = %self, value = x, "rejected non-finite input");

            return Err(Error::NonFinite { variable: self });
        }

        if !self.contains(x) {
            tracing::debug!(variable = %self, value = x, "rejected out of domain input");

            return Err(Error::OutOfDomain { variable: self, value: x });
        }

        Ok(x)
    }

    /// The spelling used in messages, table headers and serialized output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::FanSpeed => "fan_speed",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Humidity | Self::FanSpeed => "%",
        }
    }

    /// The label this variable gives to a term. Fan speed names its sets
    /// slow/medium/fast, the inputs use low/medium/high.
    pub fn label(self, term: Term) -> &'static str {
        match (self, term) {
            (Self::FanSpeed, Term::Low) => "slow",
            (Self::FanSpeed, Term::High) => "fast",
            (_, Term::Low) => "low",
            (_, Term::Medium) => "medium",
            (_, Term::High) => "high",
        }
    }

    pub fn labels(self) -> [&'static str; 3] {
        Term::ALL.map(|term| self.label(term))
    }

    pub(crate) fn range_text(self) -> String {
        format!("{}-{} {}", self.lower(), self.upper(), self.unit())
    }
}

impl fmt::Display for LinguisticVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LinguisticVariable {
    type Err = Error;

    // Spanish names are what the controller's rule base and HTTP payloads use
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "temperature" | "temp" | "temperatura" => Ok(Self::Temperature),
            "humidity" | "hum" | "humedad" => Ok(Self::Humidity),
            "fan-speed" | "fan_speed" | "fan speed" | "fanspeed" | "speed" | "velocidad" => Ok(Self::FanSpeed),
            _ => Err(Error::UnknownVariable(s.to_owned())),
        }
    }
}

#[test]
fn test_domains() {
    assert_eq!(LinguisticVariable::Temperature.domain(), 0. ..=40.);
    assert_eq!(LinguisticVariable::Humidity.domain(), 0. ..=100.);
    assert_eq!(LinguisticVariable::FanSpeed.domain(), 0. ..=100.);
    assert_eq!(LinguisticVariable::Temperature.span(), 40.);
}

#[test]
fn test_check() {
    let temp = LinguisticVariable::Temperature;

    assert_eq!(temp.check(0.), Ok(0.));
    assert_eq!(temp.check(40.), Ok(40.));
    assert_eq!(temp.check(25.5), Ok(25.5));
    assert_eq!(
        temp.check(40.01),
        Err(Error::OutOfDomain {
            variable: temp,
            value: 40.01
        })
    );
    assert_eq!(temp.check(f64::NAN), Err(Error::NonFinite { variable: temp }));
    assert_eq!(
        LinguisticVariable::Humidity.check(f64::INFINITY),
        Err(Error::NonFinite {
            variable: LinguisticVariable::Humidity
        })
    );
}

#[test]
fn test_labels() {
    assert_eq!(LinguisticVariable::Temperature.labels(), ["low", "medium", "high"]);
    assert_eq!(LinguisticVariable::Humidity.labels(), ["low", "medium", "high"]);
    assert_eq!(LinguisticVariable::FanSpeed.labels(), ["slow", "medium", "fast"]);
}

#[test]
fn test_from_str() {
    assert_eq!("temperature".parse::<LinguisticVariable>(), Ok(LinguisticVariable::Temperature));
    assert_eq!(" Humedad ".parse::<LinguisticVariable>(), Ok(LinguisticVariable::Humidity));
    assert_eq!("fan-speed".parse::<LinguisticVariable>(), Ok(LinguisticVariable::FanSpeed));
    assert_eq!("velocidad".parse::<LinguisticVariable>(), Ok(LinguisticVariable::FanSpeed));
    assert_eq!(
        "pressure".parse::<LinguisticVariable>(),
        Err(Error::UnknownVariable("pressure".to_owned()))
    );
}

#[test]
fn test_name_matches_serialized_form() {
    for variable in LinguisticVariable::ALL {
        assert_eq!(serde_json::to_value(variable).unwrap(), variable.name());
        assert_eq!(variable.to_string().parse::<LinguisticVariable>(), Ok(variable));
    }

    assert_eq!(LinguisticVariable::FanSpeed.to_string(), "fan_speed");
}
