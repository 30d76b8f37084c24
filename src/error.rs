use thiserror::Error;

use crate::variable::LinguisticVariable;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the validating helpers.
///
/// [`evaluate`](crate::evaluate) and [`sample`](crate::sample) never fail; only
/// the checked entry points and name parsing return these.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("{} must be within {}, got {value}", .variable.name(), .variable.range_text())]
    OutOfDomain { variable: LinguisticVariable, value: f64 },

    #[error("{} must be a finite number", .variable.name())]
    NonFinite { variable: LinguisticVariable },

    #[error(
        "invalid sampling step {step} for {}: must be positive, at most {} and yield at most {} points",
        .variable.name(),
        .variable.span(),
        crate::curve::MAX_SAMPLES
    )]
    InvalidStep { variable: LinguisticVariable, step: f64 },

    #[error("unknown linguistic variable `{0}`")]
    UnknownVariable(String),
}

#[test]
fn test_out_of_domain_message() {
    let err = Error::OutOfDomain {
        variable: LinguisticVariable::Temperature,
        value: 55.,
    };

    assert_eq!(err.to_string(), "temperature must be within 0-40 °C, got 55");

    let err = Error::OutOfDomain {
        variable: LinguisticVariable::Humidity,
        value: -1.5,
    };

    assert_eq!(err.to_string(), "humidity must be within 0-100 %, got -1.5");
}

#[test]
fn test_invalid_step_message() {
    let err = Error::InvalidStep {
        variable: LinguisticVariable::FanSpeed,
        step: 0.,
    };

    assert_eq!(
        err.to_string(),
        "invalid sampling step 0 for fan_speed: must be positive, at most 100 and yield at most 1000000 points"
    );
}
