use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::membership::{evaluate, MembershipDegree};
use crate::terms::Term;
use crate::variable::LinguisticVariable;

/// A crisp value together with its membership degrees, ready for display.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Reading {
    pub variable: LinguisticVariable,
    pub value: f64,
    pub degrees: MembershipDegree,
}

impl Reading {
    pub fn new(variable: LinguisticVariable, value: f64) -> Self {
        Self {
            variable,
            value,
            degrees: evaluate(variable, value),
        }
    }

    pub fn checked(variable: LinguisticVariable, value: f64) -> Result<Self> {
        variable.check(value).map(|value| Self::new(variable, value))
    }

    pub fn dominant(&self) -> Term {
        self.degrees.dominant()
    }

    /// Labeled degrees in term order, e.g. `("slow", 0.6)`.
    pub fn labeled(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.degrees
            .iter()
            .map(move |(term, degree)| (self.variable.label(term), degree))
    }
}

/// Renders `degrees of membership for 25 °C: low 0.50, medium 0.75, high 0.25`.
/// The formatter precision overrides the default of two decimals.
impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);

        write!(
            f,
            "degrees of membership for {} {}:",
            self.value,
            self.variable.unit()
        )?;

        for (i, (label, degree)) in self.labeled().enumerate() {
            let sep = if i == 0 { " " } else { ", " };

            write!(f, "{sep}{label} {degree:.precision$}")?;
        }

        Ok(())
    }
}

#[test]
fn test_display() {
    let reading = Reading::new(LinguisticVariable::Temperature, 25.);

    assert_eq!(
        reading.to_string(),
        "degrees of membership for 25 °C: low 0.50, medium 0.75, high 0.25"
    );
    assert_eq!(
        format!("{reading:.3}"),
        "degrees of membership for 25 °C: low 0.500, medium 0.750, high 0.250"
    );

    let reading = Reading::new(LinguisticVariable::FanSpeed, 60.);

    assert_eq!(
        reading.to_string(),
        "degrees of membership for 60 %: slow 0.60, medium 0.70, fast 0.20"
    );
    assert_eq!(reading.dominant(), Term::Medium);
}

#[test]
fn test_checked() {
    assert!(Reading::checked(LinguisticVariable::Humidity, 101.).is_err());
    assert_eq!(
        Reading::checked(LinguisticVariable::Humidity, 75.).map(|r| r.degrees),
        Ok(MembershipDegree::new(0., 1., 0.))
    );
}
