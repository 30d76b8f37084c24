//! Membership functions of a fuzzy fan-speed controller.
//!
//! Temperature and humidity are the controller's inputs, fan speed its output.
//! Each is split into three overlapping fuzzy sets. [`evaluate`] gives the
//! degree of membership of one crisp value in each set, [`sample`] produces
//! the full curves for charting.
//!
//! ```
//! use fuzzy_fan::{evaluate, sample, LinguisticVariable, Term};
//!
//! let degrees = evaluate(LinguisticVariable::Temperature, 25.);
//! assert_eq!(degrees.low, 0.5);
//! assert_eq!(degrees.high, 0.25);
//! assert_eq!(degrees.dominant(), Term::Medium);
//!
//! let curve = sample(LinguisticVariable::Humidity);
//! assert_eq!(curve.len(), 101);
//! ```

mod curve;
mod error;
mod linspace;
mod math;
mod membership;
mod reading;
mod terms;
mod variable;

pub use curve::{sample, sample_with_step, Curve, CurvePoint, Marker, MAX_SAMPLES, UNIT_STEP};
pub use error::{Error, Result};
pub use membership::{checked_evaluate, evaluate, Breakpoints, MembershipDegree};
pub use reading::Reading;
pub use terms::{PerTerm, Term};
pub use variable::LinguisticVariable;
