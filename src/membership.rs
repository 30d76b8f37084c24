use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::terms::Term;
use crate::variable::LinguisticVariable;

/// Breakpoints of the low/medium/high shape family shared by every variable.
///
/// ```text
/// low:    1 up to `low_plateau_end`, falls to 0 at `low_end`
/// medium: rises from `medium_start` to 1 at `medium_peak`, falls to 0 at `medium_end`
/// high:   rises from `high_start`, reaches 1 at `high_full` and keeps rising past it
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoints {
    pub low_plateau_end: f64,
    pub low_end: f64,
    pub medium_start: f64,
    pub medium_peak: f64,
    pub medium_end: f64,
    pub high_start: f64,
    pub high_full: f64,
}

const TEMPERATURE: Breakpoints = Breakpoints {
    low_plateau_end: 20.,
    low_end: 30.,
    medium_start: 10.,
    medium_peak: 30.,
    medium_end: 40.,
    high_start: 20.,
    high_full: 40.,
};

const HUMIDITY: Breakpoints = Breakpoints {
    low_plateau_end: 50.,
    low_end: 75.,
    medium_start: 25.,
    medium_peak: 75.,
    medium_end: 100.,
    high_start: 75.,
    high_full: 100.,
};

const FAN_SPEED: Breakpoints = Breakpoints {
    low_plateau_end: 50.,
    low_end: 75.,
    medium_start: 25.,
    medium_peak: 75.,
    medium_end: 100.,
    high_start: 50.,
    high_full: 100.,
};

impl Breakpoints {
    // Branch boundaries must stay exactly as written, e.g. humidity medium(75) == 1
    // comes from the inclusive `<=` on the rising branch.
    fn low(&self, x: f64) -> f64 {
        if x <= self.low_plateau_end {
            1.
        } else if x <= self.low_end {
            (self.low_end - x) / (self.low_end - self.low_plateau_end)
        } else {
            0.
        }
    }

    fn medium(&self, x: f64) -> f64 {
        if x >= self.medium_start && x <= self.medium_peak {
            (x - self.medium_start) / (self.medium_peak - self.medium_start)
        } else if x > self.medium_peak && x <= self.medium_end {
            (self.medium_end - x) / (self.medium_end - self.medium_peak)
        } else {
            0.
        }
    }

    fn high(&self, x: f64) -> f64 {
        if x >= self.high_start {
            (x - self.high_start) / (self.high_full - self.high_start)
        } else {
            0.
        }
    }
}

impl LinguisticVariable {
    pub fn breakpoints(self) -> &'static Breakpoints {
        match self {
            Self::Temperature => &TEMPERATURE,
            Self::Humidity => &HUMIDITY,
            Self::FanSpeed => &FAN_SPEED,
        }
    }
}

/// Degree of membership of one crisp value in each of a variable's sets.
///
/// The three degrees do not have to sum to one.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct MembershipDegree {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl MembershipDegree {
    pub fn new(low: f64, medium: f64, high: f64) -> Self {
        Self { low, medium, high }
    }

    pub fn get(&self, term: Term) -> f64 {
        match term {
            Term::Low => self.low,
            Term::Medium => self.medium,
            Term::High => self.high,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Term, f64)> + '_ {
        Term::ALL.into_iter().map(move |term| (term, self.get(term)))
    }

    /// The term with the largest degree. Ties go to the earlier term.
    pub fn dominant(&self) -> Term {
        self.iter()
            .fold((Term::Low, self.low), |best, next| if next.1 > best.1 { next } else { best })
            .0
    }
}

impl From<MembershipDegree> for [f64; 3] {
    fn from(degree: MembershipDegree) -> Self {
        [degree.low, degree.medium, degree.high]
    }
}

/// Evaluates the three membership functions of `variable` at `x`.
///
/// Does not validate `x`. Outside the domain the same formulas apply, so the
/// rising set can exceed 1 (`high(Temperature, 50) == 1.5`). Use
/// [`checked_evaluate`] to reject such input instead.
pub fn evaluate(variable: LinguisticVariable, x: f64) -> MembershipDegree {
    let shape = variable.breakpoints();

    MembershipDegree {
        low: shape.low(x),
        medium: shape.medium(x),
        high: shape.high(x),
    }
}

pub fn checked_evaluate(variable: LinguisticVariable, x: f64) -> Result<MembershipDegree> {
    variable.check(x).map(|x| evaluate(variable, x))
}

#[test]
fn test_temperature_fixtures() {
    use LinguisticVariable::Temperature;

    assert_eq!(evaluate(Temperature, 0.), MembershipDegree::new(1., 0., 0.));
    assert_eq!(evaluate(Temperature, 10.), MembershipDegree::new(1., 0., 0.));
    assert_eq!(evaluate(Temperature, 20.), MembershipDegree::new(1., 0.5, 0.));
    assert_eq!(evaluate(Temperature, 25.), MembershipDegree::new(0.5, 0.75, 0.25));
    assert_eq!(evaluate(Temperature, 30.), MembershipDegree::new(0., 1., 0.5));
    assert_eq!(evaluate(Temperature, 35.), MembershipDegree::new(0., 0.5, 0.75));
    assert_eq!(evaluate(Temperature, 40.), MembershipDegree::new(0., 0., 1.));
}

#[test]
fn test_humidity_fixtures() {
    use LinguisticVariable::Humidity;

    assert_eq!(evaluate(Humidity, 0.), MembershipDegree::new(1., 0., 0.));
    assert_eq!(evaluate(Humidity, 25.), MembershipDegree::new(1., 0., 0.));
    assert_eq!(evaluate(Humidity, 50.), MembershipDegree::new(1., 0.5, 0.));
    assert_eq!(evaluate(Humidity, 75.), MembershipDegree::new(0., 1., 0.));
    assert_eq!(evaluate(Humidity, 90.), MembershipDegree::new(0., 0.4, 0.6));
    assert_eq!(evaluate(Humidity, 100.), MembershipDegree::new(0., 0., 1.));
}

#[test]
fn test_fan_speed_fixtures() {
    use LinguisticVariable::FanSpeed;

    assert_eq!(evaluate(FanSpeed, 0.), MembershipDegree::new(1., 0., 0.));
    assert_eq!(evaluate(FanSpeed, 50.), MembershipDegree::new(1., 0.5, 0.));
    assert_eq!(evaluate(FanSpeed, 60.), MembershipDegree::new(0.6, 0.7, 0.2));
    assert_eq!(evaluate(FanSpeed, 75.), MembershipDegree::new(0., 1., 0.5));
    assert_eq!(evaluate(FanSpeed, 100.), MembershipDegree::new(0., 0., 1.));
}

#[test]
fn test_out_of_domain_follows_formula() {
    assert_eq!(
        evaluate(LinguisticVariable::Temperature, 50.),
        MembershipDegree::new(0., 0., 1.5)
    );
    assert_eq!(
        evaluate(LinguisticVariable::Temperature, -5.),
        MembershipDegree::new(1., 0., 0.)
    );
    assert_eq!(
        evaluate(LinguisticVariable::Humidity, 120.),
        MembershipDegree::new(0., 0., 1.8)
    );
    assert_eq!(
        evaluate(LinguisticVariable::FanSpeed, f64::NAN),
        MembershipDegree::new(0., 0., 0.)
    );
}

#[test]
fn test_checked_evaluate() {
    use crate::error::Error;

    assert_eq!(
        checked_evaluate(LinguisticVariable::Temperature, 25.),
        Ok(MembershipDegree::new(0.5, 0.75, 0.25))
    );
    assert_eq!(
        checked_evaluate(LinguisticVariable::Temperature, 41.),
        Err(Error::OutOfDomain {
            variable: LinguisticVariable::Temperature,
            value: 41.
        })
    );
}

#[test]
fn test_dominant() {
    assert_eq!(MembershipDegree::new(0.5, 0.75, 0.25).dominant(), Term::Medium);
    assert_eq!(MembershipDegree::new(0., 0.5, 0.75).dominant(), Term::High);
    assert_eq!(MembershipDegree::new(1., 1., 0.).dominant(), Term::Low);
    assert_eq!(MembershipDegree::new(0., 0., 0.).dominant(), Term::Low);
}
