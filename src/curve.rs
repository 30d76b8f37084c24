use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::linspace::Linspace;
use crate::math::interp;
use crate::membership::{evaluate, MembershipDegree};
use crate::terms::{PerTerm, Term};
use crate::variable::LinguisticVariable;

/// Step used by [`sample`]: one sample per integer of the domain.
pub const UNIT_STEP: f64 = 1.;

/// Most points [`sample_with_step`] will produce for a single curve.
pub const MAX_SAMPLES: usize = 1_000_000;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: f64,
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl CurvePoint {
    pub fn degrees(&self) -> MembershipDegree {
        MembershipDegree::new(self.low, self.medium, self.high)
    }
}

/// The sampled shape of all three membership functions of a variable.
///
/// Points run from the domain minimum to the domain maximum, both included,
/// in strictly increasing `x`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Curve {
    variable: LinguisticVariable,
    points: Vec<CurvePoint>,
}

/// Where a chart highlights the current input or output value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub x: f64,
    pub degrees: MembershipDegree,
}

impl Curve {
    pub fn variable(&self) -> LinguisticVariable {
        self.variable
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurvePoint> {
        self.points.iter()
    }

    /// Splits the curve into one `(x, degree)` line per fuzzy set.
    pub fn series(&self) -> PerTerm<Vec<(f64, f64)>> {
        let mut series = PerTerm::new();

        for term in Term::ALL {
            let line = self.points.iter().map(|p| (p.x, p.degrees().get(term))).collect();
            series.insert(term, line);
        }

        series
    }

    /// Reads the curve at `x` by linear interpolation between samples.
    ///
    /// Returns `None` for non-finite `x` or `x` outside the sampled range.
    pub fn interpolate(&self, x: f64) -> Option<MembershipDegree> {
        let (first, last) = (self.points.first()?, self.points.last()?);

        if !x.is_finite() || x < first.x || x > last.x {
            return None;
        }

        let along = |term: Term| interp(x, self.points.iter().map(|p| (p.x, p.degrees().get(term))));

        Some(MembershipDegree::new(
            along(Term::Low),
            along(Term::Medium),
            along(Term::High),
        ))
    }

    pub fn marker(&self, x: f64) -> Option<Marker> {
        self.interpolate(x).map(|degrees| Marker { x, degrees })
    }
}

impl<'c> IntoIterator for &'c Curve {
    type Item = &'c CurvePoint;
    type IntoIter = std::slice::Iter<'c, CurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

fn build(variable: LinguisticVariable, num: usize) -> Curve {
    let points: Vec<_> = Linspace::new(variable.lower(), variable.upper(), num)
        .map(|x| {
            let MembershipDegree { low, medium, high } = evaluate(variable, x);

            CurvePoint { x, low, medium, high }
        })
        .collect();

    tracing::trace!(%variable, points = points.len(), "sampled membership curve");

    Curve { variable, points }
}

/// Samples every integer of the variable's domain, endpoints included.
///
/// Temperature yields 41 points, humidity and fan speed 101 each.
pub fn sample(variable: LinguisticVariable) -> Curve {
    // every domain has integer bounds
    build(variable, (variable.span() / UNIT_STEP) as usize + 1)
}

/// Like [`sample`] but with a caller chosen step.
///
/// The number of points is `floor(span / step) + 1`, spread evenly so the last
/// point is always the domain maximum. Steps so small that the curve would
/// need more than [`MAX_SAMPLES`] points are rejected.
pub fn sample_with_step(variable: LinguisticVariable, step: f64) -> Result<Curve> {
    if !step.is_finite() || step <= 0. || step > variable.span() {
        return Err(Error::InvalidStep { variable, step });
    }

    let num = Linspace::samples_for_step(variable.lower(), variable.upper(), step, MAX_SAMPLES)
        .ok_or(Error::InvalidStep { variable, step })?;

    Ok(build(variable, num))
}

#[test]
fn test_sample_sizes() {
    let temp = sample(LinguisticVariable::Temperature);
    let hum = sample(LinguisticVariable::Humidity);
    let fan = sample(LinguisticVariable::FanSpeed);

    assert_eq!(temp.len(), 41);
    assert_eq!(hum.len(), 101);
    assert_eq!(fan.len(), 101);

    for (i, point) in temp.iter().enumerate() {
        assert_eq!(point.x, i as f64);
    }
    for (i, point) in fan.iter().enumerate() {
        assert_eq!(point.x, i as f64);
    }
}

#[test]
fn test_sample_matches_evaluate() {
    for variable in LinguisticVariable::ALL {
        for point in &sample(variable) {
            assert_eq!(point.degrees(), evaluate(variable, point.x));
        }
    }
}

#[test]
fn test_sample_with_step() {
    let half = sample_with_step(LinguisticVariable::Temperature, 0.5).unwrap();

    assert_eq!(half.len(), 81);
    assert_eq!(half.points()[51].x, 25.5);
    assert_eq!(half.points().last().map(|p| p.x), Some(40.));

    assert_eq!(
        sample_with_step(LinguisticVariable::Humidity, 1.).unwrap(),
        sample(LinguisticVariable::Humidity)
    );

    let coarse = sample_with_step(LinguisticVariable::FanSpeed, 30.).unwrap();
    let xs: Vec<_> = coarse.iter().map(|p| p.x).collect();

    assert_eq!(xs, vec![0., 100. / 3., 200. / 3., 100.]);
}

#[test]
fn test_sample_with_invalid_step() {
    for step in [0., -1., f64::NAN, f64::INFINITY, 40.5] {
        let err = sample_with_step(LinguisticVariable::Temperature, step).unwrap_err();

        assert!(matches!(err, Error::InvalidStep { .. }));
    }
}

#[test]
fn test_sample_with_tiny_step() {
    for step in [1e-300, f64::MIN_POSITIVE, 1e-9] {
        for variable in LinguisticVariable::ALL {
            assert_eq!(
                sample_with_step(variable, step),
                Err(Error::InvalidStep { variable, step })
            );
        }
    }

    let finest = sample_with_step(LinguisticVariable::Humidity, 100. / (MAX_SAMPLES - 1) as f64).unwrap();

    assert!(finest.len() <= MAX_SAMPLES);
    assert_eq!(finest.points().last().map(|p| p.x), Some(100.));
}

#[test]
fn test_series() {
    let curve = sample(LinguisticVariable::Temperature);
    let series = curve.series();

    for term in Term::ALL {
        let line = series.get(term).unwrap();

        assert_eq!(line.len(), 41);
        assert_eq!(line[0].0, 0.);
    }

    assert_eq!(series.get(Term::Low).unwrap()[25], (25., 0.5));
    assert_eq!(series.get(Term::High).unwrap()[40], (40., 1.));
}

#[test]
fn test_interpolate_and_marker() {
    let curve = sample(LinguisticVariable::Temperature);

    assert_eq!(curve.interpolate(25.), Some(evaluate(LinguisticVariable::Temperature, 25.)));
    assert_eq!(curve.interpolate(-0.1), None);
    assert_eq!(curve.interpolate(40.1), None);
    assert_eq!(curve.interpolate(f64::NAN), None);

    let marker = curve.marker(22.5).unwrap();

    assert_eq!(marker.x, 22.5);
    assert!((marker.degrees.low - 0.75).abs() < 1e-12);
    assert!((marker.degrees.medium - 0.625).abs() < 1e-12);
    assert!((marker.degrees.high - 0.125).abs() < 1e-12);
}
