//! Property-based tests for membership evaluation and curve sampling.

use approx::assert_abs_diff_eq;
use fuzzy_fan::{evaluate, sample, sample_with_step, LinguisticVariable, MembershipDegree};
use proptest::prelude::*;

// Steepest slope of any set is 1/10 (temperature low and medium falling edge)
const MAX_SLOPE: f64 = 0.1;

fn variable() -> impl Strategy<Value = LinguisticVariable> {
    prop_oneof![
        Just(LinguisticVariable::Temperature),
        Just(LinguisticVariable::Humidity),
        Just(LinguisticVariable::FanSpeed),
    ]
}

fn in_domain() -> impl Strategy<Value = (LinguisticVariable, f64)> {
    variable().prop_flat_map(|v| (Just(v), v.lower()..=v.upper()))
}

fn breakpoints(variable: LinguisticVariable) -> [f64; 7] {
    let b = variable.breakpoints();

    [
        b.low_plateau_end,
        b.low_end,
        b.medium_start,
        b.medium_peak,
        b.medium_end,
        b.high_start,
        b.high_full,
    ]
}

fn max_diff(a: MembershipDegree, b: MembershipDegree) -> f64 {
    let a: [f64; 3] = a.into();
    let b: [f64; 3] = b.into();

    a.iter().zip(b.iter()).map(|(a, b)| (a - b).abs()).fold(0., f64::max)
}

proptest! {
    #[test]
    fn prop_degrees_within_unit_range((variable, x) in in_domain()) {
        let degrees = evaluate(variable, x);

        for (_, degree) in degrees.iter() {
            prop_assert!((0.0..=1.0).contains(&degree), "{variable} at {x}: {degree}");
        }
    }

    #[test]
    fn prop_lipschitz_inside_domain((variable, x) in in_domain(), eps in 1e-9f64..1e-3) {
        let y = (x + eps).min(variable.upper());
        let diff = max_diff(evaluate(variable, x), evaluate(variable, y));

        prop_assert!(diff <= MAX_SLOPE * (y - x) + 1e-12, "{variable}: jump of {diff} between {x} and {y}");
    }

    #[test]
    fn prop_interpolated_curve_matches_evaluate((variable, x) in in_domain()) {
        let curve = sample(variable);
        let interpolated = curve.interpolate(x);

        prop_assert!(interpolated.is_some());
        prop_assert!(max_diff(interpolated.unwrap_or_default(), evaluate(variable, x)) < 1e-9);
    }

    #[test]
    fn prop_stepped_curve_covers_domain(variable in variable(), fraction in 0.001f64..=1.0) {
        let step = variable.span() * fraction;
        let curve = sample_with_step(variable, step).unwrap();
        let points = curve.points();

        prop_assert_eq!(points.len(), (variable.span() / step).floor() as usize + 1);
        prop_assert_eq!(points[0].x, variable.lower());
        prop_assert_eq!(points[points.len() - 1].x, variable.upper());
        prop_assert!(points.windows(2).all(|w| w[0].x < w[1].x));
    }
}

#[test]
fn test_continuous_at_breakpoints() {
    let eps = 1e-7;

    for variable in LinguisticVariable::ALL {
        for b in breakpoints(variable) {
            let at = evaluate(variable, b);

            for x in [b - eps, b + eps] {
                let diff = max_diff(at, evaluate(variable, x));

                assert!(
                    diff <= MAX_SLOPE * eps + 1e-12,
                    "{variable} jumps by {diff} around {b}"
                );
            }
        }
    }
}

#[test]
fn test_temperature_midpoint_regression() {
    let degrees = evaluate(LinguisticVariable::Temperature, 25.);

    assert_eq!(degrees.low, 0.5);
    assert_eq!(degrees.high, 0.25);
    assert_abs_diff_eq!(degrees.medium, 0.75);
}

#[test]
fn test_humidity_shared_breakpoint() {
    let degrees = evaluate(LinguisticVariable::Humidity, 75.);

    assert_eq!(degrees, MembershipDegree::new(0., 1., 0.));

    let right = evaluate(LinguisticVariable::Humidity, 75. + 1e-9);

    assert_abs_diff_eq!(right.medium, 1., epsilon = 1e-9);
    assert_abs_diff_eq!(right.high, 0., epsilon = 1e-9);
}

#[test]
fn test_sample_axes() {
    let expected = |n: usize| (0..n).map(|i| i as f64).collect::<Vec<_>>();
    let xs = |variable| sample(variable).iter().map(|p| p.x).collect::<Vec<_>>();

    assert_eq!(xs(LinguisticVariable::Temperature), expected(41));
    assert_eq!(xs(LinguisticVariable::Humidity), expected(101));
    assert_eq!(xs(LinguisticVariable::FanSpeed), expected(101));
}

#[test]
fn test_sample_is_deterministic() {
    for variable in LinguisticVariable::ALL {
        let first = sample(variable);
        let second = sample(variable);

        assert_eq!(first, second);

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.low.to_bits(), b.low.to_bits());
            assert_eq!(a.medium.to_bits(), b.medium.to_bits());
            assert_eq!(a.high.to_bits(), b.high.to_bits());
        }
    }
}

#[test]
fn test_sampling_is_thread_safe() {
    let handles: Vec<_> = LinguisticVariable::ALL
        .into_iter()
        .map(|variable| std::thread::spawn(move || sample(variable)))
        .collect();

    for (variable, handle) in LinguisticVariable::ALL.into_iter().zip(handles) {
        assert_eq!(handle.join().unwrap(), sample(variable));
    }
}

#[test]
fn test_out_of_domain_is_formula_defined() {
    // Not meaningful to the controller, only pinned to the formulas
    let below = evaluate(LinguisticVariable::FanSpeed, -10.);
    let above = evaluate(LinguisticVariable::FanSpeed, 150.);

    assert_eq!(below, MembershipDegree::new(1., 0., 0.));
    assert_eq!(above, MembershipDegree::new(0., 0., 2.));
}
