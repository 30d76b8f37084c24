use num::Float;

/// Piecewise-linear interpolation through `coords`, similar to numpy.interp.
///
/// `coords` must be sorted by x. Inputs left of the first point or right of the
/// last one take the nearest endpoint's y. An input that lands exactly on a
/// coordinate returns its y unchanged. NaN input or empty `coords` yield NaN.
pub(crate) fn interp<F: Float>(x: F, coords: impl IntoIterator<Item = (F, F)>) -> F {
    let mut iter = coords.into_iter().enumerate().peekable();

    while let Some((i, (x1, y1))) = iter.next() {
        // Base cases
        if i == 0 && x < x1 {
            return y1;
        }
        if x == x1 {
            return y1;
        }

        let Some(&(_, (x2, y2))) = iter.peek() else {
            if x > x1 {
                return y1;
            }
            break;
        };

        // Actual interpolation
        if x1 < x && x < x2 {
            return y1 + (x - x1) * (y2 - y1) / (x2 - x1);
        }
    }

    F::nan()
}

#[test]
fn test_interp() {
    let x = [0., 1., 1.5, 2.72, 3.24];
    let coords = [(1., 3.), (2., 2.), (3., 0.)];
    let y: Vec<f64> = x.iter().map(|&x| interp(x, coords)).collect();

    assert_eq!(y, vec![3., 3., 2.5, 0.5599999999999996, 0.]);

    let x = [2.5, -1., 7.5, 3.];
    let coords = [(0., 0.), (1., 2.), (2., 5.), (3., 3.), (4.5, 2.)];
    let y: Vec<f64> = x.iter().map(|&x| interp(x, coords)).collect();

    assert_eq!(y, vec![4., 0., 2., 3.]);
}

#[test]
fn test_interp_degenerate() {
    assert!(interp(f64::NAN, [(0., 1.), (1., 0.)]).is_nan());
    assert!(interp(0.5f64, std::iter::empty()).is_nan());
    assert_eq!(interp(7.0f32, [(2., 0.25)]), 0.25);
}
