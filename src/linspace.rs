/// `n` evenly spaced samples over `[min, max]`, both ends included.
pub(crate) struct Linspace {
    start: f64,
    end: f64,
    step: f64,
    index: usize,
    len: usize,
}

impl Linspace {
    pub(crate) fn new(min: f64, max: f64, n: usize) -> Self {
        let step = if n > 1 {
            let num_steps = (n - 1) as f64;
            (max - min) / num_steps
        } else {
            0.
        };
        Linspace {
            start: min,
            end: max,
            step,
            index: 0,
            len: n,
        }
    }

    /// Number of samples needed to cover `[min, max]` at roughly `step` spacing.
    ///
    /// Returns `None` when that count is not finite or exceeds `limit`.
    pub(crate) fn samples_for_step(min: f64, max: f64, step: f64, limit: usize) -> Option<usize> {
        // floor drops a trailing partial step; the last sample is still pinned to max
        let steps = ((max - min) / step).floor();

        if !(0. ..limit as f64).contains(&steps) {
            return None;
        }

        (steps as usize).checked_add(1)
    }
}

impl Iterator for Linspace {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            None
        } else {
            // Calculate the value just like numpy.linspace does: the last
            // sample is pinned to `end` so accumulated error never drops it
            let i = self.index;
            self.index += 1;
            if self.len > 1 && i == self.len - 1 {
                Some(self.end)
            } else {
                Some(self.start + self.step * i as f64)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Linspace {}

#[test]
fn test_linspace() {
    let points: Vec<_> = Linspace::new(0., 40., 41).collect();

    assert_eq!(points.len(), 41);
    assert_eq!(points[0], 0.);
    assert_eq!(points[25], 25.);
    assert_eq!(points[40], 40.);

    let points: Vec<_> = Linspace::new(0., 1., 5).collect();

    assert_eq!(points, vec![0., 0.25, 0.5, 0.75, 1.]);
    assert_eq!(Linspace::new(3., 9., 1).collect::<Vec<_>>(), vec![3.]);
    assert_eq!(Linspace::new(3., 9., 0).count(), 0);
}

#[test]
fn test_samples_for_step() {
    assert_eq!(Linspace::samples_for_step(0., 40., 1., 1000), Some(41));
    assert_eq!(Linspace::samples_for_step(0., 100., 1., 1000), Some(101));
    assert_eq!(Linspace::samples_for_step(0., 40., 0.5, 1000), Some(81));
    assert_eq!(Linspace::samples_for_step(0., 40., 3., 1000), Some(14));
    assert_eq!(Linspace::samples_for_step(0., 40., 40., 1000), Some(2));
}

#[test]
fn test_samples_for_step_limit() {
    assert_eq!(Linspace::samples_for_step(0., 40., 0.5, 81), Some(81));
    assert_eq!(Linspace::samples_for_step(0., 40., 0.5, 80), None);
    assert_eq!(Linspace::samples_for_step(0., 40., 1e-300, usize::MAX), None);
    assert_eq!(Linspace::samples_for_step(0., 40., f64::MIN_POSITIVE, usize::MAX), None);
    assert_eq!(Linspace::samples_for_step(0., 40., 0., usize::MAX), None);
}
