//! Sampling of a function across the plotting window.
//!
//! A renderer walks the samples in order, drawing a line to every pen-down
//! sample and lifting the pen on the others, so that undefined points and
//! points outside of the window break the curve.

use crate::expr::Expr;
use crate::limits::Limits;
use crate::postfix::Postfix;

/// Anything that gives a value for each value of the variable
pub trait Evaluate {
    /// Evaluate for the value `x` of the variable. `NaN` means undefined.
    fn evaluate(&self, x: f64) -> f64;
}

impl Evaluate for Expr {
    fn evaluate(&self, x: f64) -> f64 {
        self.eval(x)
    }
}

impl Evaluate for Postfix {
    fn evaluate(&self, x: f64) -> f64 {
        Postfix::evaluate(self, x)
    }
}

impl<T: Evaluate + ?Sized> Evaluate for &T {
    fn evaluate(&self, x: f64) -> f64 {
        (**self).evaluate(x)
    }
}

/// Whether a sample is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pen {
    /// The sample is defined and inside the window
    Down,
    /// The sample is `NaN` or outside the window
    Up,
}

/// A single point of the sampled function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Value of the variable
    pub x: f64,
    /// Value of the function, `NaN` where it is undefined
    pub y: f64,
    /// Whether the point is drawn
    pub pen: Pen,
}

impl Sample {
    /// Check if the sample is drawn
    pub fn is_pen_down(&self) -> bool {
        self.pen == Pen::Down
    }
}

/// Iterator over the samples of a function, from `x_min` to `x_max`.
///
/// # Examples
///
/// ```
/// # use fgraph::{Expr, Limits, Sampler};
/// let expr = Expr::compile("1 / x").unwrap();
/// let limits = Limits::new(-1.0, 1.0, -10.0, 10.0).unwrap().with_step(0.5).unwrap();
///
/// let ys: Vec<f64> = Sampler::new(&expr, limits).map(|sample| sample.y).collect();
/// assert_eq!(ys.len(), 5);
/// assert_eq!(ys[0], -1.0);
/// assert!(ys[2].is_infinite());
///
/// // the pole splits the curve in two
/// assert_eq!(Sampler::new(&expr, limits).segments().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Sampler<E> {
    function: E,
    limits: Limits,
    index: usize,
    count: usize,
}

impl<E: Evaluate> Sampler<E> {
    /// Sample `function` across `limits`, from `x_min` at every `step`
    pub fn new(function: E, limits: Limits) -> Self {
        let count = limits.sample_count();
        log::debug!(
            "sampling {} points over [{}, {}]",
            count,
            limits.x_min,
            limits.x_max
        );
        Self {
            function,
            limits,
            index: 0,
            count,
        }
    }

    /// Group the remaining samples into runs of pen-down samples, one
    /// polyline per run
    pub fn segments(self) -> Vec<Vec<Sample>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for sample in self {
            if sample.is_pen_down() {
                current.push(sample);
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

impl<E: Evaluate> Iterator for Sampler<E> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.index >= self.count {
            return None;
        }
        let x = self.limits.x_at(self.index);
        self.index += 1;

        let y = self.function.evaluate(x);
        let pen = if self.limits.contains_y(y) {
            Pen::Down
        } else {
            Pen::Up
        };
        Some(Sample { x, y, pen })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<E: Evaluate> ExactSizeIterator for Sampler<E> {}

#[cfg(test)]
mod tests {
    use super::{Evaluate, Pen, Sampler};
    use crate::expr::Expr;
    use crate::limits::Limits;
    use approx::assert_abs_diff_eq;

    fn limits(x_min: f64, x_max: f64, y: f64, step: f64) -> Limits {
        Limits::new(x_min, x_max, -y, y)
            .unwrap()
            .with_step(step)
            .unwrap()
    }

    #[test]
    fn samples_are_evenly_spaced() {
        let expr = Expr::compile("2 * x").unwrap();
        let samples: Vec<_> = Sampler::new(&expr, limits(0.0, 1.0, 10.0, 0.1)).collect();
        assert_eq!(samples.len(), 11);
        for (i, sample) in samples.iter().enumerate() {
            assert_abs_diff_eq!(sample.x, i as f64 * 0.1, epsilon = 1e-12);
            assert_abs_diff_eq!(sample.y, 2.0 * sample.x, epsilon = 1e-12);
            assert!(sample.is_pen_down());
        }
        assert_eq!(samples.last().map(|sample| sample.x), Some(1.0));
    }

    #[test]
    fn pen_is_lifted_outside_of_the_window() {
        let expr = Expr::compile("x ^ 2").unwrap();
        let pens: Vec<Pen> = Sampler::new(&expr, limits(-3.0, 3.0, 4.0, 1.0))
            .map(|sample| sample.pen)
            .collect();
        assert_eq!(
            pens,
            vec![Pen::Up, Pen::Down, Pen::Down, Pen::Down, Pen::Down, Pen::Down, Pen::Up]
        );
    }

    #[test]
    fn undefined_points_break_the_curve() {
        let expr = Expr::compile("sqrt(x) + sqrt(-x - 3)").unwrap();
        // defined nowhere
        assert!(Sampler::new(&expr, limits(-2.0, 2.0, 10.0, 0.5))
            .segments()
            .is_empty());

        let expr = Expr::compile("ln(abs(x))").unwrap();
        let segments = Sampler::new(&expr, limits(-1.0, 1.0, 10.0, 0.25)).segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].len(), 4);
        assert_eq!(segments[1].len(), 4);
    }

    #[test]
    fn exact_size() {
        let expr = Expr::compile("x").unwrap();
        let mut sampler = Sampler::new(expr.postfix(), Limits::default());
        assert_eq!(sampler.len(), 20_001);
        assert!(sampler.next().is_some());
        assert_eq!(sampler.len(), 20_000);
    }

    #[test]
    fn custom_functions() {
        struct Constant(f64);
        impl Evaluate for Constant {
            fn evaluate(&self, _x: f64) -> f64 {
                self.0
            }
        }

        let samples: Vec<_> = Sampler::new(Constant(3.0), limits(0.0, 1.0, 1.0, 0.5)).collect();
        assert_eq!(samples.len(), 3);
        assert!(samples.iter().all(|sample| sample.pen == Pen::Up));
    }
}
