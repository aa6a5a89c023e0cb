use crate::error::Error;
use std::str::FromStr;

/// Sampling step used when none is given
pub const DEFAULT_STEP: f64 = 0.001;

/// Most intervals a window may be split into
const MAX_INTERVALS: f64 = 1e9;

/// The plotting window and the sampling step along the x axis.
///
/// # Examples
///
/// ```
/// # use fgraph::Limits;
/// let limits: Limits = "-5:5:-1:1".parse().unwrap();
/// assert_eq!(limits.x_min, -5.0);
/// assert_eq!(limits.y_max, 1.0);
/// assert_eq!(limits.step, 0.001);
///
/// assert!("5:-5:-1:1".parse::<Limits>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    /// Left edge of the window, the first sampled value
    pub x_min: f64,
    /// Right edge of the window
    pub x_max: f64,
    /// Bottom edge of the window
    pub y_min: f64,
    /// Top edge of the window
    pub y_max: f64,
    /// Distance between two consecutive samples
    pub step: f64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
            step: DEFAULT_STEP,
        }
    }
}

impl Limits {
    /// Create the window `[x_min, x_max] x [y_min, y_max]` with the default
    /// step.
    ///
    /// # Errors
    ///
    /// `InvalidLimits` if the window is empty, not finite, or too wide to be
    /// sampled at the default step.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, Error> {
        let limits = Self {
            x_min,
            x_max,
            y_min,
            y_max,
            step: DEFAULT_STEP,
        };
        limits.validate()?;
        Ok(limits)
    }

    /// Use `step` as the sampling step.
    ///
    /// # Errors
    ///
    /// `InvalidLimits` if `step` is not a positive finite number.
    pub fn with_step(self, step: f64) -> Result<Self, Error> {
        let limits = Self { step, ..self };
        limits.validate()?;
        Ok(limits)
    }

    /// Check that both axes are finite, non-empty ranges, that the step is
    /// positive, and that the window does not hold too many samples.
    ///
    /// # Errors
    ///
    /// `InvalidLimits` describing the first problem found.
    pub fn validate(&self) -> Result<(), Error> {
        let bounds = [self.x_min, self.x_max, self.y_min, self.y_max];
        if !bounds.iter().all(|bound| bound.is_finite()) {
            return Err(Error::InvalidLimits("limits must be finite".into()));
        }
        if self.x_min >= self.x_max {
            return Err(Error::InvalidLimits("x_min must be less than x_max".into()));
        }
        if self.y_min >= self.y_max {
            return Err(Error::InvalidLimits("y_min must be less than y_max".into()));
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(Error::InvalidLimits("step must be positive".into()));
        }
        // the width itself overflows for bounds near f64::MAX
        let intervals = (self.x_max - self.x_min) / self.step;
        if !(intervals.is_finite() && intervals <= MAX_INTERVALS) {
            return Err(Error::InvalidLimits(format!(
                "too many samples: {:e} intervals",
                intervals
            )));
        }
        Ok(())
    }

    /// Number of samples between `x_min` and `x_max`, both included when the
    /// width is a multiple of the step
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample_count(&self) -> usize {
        let intervals = (self.x_max - self.x_min) / self.step;
        // absorb the rounding error of widths that are exact multiples
        ((intervals + 1e-9).floor() as usize).saturating_add(1)
    }

    /// The `index`-th sampled value of the variable
    #[allow(clippy::cast_precision_loss)]
    pub fn x_at(&self, index: usize) -> f64 {
        (self.x_min + index as f64 * self.step).min(self.x_max)
    }

    /// Check if `y` can be drawn in the window. `NaN` never can.
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.y_min && y <= self.y_max
    }
}

impl FromStr for Limits {
    type Err = Error;

    /// Parse limits written as `x_min:x_max:y_min:y_max`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bounds = s
            .split(':')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| Error::InvalidLimits(format!("{}: {}", s, err)))?;

        match bounds[..] {
            [x_min, x_max, y_min, y_max] => Self::new(x_min, x_max, y_min, y_max),
            _ => Err(Error::InvalidLimits(format!(
                "expected x_min:x_max:y_min:y_max, got {}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Limits;
    use crate::error::Error;
    use test_case::test_case;

    #[test]
    fn default() {
        let limits = Limits::default();
        assert_eq!(limits, "-10:10:-10:10".parse::<Limits>().unwrap());
        assert_eq!(limits.validate(), Ok(()));
        assert_eq!(limits.sample_count(), 20_001);
        assert_eq!(limits.x_at(0), -10.0);
        assert_eq!(limits.x_at(20_000), 10.0);
    }

    #[test_case("0:1:0:1" ; "unit square")]
    #[test_case(" -1.5 : 2.5 : -1E3 : 1E3 " ; "spaces and exponents")]
    fn parse_ok(input: &str) {
        assert!(input.parse::<Limits>().is_ok());
    }

    #[test_case("1:2:3" ; "missing bound")]
    #[test_case("1:2:3:4:5" ; "extra bound")]
    #[test_case("a:2:3:4" ; "not a number")]
    #[test_case("2:1:0:1" ; "reversed x")]
    #[test_case("0:1:1:1" ; "empty y")]
    #[test_case("0:inf:0:1" ; "infinite bound")]
    fn parse_err(input: &str) {
        match input.parse::<Limits>() {
            Err(Error::InvalidLimits(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn step() {
        let limits = Limits::new(0.0, 1.0, -1.0, 1.0)
            .unwrap()
            .with_step(0.25)
            .unwrap();
        assert_eq!(limits.sample_count(), 5);
        assert_eq!(limits.x_at(4), 1.0);

        let limits = limits.with_step(0.3).unwrap();
        assert_eq!(limits.sample_count(), 4);

        assert!(limits.with_step(0.0).is_err());
        assert!(limits.with_step(-0.1).is_err());
        assert!(limits.with_step(f64::NAN).is_err());
    }

    #[test_case("-1e300:1e300:-1:1" ; "huge width")]
    #[test_case("-1e308:1e308:-1:1" ; "width overflows")]
    #[test_case("0:1e7:-1:1" ; "too many samples at the default step")]
    fn oversized_windows(input: &str) {
        match input.parse::<Limits>() {
            Err(Error::InvalidLimits(message)) => assert!(message.contains("too many samples")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn oversized_steps() {
        let limits = Limits::default();
        assert!(limits.with_step(1e-12).is_err());

        let wide = Limits::new(-1e5, 1e5, -1.0, 1.0).unwrap();
        assert!(wide.with_step(1e-4).is_err());
        assert_eq!(wide.with_step(1e3).unwrap().sample_count(), 201);
    }

    #[test]
    fn contains_y() {
        let limits = Limits::default();
        assert!(limits.contains_y(0.0));
        assert!(limits.contains_y(10.0));
        assert!(!limits.contains_y(10.5));
        assert!(!limits.contains_y(f64::NAN));
        assert!(!limits.contains_y(f64::NEG_INFINITY));
    }
}
