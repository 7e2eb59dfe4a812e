/// The admissible region for solver variables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Domain {
    /// Any finite real.
    #[default]
    Real,
    /// Strictly positive reals.
    ///
    /// Lower bounds are clamped to [`f64::MIN_POSITIVE`].
    Positive,
}

impl Domain {
    /// Returns the smallest admissible value, if the domain is bounded below.
    #[must_use]
    pub fn floor(self) -> Option<f64> {
        match self {
            Domain::Real => None,
            Domain::Positive => Some(f64::MIN_POSITIVE),
        }
    }

    /// Raises `x` to the floor of the domain if it lies below it.
    #[must_use]
    pub fn clamp_lower(self, x: f64) -> f64 {
        match self.floor() {
            Some(floor) if x < floor => floor,
            _ => x,
        }
    }

    /// Returns true if an interval with upper bound `right` reaches into the
    /// domain by more than its floor.
    #[must_use]
    pub fn admits_upper(self, right: f64) -> bool {
        self.floor().is_none_or(|floor| right > floor)
    }
}
