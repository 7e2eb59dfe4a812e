use thiserror::Error;

/// Errors that can occur when creating a [`Bracket`] or validating bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
    /// Residual signs do not bracket a root.
    #[error("no sign change")]
    NoSignChange,
}

/// Current bracket bounds and their residual signs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
    left_sign: Sign,
    right_sign: Sign,
}

impl Bracket {
    /// Creates a validated bracket with known residual signs.
    ///
    /// An endpoint with [`Sign::Zero`] is an exact root and still counts as a
    /// sign change against a non-zero endpoint.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` if the signs do not bracket a root.
    pub(crate) fn new(
        bounds: Bounds,
        left_sign: Sign,
        right_sign: Sign,
    ) -> Result<Self, BracketError> {
        if left_sign == right_sign {
            return Err(BracketError::NoSignChange);
        }

        Ok(Self {
            left: bounds.left,
            right: bounds.right,
            left_sign,
            right_sign,
        })
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the residual signs at the left and right bounds.
    #[must_use]
    pub fn signs(&self) -> [Sign; 2] {
        [self.left_sign, self.right_sign]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        midpoint(self.left, self.right)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Shrinks the bracket using a new endpoint and its residual sign.
    ///
    /// The root stays in `[left, x]` when the signs at `left` and `x` differ,
    /// otherwise in `[x, right]`.
    pub(crate) fn shrink(&mut self, x: f64, sign: Sign) {
        if self.left_sign == sign {
            self.left = x;
            self.left_sign = sign;
        } else {
            self.right = x;
            self.right_sign = sign;
        }
    }
}

/// The sign of a residual for bracket logic.
///
/// Zero is its own class: an exact zero is a root, never a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    /// Residual is negative.
    Negative,
    /// Residual is exactly zero.
    Zero,
    /// Residual is positive.
    Positive,
}

impl Sign {
    /// Returns the sign of a residual value.
    ///
    /// `NaN` is reported as [`Sign::Positive`]; solvers reject non-finite
    /// residuals before asking for their sign.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Sign::Negative
        } else if value == 0.0 {
            Sign::Zero
        } else {
            Sign::Positive
        }
    }
}

/// Ordered finite bounds for a bisection bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(crate) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    /// Returns the bounds as an array.
    pub(crate) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}

/// Returns the midpoint of `[left, right]` without overflowing for endpoints
/// near `f64::MAX`.
pub(crate) fn midpoint(left: f64, right: f64) -> f64 {
    0.5 * left + 0.5 * right
}
