//! Numeric input validation for rate and seek requests.
//!
//! Rate and seek accept loosely typed input (numbers, or strings from a
//! text field or attribute) and reject anything that is not a finite
//! number.

/// Errors from rate and seek input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("expected a number, got {input:?}")]
    NotANumber { input: String },

    #[error("playback rate must be positive, got {0}")]
    RateOutOfRange(f64),
}

/// A value that may be read as a number.
pub trait NumericInput {
    /// Read the value as a finite number.
    fn to_number(&self) -> Result<f64, InputError>;
}

fn finite(value: f64) -> Result<f64, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NotANumber {
            input: value.to_string(),
        })
    }
}

impl NumericInput for f64 {
    fn to_number(&self) -> Result<f64, InputError> {
        finite(*self)
    }
}

impl NumericInput for f32 {
    fn to_number(&self) -> Result<f64, InputError> {
        finite(f64::from(*self))
    }
}

impl NumericInput for i32 {
    fn to_number(&self) -> Result<f64, InputError> {
        Ok(f64::from(*self))
    }
}

impl NumericInput for u32 {
    fn to_number(&self) -> Result<f64, InputError> {
        Ok(f64::from(*self))
    }
}

impl NumericInput for str {
    fn to_number(&self) -> Result<f64, InputError> {
        self.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| InputError::NotANumber {
                input: self.to_string(),
            })
    }
}

impl NumericInput for String {
    fn to_number(&self) -> Result<f64, InputError> {
        self.as_str().to_number()
    }
}

impl<T: NumericInput + ?Sized> NumericInput for &T {
    fn to_number(&self) -> Result<f64, InputError> {
        (**self).to_number()
    }
}

/// Read a playback rate for a starting option: a finite, strictly
/// positive number. Runtime rate changes only require a number.
pub fn parse_rate<T: NumericInput + ?Sized>(raw: &T) -> Result<f64, InputError> {
    let rate = raw.to_number()?;
    if rate <= 0.0 {
        return Err(InputError::RateOutOfRange(rate));
    }
    Ok(rate)
}
