//! Field validators shared by every record type.

/// A numeric input that may or may not hold an exact whole number.
///
/// Floats with a fractional part (or NaN/infinity) are never whole, even when
/// truncating them would yield a valid integer.
pub trait WholeNumber: Copy {
    fn as_whole(self) -> Option<i64>;
}

macro_rules! whole_number_int {
    ($($t:ty),*) => {
        $(
            impl WholeNumber for $t {
                fn as_whole(self) -> Option<i64> {
                    i64::try_from(self).ok()
                }
            }
        )*
    };
}

whole_number_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl WholeNumber for f64 {
    fn as_whole(self) -> Option<i64> {
        if !self.is_finite() || self.fract() != 0.0 {
            return None;
        }
        if self < i64::MIN as f64 || self > i64::MAX as f64 {
            return None;
        }
        Some(self as i64)
    }
}

impl WholeNumber for f32 {
    fn as_whole(self) -> Option<i64> {
        f64::from(self).as_whole()
    }
}

/// Returns the value as `u32` if it is a whole number greater than zero.
pub fn positive_integer(value: impl WholeNumber) -> Option<u32> {
    value
        .as_whole()
        .filter(|n| *n > 0)
        .and_then(|n| u32::try_from(n).ok())
}

/// Returns an owned copy of the text if it is not empty.
pub fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
