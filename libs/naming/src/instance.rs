//! Instance number, the ordinal suffix of a generated name.

use crate::NamingError;

/// An instance number in `1..=99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceNumber(u8);

impl InstanceNumber {
    /// Smallest accepted instance number.
    pub const MIN: i64 = 1;

    /// Largest accepted instance number.
    pub const MAX: i64 = 99;

    /// Creates an instance number, rejecting values outside `1..=99`.
    pub fn new(value: i64) -> Result<Self, NamingError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(NamingError::InstanceOutOfRange);
        }

        u8::try_from(value)
            .map(Self)
            .map_err(|_| NamingError::InstanceOutOfRange)
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

/// Renders the number zero-padded to two digits.
impl std::fmt::Display for InstanceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, "01")]
    #[case(9, "09")]
    #[case(10, "10")]
    #[case(99, "99")]
    fn test_instance_padding(#[case] value: i64, #[case] expected: &str) {
        assert_eq!(InstanceNumber::new(value).unwrap().to_string(), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(100)]
    #[case(-1)]
    #[case(256)]
    #[case(i64::MIN)]
    #[case(i64::MAX)]
    fn test_instance_out_of_range(#[case] value: i64) {
        assert_eq!(
            InstanceNumber::new(value),
            Err(NamingError::InstanceOutOfRange)
        );
    }
}
