//! Macros for integer conversions into property values.

/// Implements `From<$int>` for [`Number`](crate::Number) and
/// [`PropertyValue`](crate::PropertyValue).
///
/// Every integer passes through [`Number::new`](crate::Number::new), so the
/// 32-bit/64-bit split is decided by magnitude and never by the source type.
///
/// # Example
///
/// ```ignore
/// impl_number_from!(i8, i16, i32, i64, u8, u16, u32);
///
/// let value: PropertyValue = 442u16.into();
/// assert_eq!(value, PropertyValue::Number(Number::Int(442)));
/// ```
macro_rules! impl_number_from {
    ($($int:ty),+ $(,)?) => {
        $(
            impl From<$int> for $crate::Number {
                fn from(value: $int) -> Self {
                    $crate::Number::new(i64::from(value))
                }
            }

            impl From<$int> for $crate::PropertyValue {
                fn from(value: $int) -> Self {
                    $crate::PropertyValue::Number($crate::Number::from(value))
                }
            }
        )+
    };
}

pub(crate) use impl_number_from;
