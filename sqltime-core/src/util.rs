use atoi::FromRadix10Checked;

/// Parses a fixed-width numeric field.
///
/// The field must be made of ASCII digits only: no sign, no whitespace and no
/// trailing characters. Returns `None` on overflow.
pub fn parse_digits<T: FromRadix10Checked>(field: &str) -> Option<T> {
    if field.is_empty() {
        return None;
    }
    match T::from_radix_10_checked(field.as_bytes()) {
        (Some(value), used) if used == field.len() => Some(value),
        _ => None,
    }
}

/// Largest char boundary of `value` not past `max`.
pub fn floor_boundary(value: &str, max: usize) -> usize {
    if value.len() <= max {
        return value.len();
    }
    (0..=max).rev().find(|i| value.is_char_boundary(*i)).unwrap_or(0)
}

/// Shortens user supplied text before it ends up in a log line or an error context.
#[macro_export]
macro_rules! truncate_long {
    ($value:expr) => {
        format_args!(
            "{}{}",
            &$value[..$crate::floor_boundary(&$value, 497)].trim_end(),
            if $value.len() > 497 { "..." } else { "" },
        )
    };
}
