pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Returns `ErrorKind::InvalidCase` from the enclosing function unless the
/// condition holds. `$case` is only evaluated on failure and names the case
/// in the error.
#[macro_export]
macro_rules! verify_case {
    ($case:expr, $cond:expr) => {{
        if !$cond {
            return Err($crate::result::case_failed($case, stringify!($cond)));
        }
    }};
}

#[cold]
pub fn case_failed(case: impl Into<String>, condition: &str) -> crate::error::Error {
    crate::error::Error::invalid_case(case, condition)
}
