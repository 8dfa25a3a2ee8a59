#[cfg(feature = "random")]
pub mod random;

/// Unwrap an `Ok`, or evaluate `$err` (usually an early `return`).
#[macro_export]
macro_rules! ok_or {
    ($e:expr, $err:expr) => {{
        match $e {
            Ok(r) => r,
            Err(_) => $err,
        }
    }};
}

/// Unwrap a `Some`, or evaluate `$err` (usually an early `return`).
#[macro_export]
macro_rules! some_or {
    ($e:expr, $err:expr) => {{
        match $e {
            Some(r) => r,
            None => $err,
        }
    }};
}
