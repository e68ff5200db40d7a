//! Console printing macros built on [`print()`][crate::print()].

/// Prints values to standard output, see [`Formatter`][crate::Formatter] for the layout.
///
/// Tokens are separated by a space and the line ends with a newline unless other characters
/// are given up front.
///
/// # Examples
///
/// ```
/// use code_utils::print_values;
///
/// let readings = vec![3, 5, 8];
///
/// // readings: { 3 , 5 , 8 }
/// print_values!("readings:", readings);
///
/// // 1,2,3;
/// print_values!(sep = ',', end = ';'; 1, 2, 3);
///
/// // Just a newline.
/// print_values!();
/// ```
#[macro_export]
macro_rules! print_values {
    (sep = $separator:expr, end = $terminator:expr $(; $($value:expr),* $(,)?)?) => {
        $crate::print(
            $separator,
            $terminator,
            &[$($($crate::as_printable(&$value)),*)?],
        )
    };
    ($($value:expr),* $(,)?) => {
        $crate::print(' ', '\n', &[$($crate::as_printable(&$value)),*])
    };
}

/// Same as [`print_values!`] when the `printing` feature is enabled, otherwise expands to
/// nothing.
#[cfg(feature = "printing")]
#[macro_export]
macro_rules! trace_values {
    ($($tokens:tt)*) => {
        $crate::print_values!($($tokens)*)
    };
}

/// Same as [`print_values!`] when the `printing` feature is enabled, otherwise expands to
/// nothing.
#[cfg(not(feature = "printing"))]
#[macro_export]
macro_rules! trace_values {
    ($($tokens:tt)*) => {};
}

/// Same as [`print_values!`] when the `logging` feature is enabled, otherwise expands to
/// nothing.
#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_values {
    ($($tokens:tt)*) => {
        $crate::print_values!($($tokens)*)
    };
}

/// Same as [`print_values!`] when the `logging` feature is enabled, otherwise expands to
/// nothing.
#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_values {
    ($($tokens:tt)*) => {};
}

/// Prints an expression's source text followed by its value, e.g. `total: 42`, when the
/// `logging` feature is enabled. Otherwise expands to nothing.
///
/// # Examples
///
/// ```
/// use code_utils::log_named;
///
/// let total = 40 + 2;
/// log_named!(total);
/// ```
#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_named {
    ($value:expr $(,)?) => {
        $crate::print_values!(::core::concat!(::core::stringify!($value), ":"), $value)
    };
}

/// Prints an expression's source text followed by its value, e.g. `total: 42`, when the
/// `logging` feature is enabled. Otherwise expands to nothing.
///
/// # Examples
///
/// ```
/// use code_utils::log_named;
///
/// let total = 40 + 2;
/// log_named!(total);
/// ```
#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_named {
    ($value:expr $(,)?) => {};
}
