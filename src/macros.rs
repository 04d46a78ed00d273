#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Print a trace line to stderr when `NAMECASE_DEBUG_RULES` is set.
macro_rules! debug_trace {
    ($($arg:tt)*) => {
        if std::env::var_os("NAMECASE_DEBUG_RULES").is_some() {
            eprintln!($($arg)*);
        }
    };
}

/// Build a `&'static [DeclensionRule]` chain from `number => function` pairs.
macro_rules! chain {
    ($($number:literal => $apply:expr),* $(,)?) => {
        &[ $( $crate::language::DeclensionRule { number: $number, apply: $apply } ),* ]
    };
}
