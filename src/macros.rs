// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg: String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, format!s, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Category shorthand for the fixed tables.
///
/// `category!(NAME, NeedsWork, result, recommendation, why, how, quick_win)`
#[macro_export]
macro_rules! category {
    ($name:expr, $verdict:ident, $result:expr, $rec:expr, $why:expr, $how:expr, $qwin:expr $(,)?) => {
        $crate::audit::Category {
            name: $crate::s!($name),
            verdict: $crate::audit::Verdict::$verdict,
            result: $crate::s!($result),
            recommendation: $crate::s!($rec),
            rationale: $crate::s!($why),
            remediation: $crate::s!($how),
            quick_win: Some($crate::s!($qwin)),
        }
    };
}
