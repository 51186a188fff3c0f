//! Logging macros that record the call site.
//!
//! `daylog::error!(logger, "message")` logs text, `daylog::error!(logger, value)`
//! logs a structured value as the context block, and
//! `daylog::error!(logger, "message", context)` appends `context` (owned or
//! borrowed) under the message. Each expands to [`Logger::log_at`](crate::Logger::log_at)
//! and evaluates to its `Result`.

#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $input:expr $(,)?) => {
        $logger.log_at(
            $severity,
            $input,
            ::std::option::Option::None,
            ::std::option::Option::Some(&$crate::call_site!()),
        )
    };
    ($logger:expr, $severity:expr, $input:expr, $context:expr $(,)?) => {
        $logger.log_at(
            $severity,
            $input,
            ::std::option::Option::Some(<_ as ::std::borrow::Borrow<$crate::Value>>::borrow(
                &$context,
            )),
            ::std::option::Option::Some(&$crate::call_site!()),
        )
    };
}

#[macro_export]
macro_rules! emergency {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Severity::Emergency, $($arg)+) };
}

#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Severity::Alert, $($arg)+) };
}

#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Severity::Critical, $($arg)+) };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Severity::Error, $($arg)+) };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Severity::Warning, $($arg)+) };
}

#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Severity::Notice, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Severity::Info, $($arg)+) };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Severity::Debug, $($arg)+) };
}
