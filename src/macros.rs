/// Emits a `trace`-level event when the `tracing` feature is enabled.
///
/// Expands to nothing otherwise, so arguments must not carry side effects.
///
/// ```rust,ignore
/// trace_event!(from = old, to = new, "vertex set grown");
/// ```
macro_rules! trace_event {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(target: "digraph", $($arg)+);
        }
    };
}

/// Debug-asserts a graph invariant with a message.
///
/// Release builds compile the check out entirely.
macro_rules! invariant {
    ($cond:expr, $($msg:tt)+) => {
        debug_assert!($cond, "graph invariant violated: {}", format_args!($($msg)+));
    };
}
