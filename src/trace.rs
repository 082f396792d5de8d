// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a counting stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("textstats_stage", stage = $name).entered();
    };
}

/// Emit a debug event (when the `tracing` feature is enabled).
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}
