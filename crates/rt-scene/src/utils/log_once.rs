macro_rules! log_once {
    (target: $target:expr, $lvl:expr, $($arg:tt)+) => {{
        use std::sync::Once;
        static ONCE: Once = Once::new();
        ONCE.call_once(|| {
            if log::log_enabled!(target: $target, $lvl) {
                log::log!(target: $target, $lvl, $($arg)+);
            }
        });
    }};
    ($lvl:expr, $($arg:tt)+) => ($crate::utils::log_once::log_once!(target: module_path!(), $lvl, $($arg)+));
}

/// Warn once per call site for the whole process
macro_rules! warn_once {
    (target: $target:expr, $($arg:tt)+) => (
        $crate::utils::log_once::log_once!(target: $target, log::Level::Warn, $($arg)+)
    );
    ($($arg:tt)+) => (
        $crate::utils::log_once::log_once!(log::Level::Warn, $($arg)+)
    );
}

pub(crate) use log_once;
pub(crate) use warn_once;
