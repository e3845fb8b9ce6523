use std::env;

use once_cell::sync::Lazy;

use crate::constants::DEBUG_ENV_VAR;

static DEBUG_ENABLED: Lazy<bool> = Lazy::new(|| {
    env::var(DEBUG_ENV_VAR).is_ok_and(|log_level| is_truthy(&log_level))
});

fn is_truthy(value: &str) -> bool {
    value.eq("true") || value.eq("1")
}

pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED
}

/// Builds a debug message, appending the details only when debugging is enabled.
///
/// # Arguments
///
/// * `message` - The main message to log.
/// * `details` - Additional details to include in the log.
///
/// # Returns
///
/// A formatted string containing the message and details.
pub fn debug_message<M, D>(message: M, details: D) -> String
where
    M: AsRef<str>,
    D: AsRef<str>,
{
    if is_debug_enabled() {
        format!("{}{}", message.as_ref(), details.as_ref())
    } else {
        message.as_ref().to_string()
    }
}

/// Logs a debug message with optional formatted arguments.
///
/// Output is printed in yellow and only when `TITLEIZE_DEBUG` is set to
/// `true` or `1` at the time of the first log call.
///
/// # Examples
///
/// ```
/// use titleize::debug;
///
/// debug!("Registered filters");
/// debug!("Filter {} registered into {} engines", "titleize", 2);
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:expr) => {
        if $crate::log::is_debug_enabled() {
            println!("{}", nu_ansi_term::Color::Yellow.paint(format!("{}", $fmt)));
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        if $crate::log::is_debug_enabled() {
            println!("{}", nu_ansi_term::Color::Yellow.paint(format!($fmt, $($arg)*)));
        }
    };
}
