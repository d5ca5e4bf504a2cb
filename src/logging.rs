//! Diagnostic logging setup.
//!
//! Library code logs through the `log` facade. The binary installs a
//! `tracing-subscriber` formatter on stderr, which also receives `log`
//! records, so diagnostics never mix with the progress output on stdout.

use tracing_subscriber::EnvFilter;

/// Filter directive for the given CLI verbosity.
///
/// `RUST_LOG`, when set, takes precedence over this default.
///
/// # Examples
///
/// ```
/// use pom_release::logging::default_directive;
///
/// assert_eq!(default_directive(0, false), "warn");
/// assert_eq!(default_directive(2, false), "debug");
/// assert_eq!(default_directive(0, true), "error");
/// ```
#[must_use]
pub const fn default_directive(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber.
///
/// Does nothing if a subscriber is already installed, so it is safe to call
/// more than once.
pub fn init(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity, quiet)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();

    if installed.is_err() {
        log::trace!("logging already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, false, "warn")]
    #[case(1, false, "info")]
    #[case(2, false, "debug")]
    #[case(3, false, "trace")]
    #[case(9, false, "trace")]
    #[case(0, true, "error")]
    fn verbosity_maps_to_directive(
        #[case] verbosity: u8,
        #[case] quiet: bool,
        #[case] expected: &str,
    ) {
        assert_eq!(default_directive(verbosity, quiet), expected);
    }

    #[test]
    fn init_twice_is_harmless() {
        init(0, false);
        init(2, false);
    }
}
