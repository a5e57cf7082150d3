use tracing_subscriber::EnvFilter;

/// Library crates whose events are shown next to the binary's own.
const LIBRARY_TARGETS: &[&str] = &["fer_core", "fer_time", "fer_carousel"];

/// Level for a `-v` count: none is warn, then info, debug, and trace.
fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `target=level` directives for this binary and the library crates.
fn default_directives(verbosity: u8) -> String {
    let level = level(verbosity);
    std::iter::once(env!("CARGO_CRATE_NAME"))
        .chain(LIBRARY_TARGETS.iter().copied())
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the stderr subscriber. `RUST_LOG`, when set, replaces the
/// directives derived from `verbosity`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level(0), "warn");
        assert_eq!(level(1), "info");
        assert_eq!(level(2), "debug");
        assert_eq!(level(3), "trace");
        assert_eq!(level(u8::MAX), "trace");
    }

    #[test]
    fn directives_cover_binary_and_libraries() {
        assert_eq!(
            default_directives(2),
            "feriados=debug,fer_core=debug,fer_time=debug,fer_carousel=debug"
        );
    }
}
