use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional verbose mode.
///
/// By default only error-level events are emitted so that CLI output stays
/// readable. With `verbose`, info-level and above events are emitted.
/// Events go to stderr as JSON lines; `RUST_LOG` can add further directives.
pub fn init_logging(verbose: bool) {
    let directive = if verbose {
        "hostpanel=info"
    } else {
        "hostpanel=error"
    };
    let core_directive = if verbose {
        "hostpanel_core=info"
    } else {
        "hostpanel_core=error"
    };

    let mut filter = EnvFilter::from_default_env();
    for d in [directive, core_directive] {
        match d.parse() {
            Ok(parsed) => filter = filter.add_directive(parsed),
            Err(e) => eprintln!("Warning: ignoring invalid log directive '{}': {}", d, e),
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
