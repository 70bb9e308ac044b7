#![warn(missing_docs)]
#![forbid(unsafe_code)]
//! Test support shared by the `show-value` test suites.
//!
//! Use [`test`] in place of `#[test]` to get `tracing` output from the code
//! under test. The `SHOW_LOG` environment variable filters it, using
//! `tracing_subscriber` target syntax (`SHOW_LOG=show_value=debug`); without
//! it everything down to `TRACE` is shown.

pub use show_testhelpers_macros::test;

use std::sync::LazyLock;
use std::time::Instant;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static START: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Timestamps log lines with the time since the first test started.
struct SinceStart;

impl FormatTime for SinceStart {
    fn format_time(&self, w: &mut Writer<'_>) -> core::fmt::Result {
        let elapsed = START.elapsed();
        write!(w, "{:4}.{:03}s", elapsed.as_secs(), elapsed.subsec_millis())
    }
}

static SUBSCRIBER: LazyLock<()> = LazyLock::new(|| {
    LazyLock::force(&START);

    let filter = std::env::var("SHOW_LOG")
        .ok()
        .and_then(|s| s.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(tracing::Level::TRACE));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_timer(SinceStart)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .ok();
});

/// Installs the test subscriber, once per process.
///
/// Safe to call from every test; only the first call does anything.
pub fn setup() {
    LazyLock::force(&SUBSCRIBER);
}
