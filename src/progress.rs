// Progress bar construction lives here so the upload path only ever sees
// an indicatif handle ("accepts byte-count increments") and callers can
// swap in a hidden bar for non-interactive runs.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Redraw cap; rapid updates are batched so the terminal is not flooded.
const MAX_REFRESH_HZ: u8 = 15;

const TEMPLATE: &str = "{msg:.dim} {bar:10.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec})";

/// Transfer bar labelled with the file being sent. Draws to stderr (so
/// piped stdout stays clean), shows byte counts, and is cleared once the
/// transfer finishes. The length is set by the uploader once the file
/// size is known.
pub fn transfer_bar(label: &str) -> ProgressBar {
    ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr_with_hz(MAX_REFRESH_HZ))
        .with_style(ProgressStyle::with_template(TEMPLATE).unwrap())
        .with_message(label.to_string())
}

/// Bar that renders nothing; for callers that want progress disabled
/// (tests, non-interactive environments).
pub fn hidden() -> ProgressBar {
    ProgressBar::hidden()
}

#[cfg(test)]
mod test {
    use super::hidden;
    use std::io::{Cursor, Read};

    // The wrapper is a tee: bytes must come through unchanged while the
    // bar observes the count.
    #[test]
    fn wrap_read_passes_bytes_through_unchanged() {
        let data: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
        let bar = hidden();
        bar.set_length(data.len() as u64);

        let mut out = Vec::new();
        let mut reader = bar.wrap_read(Cursor::new(data.clone()));
        reader.read_to_end(&mut out).unwrap();

        assert_eq!(out, data);
        assert_eq!(bar.position(), data.len() as u64);
    }

    #[test]
    fn empty_stream_counts_zero() {
        let bar = hidden();
        bar.set_length(0);

        let mut out = Vec::new();
        let mut reader = bar.wrap_read(Cursor::new(Vec::new()));
        reader.read_to_end(&mut out).unwrap();

        assert!(out.is_empty());
        assert_eq!(bar.position(), 0);
    }
}
