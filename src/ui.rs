// UI layer: every user-facing line goes through here. Styling is a small
// tone set resolved at print time, so no other module holds escape codes.

use crossterm::style::Stylize;

use crate::api::UploadOutcome;
use crate::clipboard;

/// How a line should look. Resolved to terminal styling only at the
/// output boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Plain,
}

fn paint(tone: Tone, text: &str) -> String {
    match tone {
        Tone::Success => text.green().to_string(),
        Tone::Error => text.red().to_string(),
        Tone::Plain => text.to_string(),
    }
}

/// Render the server's verdict. An accepted upload prints the download
/// URL and tries to put it on the clipboard (a failed copy is reported,
/// never fatal); a rejected one prints the server's error text. Returns
/// whether the upload was accepted.
pub fn render_outcome(outcome: &UploadOutcome) -> bool {
    match outcome {
        UploadOutcome::Accepted { url } => {
            println!("Download from here: {}", paint(Tone::Success, url));
            match clipboard::copy(url) {
                Ok(()) => println!("It has also been copied to the clipboard!"),
                Err(err) => eprintln!(
                    "{}",
                    paint(Tone::Plain, &format!("Couldn't copy to the clipboard: {err:#}"))
                ),
            }
            true
        }
        UploadOutcome::Rejected { message, .. } => {
            eprintln!("Failed to upload file: {}", paint(Tone::Error, message));
            false
        }
    }
}

/// One-line report for local failures (bad file, network trouble, ...).
pub fn report_error(err: &anyhow::Error) {
    eprintln!("{}", paint(Tone::Error, &format!("{err:#}")));
}

#[cfg(test)]
mod test {
    use super::{paint, render_outcome, Tone};
    use crate::api::UploadOutcome;
    use reqwest::StatusCode;

    #[test]
    fn plain_tone_leaves_text_unstyled() {
        assert_eq!(paint(Tone::Plain, "hello"), "hello");
    }

    #[test]
    fn styled_tones_keep_the_text() {
        assert!(paint(Tone::Success, "https://example.com/abc").contains("https://example.com/abc"));
        assert!(paint(Tone::Error, "quota exceeded").contains("quota exceeded"));
    }

    // The clipboard is only ever touched on the accepted path.
    #[test]
    fn rejection_renders_as_failure() {
        let outcome = UploadOutcome::Rejected {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "quota exceeded".into(),
        };
        assert!(!render_outcome(&outcome));
    }
}
