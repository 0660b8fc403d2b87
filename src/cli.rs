use clap::Parser;
use std::path::PathBuf;

use crate::api::Retention;

/// Upload a file to a transfer.sh-style endpoint.
///
/// The endpoint is read from the `TSH_URL` environment variable; optional
/// HTTP basic-auth credentials come from `TSH_HTTP_AUTH_USER` and
/// `TSH_HTTP_AUTH_PASS`.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// Maximum number of days to keep the file (0 = server default)
    #[arg(long, default_value_t = 0)]
    pub max_days: u32,

    /// Maximum number of times the file can be downloaded (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    pub max_downloads: u32,

    /// File to upload
    pub file: PathBuf,
}

impl Args {
    /// Retention fields for the request; zero-valued flags stay unset.
    pub fn retention(&self) -> Retention {
        Retention {
            max_days: self.max_days,
            max_downloads: self.max_downloads,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Args;
    use clap::Parser;

    #[test]
    fn flags_default_to_unset() {
        let args = Args::try_parse_from(["tsh", "notes.txt"]).unwrap();
        assert_eq!(args.max_days, 0);
        assert_eq!(args.max_downloads, 0);
        assert_eq!(args.file.to_str(), Some("notes.txt"));
    }

    #[test]
    fn retention_flags_parse() {
        let args =
            Args::try_parse_from(["tsh", "--max-days", "5", "--max-downloads", "3", "a.bin"])
                .unwrap();
        assert_eq!(args.max_days, 5);
        assert_eq!(args.max_downloads, 3);
        assert_eq!(args.retention().max_days, 5);
        assert_eq!(args.retention().max_downloads, 3);
    }

    #[test]
    fn filename_is_required() {
        assert!(Args::try_parse_from(["tsh"]).is_err());
    }

    #[test]
    fn negative_retention_is_rejected() {
        assert!(Args::try_parse_from(["tsh", "--max-days", "-1", "a.bin"]).is_err());
    }
}
