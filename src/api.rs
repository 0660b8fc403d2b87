// API client module: contains a small blocking HTTP client that performs
// the one multipart upload against a transfer.sh-style endpoint. It is
// intentionally small and synchronous: the program makes exactly one
// request per invocation and exits.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use indicatif::ProgressBar;
use reqwest::blocking::{multipart, Client};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use std::fs::File;
use std::path::Path;

/// Simple API client that holds a reqwest blocking client, the endpoint
/// URL and optional HTTP basic-auth credentials.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    url: String,
    auth: Option<BasicAuth>,
}

/// Username/password pair for HTTP basic authentication.
#[derive(Clone, Debug)]
pub struct BasicAuth {
    user: String,
    pass: String,
}

/// Retention settings forwarded to the server as form fields. Zero means
/// "unset": the field is omitted from the request entirely.
#[derive(Clone, Copy, Debug, Default)]
pub struct Retention {
    pub max_days: u32,
    pub max_downloads: u32,
}

/// The server's verdict on an upload. A non-200 status is the protocol's
/// normal failure path (quota exceeded, file too large, ...), so it comes
/// back as data rather than as an error.
#[derive(Debug)]
pub enum UploadOutcome {
    /// 200 OK: the body is the download URL.
    Accepted { url: String },
    /// Anything else: the body is the server's error text.
    Rejected { status: StatusCode, message: String },
}

impl BasicAuth {
    /// Both-or-neither: credentials count only when username and password
    /// are non-empty.
    pub fn from_pair(user: String, pass: String) -> Option<Self> {
        if user.is_empty() || pass.is_empty() {
            return None;
        }
        Some(BasicAuth { user, pass })
    }

    /// `Basic base64(user:pass)` header value.
    fn header_value(&self) -> Result<HeaderValue> {
        let encoded = BASE64.encode(format!("{}:{}", self.user, self.pass));
        HeaderValue::from_str(&format!("Basic {encoded}"))
            .context("Credentials do not form a valid header value")
    }
}

impl ApiClient {
    /// Create an ApiClient configured from environment variables:
    /// `TSH_URL` (required) names the endpoint; `TSH_HTTP_AUTH_USER` and
    /// `TSH_HTTP_AUTH_PASS` (optional) carry basic-auth credentials,
    /// attached only when both are non-empty.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("TSH_URL")
            .context("Environment variable TSH_URL must be set")?;
        let user = std::env::var("TSH_HTTP_AUTH_USER").unwrap_or_default();
        let pass = std::env::var("TSH_HTTP_AUTH_PASS").unwrap_or_default();
        Self::new(url, BasicAuth::from_pair(user, pass))
    }

    /// Create an ApiClient for an explicit endpoint.
    pub fn new(url: String, auth: Option<BasicAuth>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient { client, url, auth })
    }

    /// Helper to build the Authorization header map when credentials are
    /// configured.
    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(auth) = &self.auth {
            headers.insert(AUTHORIZATION, auth.header_value()?);
        }
        Ok(headers)
    }

    /// Upload one file as a multipart `file` part, with `Max-Days` /
    /// `Max-Downloads` fields when set. The file is streamed, not read
    /// into memory; `progress` receives byte-count increments as the body
    /// is consumed (pass `progress::hidden()` to disable rendering).
    pub fn upload(
        &self,
        path: &Path,
        retention: Retention,
        progress: &ProgressBar,
    ) -> Result<UploadOutcome> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open file {}", path.display()))?;
        let size = file
            .metadata()
            .with_context(|| format!("Failed to read metadata for {}", path.display()))?
            .len();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("File path {} has no base name", path.display()))?;

        progress.set_length(size);

        // The progress wrapper tees reads into the bar without altering
        // the bytes handed to the multipart encoder.
        let reader = progress.wrap_read(file);
        let part = multipart::Part::reader_with_length(reader, size).file_name(file_name);
        let mut form = multipart::Form::new().part("file", part);
        if retention.max_days > 0 {
            form = form.text("Max-Days", retention.max_days.to_string());
        }
        if retention.max_downloads > 0 {
            form = form.text("Max-Downloads", retention.max_downloads.to_string());
        }

        let mut req = self.client.post(&self.url).multipart(form);
        if self.auth.is_some() {
            req = req.headers(self.auth_headers()?);
        }

        let res = req.send();
        // Clear the bar on every path so error lines land on a clean row.
        progress.finish_and_clear();
        let res = res.context("Failed to execute upload request")?;

        let status = res.status();
        let body = res.text().context("Failed to read server response")?;
        if status == StatusCode::OK {
            Ok(UploadOutcome::Accepted { url: body })
        } else {
            Ok(UploadOutcome::Rejected { status, message: body })
        }
    }
}
