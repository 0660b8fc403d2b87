// Library root
// -----------
// This crate exposes a small library surface for the `tsh` binary, a
// one-shot upload client for transfer.sh-style endpoints. Each run
// performs exactly one upload; `main.rs` wires the modules together.
//
// Module responsibilities:
// - `cli`: Command-line argument surface (retention flags plus the file
//   to upload).
// - `api`: Encapsulates the HTTP interaction: multipart body, basic
//   auth, the single POST, and classification of the server's reply.
// - `progress`: Builds the transfer progress bar (and a hidden variant)
//   that `api` feeds with byte-count increments.
// - `clipboard`: "Write string to system clipboard" with an explicit
//   error the caller decides how to surface.
// - `ui`: Output boundary; tones resolved to terminal styling and the
//   rendering of the upload outcome.
//
// Keeping this separation makes it easier to test the upload logic or
// disable the cosmetic parts (progress, colors) without touching it.
pub mod api;
pub mod cli;
pub mod clipboard;
pub mod progress;
pub mod ui;
