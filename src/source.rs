//! Line-oriented JSON [`InputSource`] implementation.
//!
//! Reads newline-delimited JSON [`Request`]s from any buffered reader
//! (stdin for the `wspick` binary).
//!
//! # Wire format
//!
//! Every message is a single line of JSON followed by `\n`:
//!
//! ```json
//! {"Input":{"Filter":"wri"}}
//! {"Input":{"Key":{"key":"ArrowDown"}}}
//! {"Input":{"Key":{"key":"Enter","mods":{"shift":true}}}}
//! {"Input":{"ClickDelete":1}}
//! "Accept"
//! "Cancel"
//! ```

use crate::command::Input;
use crate::traits::InputSource;
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::io::BufRead;
use std::sync::mpsc;

/// One message for the picker process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Request {
    /// An input for the picker itself.
    Input(Input),
    /// Press the CTA of the open confirmation dialog.
    Accept,
    /// Press Cancel on the open confirmation dialog.
    Cancel,
}

/// An [`InputSource`] reading one JSON [`Request`] per line.
///
/// Blank lines are skipped; malformed lines are logged and skipped.
pub struct JsonLineSource<R> {
    reader: R,
}

/// Errors produced by the line source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl<R: BufRead + Send> JsonLineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead + Send> InputSource for JsonLineSource<R> {
    type Error = SourceError;

    /// Read until end of input or until the sink is dropped.
    fn run(&mut self, sink: mpsc::Sender<Request>) -> Result<(), Self::Error> {
        for line in (&mut self.reader).lines() {
            let text = line?;
            if text.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Request>(&text) {
                Ok(req) => {
                    debug!("received {:?}", req);
                    if sink.send(req).is_err() {
                        info!("sink closed, shutting down");
                        return Ok(());
                    }
                }
                Err(e) => {
                    error!("bad request: {}: {}", text, e);
                }
            }
        }
        debug!("input exhausted");
        Ok(())
    }
}
