//! Background conversion job
//!
//! Downloads and speech requests block for a while, so each run happens on
//! its own thread. Notices travel back over a channel; the channel closing
//! means the run is over.

use crate::convert::{ConversionOutcome, ConversionRequest, Converter};
use crate::report::{ChannelReporter, Notice};
use crate::{Result, VocalizeError};
use log::debug;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// How often the waiting side gets a chance to show progress
pub const TICK: Duration = Duration::from_millis(250);

/// A conversion running on a worker thread
pub struct ConversionJob {
    notices: Receiver<Notice>,
    handle: JoinHandle<ConversionOutcome>,
}

impl ConversionJob {
    /// Start `request` on a new thread
    pub fn spawn(converter: Arc<Converter>, request: ConversionRequest) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("conversion".into())
            .spawn(move || {
                let reporter = ChannelReporter::new(tx);
                converter.run(request, &reporter)
            })?;
        debug!("Conversion job started");

        Ok(Self {
            notices: rx,
            handle,
        })
    }

    /// Block until the run finishes, calling `on_tick` while waiting
    pub fn wait(self, mut on_tick: impl FnMut()) -> Result<(ConversionOutcome, Vec<Notice>)> {
        let mut notices = Vec::new();
        loop {
            match self.notices.recv_timeout(TICK) {
                Ok(notice) => notices.push(notice),
                Err(RecvTimeoutError::Timeout) => on_tick(),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        let outcome = self
            .handle
            .join()
            .map_err(|_| VocalizeError::Other("conversion worker panicked".into()))?;
        debug!("Conversion job finished with {} notices", notices.len());
        Ok((outcome, notices))
    }
}
