use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use mews_logging::{mews_debug, mews_error, mews_info, mews_warn};

use crate::envelope::EnvelopeLayout;
use crate::load::load_cats;
use crate::source::CatSource;
use crate::EngineEvent;

/// Receives engine events on the engine thread.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    LoadCats,
}

/// Runs loads on a background thread with its own tokio runtime.
///
/// At most one load is in flight; requests made while one is running are
/// dropped.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    in_flight: Arc<AtomicBool>,
}

impl EngineHandle {
    pub fn new(
        source: Arc<dyn CatSource>,
        layout: EnvelopeLayout,
        sink: Arc<dyn EventSink>,
    ) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let in_flight = Arc::new(AtomicBool::new(false));
        let flag = in_flight.clone();

        thread::Builder::new()
            .name("mews-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    match command {
                        EngineCommand::LoadCats => {
                            sink.emit(EngineEvent::LoadStarted {
                                source: source.describe(),
                            });
                            let result = runtime.block_on(load_cats(source.as_ref(), layout));
                            if let Err(err) = &result {
                                mews_warn!("Load failed: {}", err);
                            }
                            flag.store(false, Ordering::Release);
                            sink.emit(EngineEvent::LoadFinished(result));
                        }
                    }
                }
                mews_debug!("Engine command channel closed");
            })?;

        Ok(Self { cmd_tx, in_flight })
    }

    /// Starts a load unless one is already running. Returns whether a new
    /// load was started.
    pub fn request_cats(&self) -> bool {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            mews_debug!("Load already in flight; request ignored");
            return false;
        }
        if self.cmd_tx.send(EngineCommand::LoadCats).is_err() {
            mews_error!("Engine thread is gone; cannot load cats");
            self.in_flight.store(false, Ordering::Release);
            return false;
        }
        mews_info!("Load requested");
        true
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}
