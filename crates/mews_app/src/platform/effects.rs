use std::sync::{mpsc, Arc};

use mews_core::{Effect, Msg, Route};
use mews_engine::{
    CatSource, EngineEvent, EngineHandle, EnvelopeLayout, EventSink, LocalSnapshotSource,
    RemoteProxySource,
};
use mews_logging::{mews_debug, mews_info, mews_warn};

use super::config::{Endpoint, Settings};

/// Everything the main loop waits on.
#[derive(Debug)]
pub enum AppEvent {
    Line(String),
    InputClosed,
    Engine(Msg),
}

/// Turns engine events into core messages on the app channel.
struct MsgSink {
    tx: mpsc::Sender<AppEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        if let Some(msg) = map_event(event) {
            let _ = self.tx.send(AppEvent::Engine(msg));
        }
    }
}

fn map_event(event: EngineEvent) -> Option<Msg> {
    match event {
        EngineEvent::LoadStarted { source } => {
            mews_debug!("Load started: {}", source);
            None
        }
        EngineEvent::LoadFinished(Ok(loaded)) => {
            if !loaded.rejected.is_empty() {
                mews_warn!(
                    "{} pet records could not be shown",
                    loaded.rejected.len()
                );
            }
            mews_info!(
                "Loaded {} cats ({} skipped)",
                loaded.cats.len(),
                loaded.rejected.len()
            );
            Some(Msg::CatsLoaded(loaded.cats))
        }
        EngineEvent::LoadFinished(Err(err)) => Some(Msg::CatsFailed(err.to_string())),
    }
}

pub struct EffectRunner {
    engine: EngineHandle,
    location: Route,
}

impl EffectRunner {
    pub fn new(settings: &Settings, tx: mpsc::Sender<AppEvent>) -> std::io::Result<Self> {
        let source: Arc<dyn CatSource> = match settings.endpoint {
            Endpoint::Local => Arc::new(LocalSnapshotSource::new(&settings.snapshot)),
            Endpoint::Remote => Arc::new(RemoteProxySource::new(
                settings.proxy_url.clone(),
                settings.count,
                settings.fetch_settings(),
            )),
        };
        let layout = EnvelopeLayout::from(settings.layout);
        mews_info!("Cat source: {} ({:?} layout)", source.describe(), layout);

        let engine = EngineHandle::new(source, layout, Arc::new(MsgSink { tx }))?;
        Ok(Self {
            engine,
            location: settings.start.clone(),
        })
    }

    pub fn location(&self) -> &Route {
        &self.location
    }

    /// Keeps the shown location in step with route changes typed by the user.
    pub fn set_location(&mut self, route: Route) {
        self.location = route;
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchCats => {
                    if !self.engine.request_cats() {
                        mews_debug!("FetchCats ignored; a load is already running");
                    }
                }
                Effect::Navigate(route) => {
                    mews_info!("Navigate {}", route);
                    self.location = route;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mews_core::{Cat, Msg};
    use mews_engine::{EngineEvent, LoadedCats};

    use super::map_event;

    #[test]
    fn load_started_is_not_forwarded() {
        let event = EngineEvent::LoadStarted {
            source: "file cats.json".to_string(),
        };
        assert_eq!(map_event(event), None);
    }

    #[test]
    fn loaded_cats_become_cats_loaded() {
        let loaded = LoadedCats {
            cats: vec![Cat::new("1"), Cat::new("2")],
            rejected: Vec::new(),
        };
        match map_event(EngineEvent::LoadFinished(Ok(loaded))) {
            Some(Msg::CatsLoaded(cats)) => assert_eq!(cats.len(), 2),
            other => panic!("unexpected {other:?}"),
        }
    }
}
