//! Mews engine: listing sources, payload decoding and record translation.
mod engine;
mod envelope;
mod load;
mod raw;
mod source;
mod translate;
mod types;

pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use envelope::{extract_records, EnvelopeError, EnvelopeLayout};
pub use load::{decode_cats, load_cats};
pub use raw::{Breeds, Media, OneOrMany, Options, Photo, Photos, RawPetRecord, Text};
pub use source::{
    CatSource, FetchSettings, LocalSnapshotSource, RemoteProxySource, DEFAULT_MAX_RESULTS,
};
pub use translate::{parse_record, translate, TranslateError};
pub use types::{EngineEvent, FailureKind, FetchError, LoadedCats, RejectedRecord};
