use mews_logging::{mews_debug, mews_info, mews_trace, mews_warn};

use crate::envelope::{extract_records, EnvelopeLayout};
use crate::source::CatSource;
use crate::translate::{parse_record, translate};
use crate::{FailureKind, FetchError, LoadedCats, RejectedRecord};

/// Queries the source once and translates every record it returns.
pub async fn load_cats(
    source: &dyn CatSource,
    layout: EnvelopeLayout,
) -> Result<LoadedCats, FetchError> {
    mews_info!("Loading cats from {}", source.describe());
    let bytes = source.query().await?;
    mews_debug!("Received {} bytes", bytes.len());
    decode_cats(&bytes, layout)
}

/// Parses a payload and translates its records in order. Records that do
/// not translate are skipped and reported in [`LoadedCats::rejected`].
pub fn decode_cats(bytes: &[u8], layout: EnvelopeLayout) -> Result<LoadedCats, FetchError> {
    let payload: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::MalformedPayload, err.to_string()))?;
    let records = extract_records(&payload, layout)
        .map_err(|err| FetchError::new(FailureKind::MalformedPayload, err.to_string()))?;

    let mut loaded = LoadedCats {
        cats: Vec::with_capacity(records.len()),
        rejected: Vec::new(),
    };
    for (position, value) in records.into_iter().enumerate() {
        match parse_record(value).and_then(|raw| translate(&raw)) {
            Ok(cat) => {
                mews_trace!("Record {} is cat {} ({})", position, cat.id(), cat.name);
                loaded.cats.push(cat);
            }
            Err(reason) => {
                mews_warn!("Skipping pet record {}: {}", position, reason);
                loaded.rejected.push(RejectedRecord { position, reason });
            }
        }
    }
    mews_debug!(
        "Translated {} cats, rejected {}",
        loaded.cats.len(),
        loaded.rejected.len()
    );
    Ok(loaded)
}
