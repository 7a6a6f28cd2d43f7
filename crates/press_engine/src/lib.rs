//! Press engine: content ingestion and normalization.
//!
//! The only I/O in the system lives here: one-shot synchronous reads of
//! content records and the press-kit manifest at load time. Item
//! validation is strict, manifest normalization is tolerant; that split
//! is policy, not accident.
mod load;
mod manifest;
mod normalize;
mod record;

pub use load::{load_manifest, load_press_dir, LoadError, LoadedBatch};
pub use manifest::{
    normalize_manifest, Downloads, Localized, ManifestCopy, MediaEntry, PressCopy, PressManifest,
};
pub use normalize::{normalize_blurb, normalize_item, ValidationError};
pub use record::{parse_record, RawRecord};
