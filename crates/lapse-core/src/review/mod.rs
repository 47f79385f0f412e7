mod adjustment;
mod metadata;
mod record;

pub use adjustment::AdjustmentEvent;
pub use metadata::ReviewMetadata;
pub use record::ReviewRecord;
