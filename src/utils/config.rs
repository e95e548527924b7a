//! Configuration and constants for the analyzer.

/// Record field holding a resource's identifier
pub const ID_FIELD: &str = "id";

/// Record field holding a resource's name
pub const NAME_FIELD: &str = "name";

// Records carrying neither field are indexed by their position in the
// declared collection under a synthetic key
pub const POSITIONAL_KEY_PREFIX: &str = "_index_";
