use serde_json::{Map, Value};

/// One loosely-typed object from the source API, exactly as decoded.
pub type RawUser = Map<String, Value>;
