use std::collections::BTreeMap;

/// Request headers with lowercased names, one value per name.
pub type AnnounceHeaders = BTreeMap<String, String>;
