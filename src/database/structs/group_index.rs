use std::collections::BTreeMap;
use crate::tracker::structs::group::Group;

/// Immutable snapshot of the groups table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupIndex {
    pub groups: BTreeMap<u64, Group>,
    pub validating: Option<u64>,
    pub banned: Option<u64>,
    pub disabled: Option<u64>,
}
