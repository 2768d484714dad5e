use std::collections::BTreeMap;
use crate::tracker::structs::group::Group;
use crate::database::structs::group_index::GroupIndex;

impl GroupIndex {
    pub fn from_groups(groups: Vec<Group>) -> GroupIndex
    {
        let find = |slug: &str| groups.iter().find(|group| group.slug.eq_ignore_ascii_case(slug)).map(|group| group.id);
        GroupIndex {
            validating: find("validating"),
            banned: find("banned"),
            disabled: find("disabled"),
            groups: groups.iter().cloned().map(|group| (group.id, group)).collect::<BTreeMap<u64, Group>>(),
        }
    }

    pub fn get(&self, group_id: u64) -> Option<&Group>
    {
        self.groups.get(&group_id)
    }

    pub fn is_validating(&self, group_id: u64) -> bool
    {
        self.validating == Some(group_id)
    }

    pub fn is_banned(&self, group_id: u64) -> bool
    {
        self.banned == Some(group_id)
    }

    pub fn is_disabled(&self, group_id: u64) -> bool
    {
        self.disabled == Some(group_id)
    }

    /// Slot limit of the group, `None` when unlimited or unknown.
    pub fn download_slots(&self, group_id: u64) -> Option<i64>
    {
        self.get(group_id)
            .and_then(|group| group.download_slots)
            .filter(|slots| *slots >= 0)
    }
}
