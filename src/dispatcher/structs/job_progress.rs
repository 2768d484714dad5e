/// Retries resume after the last step that succeeded, so a job never credits
/// an account twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobProgress {
    /// Credited `(uploaded, downloaded)`, computed once against the previous
    /// peer record.
    pub credit: Option<(u64, u64)>,
    pub peer_written: bool,
    pub account_credited: bool,
    pub completion_counted: bool,
}
