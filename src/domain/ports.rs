use crate::domain::node::Node;
use crate::utils::error::Result;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// A deferred action that has come due, tagged with the schedule call that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<M> {
    pub key: String,
    pub generation: u64,
    pub msg: M,
}

/// One-shot deferred actions keyed by name.
///
/// Scheduling a key that is still pending replaces the earlier action. An
/// earlier action that already fired is stale and gets rejected by `accept`.
pub trait Scheduler<M> {
    fn schedule(&mut self, key: &str, delay: Duration, msg: M);
    /// Marks a fired action as delivered and hands back its message, or
    /// `None` when a later `schedule` call has replaced it.
    fn accept(&mut self, fired: Fired<M>) -> Option<M>;
    fn cancel_all(&mut self);
    fn pending(&self) -> usize;
}

/// Turns a render tree into bytes for the hosting layer. `None` is the
/// closed render gate and must still produce a valid, empty document.
pub trait PageSerializer: Send + Sync {
    fn serialize(&self, page: Option<&Node>) -> Result<String>;
    fn file_extension(&self) -> &'static str;
}
