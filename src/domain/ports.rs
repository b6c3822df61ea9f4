use crate::domain::model::EntryId;
use std::net::IpAddr;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn address(&self) -> IpAddr;
    fn port(&self) -> u16;
    fn removal_delay(&self) -> Duration;
    fn default_quantity(&self) -> f64;
}

/// Deferred deletion. Scheduled tasks are fire-and-forget: they cannot be
/// cancelled and nothing awaits them.
pub trait RemovalScheduler: Send + Sync {
    fn schedule(&self, id: EntryId, delay: Duration, on_fire: Box<dyn FnOnce(EntryId) + Send>);
}
