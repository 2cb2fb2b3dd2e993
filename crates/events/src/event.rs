/// A recorded fact that can be published on a bus.
///
/// The type name and schema version travel in the envelope, so consumers can
/// route and upgrade payloads without decoding them first.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "orders.order.recorded").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;
}
