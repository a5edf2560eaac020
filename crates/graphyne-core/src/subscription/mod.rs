mod fingerprint;
mod registry;

pub use registry::MatchedSubscription;
pub use registry::SubscriptionId;
pub use registry::SubscriptionRegistry;
pub use registry::SubscriptionSink;
