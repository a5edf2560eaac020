use crate::executor::SchedulingPolicy;

/// Runtime knobs for a [`super::Request`], set once at construction and
/// fixed for its lifetime -- accumulate-then-freeze, matching the
/// schema/types builders elsewhere in this crate rather than reaching for
/// environment-variable globals.
#[derive(Clone, Copy, Debug)]
pub struct RuntimeConfig {
    pub(crate) default_policy: SchedulingPolicy,
}
impl RuntimeConfig {
    pub fn builder() -> RuntimeConfigBuilder {
        RuntimeConfigBuilder::default()
    }
}
impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig::builder().build()
    }
}

pub struct RuntimeConfigBuilder {
    default_policy: SchedulingPolicy,
}
impl Default for RuntimeConfigBuilder {
    fn default() -> Self {
        RuntimeConfigBuilder {
            default_policy: SchedulingPolicy::Parallel,
        }
    }
}
impl RuntimeConfigBuilder {
    /// The scheduling policy `resolve()` calls use when not overridden
    /// per-call. Mutation root fields always run sequentially regardless.
    pub fn default_policy(mut self, policy: SchedulingPolicy) -> Self {
        self.default_policy = policy;
        self
    }

    pub fn build(self) -> RuntimeConfig {
        RuntimeConfig {
            default_policy: self.default_policy,
        }
    }
}
