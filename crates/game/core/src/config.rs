/// Session configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Number of strongest attackers kept for planning.
    /// Clamped to `1..=MAX_ATTACKERS` when read through [`SessionConfig::attacker_cap`].
    pub max_attackers: usize,

    /// Seconds to wait for the next encounter update before timing out.
    pub listen_timeout_secs: u64,
}

impl SessionConfig {
    // ===== compile-time constants =====
    /// Hard upper bound on the exhaustive search pool (6! = 720 simulations).
    pub const MAX_ATTACKERS: usize = 6;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LISTEN_TIMEOUT_SECS: u64 = 300;

    pub fn new() -> Self {
        Self {
            max_attackers: Self::MAX_ATTACKERS,
            listen_timeout_secs: Self::DEFAULT_LISTEN_TIMEOUT_SECS,
        }
    }

    pub fn with_listen_timeout_secs(mut self, secs: u64) -> Self {
        self.listen_timeout_secs = secs;
        self
    }

    pub fn with_max_attackers(mut self, max_attackers: usize) -> Self {
        self.max_attackers = max_attackers;
        self
    }

    /// Effective roster cap, never above [`Self::MAX_ATTACKERS`].
    pub fn attacker_cap(&self) -> usize {
        self.max_attackers.clamp(1, Self::MAX_ATTACKERS)
    }

    pub fn listen_timeout(&self) -> core::time::Duration {
        core::time::Duration::from_secs(self.listen_timeout_secs)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
