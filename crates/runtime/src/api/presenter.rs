//! Output side of an encounter.
use async_trait::async_trait;
use raid_core::PlanView;

use super::outcome::SessionOutcome;

/// Renders plans and terminal notices for a human.
///
/// Implementations are shared between encounters and must not assume that
/// calls for different encounters arrive in any particular order.
#[async_trait]
pub trait Presenter: Send + Sync {
    /// Called with every plan the session produces, and again whenever the
    /// cursor moves.
    async fn present_plan(&self, plan: &PlanView);

    /// Called once when the encounter ends.
    async fn present_outcome(&self, outcome: &SessionOutcome);
}
