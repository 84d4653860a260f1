/// Lifecycle phase of a [`super::PlanningSession`].
///
/// ```text
/// Planning → Presented → Listening ─┬→ Recomputing → Listening
///                                   ├→ Completed
///                                   └→ TimedOut
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SessionPhase {
    /// Units captured, no plan yet.
    Planning,
    /// A plan exists and is being handed to the presenter.
    Presented,
    /// Waiting for the next encounter update.
    Listening,
    /// The previous plan was invalidated and is being recomputed.
    Recomputing,
    /// The encounter ended.
    Completed,
    /// No update arrived within the listening window.
    TimedOut,
}

impl SessionPhase {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::TimedOut)
    }
}
