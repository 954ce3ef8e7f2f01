/// Lifecycle of one mutating request.
///
/// `Idle → AwaitingToken → Requesting → Succeeded | Failed`, where
/// `AwaitingToken` is skipped when the cookie store already holds a token.
/// Both final states are terminal; a retry is a new operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationState {
    Idle,
    AwaitingToken,
    Requesting,
    Succeeded,
    Failed,
}

impl MutationState {
    pub fn can_transition_to(self, next: MutationState) -> bool {
        use MutationState::*;

        matches!(
            (self, next),
            (Idle, AwaitingToken)
                | (Idle, Requesting)
                | (AwaitingToken, Requesting)
                | (AwaitingToken, Failed)
                | (Requesting, Succeeded)
                | (Requesting, Failed)
        )
    }
}
