use crate::http_client::MutationState::{self, *};

/// **VALUE**: Verifies the legal paths through a mutating request.
///
/// **WHY THIS MATTERS**: `post` asserts every transition in debug builds; a
/// missing edge here would panic a legitimate request in tests.
#[test]
fn given_legal_paths_when_checked_then_every_transition_is_allowed() {
    let with_handshake = [Idle, AwaitingToken, Requesting, Succeeded];
    let cookie_resident = [Idle, Requesting, Failed];
    let handshake_failed = [Idle, AwaitingToken, Failed];

    for path in [&with_handshake[..], &cookie_resident[..], &handshake_failed[..]] {
        for pair in path.windows(2) {
            assert!(
                pair[0].can_transition_to(pair[1]),
                "{:?} -> {:?} should be allowed",
                pair[0],
                pair[1]
            );
        }
    }
}

/// **VALUE**: Verifies that finished operations cannot be resumed.
///
/// **BUG THIS CATCHES**: Would catch an automatic retry sneaking in as
/// `Failed -> Requesting`.
#[test]
fn given_terminal_state_when_checked_then_no_transition_is_allowed() {
    let all = [Idle, AwaitingToken, Requesting, Succeeded, Failed];

    for terminal in [Succeeded, Failed] {
        for next in all {
            assert!(
                !terminal.can_transition_to(next),
                "{terminal:?} -> {next:?} must be rejected"
            );
        }
    }
}

#[test]
fn given_idle_when_jumping_to_result_then_transition_is_rejected() {
    assert!(!MutationState::Idle.can_transition_to(Succeeded));
    assert!(!MutationState::Idle.can_transition_to(Failed));
    assert!(!MutationState::AwaitingToken.can_transition_to(Succeeded));
}
