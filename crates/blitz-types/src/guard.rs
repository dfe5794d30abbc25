// crates/blitz-types/src/guard.rs
// Per-instance embed guard: issue at most one embed, ignore late results after teardown

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Lifecycle of one embedding component instance.
///
/// Only `Uninitialized` can issue an embed. Every other state is terminal with
/// respect to re-arming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbedState {
    #[default]
    Uninitialized,
    Requested,
    Ready,
    Failed,
}

impl EmbedState {
    pub fn is_armed(self) -> bool {
        self == EmbedState::Uninitialized
    }
}

/// Decide whether a run with identity `next` should issue the embed call.
///
/// True only while armed, when the identity qualifies (non-empty subject), and
/// when it differs from the identity seen on the previous run.
pub fn should_embed<K: PartialEq>(
    prev: Option<&K>,
    next: &K,
    qualifies: bool,
    state: EmbedState,
) -> bool {
    state.is_armed() && qualifies && prev != Some(next)
}

/// Liveness flag shared between a component and its pending embed
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Guard owned by one component instance
#[derive(Debug)]
pub struct EmbedGuard<K> {
    state: EmbedState,
    identity: Option<K>,
    token: CancelToken,
}

impl<K: PartialEq> EmbedGuard<K> {
    pub fn new() -> Self {
        Self {
            state: EmbedState::Uninitialized,
            identity: None,
            token: CancelToken::new(),
        }
    }

    pub fn state(&self) -> EmbedState {
        self.state
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Record the identity of the current run. Returns true when the caller
    /// must issue the embed now; the guard is already `Requested` by then.
    pub fn observe(&mut self, identity: K, qualifies: bool) -> bool {
        let embed = should_embed(self.identity.as_ref(), &identity, qualifies, self.state);
        self.identity = Some(identity);
        if embed {
            self.state = EmbedState::Requested;
        }
        embed
    }

    /// Mark the pending embed as resolved. False if torn down or not pending.
    pub fn resolve(&mut self) -> bool {
        self.settle(EmbedState::Ready)
    }

    /// Mark the pending embed as rejected. False if torn down or not pending.
    pub fn fail(&mut self) -> bool {
        self.settle(EmbedState::Failed)
    }

    fn settle(&mut self, outcome: EmbedState) -> bool {
        if self.token.is_cancelled() || self.state != EmbedState::Requested {
            return false;
        }
        self.state = outcome;
        true
    }
}

impl<K: PartialEq> Default for EmbedGuard<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_qualifying_run_embeds() {
        let mut guard = EmbedGuard::new();
        assert!(guard.observe("abc123".to_string(), true));
        assert_eq!(guard.state(), EmbedState::Requested);
    }

    #[test]
    fn test_same_identity_embeds_once() {
        let mut guard = EmbedGuard::new();
        let issued = (0..5)
            .filter(|_| guard.observe("abc123".to_string(), true))
            .count();
        assert_eq!(issued, 1);
    }

    #[test]
    fn test_non_qualifying_never_embeds() {
        let mut guard: EmbedGuard<String> = EmbedGuard::new();
        assert!(!guard.observe(String::new(), false));
        assert!(!guard.observe(String::new(), false));
        assert_eq!(guard.state(), EmbedState::Uninitialized);
    }

    #[test]
    fn test_identity_arriving_later_embeds() {
        let mut guard = EmbedGuard::new();
        assert!(!guard.observe(String::new(), false));
        assert!(guard.observe("octocat/hello-world".to_string(), true));
    }

    #[test]
    fn test_identity_change_after_trip_is_ignored() {
        let mut guard = EmbedGuard::new();
        assert!(guard.observe(("a/b".to_string(), "el".to_string()), true));
        assert!(!guard.observe(("c/d".to_string(), "el".to_string()), true));
        assert!(guard.resolve());
        assert!(!guard.observe(("e/f".to_string(), "other".to_string()), true));
        assert_eq!(guard.state(), EmbedState::Ready);
    }

    #[test]
    fn test_failed_is_terminal() {
        let mut guard = EmbedGuard::new();
        guard.observe(1u32, true);
        assert!(guard.fail());
        assert_eq!(guard.state(), EmbedState::Failed);
        assert!(!guard.resolve());
        assert!(!guard.observe(2u32, true));
    }

    #[test]
    fn test_cancelled_guard_ignores_settlement() {
        let mut guard = EmbedGuard::new();
        guard.observe(1u32, true);
        guard.token().cancel();
        assert!(!guard.resolve());
        assert_eq!(guard.state(), EmbedState::Requested);
    }

    #[test]
    fn test_should_embed_rule() {
        assert!(should_embed(None, &"x", true, EmbedState::Uninitialized));
        assert!(should_embed(Some(&"x"), &"y", true, EmbedState::Uninitialized));
        assert!(!should_embed(Some(&"x"), &"x", true, EmbedState::Uninitialized));
        assert!(!should_embed(None, &"x", false, EmbedState::Uninitialized));
        assert!(!should_embed(None, &"x", true, EmbedState::Requested));
        assert!(!should_embed(None, &"x", true, EmbedState::Ready));
        assert!(!should_embed(None, &"x", true, EmbedState::Failed));
    }
}
