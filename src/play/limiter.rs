use serde::Serialize;
use std::sync::Arc;

use super::store::{InMemoryPlayCounterStore, PlayCounterStore, PlayKey};

/// Outcome of a play attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Admitted,
    Rejected,
}

impl Decision {
    pub fn is_admitted(self) -> bool {
        matches!(self, Decision::Admitted)
    }
}

/// Decision plus the counter value it was made against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayAttempt {
    pub decision: Decision,
    pub plays: u64,
    pub limit: u64,
}

impl PlayAttempt {
    /// Plays still available to the pair after this attempt
    pub fn remaining(&self) -> u64 {
        self.limit.saturating_sub(self.plays)
    }
}

/// Admits at most `limit` play attempts per (content, user) pair.
///
/// Every attempt is counted, rejected ones included, and the decision is
/// taken on the post-increment value. Once a pair reaches the limit it stays
/// rejected for the lifetime of the store.
pub struct PlaySessionLimiter {
    store: Arc<dyn PlayCounterStore>,
    limit: u64,
}

impl PlaySessionLimiter {
    pub fn new(store: Arc<dyn PlayCounterStore>, limit: u64) -> Self {
        Self { store, limit }
    }

    /// Limiter backed by a fresh process-local store
    pub fn in_memory(limit: u64) -> Self {
        Self::new(Arc::new(InMemoryPlayCounterStore::new()), limit)
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn attempt_play(&self, content: &str, user: &str) -> Decision {
        self.attempt(content, user).decision
    }

    pub fn attempt(&self, content: &str, user: &str) -> PlayAttempt {
        let plays = self.store.increment(&PlayKey::new(content, user));
        let decision = if plays <= self.limit {
            Decision::Admitted
        } else {
            Decision::Rejected
        };

        PlayAttempt {
            decision,
            plays,
            limit: self.limit,
        }
    }

    pub fn plays(&self, content: &str, user: &str) -> u64 {
        self.store.get(&PlayKey::new(content, user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::thread;

    #[test]
    fn admits_up_to_limit_then_rejects() {
        let limiter = PlaySessionLimiter::in_memory(3);

        for _ in 0..3 {
            assert_eq!(limiter.attempt_play("content-a", "user-x"), Decision::Admitted);
        }
        assert_eq!(limiter.attempt_play("content-a", "user-x"), Decision::Rejected);
        assert_eq!(limiter.attempt_play("content-a", "user-y"), Decision::Admitted);
    }

    #[test]
    fn stays_rejected_past_limit() {
        let limiter = PlaySessionLimiter::in_memory(2);
        limiter.attempt_play("c", "u");
        limiter.attempt_play("c", "u");

        for _ in 0..10 {
            assert_eq!(limiter.attempt_play("c", "u"), Decision::Rejected);
        }
        assert_eq!(limiter.plays("c", "u"), 12);
    }

    #[test]
    fn pairs_do_not_share_counts() {
        let limiter = PlaySessionLimiter::in_memory(1);

        assert!(limiter.attempt_play("a", "x").is_admitted());
        assert!(limiter.attempt_play("a", "y").is_admitted());
        assert!(limiter.attempt_play("b", "x").is_admitted());
        assert!(!limiter.attempt_play("a", "x").is_admitted());

        assert_eq!(limiter.plays("a", "y"), 1);
        assert_eq!(limiter.plays("b", "x"), 1);
        assert_eq!(limiter.plays("b", "y"), 0);
    }

    #[test]
    fn attempt_reports_remaining() {
        let limiter = PlaySessionLimiter::in_memory(2);

        let first = limiter.attempt("c", "u");
        assert_eq!(first.plays, 1);
        assert_eq!(first.remaining(), 1);

        let second = limiter.attempt("c", "u");
        assert_eq!(second.decision, Decision::Admitted);
        assert_eq!(second.remaining(), 0);

        let third = limiter.attempt("c", "u");
        assert_eq!(third.decision, Decision::Rejected);
        assert_eq!(third.remaining(), 0);
    }

    #[test]
    fn concurrent_attempts_admit_exactly_limit() {
        const LIMIT: u64 = 5;
        const EXTRA: u64 = 45;

        let limiter = Arc::new(PlaySessionLimiter::in_memory(LIMIT));
        let admitted = Arc::new(AtomicU64::new(0));
        let rejected = Arc::new(AtomicU64::new(0));

        let handles: Vec<_> = (0..LIMIT + EXTRA)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                let admitted = Arc::clone(&admitted);
                let rejected = Arc::clone(&rejected);
                thread::spawn(move || match limiter.attempt_play("content", "user") {
                    Decision::Admitted => admitted.fetch_add(1, Ordering::SeqCst),
                    Decision::Rejected => rejected.fetch_add(1, Ordering::SeqCst),
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(admitted.load(Ordering::SeqCst), LIMIT);
        assert_eq!(rejected.load(Ordering::SeqCst), EXTRA);
    }

    #[test]
    fn shared_store_is_seen_by_every_limiter() {
        let store: Arc<dyn PlayCounterStore> = Arc::new(InMemoryPlayCounterStore::new());
        let first = PlaySessionLimiter::new(Arc::clone(&store), 2);
        let second = PlaySessionLimiter::new(store, 2);

        assert!(first.attempt_play("c", "u").is_admitted());
        assert!(second.attempt_play("c", "u").is_admitted());
        assert!(!first.attempt_play("c", "u").is_admitted());
    }
}
