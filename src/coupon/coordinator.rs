//! Quorum-based coupon validation across several independent lists.
//!
//! The coordinator fans out one verifier per source, counts matches in arrival
//! order, and accepts as soon as the [`QuorumPolicy`] threshold is met. Every
//! verifier runs under a child token that is cancelled when the coordinator
//! returns, whatever the reason, so stragglers stop scanning.

use super::error::CouponError;
use super::source::CouponSource;
use super::verifier::spawn_verifier;
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Shortest accepted coupon code, in characters.
pub const MIN_CODE_LENGTH: usize = 8;
/// Longest accepted coupon code, in characters.
pub const MAX_CODE_LENGTH: usize = 10;

/// How many sources must contain a code before it is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuorumPolicy {
    /// Strictly more than half of the configured sources (2 of 3).
    #[default]
    StrictMajority,
    /// A fixed number of sources, independent of how many are configured.
    AtLeast(usize),
}

impl QuorumPolicy {
    /// Number of matches required with `sources` lists configured.
    ///
    /// Never zero: a code always needs at least one list to vouch for it.
    pub fn threshold(&self, sources: usize) -> usize {
        match self {
            QuorumPolicy::StrictMajority => sources / 2 + 1,
            QuorumPolicy::AtLeast(count) => (*count).max(1),
        }
    }
}

/// Successful outcomes of a coupon check. Both let the order proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponCheck {
    /// The request carried no coupon code.
    NotSupplied,
    /// Enough lists contain the code.
    Accepted,
}

/// Length check on a non-empty code, counted in characters rather than bytes.
pub fn check_code_length(code: &str) -> Result<(), CouponError> {
    let length = code.chars().count();
    if (MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(CouponError::InvalidLength { length })
    }
}

/// Validates coupon codes against a fixed set of sources.
#[derive(Clone)]
pub struct CouponValidator {
    sources: Vec<Arc<dyn CouponSource>>,
    policy: QuorumPolicy,
}

impl CouponValidator {
    pub fn new(sources: Vec<Arc<dyn CouponSource>>, policy: QuorumPolicy) -> Self {
        Self { sources, policy }
    }

    /// Full coupon gate: empty code, length check, then quorum.
    ///
    /// # Errors
    /// - [`CouponError::InvalidLength`] before any source is opened
    /// - [`CouponError::Rejected`] when quorum is not reached or `cancel` fires first
    pub async fn validate(
        &self,
        code: &str,
        cancel: &CancellationToken,
    ) -> Result<CouponCheck, CouponError> {
        if code.is_empty() {
            debug!("No coupon supplied");
            return Ok(CouponCheck::NotSupplied);
        }

        check_code_length(code)?;

        if self.reaches_quorum(code, cancel).await {
            Ok(CouponCheck::Accepted)
        } else {
            Err(CouponError::Rejected)
        }
    }

    /// Fans out one verifier per source and reports whether quorum was reached.
    ///
    /// Results are consumed in arrival order. Cancelled or failed verifiers count
    /// as non-matches. Returns `false` immediately if `parent` is cancelled before
    /// a decision.
    pub async fn reaches_quorum(&self, code: &str, parent: &CancellationToken) -> bool {
        let threshold = self.policy.threshold(self.sources.len());
        let scope = parent.child_token();
        let _cancel_stragglers = scope.clone().drop_guard();

        let code: Arc<str> = Arc::from(code);
        let mut pending: FuturesUnordered<_> = self
            .sources
            .iter()
            .map(|source| spawn_verifier(code.clone(), source.clone(), scope.clone()))
            .collect();

        let mut matches = 0usize;
        loop {
            let next = tokio::select! {
                biased;
                _ = parent.cancelled() => {
                    info!(matches, threshold, "Coupon check cancelled before a decision");
                    return false;
                }
                next = pending.next() => next,
            };

            match next {
                Some(Ok(true)) => {
                    matches += 1;
                    if matches >= threshold {
                        info!(matches, threshold, "Coupon quorum reached");
                        return true;
                    }
                }
                Some(Ok(false)) | Some(Err(_)) => {}
                None => break,
            }
        }

        info!(matches, threshold, "Coupon quorum not reached");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coupon::source::{FileCouponSource, LineReader, StaticCouponSource};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    /// Never finishes opening; flags when the pending open is dropped.
    struct StalledSource {
        released: Arc<AtomicBool>,
    }

    struct ReleaseOnDrop(Arc<AtomicBool>);

    impl Drop for ReleaseOnDrop {
        fn drop(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl CouponSource for StalledSource {
        fn name(&self) -> &str {
            "stalled"
        }

        async fn open(&self) -> std::io::Result<LineReader> {
            let _release = ReleaseOnDrop(self.released.clone());
            std::future::pending().await
        }
    }

    fn list(name: &str, codes: &[&str]) -> Arc<dyn CouponSource> {
        Arc::new(StaticCouponSource::new(name, codes.iter().copied()))
    }

    fn validator(sources: Vec<Arc<dyn CouponSource>>) -> CouponValidator {
        CouponValidator::new(sources, QuorumPolicy::StrictMajority)
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(QuorumPolicy::StrictMajority.threshold(3), 2);
        assert_eq!(QuorumPolicy::StrictMajority.threshold(4), 3);
        assert_eq!(QuorumPolicy::StrictMajority.threshold(1), 1);
        assert_eq!(QuorumPolicy::StrictMajority.threshold(0), 1);
        assert_eq!(QuorumPolicy::AtLeast(2).threshold(5), 2);
        assert_eq!(QuorumPolicy::AtLeast(0).threshold(3), 1);
    }

    #[test]
    fn test_length_is_counted_in_characters() {
        assert!(check_code_length("HAPPYHRS").is_ok());
        assert!(check_code_length("HAPPYHOURS").is_ok());
        assert_eq!(
            check_code_length("SHORT"),
            Err(CouponError::InvalidLength { length: 5 })
        );
        assert_eq!(
            check_code_length("WAYTOOLONGCODE"),
            Err(CouponError::InvalidLength { length: 14 })
        );
        // Eight characters, sixteen bytes.
        assert!(check_code_length("éééééééé").is_ok());
        // Eleven characters.
        assert!(check_code_length("ééééééééééé").is_err());
    }

    #[tokio::test]
    async fn test_two_of_three_accepts() {
        let validator = validator(vec![
            list("a", &["HAPPYHRS"]),
            list("b", &["OTHERONE"]),
            list("c", &["XXXXXXXX", "HAPPYHRS"]),
        ]);
        let outcome = validator
            .validate("HAPPYHRS", &CancellationToken::new())
            .await;
        assert_eq!(outcome, Ok(CouponCheck::Accepted));
    }

    #[tokio::test]
    async fn test_one_of_three_rejects() {
        let validator = validator(vec![
            list("a", &["HAPPYHRS"]),
            list("b", &["OTHERONE"]),
            list("c", &[]),
        ]);
        let outcome = validator
            .validate("HAPPYHRS", &CancellationToken::new())
            .await;
        assert_eq!(outcome, Err(CouponError::Rejected));
    }

    #[tokio::test]
    async fn test_missing_list_is_tolerated() {
        let validator = validator(vec![
            list("a", &["HAPPYHRS"]),
            Arc::new(FileCouponSource::new("/no/such/dir/couponbase2")),
            list("c", &["HAPPYHRS"]),
        ]);
        let outcome = validator
            .validate("HAPPYHRS", &CancellationToken::new())
            .await;
        assert_eq!(outcome, Ok(CouponCheck::Accepted));
    }

    #[tokio::test]
    async fn test_empty_and_bad_length_skip_fan_out() {
        let released = Arc::new(AtomicBool::new(false));
        let validator = validator(vec![Arc::new(StalledSource {
            released: released.clone(),
        })]);
        let cancel = CancellationToken::new();

        assert_eq!(
            validator.validate("", &cancel).await,
            Ok(CouponCheck::NotSupplied)
        );
        assert_eq!(
            validator.validate("ABCDE", &cancel).await,
            Err(CouponError::InvalidLength { length: 5 })
        );
        // Would hang forever if a verifier had been spawned and awaited.
    }

    #[tokio::test]
    async fn test_quorum_cancels_stragglers() {
        let released = Arc::new(AtomicBool::new(false));
        let validator = validator(vec![
            list("a", &["HAPPYHRS"]),
            Arc::new(StalledSource {
                released: released.clone(),
            }),
            list("c", &["HAPPYHRS"]),
        ]);

        let outcome = tokio::time::timeout(
            Duration::from_secs(1),
            validator.validate("HAPPYHRS", &CancellationToken::new()),
        )
        .await
        .expect("quorum should not wait for the stalled source");
        assert_eq!(outcome, Ok(CouponCheck::Accepted));

        tokio::time::timeout(Duration::from_secs(1), async {
            while !released.load(Ordering::SeqCst) {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("stalled verifier should be cancelled");
    }

    #[tokio::test]
    async fn test_parent_cancel_returns_promptly() {
        let released = Arc::new(AtomicBool::new(false));
        let validator = validator(vec![
            Arc::new(StalledSource {
                released: released.clone(),
            }),
            list("b", &["HAPPYHRS"]),
            Arc::new(StalledSource {
                released: released.clone(),
            }),
        ]);
        let cancel = CancellationToken::new();

        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let outcome = tokio::time::timeout(
            Duration::from_secs(1),
            validator.validate("HAPPYHRS", &cancel),
        )
        .await
        .expect("cancelled check must not hang");
        assert_eq!(outcome, Err(CouponError::Rejected));
    }

    #[tokio::test]
    async fn test_no_sources_never_accepts() {
        let validator = validator(vec![]);
        let outcome = validator
            .validate("HAPPYHRS", &CancellationToken::new())
            .await;
        assert_eq!(outcome, Err(CouponError::Rejected));
    }

    #[tokio::test]
    async fn test_fixed_count_policy() {
        let validator = CouponValidator::new(
            vec![
                list("a", &["HAPPYHRS"]),
                list("b", &[]),
                list("c", &[]),
                list("d", &[]),
            ],
            QuorumPolicy::AtLeast(1),
        );
        let outcome = validator
            .validate("HAPPYHRS", &CancellationToken::new())
            .await;
        assert_eq!(outcome, Ok(CouponCheck::Accepted));
    }
}
