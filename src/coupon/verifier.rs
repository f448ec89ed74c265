//! Single-source coupon verification.
//!
//! A verifier scans one [`CouponSource`] for an exact line match. Lines are
//! compared as raw bytes with one trailing `\r` removed, so a line that is not
//! valid UTF-8 never hides the ones after it. The cancellation token is checked
//! at every line and raced against every I/O wait, so a cancelled verifier stops
//! within one record.
//!
//! A source that cannot be opened or read counts as "no match". Losing one list
//! must not block ordering when the remaining lists still agree.

use super::source::CouponSource;
use std::sync::Arc;
use tokio::io::AsyncBufReadExt;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn, Instrument};

/// Scans `source` for `code`.
///
/// Returns `Some(true)` on a match, `Some(false)` when the source is exhausted or
/// unreadable, and `None` once cancellation has been observed.
pub async fn verify_coupon(
    code: &str,
    source: &dyn CouponSource,
    cancel: &CancellationToken,
) -> Option<bool> {
    let opened = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            trace!("Cancelled before open");
            return None;
        }
        opened = source.open() => opened,
    };

    let mut lines = match opened {
        Ok(reader) => reader.split(b'\n'),
        Err(e) => {
            warn!(error = %e, "Coupon source unavailable, counting as no match");
            return Some(false);
        }
    };

    let mut scanned = 0usize;
    loop {
        if cancel.is_cancelled() {
            trace!(scanned, "Cancelled mid-scan");
            return None;
        }

        let line = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                trace!(scanned, "Cancelled mid-scan");
                return None;
            }
            line = lines.next_segment() => line,
        };

        match line {
            Ok(Some(line)) => {
                scanned += 1;
                if line.strip_suffix(b"\r").unwrap_or(&line[..]) == code.as_bytes() {
                    debug!(scanned, "Match");
                    return Some(true);
                }
            }
            Ok(None) => {
                debug!(scanned, "No match");
                return Some(false);
            }
            Err(e) => {
                warn!(scanned, error = %e, "Coupon source read failed, counting as no match");
                return Some(false);
            }
        }
    }
}

/// Spawns a verifier task and returns its one-shot result slot.
///
/// The slot receives exactly one value unless the verifier was cancelled, in which
/// case the sender is dropped and the receiver resolves to an error. Sending never
/// waits on the consumer.
pub fn spawn_verifier(
    code: Arc<str>,
    source: Arc<dyn CouponSource>,
    cancel: CancellationToken,
) -> oneshot::Receiver<bool> {
    let (respond_to, result) = oneshot::channel();
    let span = tracing::debug_span!("verify_coupon", source = source.name());

    tokio::spawn(
        async move {
            if let Some(found) = verify_coupon(&code, source.as_ref(), &cancel).await {
                let _ = respond_to.send(found);
            }
        }
        .instrument(span),
    );

    result
}
