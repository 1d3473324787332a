use std::sync::Arc;

use futures::Stream;
use uac_types::StatusCode;

use crate::Session;

/// Periodic activity performed on behalf of subscriptions, surfaced through
/// [`SessionPollResult::Subscription`](crate::SessionPollResult::Subscription).
#[derive(Debug, Clone)]
pub enum SubscriptionActivity {
    /// A publish request succeeded. The inner bool is the server's `more_notifications` flag.
    PublishSucceeded(bool),
    /// A publish request failed with the inner [`StatusCode`].
    PublishFailed(StatusCode),
}

/// Drives the publish loop for a connected session: waits for the next subscription's
/// publishing interval to elapse (or for an explicit trigger), sends a `PublishRequest`,
/// and yields the outcome as a [`SubscriptionActivity`].
pub(crate) struct SubscriptionEventLoop {
    inner: Arc<Session>,
    trigger_publish_recv: tokio::sync::watch::Receiver<std::time::Instant>,
}

impl SubscriptionEventLoop {
    pub fn new(
        inner: Arc<Session>,
        trigger_publish_recv: tokio::sync::watch::Receiver<std::time::Instant>,
    ) -> Self {
        Self {
            inner,
            trigger_publish_recv,
        }
    }

    pub fn run(self) -> impl Stream<Item = SubscriptionActivity> {
        futures::stream::unfold(self, |mut slf| async move {
            loop {
                let next = slf.inner.next_publish_time(true);
                match next {
                    Some(deadline) => {
                        tokio::select! {
                            _ = tokio::time::sleep_until(deadline.into()) => {}
                            changed = slf.trigger_publish_recv.changed() => {
                                if changed.is_err() {
                                    return None;
                                }
                            }
                        }
                    }
                    None => {
                        if slf.trigger_publish_recv.changed().await.is_err() {
                            return None;
                        }
                    }
                }

                let activity = match slf.inner.publish().await {
                    Ok(more_notifications) => {
                        SubscriptionActivity::PublishSucceeded(more_notifications)
                    }
                    Err(e) => SubscriptionActivity::PublishFailed(e),
                };

                return Some((activity, slf));
            }
        })
    }
}
