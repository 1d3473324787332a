use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use uac_types::{MonitoringMode, NotificationMessage, SubscriptionAcknowledgement};

use super::{ModifyMonitoredItem, PublishLimits, Subscription};

/// Tracks every subscription the session currently believes it has open on the server,
/// plus the acknowledgements owed on the next publish request.
///
/// Owned by [`Session`](crate::Session) behind a `Mutex`; service builders in
/// `subscriptions::service` take the lock for the duration of a single request/response
/// cycle and never hold it across an `.await`.
pub struct SubscriptionState {
    subscriptions: HashMap<u32, Subscription>,
    pending_acknowledgements: Vec<SubscriptionAcknowledgement>,
    min_publish_interval: Duration,
    last_publish: Instant,
    publish_limits_watch_tx: tokio::sync::watch::Sender<PublishLimits>,
}

impl SubscriptionState {
    pub fn new(
        min_publish_interval: Duration,
        publish_limits_watch_tx: tokio::sync::watch::Sender<PublishLimits>,
    ) -> Self {
        Self {
            subscriptions: HashMap::new(),
            pending_acknowledgements: Vec::new(),
            min_publish_interval,
            last_publish: Instant::now(),
            publish_limits_watch_tx,
        }
    }

    fn update_publish_limits(&self) {
        let interval = self
            .subscriptions
            .values()
            .map(|s| s.publishing_interval())
            .min()
            .unwrap_or(self.min_publish_interval)
            .max(self.min_publish_interval);
        self.publish_limits_watch_tx.send_modify(|limits| {
            limits.update_subscriptions(self.subscriptions.len(), interval);
        });
    }

    pub fn subscription_exists(&self, subscription_id: u32) -> bool {
        self.subscriptions.contains_key(&subscription_id)
    }

    /// Returns the ids of every subscription currently tracked, or `None` if there are none.
    pub fn subscription_ids(&self) -> Option<Vec<u32>> {
        if self.subscriptions.is_empty() {
            None
        } else {
            Some(self.subscriptions.keys().copied().collect())
        }
    }

    pub fn add_subscription(&mut self, subscription: Subscription) {
        self.subscriptions
            .insert(subscription.subscription_id(), subscription);
        self.update_publish_limits();
    }

    /// Removes and returns a subscription, e.g. after `DeleteSubscriptions` or while
    /// recreating subscriptions on reconnect.
    pub fn delete_subscription(&mut self, subscription_id: u32) -> Option<Subscription> {
        let removed = self.subscriptions.remove(&subscription_id);
        self.update_publish_limits();
        removed
    }

    #[allow(clippy::too_many_arguments)]
    pub fn modify_subscription(
        &mut self,
        subscription_id: u32,
        publishing_interval: Duration,
        lifetime_count: u32,
        max_keep_alive_count: u32,
        max_notifications_per_publish: u32,
        priority: u8,
    ) {
        if let Some(subscription) = self.subscriptions.get_mut(&subscription_id) {
            subscription.set_publishing_interval(publishing_interval);
            subscription.set_lifetime_count(lifetime_count);
            subscription.set_max_keep_alive_count(max_keep_alive_count);
            subscription.set_max_notifications_per_publish(max_notifications_per_publish);
            subscription.set_priority(priority);
        }
        self.update_publish_limits();
    }

    pub fn set_publishing_mode(&mut self, subscription_ids: &[u32], publishing_enabled: bool) {
        for id in subscription_ids {
            if let Some(subscription) = self.subscriptions.get_mut(id) {
                subscription.set_publishing_enabled(publishing_enabled);
            }
        }
    }

    pub fn insert_monitored_items(
        &mut self,
        subscription_id: u32,
        items: Vec<super::CreateMonitoredItem>,
    ) {
        if let Some(subscription) = self.subscriptions.get_mut(&subscription_id) {
            subscription.insert_monitored_items(items);
        }
    }

    pub fn modify_monitored_items(&mut self, subscription_id: u32, items: &[ModifyMonitoredItem]) {
        if let Some(subscription) = self.subscriptions.get_mut(&subscription_id) {
            subscription.modify_monitored_items(items);
        }
    }

    pub fn delete_monitored_items(&mut self, subscription_id: u32, ids: &[u32]) {
        if let Some(subscription) = self.subscriptions.get_mut(&subscription_id) {
            subscription.delete_monitored_items(ids);
        }
    }

    #[allow(unused)]
    pub fn set_monitoring_mode(
        &mut self,
        subscription_id: u32,
        monitored_item_ids: &[u32],
        monitoring_mode: MonitoringMode,
    ) {
        if let Some(subscription) = self.subscriptions.get_mut(&subscription_id) {
            for id in monitored_item_ids {
                if let Some(item) = subscription.monitored_items.get_mut(id) {
                    item.set_monitoring_mode(monitoring_mode);
                }
            }
        }
    }

    pub fn set_triggering(
        &mut self,
        subscription_id: u32,
        triggering_item_id: u32,
        links_to_add: &[u32],
        links_to_remove: &[u32],
    ) {
        if let Some(subscription) = self.subscriptions.get_mut(&subscription_id) {
            subscription.set_triggering(triggering_item_id, links_to_add, links_to_remove);
        }
    }

    /// Routes a notification message to the subscription it belongs to.
    pub fn handle_notification(&mut self, subscription_id: u32, notification: NotificationMessage) {
        if let Some(subscription) = self.subscriptions.get_mut(&subscription_id) {
            subscription.on_notification(notification);
        }
    }

    /// Queues an acknowledgement for the next outgoing publish request, e.g. after a
    /// successful `Republish`.
    pub fn add_acknowledgement(&mut self, subscription_id: u32, sequence_number: u32) {
        self.pending_acknowledgements.push(SubscriptionAcknowledgement {
            subscription_id,
            sequence_number,
        });
    }

    /// Takes every pending acknowledgement, to be attached to the next publish request.
    pub fn take_acknowledgements(&mut self) -> Vec<SubscriptionAcknowledgement> {
        std::mem::take(&mut self.pending_acknowledgements)
    }

    /// Re-queues acknowledgements that could not be delivered, e.g. because the publish
    /// request that would have carried them failed.
    pub fn re_queue_acknowledgements(&mut self, acks: Vec<SubscriptionAcknowledgement>) {
        self.pending_acknowledgements.extend(acks);
    }

    pub fn set_last_publish(&mut self) {
        self.last_publish = Instant::now();
    }

    /// The earliest instant a new publish request should be sent, based on the shortest
    /// publishing interval among tracked subscriptions, or `None` if there are none.
    pub fn next_publish_time(&self) -> Option<Instant> {
        if self.subscriptions.is_empty() {
            return None;
        }
        let interval = self
            .subscriptions
            .values()
            .map(|s| s.publishing_interval())
            .min()
            .unwrap_or(self.min_publish_interval)
            .max(self.min_publish_interval);
        Some(self.last_publish + interval)
    }
}
