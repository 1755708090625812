//! CLI notification gateway.
//!
//! The CLI has no OS notification daemon of its own; it plays the external
//! collaborator by persisting the single pending notification into the kv
//! store, where a desktop shell (or `reminder status`) reads it back.
//! Permission is gated by `notifications.enabled` in the config -- a CLI
//! cannot prompt, so a permission request just re-reads the flag.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use habitloop_core::storage::{Config, Store};
use habitloop_core::{NotificationGateway, PermissionStatus};

const KEY_PENDING: &str = "pendingNotification";

/// The one scheduled notification, as persisted by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingNotification {
    pub trigger: NaiveDateTime,
    pub title: String,
    pub body: String,
}

/// Notification collaborator backed by the kv store.
pub struct KvGateway<'a> {
    store: &'a Store,
    enabled: bool,
}

impl<'a> KvGateway<'a> {
    pub fn new(store: &'a Store, config: &Config) -> Self {
        Self {
            store,
            enabled: config.notifications.enabled,
        }
    }

    /// Read back the pending notification, if one is scheduled.
    pub fn pending(store: &Store) -> Option<PendingNotification> {
        let raw = store.kv_get(KEY_PENDING).ok()??;
        match serde_json::from_str(&raw) {
            Ok(pending) => Some(pending),
            Err(e) => {
                eprintln!("Warning: discarding malformed {KEY_PENDING}: {e}");
                None
            }
        }
    }
}

impl NotificationGateway for KvGateway<'_> {
    fn permission_status(&self) -> PermissionStatus {
        if self.enabled {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        }
    }

    fn request_permission(
        &mut self,
    ) -> Result<PermissionStatus, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.permission_status())
    }

    fn cancel_all_scheduled(&mut self) {
        if let Err(e) = self.store.kv_delete(KEY_PENDING) {
            eprintln!("Warning: failed to cancel pending notification: {e}");
        }
    }

    fn schedule_at(
        &mut self,
        trigger: NaiveDateTime,
        title: &str,
        body: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let pending = PendingNotification {
            trigger,
            title: title.into(),
            body: body.into(),
        };
        let json = serde_json::to_string(&pending)?;
        self.store
            .kv_set(KEY_PENDING, &json)
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
    }
}
