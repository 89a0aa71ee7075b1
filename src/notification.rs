//! Write notification / diagnostic system.
//!
//! Non-fatal issues encountered while encoding a document (unencoded
//! extended data, orphaned objects, duplicate scheduling) are reported as
//! [`Notification`] items instead of aborting the pass.
//!
//! Two ways to consume them:
//! - subscribe a callback on a [`Notifier`] (invoked synchronously, in
//!   subscription order, while the pass runs);
//! - inspect the [`NotificationCollection`] the writer keeps after the pass.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Severity level of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// Informational message
    None,
    /// A feature of the document is not encoded by this writer.
    NotImplemented,
    /// Feature exists but is not supported in this context.
    NotSupported,
    /// Non-fatal warning (e.g., unreachable object, duplicate reference).
    Warning,
    /// Error that was recovered from.
    Error,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::NotImplemented => write!(f, "NotImplemented"),
            Self::NotSupported => write!(f, "NotSupported"),
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A single notification produced during writing.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The severity / category.
    pub notification_type: NotificationType,
    /// A human-readable description of the issue.
    pub message: String,
    /// Underlying error, if the notification wraps one.
    pub cause: Option<Arc<dyn Error + Send + Sync>>,
}

impl Notification {
    /// Create a new notification.
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
            cause: None,
        }
    }

    /// Attach the error that caused this notification.
    pub fn with_cause(mut self, cause: impl Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type, self.message)?;
        if let Some(cause) = &self.cause {
            write!(f, " ({})", cause)?;
        }
        Ok(())
    }
}

/// Collects notifications during a write operation.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    /// Check if there are any notifications.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all notifications.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Get all notifications of a specific type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    /// Check whether any notification of the given type exists.
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

type Observer = Box<dyn FnMut(&Notification)>;

/// Subscription list of notification observers.
///
/// Observers run synchronously inside [`Notifier::notify`]; they cannot
/// fail and their outcome never affects the encoding pass. Every
/// notification is also recorded and forwarded to `tracing`.
#[derive(Default)]
pub struct Notifier {
    observers: Vec<Observer>,
    history: NotificationCollection,
}

impl Notifier {
    /// Create a notifier with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&Notification) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Report a notification to every observer.
    pub fn notify(&mut self, notification: Notification) {
        match notification.notification_type {
            NotificationType::Warning | NotificationType::Error => {
                tracing::warn!(kind = %notification.notification_type, "{}", notification.message)
            }
            _ => tracing::debug!(kind = %notification.notification_type, "{}", notification.message),
        }

        for observer in self.observers.iter_mut() {
            observer(&notification);
        }
        self.history.push(notification);
    }

    /// Notifications reported so far.
    pub fn history(&self) -> &NotificationCollection {
        &self.history
    }

    /// Take the recorded notifications, leaving the history empty.
    pub fn take_history(&mut self) -> NotificationCollection {
        std::mem::take(&mut self.history)
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("observers", &self.observers.len())
            .field("history", &self.history)
            .finish()
    }
}
