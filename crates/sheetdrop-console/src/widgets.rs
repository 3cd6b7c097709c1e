use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

use sheetdrop_bridge::{
    Dismissible, FileSelection, UserNotifier,
    notification::{NotificationMessage, NotificationType},
};

/// Formats a notification as a single terminal line, e.g. `[info] Ready`.
pub fn format_notification(notification: &NotificationMessage) -> String {
    format!(
        "[{}] {}",
        notification.notification_type.tag(),
        notification.message
    )
}

/// A notification banner printed to stdout.
#[derive(Debug)]
pub struct ConsoleAlert {
    notification: NotificationMessage,
    closed: AtomicBool,
}

impl ConsoleAlert {
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification: NotificationMessage::new(notification_type, message),
            closed: AtomicBool::new(false),
        }
    }

    pub fn show(&self) {
        println!("{}", format_notification(&self.notification));
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl Dismissible for ConsoleAlert {
    fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            log::warn!("Banner {:?} was already dismissed", self.notification.message);
            return;
        }
        println!("[dismissed] {}", self.notification.message);
    }
}

/// File picker whose selection is typed on stdin.
#[derive(Debug, Default)]
pub struct ConsoleFileInput {
    value: Mutex<String>,
}

impl ConsoleFileInput {
    pub fn select(&self, filename: &str) {
        *self.value.lock().expect("file input lock poisoned") = filename.to_owned();
    }
}

impl FileSelection for ConsoleFileInput {
    fn value(&self) -> String {
        self.value.lock().expect("file input lock poisoned").clone()
    }

    fn clear_if(&self, expected: &str) -> bool {
        let mut value = self.value.lock().expect("file input lock poisoned");
        if *value != expected {
            return false;
        }
        value.clear();
        true
    }
}

/// Prints user-facing messages to stderr.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl UserNotifier for ConsoleNotifier {
    fn notify(&self, message: NotificationMessage) {
        eprintln!("{}", format_notification(&message));
    }
}
