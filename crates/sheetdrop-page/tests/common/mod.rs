#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use sheetdrop_bridge::{
    Dismissible, FileSelection, UserNotifier, notification::NotificationMessage,
};
use sheetdrop_page::Page;
use tokio::time::Instant;

#[derive(Default)]
pub struct FakeAlert {
    closes: AtomicUsize,
    closed_at: Mutex<Option<Instant>>,
}

impl FakeAlert {
    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn closed_at(&self) -> Option<Instant> {
        *self.closed_at.lock().unwrap()
    }
}

impl Dismissible for FakeAlert {
    fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
        *self.closed_at.lock().unwrap() = Some(Instant::now());
    }
}

#[derive(Default)]
pub struct FakeFileInput {
    value: Mutex<String>,
    clears: AtomicUsize,
}

impl FakeFileInput {
    pub fn with_value(value: &str) -> Self {
        let input = Self::default();
        input.select(value);
        input
    }

    pub fn select(&self, value: &str) {
        *self.value.lock().unwrap() = value.to_owned();
    }

    pub fn clear_count(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl FileSelection for FakeFileInput {
    fn value(&self) -> String {
        self.value.lock().unwrap().clone()
    }

    fn clear_if(&self, expected: &str) -> bool {
        let mut value = self.value.lock().unwrap();
        if *value != expected {
            return false;
        }
        self.clears.fetch_add(1, Ordering::SeqCst);
        value.clear();
        true
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<NotificationMessage>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<NotificationMessage> {
        self.messages.lock().unwrap().clone()
    }
}

impl UserNotifier for RecordingNotifier {
    fn notify(&self, message: NotificationMessage) {
        self.messages.lock().unwrap().push(message);
    }
}

pub fn alerts(count: usize) -> Vec<Arc<FakeAlert>> {
    (0..count).map(|_| Arc::new(FakeAlert::default())).collect()
}

pub fn page(
    alerts: &[Arc<FakeAlert>],
    file_input: Option<Arc<FakeFileInput>>,
    notifier: Arc<RecordingNotifier>,
) -> Page {
    Page {
        alerts: alerts
            .iter()
            .map(|alert| alert.clone() as Arc<dyn Dismissible>)
            .collect(),
        file_input: file_input.map(|input| input as Arc<dyn FileSelection>),
        notifier: notifier as Arc<dyn UserNotifier>,
    }
}
