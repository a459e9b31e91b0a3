use std::time::Duration;

use parking_lot::Mutex;
use telebot_rust::output_logger::OutputLogProvider;

#[derive(Debug, PartialEq)]
pub enum RecordedLog {
    Debug(String, String),
    Info(String, String),
    Warn(String, String),
    Error(String, String),
    Init,
    Shutdown,
}

pub struct MockLogProvider {
    pub logs: Mutex<Vec<RecordedLog>>,
}

impl MockLogProvider {
    pub fn new() -> Self {
        Self {
            logs: Mutex::new(Vec::new()),
        }
    }

    pub fn clear(&self) {
        self.push_log_or_clear(None);
    }

    pub fn debug_messages(&self) -> Vec<String> {
        self.logs
            .try_lock_for(Duration::from_secs(5))
            .unwrap()
            .iter()
            .filter_map(|log| match log {
                RecordedLog::Debug(_, msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    fn push_log_or_clear(&self, log: Option<RecordedLog>) {
        let mut logs = self.logs.try_lock_for(Duration::from_secs(5)).unwrap();
        match log {
            Some(log) => logs.push(log),
            None => logs.clear(),
        }
    }
}

impl OutputLogProvider for MockLogProvider {
    fn initialize(&self) {
        self.push_log_or_clear(Some(RecordedLog::Init));
    }

    fn debug(&self, tag: &str, msg: String) {
        self.push_log_or_clear(Some(RecordedLog::Debug(tag.to_string(), msg)));
    }

    fn info(&self, tag: &str, msg: String) {
        self.push_log_or_clear(Some(RecordedLog::Info(tag.to_string(), msg)));
    }

    fn warn(&self, tag: &str, msg: String) {
        self.push_log_or_clear(Some(RecordedLog::Warn(tag.to_string(), msg)));
    }

    fn error(&self, tag: &str, msg: String) {
        self.push_log_or_clear(Some(RecordedLog::Error(tag.to_string(), msg)));
    }

    fn shutdown(&self) {
        self.push_log_or_clear(Some(RecordedLog::Shutdown));
    }
}
