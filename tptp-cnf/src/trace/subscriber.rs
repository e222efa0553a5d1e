use serde_derive::Serialize;
use std::{fmt, fs::File, io::Write, sync::Mutex};
use tracing::*;

/// Thread safe json logger that writes one [`EventRecord`] per line into a given log file.
pub struct JsonLogger {
    log_file: Mutex<File>,
}

impl JsonLogger {
    pub fn new(log_file: File) -> Self {
        Self {
            log_file: Mutex::new(log_file),
        }
    }
}

impl subscriber::Subscriber for JsonLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true // for now
    }

    fn new_span(&self, _span: &span::Attributes) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &span::Record) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event) {
        let mut record = EventRecord::default();
        event.record(&mut record);

        // events of other crates carry no event type
        if record.event.is_none() {
            return;
        }
        if let Ok(line) = serde_json::to_string(&record) {
            if let Ok(mut file) = self.log_file.lock() {
                let _ = writeln!(file, "{}", line);
            }
        }
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

/// Collects the fields of an event that are known to the parser.
#[derive(Serialize, Default, Debug)]
pub struct EventRecord {
    event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    problem: Option<String>,
}

impl EventRecord {
    fn set_text(&mut self, name: &str, value: String) {
        match name {
            super::EVENT_FIELD => self.event = Some(value),
            super::NAMESPACE_FIELD => self.namespace = Some(value),
            super::SYMBOL_FIELD => self.symbol = Some(value),
            super::LABEL_FIELD => self.label = Some(value),
            super::CLAUSE_FIELD => self.clause = Some(value),
            super::PATH_FIELD => self.path = Some(value),
            super::PROBLEM_FIELD => self.problem = Some(value),
            _ => (),
        }
    }
}

impl field::Visit for EventRecord {
    fn record_u64(&mut self, field: &field::Field, value: u64) {
        match field.name() {
            super::SYMBOL_ID_FIELD => self.symbol_id = Some(value),
            super::COUNT_FIELD => self.count = Some(value),
            _ => (),
        }
    }

    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.set_text(field.name(), value.to_owned());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        self.set_text(field.name(), format!("{:?}", value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_prelude::*, trace};
    use std::fs;

    #[test]
    fn test_json_logger() {
        let path = temp_file("json_logger.json");
        let logger = JsonLogger::new(File::create(&path).unwrap());
        tracing::subscriber::with_default(logger, || {
            info!(
                event = trace::INCLUDE,
                path = %"Axioms/TST001-0.ax",
            );
            info!(event = trace::DOCUMENT, count = 4u64);
            info!("no event type");
        });

        let log = fs::read_to_string(&path).unwrap();
        assert_eq!(
            "{\"event\":\"@include\",\"path\":\"Axioms/TST001-0.ax\"}\n\
             {\"event\":\"@document\",\"count\":4}\n",
            log
        );
        fs::remove_file(&path).unwrap();
    }
}
