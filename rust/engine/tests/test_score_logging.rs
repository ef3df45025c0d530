use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

use yatzy_engine::category::Category;
use yatzy_engine::dice::make_roll;
use yatzy_engine::roller::DiceRoller;
use yatzy_engine::scoring::score_roll;

#[derive(Debug, Clone)]
struct LogEntry {
    level: Level,
    message: String,
    fields: Vec<(String, String)>,
}

impl LogEntry {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Default)]
struct Capture {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Capture {
    fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl<S: tracing::Subscriber> Layer<S> for Capture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.entries.lock().unwrap().push(LogEntry {
            level: *event.metadata().level(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
        });
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let value_str = format!("{:?}", value);
        if field.name() == "message" {
            self.message = Some(value_str);
        } else {
            self.fields.push((field.name().to_string(), value_str));
        }
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<LogEntry> {
    let cap = Capture::default();
    let registry = Registry::default().with(cap.clone());
    tracing::subscriber::with_default(registry, f);
    cap.entries()
}

#[test]
fn rejected_length_is_logged_at_debug() {
    let entries = capture(|| {
        let _ = make_roll(&[1, 2, 3]);
    });
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level, Level::DEBUG);
    assert!(entries[0].message.contains("wrong number of dice"));
    assert_eq!(entries[0].field("len"), Some("3"));
}

#[test]
fn rejected_face_is_logged_with_position_and_value() {
    let entries = capture(|| {
        let _ = make_roll(&[1, 2, 7, 4, 5]);
    });
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].field("position"), Some("2"));
    assert_eq!(entries[0].field("value"), Some("7"));
}

#[test]
fn valid_roll_logs_nothing() {
    let entries = capture(|| {
        let _ = make_roll(&[1, 2, 3, 4, 5]);
    });
    assert!(entries.is_empty());
}

#[test]
fn scoring_emits_trace_with_category_and_score() {
    let roll = make_roll(&[6, 2, 2, 2, 6]).unwrap();
    let entries = capture(|| {
        score_roll(Category::FullHouse, &roll);
    });
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level, Level::TRACE);
    assert_eq!(entries[0].field("category"), Some("full_house"));
    assert_eq!(entries[0].field("score"), Some("18"));
}

#[test]
fn roller_traces_its_seed() {
    let entries = capture(|| {
        let mut roller = DiceRoller::new_with_seed(42);
        roller.roll();
    });
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].field("seed"), Some("42"));
}
