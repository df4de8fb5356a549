//! shared fixtures for the unit tests of this crate

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use aws_lambda_events::event::s3::S3Event;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};

/// build a single record notification the way s3 delivers it.
/// `key` must already be url encoded.
pub fn s3_event(bucket: &str, key: &str) -> S3Event {
    s3_event_with_records(&[(bucket, key)])
}

/// build a notification holding one record per (bucket, url encoded key) pair
pub fn s3_event_with_records(objects: &[(&str, &str)]) -> S3Event {
    let records: Vec<_> = objects
        .iter()
        .map(|(bucket, key)| {
            serde_json::json!({
                "eventVersion": "2.1",
                "eventSource": "aws:s3",
                "awsRegion": "us-east-1",
                "eventTime": "2024-01-31T12:00:00.000Z",
                "eventName": "ObjectCreated:Put",
                "userIdentity": { "principalId": "EXAMPLE" },
                "requestParameters": { "sourceIPAddress": "127.0.0.1" },
                "responseElements": {
                    "x-amz-request-id": "EXAMPLE123456789",
                    "x-amz-id-2": "EXAMPLE123/5678abcdefghijklambdaisawesome/mnopqrstuvwxyzABCDEFGH"
                },
                "s3": {
                    "s3SchemaVersion": "1.0",
                    "configurationId": "copy-to-destination",
                    "bucket": {
                        "name": bucket,
                        "ownerIdentity": { "principalId": "EXAMPLE" },
                        "arn": format!("arn:aws:s3:::{bucket}")
                    },
                    "object": {
                        "key": key,
                        "size": 1024,
                        "eTag": "0123456789abcdef0123456789abcdef",
                        "sequencer": "0A1B2C3D4E5F678901"
                    }
                }
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({ "Records": records }))
        .expect("fixture should deserialize into an S3Event")
}

/// one captured tracing event
#[derive(Debug, Clone)]
pub struct LogLine {
    pub level: Level,
    pub fields: HashMap<String, String>,
}

impl LogLine {
    pub fn message(&self) -> &str {
        self.fields.get("message").map(String::as_str).unwrap_or("")
    }
}

/// handle on the events captured by [capture_logs]
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<LogLine>>>);

impl CapturedLogs {
    pub fn at_level(&self, level: Level) -> Vec<LogLine> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|line| line.level == level)
            .cloned()
            .collect()
    }
}

#[derive(Default)]
struct FieldCapture {
    fields: HashMap<String, String>,
}

impl Visit for FieldCapture {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

struct CaptureLayer(CapturedLogs);

impl<S: Subscriber> tracing_subscriber::Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut capture = FieldCapture::default();
        event.record(&mut capture);
        self.0.0.lock().unwrap().push(LogLine {
            level: *event.metadata().level(),
            fields: capture.fields,
        });
    }
}

/// installs a subscriber for the current thread which records every event.
/// Events are only captured while the returned guard is alive.
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::registry().with(CaptureLayer(logs.clone()));
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
