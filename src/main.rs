use std::env;

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::value::RawValue;
use tracing_subscriber::filter;

mod redact;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let dump_raw_event = env::var("DUMP_RAW_EVENT")
        .map(|var| var.to_lowercase() == "true")
        .unwrap_or(false);

    let max_level = if dump_raw_event {
        filter::LevelFilter::DEBUG
    } else {
        filter::LevelFilter::INFO
    };

    // timestamps come from the log transport, not from us
    tracing_subscriber::fmt()
        .json()
        .without_time()
        .with_max_level(max_level)
        .init();

    run(service_fn(move |event| handle_event(event, dump_raw_event))).await
}

async fn handle_event(
    event: LambdaEvent<Box<RawValue>>,
    dump_raw_event: bool,
) -> Result<Box<RawValue>, Error> {
    let raw = event.payload.get();

    if dump_raw_event {
        tracing::debug!("Raw event before redaction: {}", raw);
    }

    let sanitized = redact::redact(raw.as_bytes())?;

    Ok(RawValue::from_string(sanitized)?)
}
