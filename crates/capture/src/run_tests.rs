#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use std::time::Duration;

fn sample_run() -> CapturedRun {
    CapturedRun {
        seq: 3,
        timestamp: SystemTime::UNIX_EPOCH,
        elapsed: Duration::from_millis(1250),
        input: CapturedInput {
            command: "cy.log('Yay!')".to_string(),
            source: RunSource::Print,
            session_id: "0f1e2d3c-0000-4000-8000-000000000000".to_string(),
            delay_ms: 0,
        },
        outcome: CapturedOutcome::Classified {
            severity: "success".to_string(),
            message: "cy.log('Yay!') // Logged message 'Yay!'".to_string(),
        },
    }
}

#[test]
fn elapsed_serializes_as_integer_millis() {
    let json = serde_json::to_value(sample_run()).unwrap();
    assert_eq!(json["elapsed"], 1250);
}

#[test]
fn outcome_uses_snake_case_tag() {
    let json = serde_json::to_value(sample_run()).unwrap();
    assert_eq!(json["outcome"]["type"], "classified");
    assert_eq!(json["outcome"]["severity"], "success");

    let injected = serde_json::to_value(CapturedOutcome::Injected {
        message: "boom".to_string(),
    })
    .unwrap();
    assert_eq!(injected["type"], "injected");
}

#[test]
fn source_serializes_lowercase() {
    let json = serde_json::to_value(sample_run()).unwrap();
    assert_eq!(json["input"]["source"], "print");
}

proptest::proptest! {
    #[test]
    fn elapsed_millis_round_trip(ms in 0u64..=u64::from(u32::MAX)) {
        let mut run = sample_run();
        run.elapsed = Duration::from_millis(ms);
        let json = serde_json::to_string(&run).unwrap();
        let back: CapturedRun = serde_json::from_str(&json).unwrap();
        proptest::prop_assert_eq!(back.elapsed, run.elapsed);
    }
}

#[test]
fn round_trips_through_json() {
    let run = sample_run();
    let json = serde_json::to_string(&run).unwrap();
    let back: CapturedRun = serde_json::from_str(&json).unwrap();

    assert_eq!(back.seq, run.seq);
    assert_eq!(back.elapsed, run.elapsed);
    assert_eq!(back.input.command, run.input.command);
    assert_eq!(back.outcome, run.outcome);
}
