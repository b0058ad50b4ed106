use super::test_register;
use crate::bank_register::BankRegister;
use crate::observability::labels::Labels;
use crate::validator::BankAccountValidator;
use metrics::{Key, Label};
use metrics_util::debugging::DebugValue;
use metrics_util::debugging::DebuggingRecorder;
use metrics_util::CompositeKey;
use metrics_util::MetricKind::Counter;
use std::sync::Arc;

#[test]
fn should_submit_validation_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        let validator = BankAccountValidator::new(Arc::new(test_register()));

        validator.validate_blocking("01-0902-0068389-00");
        validator.validate_blocking("01-0902-0068388-00");
        validator.validate_blocking("01-0902");
    });

    let snapshot = snapshotter.snapshot().into_hashmap();

    let metric_value = snapshot
        .get(&CompositeKey::new(Counter, Key::from_name("validation.count")))
        .expect("metric not found");
    assert_eq!(metric_value, &(None, None, DebugValue::Counter(3)));

    let metric_value = snapshot
        .get(&CompositeKey::new(
            Counter,
            Key::from_name("validation.structurally_invalid"),
        ))
        .expect("metric not found");
    assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));

    let metric_value = snapshot
        .get(&CompositeKey::new(
            Counter,
            Key::from_name("validation.valid_accounts"),
        ))
        .expect("metric not found");
    assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));

    let register_key = |name: &'static str| {
        CompositeKey::new(
            Counter,
            Key::from_parts(name, vec![Label::new("source", "static")]),
        )
    };
    let metric_value = snapshot
        .get(&register_key("register.fetch"))
        .expect("metric not found");
    assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));

    let metric_value = snapshot
        .get(&register_key("register.fetch_failure"))
        .expect("metric not found");
    assert_eq!(metric_value, &(None, None, DebugValue::Counter(0)));
}

#[test]
fn should_attach_labels_to_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        let validator = BankAccountValidator::builder(Arc::new(BankRegister::default()))
            .labels(Labels::new(&[("service", "payments")]))
            .build();

        validator.validate_blocking("01-0902-0068389-00");
    });

    let snapshot = snapshotter.snapshot().into_hashmap();

    let metric_value = snapshot
        .get(&CompositeKey::new(
            Counter,
            Key::from_parts("validation.count", vec![Label::new("service", "payments")]),
        ))
        .expect("metric not found");
    assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));

    // An empty register still counts as a successful load
    let metric_value = snapshot
        .get(&CompositeKey::new(
            Counter,
            Key::from_parts(
                "register.fetch",
                vec![
                    Label::new("service", "payments"),
                    Label::new("source", "static"),
                ],
            ),
        ))
        .expect("metric not found");
    assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));

    let metric_value = snapshot
        .get(&CompositeKey::new(
            Counter,
            Key::from_parts(
                "validation.valid_accounts",
                vec![Label::new("service", "payments")],
            ),
        ))
        .expect("metric not found");
    assert_eq!(metric_value, &(None, None, DebugValue::Counter(0)));
}
