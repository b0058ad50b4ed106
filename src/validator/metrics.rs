use crate::observability::labels::Labels;
use metrics::{counter, Counter};

pub struct Metrics {
    pub validations: Counter,
    pub structurally_invalid: Counter,
    pub valid_accounts: Counter,
    pub register_fetches: Counter,
    pub register_fetch_failures: Counter,
}

impl Metrics {
    pub fn new(labels: &Labels, source: &'static str) -> Self {
        let register_labels = labels.with_register_source(source);
        Metrics {
            validations: counter!("validation.count", labels.clone()),
            structurally_invalid: counter!("validation.structurally_invalid", labels.clone()),
            valid_accounts: counter!("validation.valid_accounts", labels.clone()),
            register_fetches: counter!("register.fetch", register_labels.clone()),
            register_fetch_failures: counter!("register.fetch_failure", register_labels),
        }
    }
}
