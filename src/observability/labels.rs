use metrics::{IntoLabels, Label, SharedString};

/// Name of the label identifying where the bank register was loaded from.
pub const REGISTER_SOURCE_LABEL: &str = "source";

/// Labels attached to every counter of a validator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

pub const NO_LABEL: Labels = Labels(vec![]);

impl Labels {
    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    /// A copy of these labels extended with `additional_labels`.
    pub fn clone_with_labels(
        &self,
        additional_labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Labels {
        let mut labels = self.0.clone();
        labels.extend(additional_labels.iter().map(Label::from));
        Labels(labels)
    }

    /// Labels for the register counters: these labels plus the register
    /// source name, e.g. `http` or `static`.
    pub fn with_register_source(&self, source: &'static str) -> Labels {
        self.clone_with_labels(&[(REGISTER_SOURCE_LABEL, source)])
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}
