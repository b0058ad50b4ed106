use std::sync::LazyLock;
use tokio::runtime::Runtime;

// Shared runtime backing the blocking validation API
pub static TOKIO_RUNTIME: LazyLock<Runtime> =
    LazyLock::new(|| Runtime::new().expect("Failed to create Tokio runtime"));
