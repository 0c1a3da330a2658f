mod charts_test;
mod cluster_test;
mod scheme_test;

use gcp_testutils::*;
use tracing_test::traced_test;

use crate::errors::ValuesError;

// Errors keep their kind through however many layers of context get added on the way out
fn error_kind(err: &anyhow::Error) -> &ValuesError {
    err.downcast_ref::<ValuesError>()
        .unwrap_or_else(|| panic!("not a values error: {err:?}"))
}
