mod cluster;
mod controlplane;

pub use cluster::*;
pub use controlplane::*;
use schemars::{
    Schema,
    SchemaGenerator,
    json_schema,
};

// Provider configs and the serialized shoot are opaque to the API server; they're decoded later on
// by whoever actually knows what's inside them.
fn raw_extension_schema(_: &mut SchemaGenerator) -> Schema {
    json_schema!({
        "type": "object",
        "nullable": true,
        "x-kubernetes-preserve-unknown-fields": true,
    })
}
