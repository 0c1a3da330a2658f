use std::collections::HashSet;

use gcp_api::provider::{
    ControlPlaneConfig,
    InfrastructureStatus,
    ProviderObject,
};
use k8s_openapi::apimachinery::pkg::runtime::RawExtension;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::*;

use crate::errors::*;

const API_VERSION_KEY: &str = "apiVersion";
const KIND_KEY: &str = "kind";

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
struct TypeKey {
    api_version: String,
    kind: String,
}

impl TypeKey {
    fn of<T: ProviderObject>() -> TypeKey {
        TypeKey { api_version: T::API_VERSION.into(), kind: T::KIND.into() }
    }
}

// The scheme is the registry of provider types that we know how to pull out of raw embedded
// blobs.  Decoding into a type that hasn't been registered is always an error, as is decoding a
// blob whose type metadata names something other than what the caller asked for.  Blobs with no
// type metadata at all are decoded into whatever the caller asked for.
#[derive(Clone, Debug, Default)]
pub struct Scheme {
    types: HashSet<TypeKey>,
}

impl Scheme {
    pub fn new() -> Scheme {
        Default::default()
    }

    pub fn with_provider_types() -> Scheme {
        let mut scheme = Scheme::new();
        scheme.register::<ControlPlaneConfig>().register::<InfrastructureStatus>();
        scheme
    }

    pub fn register<T: ProviderObject>(&mut self) -> &mut Self {
        self.types.insert(TypeKey::of::<T>());
        self
    }

    pub fn is_registered<T: ProviderObject>(&self) -> bool {
        self.types.contains(&TypeKey::of::<T>())
    }

    pub fn decode<T: ProviderObject + DeserializeOwned>(&self, raw: Option<&RawExtension>) -> anyhow::Result<T> {
        if !self.is_registered::<T>() {
            bail!(ValuesError::decode_error(&format!("{}.{} is not registered", T::API_VERSION, T::KIND)));
        }

        let obj = match raw {
            Some(RawExtension(obj @ Value::Object(_))) => obj,
            Some(RawExtension(Value::Null)) | None => {
                bail!(ValuesError::decode_error(&format!("no {} present", T::KIND)))
            },
            Some(RawExtension(other)) => {
                bail!(ValuesError::decode_error(&format!("expected an object for {}, got {other}", T::KIND)))
            },
        };

        if let Some(api_version) = type_field(obj, API_VERSION_KEY)?
            && api_version != T::API_VERSION
        {
            bail!(ValuesError::decode_error(&format!("wrong apiVersion for {}: {api_version}", T::KIND)));
        }

        if let Some(kind) = type_field(obj, KIND_KEY)?
            && kind != T::KIND
        {
            bail!(ValuesError::decode_error(&format!("expected {}, got {kind}", T::KIND)));
        }

        debug!("decoding {}", T::KIND);
        serde_json::from_value(obj.clone())
            .map_err(|e| ValuesError::decode_error(&format!("malformed {}: {e}", T::KIND)))
    }
}

fn type_field<'a>(obj: &'a Value, key: &str) -> anyhow::Result<Option<&'a str>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => bail!(ValuesError::decode_error(&format!("{key} must be a string, got {other}"))),
    }
}
