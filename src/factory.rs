//! Global ID scalar factories
//!
//! [`GlobalIds`] is owned by whatever assembles a schema. Field scalars are
//! cached per target name for the lifetime of that value, so two schemas built
//! from separate `GlobalIds` never share scalar instances.

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::dynamic::SchemaBuilder;
use parking_lot::Mutex;

use crate::codec::{GlobalIdCodec, RelayCodec};
use crate::config::{GlobalIdConfig, MismatchPolicy};
use crate::scalar::{GlobalIdScalar, ScalarRole};
use crate::target::TargetType;

/// Builds global ID scalar types for target types
pub struct GlobalIds {
    codec: Arc<dyn GlobalIdCodec>,
    config: GlobalIdConfig,
    cache: Mutex<HashMap<String, Arc<GlobalIdScalar>>>,
}

impl GlobalIds {
    pub fn new(codec: impl GlobalIdCodec + 'static) -> Self {
        Self::with_config(codec, GlobalIdConfig::default())
    }

    /// Factory using Relay's base64 `Type:id` encoding
    pub fn relay() -> Self {
        Self::new(RelayCodec)
    }

    pub fn with_config(codec: impl GlobalIdCodec + 'static, config: GlobalIdConfig) -> Self {
        Self {
            codec: Arc::new(codec),
            config,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &GlobalIdConfig {
        &self.config
    }

    pub fn codec(&self) -> &dyn GlobalIdCodec {
        self.codec.as_ref()
    }

    /// Non-null `<Type>GlobalID` scalar for a mutation input field
    ///
    /// A new scalar is built on every call. Parsing hands resolvers the
    /// decoded ID; a type outside the target's possible types follows
    /// [`GlobalIdConfig::input_mismatch`].
    pub fn input_type(&self, target: &TargetType) -> GlobalIdScalar {
        GlobalIdScalar::new(
            self.config.input_type_name(target.name()),
            ScalarRole::Input,
            target.clone(),
            self.config.input_mismatch,
            self.codec.clone(),
        )
    }

    /// `GlobalID_<Type>` scalar for output fields and arguments
    ///
    /// Memoized by type name: later calls return the first scalar built for
    /// that name, even when `target` now lists different possible types.
    pub fn field_type(&self, target: &TargetType) -> Arc<GlobalIdScalar> {
        let key = self.config.field_type_name(target.name());
        let mut cache = self.cache.lock();

        if let Some(cached) = cache.get(&key) {
            if cached.target() != target {
                tracing::warn!(
                    scalar = %key,
                    "target type changed since the global id scalar was cached, reusing cached scalar"
                );
            } else {
                tracing::trace!(scalar = %key, "global id scalar cache hit");
            }
            return cached.clone();
        }

        tracing::debug!(scalar = %key, kind = %target.kind(), "building global id scalar");
        let scalar = Arc::new(GlobalIdScalar::new(
            key.clone(),
            ScalarRole::Field,
            target.clone(),
            MismatchPolicy::Reject,
            self.codec.clone(),
        ));
        cache.insert(key, scalar.clone());
        scalar
    }

    /// Field scalars built so far, sorted by name
    pub fn cached_types(&self) -> Vec<Arc<GlobalIdScalar>> {
        let mut scalars: Vec<_> = self.cache.lock().values().cloned().collect();
        scalars.sort_by(|a, b| a.name().cmp(b.name()));
        scalars
    }

    /// Register every cached field scalar with a dynamic schema
    pub fn register(&self, builder: SchemaBuilder) -> SchemaBuilder {
        self.cached_types()
            .iter()
            .fold(builder, |builder, scalar| builder.register(scalar.to_dynamic()))
    }
}

impl Default for GlobalIds {
    fn default() -> Self {
        Self::relay()
    }
}
