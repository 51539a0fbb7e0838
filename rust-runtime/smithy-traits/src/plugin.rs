/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::{RegisterError, TraitRegistry};
use std::fmt::Debug;
use tracing::debug;

/// A package of traits that is registered as a unit.
///
/// Trait packages, such as the JSON-RPC traits, implement this so a host can
/// enable all of them with one call during startup.
pub trait TraitPlugin: Debug + Send + Sync {
    /// Registers every trait in this package with `registry`.
    fn register_traits(&self, registry: &TraitRegistry) -> Result<(), RegisterError>;
}

impl TraitPlugin for Box<dyn TraitPlugin> {
    fn register_traits(&self, registry: &TraitRegistry) -> Result<(), RegisterError> {
        self.as_ref().register_traits(registry)
    }
}

/// The explicit list of trait packages a host supports.
#[derive(Debug, Default)]
pub struct TraitPlugins {
    plugins: Vec<Box<dyn TraitPlugin>>,
}

impl TraitPlugins {
    /// Creates an empty plugin list.
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds `plugin` to the list.
    pub fn with_plugin(mut self, plugin: impl TraitPlugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Registers the traits of every plugin, in the order they were added.
    ///
    /// Stops at the first registration failure.
    pub fn apply(&self, registry: &TraitRegistry) -> Result<(), RegisterError> {
        for plugin in self.plugins.iter() {
            debug!(?plugin, "applying trait plugin");
            plugin.register_traits(registry)?;
        }
        Ok(())
    }

    /// Creates a registry holding the traits of every plugin.
    pub fn build_registry(&self) -> Result<TraitRegistry, RegisterError> {
        let registry = TraitRegistry::new();
        self.apply(&registry)?;
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::{TraitPlugin, TraitPlugins};
    use crate::{factory, RegisterError, TraitId, TraitRegistry};
    use tracing_test::traced_test;

    #[derive(Debug)]
    struct Annotations(&'static [&'static str]);

    impl TraitPlugin for Annotations {
        fn register_traits(&self, registry: &TraitRegistry) -> Result<(), RegisterError> {
            for id in self.0.iter().copied() {
                let id = TraitId::from_static(id);
                registry.register(id.clone(), factory::annotation(id))?;
            }
            Ok(())
        }
    }

    #[test]
    fn registers_every_plugin() {
        let registry = TraitPlugins::new()
            .with_plugin(Annotations(&["jsonrpc#untaggedUnion"]))
            .with_plugin(Annotations(&["smithy.api#sensitive", "smithy.api#required"]))
            .build_registry()
            .unwrap();
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_sealed());
    }

    #[test]
    fn overlapping_plugins_fail() {
        let err = TraitPlugins::new()
            .with_plugin(Annotations(&["jsonrpc#untaggedUnion"]))
            .with_plugin(Annotations(&["jsonrpc#untaggedUnion"]))
            .build_registry()
            .unwrap_err();
        assert!(matches!(err, RegisterError::Duplicate(_)));
    }

    #[test]
    #[traced_test]
    fn logs_applied_plugins() {
        let plugins = TraitPlugins::new().with_plugin(Annotations(&["jsonrpc#untaggedUnion"]));
        plugins.apply(&TraitRegistry::new()).unwrap();
        assert!(logs_contain("applying trait plugin"));
        assert!(logs_contain("Annotations"));
    }
}
