//! Field plugins and the registrar that applies them to each dataset.
//!
//! A plugin installs one coherent family of derived fields. The
//! [`PluginRegistrar`] owns an ordered list of plugins, built once at
//! startup and passed explicitly to every dataset's setup; there is no
//! process-global plugin list.

use tracing::debug;

use crate::config::{ConfigError, SetupConfig};
use crate::registry::FieldRegistry;

/// A setup routine that populates a registry with a family of fields.
///
/// # Contract
///
/// - `setup()` may only call [`FieldRegistry::install`] (directly or
///   through helpers). It must not evaluate fields.
/// - Running `setup()` twice leaves the registry in the same state as
///   running it once.
/// - Missing prerequisites are not errors: the plugin installs nothing.
pub trait FieldPlugin: Send + Sync {
    /// Name used in logs and as descriptor provenance.
    fn name(&self) -> &str;

    /// Install this plugin's fields.
    fn setup(&self, registry: &mut FieldRegistry, config: &SetupConfig);
}

/// Setup function signature accepted by [`FnPlugin`].
pub type SetupFn = fn(&mut FieldRegistry, &SetupConfig);

/// A plugin backed by a plain function.
#[derive(Clone, Copy, Debug)]
pub struct FnPlugin {
    name: &'static str,
    setup: SetupFn,
}

impl FnPlugin {
    /// Wrap `setup` under `name`.
    pub const fn new(name: &'static str, setup: SetupFn) -> Self {
        Self { name, setup }
    }
}

impl FieldPlugin for FnPlugin {
    fn name(&self) -> &str {
        self.name
    }

    fn setup(&self, registry: &mut FieldRegistry, config: &SetupConfig) {
        (self.setup)(registry, config)
    }
}

/// Ordered list of plugins applied to every dataset.
///
/// # Examples
///
/// ```
/// use gauge_core::{DatasetInfo, FieldName, Geometry};
/// use gauge_registry::{FieldRegistry, FnPlugin, PluginRegistrar, SetupConfig};
/// use gauge_units::{Unit, UnitSystem};
///
/// fn setup_density(registry: &mut FieldRegistry, config: &SetupConfig) {
///     registry.add_primitive(FieldName::new(config.ftype.clone(), "density"), Unit::G_PER_CM3);
/// }
///
/// let mut registrar = PluginRegistrar::new();
/// registrar.register(FnPlugin::new("density", setup_density));
///
/// let mut reg = FieldRegistry::new(DatasetInfo::new(Geometry::Cartesian, UnitSystem::cgs()));
/// registrar.setup_dataset(&mut reg, &SetupConfig::default()).unwrap();
/// assert!(reg.has(&FieldName::new("gas", "density")));
/// ```
#[derive(Default)]
pub struct PluginRegistrar {
    plugins: Vec<Box<dyn FieldPlugin>>,
}

impl PluginRegistrar {
    /// An empty registrar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plugin; plugins run in registration order.
    pub fn register(&mut self, plugin: impl FieldPlugin + 'static) -> &mut Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, plugin: impl FieldPlugin + 'static) -> Self {
        self.register(plugin);
        self
    }

    /// Names of registered plugins in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.iter().map(|p| p.name())
    }

    /// Number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns `true` if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Validate `config`, then run every plugin against `registry`.
    pub fn setup_dataset(
        &self,
        registry: &mut FieldRegistry,
        config: &SetupConfig,
    ) -> Result<(), ConfigError> {
        config.validate()?;
        for plugin in &self.plugins {
            let before = registry.len();
            debug!(plugin = plugin.name(), ftype = %config.ftype, "plugin setup starting");
            plugin.setup(registry, config);
            debug!(
                plugin = plugin.name(),
                added = registry.len().saturating_sub(before),
                "plugin setup finished"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_core::{DatasetInfo, FieldName, Geometry};
    use gauge_units::{Unit, UnitSystem};

    fn first(registry: &mut FieldRegistry, config: &SetupConfig) {
        registry.add_primitive(FieldName::new(config.ftype.clone(), "a"), Unit::GAUSS);
    }

    fn second(registry: &mut FieldRegistry, config: &SetupConfig) {
        // Overwrites the first plugin's unit when run after it.
        registry.add_primitive(FieldName::new(config.ftype.clone(), "a"), Unit::TESLA);
    }

    fn registry() -> FieldRegistry {
        FieldRegistry::new(DatasetInfo::new(Geometry::Cartesian, UnitSystem::cgs()))
    }

    #[test]
    fn plugins_run_in_order() {
        let registrar = PluginRegistrar::new()
            .with(FnPlugin::new("first", first))
            .with(FnPlugin::new("second", second));
        assert_eq!(registrar.names().collect::<Vec<_>>(), ["first", "second"]);

        let mut reg = registry();
        registrar
            .setup_dataset(&mut reg, &SetupConfig::new("athena"))
            .unwrap();
        let d = reg.get_descriptor(&FieldName::new("athena", "a")).unwrap();
        assert_eq!(d.units(), &Unit::TESLA);
    }

    #[test]
    fn setup_is_idempotent() {
        let registrar = PluginRegistrar::new().with(FnPlugin::new("first", first));
        let mut reg = registry();
        registrar.setup_dataset(&mut reg, &SetupConfig::default()).unwrap();
        registrar.setup_dataset(&mut reg, &SetupConfig::default()).unwrap();
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn invalid_config_runs_nothing() {
        let registrar = PluginRegistrar::new().with(FnPlugin::new("first", first));
        let mut reg = registry();
        assert!(registrar.setup_dataset(&mut reg, &SetupConfig::new("")).is_err());
        assert!(reg.is_empty());
    }
}
