//! Host module recognition and transform registration.
//!
//! The transform only makes sense inside one of the Android module kinds.
//! Registration checks which kind the host project applied, then describes
//! what must be wired into it: the transform itself and the libraries the
//! woven code needs at run time.

use serde::Serialize;
use thiserror::Error;

use crate::transform::TransformDescriptor;

/// Version of the aspect runtime added to the host module.
pub const ASPECTJ_RUNTIME_VERSION: &str = "1.8.13";

/// Version of the permission annotation library added to the host module.
pub const ANNOTATIONS_VERSION: &str = "0.3.1";

/// Android module kinds the transform can be registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    /// An application module.
    Application,
    /// A library module.
    Library,
    /// A feature module.
    Feature,
    /// An instant app module.
    InstantApp,
}

impl ModuleKind {
    /// All recognised kinds.
    pub const ALL: [Self; 4] = [
        Self::Application,
        Self::Library,
        Self::Feature,
        Self::InstantApp,
    ];

    /// Plugin id that marks a project as this kind.
    #[must_use]
    pub const fn plugin_id(self) -> &'static str {
        match self {
            Self::Application => "com.android.application",
            Self::Library => "com.android.library",
            Self::Feature => "com.android.feature",
            Self::InstantApp => "com.android.instantapp",
        }
    }

    /// Resolves the module kind from the plugin ids applied to a project.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingModulePlugin`] when no recognised
    /// plugin is applied and [`ConfigurationError::AmbiguousModulePlugin`]
    /// when more than one is.
    ///
    /// # Example
    ///
    /// ```
    /// use quickweave::module::ModuleKind;
    ///
    /// let kind = ModuleKind::detect(["kotlin-android", "com.android.library"]).expect("library");
    /// assert_eq!(kind, ModuleKind::Library);
    /// ```
    pub fn detect<I, S>(applied: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let applied: Vec<S> = applied.into_iter().collect();
        let mut found = Self::ALL.into_iter().filter(|kind| {
            applied
                .iter()
                .any(|plugin| plugin.as_ref() == kind.plugin_id())
        });

        let Some(kind) = found.next() else {
            return Err(ConfigurationError::MissingModulePlugin);
        };
        if let Some(other) = found.next() {
            return Err(ConfigurationError::AmbiguousModulePlugin {
                first: kind.plugin_id(),
                second: other.plugin_id(),
            });
        }
        Ok(kind)
    }
}

/// Errors raised while registering the transform with a host project.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// None of the recognised Android module plugins is applied.
    #[error(
        "'com.android.application', 'com.android.library', 'com.android.feature' or \
         'com.android.instantapp' plugin required."
    )]
    MissingModulePlugin,
    /// More than one recognised module plugin is applied.
    #[error("conflicting module plugins '{first}' and '{second}' applied")]
    AmbiguousModulePlugin {
        /// First recognised plugin id.
        first: &'static str,
        /// Second recognised plugin id.
        second: &'static str,
    },
}

/// Which libraries accompany the transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginVariant {
    /// Runtime plus the permission annotation library.
    #[default]
    Annotations,
    /// Aspect runtime only.
    Runtime,
}

impl PluginVariant {
    /// Dependencies the host module must declare.
    #[must_use]
    pub fn dependencies(self) -> Vec<Dependency> {
        let runtime = Dependency::new(
            "implementation",
            format!("org.aspectj:aspectjrt:{ASPECTJ_RUNTIME_VERSION}"),
        );
        match self {
            Self::Annotations => vec![
                runtime,
                Dependency::new(
                    "api",
                    format!(
                        "com.github.quickpermissions:quickpermissions-annotations:{ANNOTATIONS_VERSION}"
                    ),
                ),
            ],
            Self::Runtime => vec![runtime],
        }
    }
}

/// A dependency declaration added to the host module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    configuration: String,
    coordinate: String,
}

impl Dependency {
    /// Creates a dependency declaration.
    #[must_use]
    pub fn new(configuration: impl Into<String>, coordinate: impl Into<String>) -> Self {
        Self {
            configuration: configuration.into(),
            coordinate: coordinate.into(),
        }
    }

    /// Dependency configuration such as `implementation`.
    #[must_use]
    pub const fn configuration(&self) -> &str {
        self.configuration.as_str()
    }

    /// Maven coordinate.
    #[must_use]
    pub const fn coordinate(&self) -> &str {
        self.coordinate.as_str()
    }
}

/// Everything the host must wire up for one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    module: ModuleKind,
    variant: PluginVariant,
    transform: TransformDescriptor,
    dependencies: Vec<Dependency>,
}

impl Registration {
    /// Plans the registration for a project with the given plugins applied.
    ///
    /// # Errors
    ///
    /// Propagates [`ModuleKind::detect`] failures.
    pub fn plan<I, S>(applied: I, variant: PluginVariant) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let module = ModuleKind::detect(applied)?;
        Ok(Self {
            module,
            variant,
            transform: TransformDescriptor::default(),
            dependencies: variant.dependencies(),
        })
    }

    /// Detected module kind.
    #[must_use]
    pub const fn module(&self) -> ModuleKind {
        self.module
    }

    /// Transform to register.
    #[must_use]
    pub const fn transform(&self) -> &TransformDescriptor {
        &self.transform
    }

    /// Dependencies to add.
    #[must_use]
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }
}
