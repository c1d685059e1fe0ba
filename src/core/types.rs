//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! resolver, with minimal logic - focusing on data representation.

use std::fmt;
use std::sync::Arc;

use crate::error::ReporterError;
use crate::reporters::{MultiReporter, Reporter};

/// Builds a fresh reporter instance each time it is called
pub type ReporterFactory =
    Arc<dyn Fn() -> Result<Box<dyn Reporter>, ReporterError> + Send + Sync>;

/// Identifies a reporter implementation by name and knows how to build it
#[derive(Clone)]
pub struct ReporterDescriptor {
    name: &'static str,
    factory: ReporterFactory,
}

impl ReporterDescriptor {
    pub fn new<F>(name: &'static str, factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn Reporter>, ReporterError> + Send + Sync + 'static,
    {
        Self {
            name,
            factory: Arc::new(factory),
        }
    }

    /// Descriptor for a reporter that needs no constructor arguments
    pub fn of<R>(name: &'static str) -> Self
    where
        R: Reporter + Default,
    {
        Self::new(name, || Ok(Box::new(R::default())))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Build a new instance; factory errors become `ConstructionFailure`
    pub fn instantiate(&self) -> Result<Box<dyn Reporter>, ReporterError> {
        (self.factory)().map_err(|source| ReporterError::ConstructionFailure {
            reporter: self.name.to_string(),
            source: Box::new(source),
        })
    }
}

impl fmt::Debug for ReporterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReporterDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A declarative marker naming the reporters to use for a call context
#[derive(Debug, Clone)]
pub struct ContextOverride {
    reporters: Vec<ReporterDescriptor>,
}

impl ContextOverride {
    /// Create an override from descriptors in declaration order
    ///
    /// An override must name at least one reporter.
    pub fn new(
        reporters: impl IntoIterator<Item = ReporterDescriptor>,
    ) -> Result<Self, ReporterError> {
        let reporters: Vec<_> = reporters.into_iter().collect();
        if reporters.is_empty() {
            return Err(ReporterError::ConfigurationError {
                message: "A reporter override must name at least one reporter".to_string(),
            });
        }
        Ok(Self { reporters })
    }

    pub fn single(reporter: ReporterDescriptor) -> Self {
        Self {
            reporters: vec![reporter],
        }
    }

    pub fn reporters(&self) -> &[ReporterDescriptor] {
        &self.reporters
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.reporters.iter().map(ReporterDescriptor::name).collect()
    }
}

impl From<ReporterDescriptor> for ContextOverride {
    fn from(reporter: ReporterDescriptor) -> Self {
        Self::single(reporter)
    }
}

/// Where on a frame an override marker was attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSite {
    Method,
    Type,
}

impl fmt::Display for MarkerSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerSite::Method => write!(f, "method"),
            MarkerSite::Type => write!(f, "type"),
        }
    }
}

/// One entry of the call context: a method and its declaring type
#[derive(Debug, Clone)]
pub struct CallFrame {
    pub declaring_type: String,
    pub method: String,
    pub method_override: Option<ContextOverride>,
    pub type_override: Option<ContextOverride>,
}

impl CallFrame {
    pub fn new(declaring_type: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            method: method.into(),
            method_override: None,
            type_override: None,
        }
    }

    pub fn with_method_override(mut self, reporters: impl Into<ContextOverride>) -> Self {
        self.method_override = Some(reporters.into());
        self
    }

    pub fn with_type_override(mut self, reporters: impl Into<ContextOverride>) -> Self {
        self.type_override = Some(reporters.into());
        self
    }

    /// The marker that applies to this frame; the method wins over its type
    pub fn marker(&self) -> Option<(&ContextOverride, MarkerSite)> {
        self.method_override
            .as_ref()
            .map(|o| (o, MarkerSite::Method))
            .or_else(|| self.type_override.as_ref().map(|o| (o, MarkerSite::Type)))
    }

    pub fn label(&self) -> String {
        format!("{}::{}", self.declaring_type, self.method)
    }
}

/// A frame whose markers could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntrospectionMiss {
    pub frame: String,
    pub reason: String,
}

impl From<IntrospectionMiss> for ReporterError {
    fn from(miss: IntrospectionMiss) -> Self {
        ReporterError::IntrospectionMiss {
            frame: miss.frame,
            reason: miss.reason,
        }
    }
}

/// Which step of the resolution order produced a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionSource {
    Override { frame: String, site: MarkerSite },
    FileType { key: String },
    Fallback,
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionSource::Override { frame, site } => {
                write!(f, "{site} override on {frame}")
            }
            ResolutionSource::FileType { key } => write!(f, "file type '{key}'"),
            ResolutionSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// The reporters chosen for one resolution, before instantiation
#[derive(Debug, Clone)]
pub struct Selection {
    pub source: ResolutionSource,
    pub reporters: Vec<ReporterDescriptor>,
}

impl Selection {
    pub fn is_composite(&self) -> bool {
        self.reporters.len() > 1
    }

    pub fn reporter_names(&self) -> Vec<&'static str> {
        self.reporters.iter().map(ReporterDescriptor::name).collect()
    }

    /// Build the reporters in order, wrapping several in a `MultiReporter`
    pub fn instantiate(&self) -> Result<Box<dyn Reporter>, ReporterError> {
        if self.reporters.is_empty() {
            return Err(ReporterError::ConfigurationError {
                message: format!("No reporters selected by {}", self.source),
            });
        }

        let mut instances = self
            .reporters
            .iter()
            .map(ReporterDescriptor::instantiate)
            .collect::<Result<Vec<_>, _>>()?;

        if instances.len() == 1 {
            return Ok(instances.remove(0));
        }
        Ok(Box::new(MultiReporter::new(instances)))
    }
}
