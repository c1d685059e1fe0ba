//! Resolver configuration

/// Options for the resolution algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Fail resolution when a call frame cannot be inspected instead of
    /// treating it as carrying no override
    pub strict_introspection: bool,
}

impl ResolverConfig {
    pub fn builder() -> ResolverConfigBuilder {
        ResolverConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct ResolverConfigBuilder {
    strict_introspection: bool,
}

impl ResolverConfigBuilder {
    pub fn with_strict_introspection(mut self, strict: bool) -> Self {
        self.strict_introspection = strict;
        self
    }
}

impl crate::common::ConfigBuilder for ResolverConfigBuilder {
    type Config = ResolverConfig;

    fn build(self) -> Result<Self::Config, crate::error::ReporterError> {
        Ok(ResolverConfig {
            strict_introspection: self.strict_introspection,
        })
    }
}
