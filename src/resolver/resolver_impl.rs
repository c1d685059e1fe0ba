use tracing::debug;

use crate::config::ResolverConfig;
use crate::context::{CallContext, ScopedContext};
use crate::core::{ResolutionSource, Selection};
use crate::error::ReporterError;
use crate::registry::Registry;
use crate::reporters::Reporter;

/// Picks the reporter for a failing approval
pub struct Resolver<'r> {
    registry: &'r Registry,
    config: ResolverConfig,
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Resolver<'static> {
    /// A resolver over the process-wide registry with default options
    pub fn builtin() -> Self {
        Self::new(Registry::builtin(), ResolverConfig::default())
    }
}

impl<'r> Resolver<'r> {
    pub fn new(registry: &'r Registry, config: ResolverConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub fn config(&self) -> ResolverConfig {
        self.config
    }

    /// Resolve against the current thread's override scopes
    pub fn resolve(&self, file_type: &str) -> Result<Box<dyn Reporter>, ReporterError> {
        self.resolve_in(&ScopedContext, file_type)
    }

    pub fn resolve_in(
        &self,
        context: &dyn CallContext,
        file_type: &str,
    ) -> Result<Box<dyn Reporter>, ReporterError> {
        let selection = self.select_in(context, file_type)?;
        debug!(
            file_type,
            source = %selection.source,
            reporters = ?selection.reporter_names(),
            "resolved reporter"
        );
        selection.instantiate()
    }

    /// Decide which reporters apply without building them
    pub fn select(&self, file_type: &str) -> Result<Selection, ReporterError> {
        self.select_in(&ScopedContext, file_type)
    }

    pub fn select_in(
        &self,
        context: &dyn CallContext,
        file_type: &str,
    ) -> Result<Selection, ReporterError> {
        if let Some(selection) = self.find_override(context)? {
            return Ok(selection);
        }

        if let Some(descriptor) = self.registry.get(file_type) {
            return Ok(Selection {
                source: ResolutionSource::FileType {
                    key: file_type.to_string(),
                },
                reporters: vec![descriptor.clone()],
            });
        }

        Ok(Selection {
            source: ResolutionSource::Fallback,
            reporters: vec![self.registry.fallback().clone()],
        })
    }

    fn find_override(
        &self,
        context: &dyn CallContext,
    ) -> Result<Option<Selection>, ReporterError> {
        for frame in context.frames() {
            let frame = match frame {
                Ok(frame) => frame,
                Err(miss) if self.config.strict_introspection => return Err(miss.into()),
                Err(miss) => {
                    debug!(
                        frame = %miss.frame,
                        reason = %miss.reason,
                        "skipping unreadable call frame"
                    );
                    continue;
                }
            };

            if let Some((marker, site)) = frame.marker() {
                return Ok(Some(Selection {
                    source: ResolutionSource::Override {
                        frame: frame.label(),
                        site,
                    },
                    reporters: marker.reporters().to_vec(),
                }));
            }
        }
        Ok(None)
    }
}

/// Resolve `file_type` with the built-in registry and the current thread's
/// override scopes
pub fn resolve(file_type: &str) -> Result<Box<dyn Reporter>, ReporterError> {
    Resolver::builtin().resolve(file_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;
    use crate::context::FixedContext;
    use crate::core::{CallFrame, ContextOverride, MarkerSite, ReporterDescriptor};
    use crate::reporters::QuietReporter;

    fn quiet(name: &'static str) -> ReporterDescriptor {
        ReporterDescriptor::of::<QuietReporter>(name)
    }

    fn registry() -> Registry {
        Registry::builder()
            .with_entry("txt", quiet("text"))
            .with_fallback(quiet("fallback"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_file_type_then_fallback() {
        let registry = registry();
        let resolver = Resolver::new(&registry, ResolverConfig::default());
        let empty = FixedContext::new();

        let text = resolver.select_in(&empty, "txt").unwrap();
        assert_eq!(text.reporter_names(), vec!["text"]);
        assert_eq!(
            text.source,
            ResolutionSource::FileType {
                key: "txt".to_string()
            }
        );

        let other = resolver.select_in(&empty, "").unwrap();
        assert_eq!(other.reporter_names(), vec!["fallback"]);
        assert_eq!(other.source, ResolutionSource::Fallback);
    }

    #[test]
    fn test_type_marker_on_outer_frame() {
        let registry = registry();
        let resolver = Resolver::new(&registry, ResolverConfig::default());
        let context = FixedContext::new()
            .with_frame(CallFrame::new("helpers", "verify"))
            .with_frame(
                CallFrame::new("ReceiptTests", "prints").with_type_override(quiet("suite")),
            );

        let selection = resolver.select_in(&context, "txt").unwrap();
        assert_eq!(selection.reporter_names(), vec!["suite"]);
        assert_eq!(
            selection.source,
            ResolutionSource::Override {
                frame: "ReceiptTests::prints".to_string(),
                site: MarkerSite::Type,
            }
        );
    }

    #[test]
    fn test_inner_type_marker_beats_outer_method_marker() {
        let registry = registry();
        let resolver = Resolver::new(&registry, ResolverConfig::default());
        let context = FixedContext::new()
            .with_frame(
                CallFrame::new("ReceiptTests", "prints").with_type_override(quiet("inner")),
            )
            .with_frame(CallFrame::new("SuiteRunner", "run").with_method_override(quiet("outer")));

        let selection = resolver.select_in(&context, "txt").unwrap();
        assert_eq!(selection.reporter_names(), vec!["inner"]);
        assert_eq!(
            selection.source,
            ResolutionSource::Override {
                frame: "ReceiptTests::prints".to_string(),
                site: MarkerSite::Type,
            }
        );
    }

    #[test]
    fn test_unreadable_frame_is_skipped() {
        let registry = registry();
        let resolver = Resolver::new(&registry, ResolverConfig::default());
        let context = FixedContext::new()
            .with_unreadable_frame("Generated::closure", "type not loadable")
            .with_frame(
                CallFrame::new("ReceiptTests", "prints").with_method_override(quiet("m")),
            );

        let selection = resolver.select_in(&context, "txt").unwrap();
        assert_eq!(selection.reporter_names(), vec!["m"]);
    }

    #[test]
    fn test_strict_mode_surfaces_unreadable_frame() {
        let registry = registry();
        let config = ResolverConfig::builder()
            .with_strict_introspection(true)
            .build()
            .unwrap();
        let resolver = Resolver::new(&registry, config);
        let context =
            FixedContext::new().with_unreadable_frame("Generated::closure", "type not loadable");

        match resolver.select_in(&context, "txt") {
            Err(ReporterError::IntrospectionMiss { frame, .. }) => {
                assert_eq!(frame, "Generated::closure")
            }
            _ => panic!("Expected IntrospectionMiss"),
        }
    }

    #[test]
    fn test_composite_selection_keeps_order() {
        let registry = registry();
        let resolver = Resolver::new(&registry, ResolverConfig::default());
        let marker = ContextOverride::new([quiet("first"), quiet("second")]).unwrap();
        let context =
            FixedContext::new().with_frame(CallFrame::new("T", "m").with_method_override(marker));

        let selection = resolver.select_in(&context, "png").unwrap();
        assert!(selection.is_composite());
        assert_eq!(selection.reporter_names(), vec!["first", "second"]);

        let reporter = resolver.resolve_in(&context, "png").unwrap();
        assert_eq!(reporter.name(), "multi");
    }
}
