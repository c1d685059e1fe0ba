//! # Call Context Module
//!
//! The resolver finds context overrides by walking the frames of the calling
//! context from the innermost outward. Frames come from a [`CallContext`]:
//!
//! - **ScopedContext**: the default, a thread-local stack of frames pushed by
//!   the test-assertion layer with [`OverrideGuard::enter`] (or the
//!   [`use_reporters`] and [`use_type_reporters`] helpers) and popped when the
//!   guard drops
//! - **FixedContext**: an explicit list of frames threaded through the call,
//!   which may include frames that could not be inspected
//!
//! ## Example
//!
//! ```
//! use approval_reporters::context::{use_reporters, use_type_reporters};
//! use approval_reporters::core::ReporterDescriptor;
//! use approval_reporters::reporters::QuietReporter;
//! use approval_reporters::resolver::Resolver;
//!
//! # fn main() -> Result<(), approval_reporters::error::ReporterError> {
//! let _suite = use_type_reporters(ReporterDescriptor::of::<QuietReporter>("suite-quiet"));
//! let _test = use_reporters(ReporterDescriptor::of::<QuietReporter>("test-quiet"));
//!
//! let selection = Resolver::builtin().select("txt")?;
//! assert_eq!(selection.reporter_names(), vec!["test-quiet"]);
//! # Ok(())
//! # }
//! ```

mod scope;

pub use scope::*;

use crate::core::{CallFrame, IntrospectionMiss};

/// Result of reading one frame of the calling context
pub type FrameRead = Result<CallFrame, IntrospectionMiss>;

/// Supplies the frames of the calling context, innermost first
pub trait CallContext {
    /// A snapshot of the frames at the moment of the call
    fn frames(&self) -> Vec<FrameRead>;
}

/// A caller-built list of frames, innermost first
#[derive(Debug, Clone, Default)]
pub struct FixedContext {
    frames: Vec<FrameRead>,
}

impl FixedContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame further out than the ones already present
    pub fn with_frame(mut self, frame: CallFrame) -> Self {
        self.frames.push(Ok(frame));
        self
    }

    /// Add a frame whose markers could not be read
    pub fn with_unreadable_frame(
        mut self,
        frame: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        self.frames.push(Err(IntrospectionMiss {
            frame: frame.into(),
            reason: reason.into(),
        }));
        self
    }
}

impl CallContext for FixedContext {
    fn frames(&self) -> Vec<FrameRead> {
        self.frames.clone()
    }
}
