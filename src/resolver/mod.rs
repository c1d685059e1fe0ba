//! # Reporter Resolution Module
//!
//! This module decides which reporter presents an approval failure.
//!
//! ## Algorithm
//!
//! Resolution takes a file-type identifier and the calling context, and
//! short-circuits on the first step that produces an answer:
//!
//! 1. **Context override**: the nearest frame (innermost first) carrying a
//!    method or type override. One named reporter is returned as is; several
//!    are wrapped in a `MultiReporter` in declaration order.
//! 2. **File-type default**: the registry entry for the identifier.
//! 3. **Fallback**: the registry's reserved default entry, which always
//!    exists, so resolution never reports "no reporter".
//!
//! A reporter that fails to construct is a hard error; it is never replaced
//! by the fallback. A frame that cannot be inspected is skipped unless
//! strict introspection is enabled.
//!
//! ## Example
//!
//! ```
//! use approval_reporters::reporters::{DiffReporter, ImageReporter, QuietReporter, downcast_ref};
//!
//! # fn main() -> Result<(), approval_reporters::error::ReporterError> {
//! let text = approval_reporters::resolve("txt")?;
//! assert!(downcast_ref::<DiffReporter>(&*text).is_some());
//!
//! let image = approval_reporters::resolve("png")?;
//! assert!(downcast_ref::<ImageReporter>(&*image).is_some());
//!
//! let unknown = approval_reporters::resolve("unknown-ext")?;
//! assert!(downcast_ref::<QuietReporter>(&*unknown).is_some());
//! # Ok(())
//! # }
//! ```

mod resolver_impl;

pub use resolver_impl::*;
