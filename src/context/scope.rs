//! Thread-local override scopes

use std::cell::{Cell, RefCell};
use std::marker::PhantomData;

use super::{CallContext, FrameRead};
use crate::core::{CallFrame, ContextOverride};

thread_local! {
    static FRAMES: RefCell<Vec<(u64, CallFrame)>> = const { RefCell::new(Vec::new()) };
    static NEXT_ID: Cell<u64> = const { Cell::new(0) };
}

/// Reads the frames pushed on the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopedContext;

impl CallContext for ScopedContext {
    fn frames(&self) -> Vec<FrameRead> {
        FRAMES.with(|frames| {
            frames
                .borrow()
                .iter()
                .rev()
                .map(|(_, frame)| Ok(frame.clone()))
                .collect()
        })
    }
}

/// Keeps a frame on the current thread's context until dropped
///
/// Guards are tied to the thread that created them.
#[must_use = "the frame is popped as soon as the guard is dropped"]
#[derive(Debug)]
pub struct OverrideGuard {
    id: u64,
    depth: usize,
    _not_send: PhantomData<*const ()>,
}

impl OverrideGuard {
    /// Push `frame` as the innermost frame of the current thread
    pub fn enter(frame: CallFrame) -> Self {
        let id = NEXT_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        let depth = FRAMES.with(|frames| {
            let mut frames = frames.borrow_mut();
            frames.push((id, frame));
            frames.len()
        });
        Self {
            id,
            depth,
            _not_send: PhantomData,
        }
    }
}

impl Drop for OverrideGuard {
    fn drop(&mut self) {
        // Also pops any inner frames whose guards were leaked. A guard
        // whose frame was already popped leaves later frames alone.
        FRAMES.with(|frames| {
            let mut frames = frames.borrow_mut();
            if frames.get(self.depth - 1).is_some_and(|(id, _)| *id == self.id) {
                frames.truncate(self.depth - 1);
            }
        });
    }
}

fn scope_frame() -> CallFrame {
    let thread = std::thread::current();
    CallFrame::new("scope", thread.name().unwrap_or("<unnamed>"))
}

/// Mark the current scope, like a test method, to use `reporters`
pub fn use_reporters(reporters: impl Into<ContextOverride>) -> OverrideGuard {
    OverrideGuard::enter(scope_frame().with_method_override(reporters))
}

/// Mark the current scope, like a test type, to use `reporters`
pub fn use_type_reporters(reporters: impl Into<ContextOverride>) -> OverrideGuard {
    OverrideGuard::enter(scope_frame().with_type_override(reporters))
}

/// Run `f` with `reporters` as the innermost override
pub fn with_reporters<T>(reporters: impl Into<ContextOverride>, f: impl FnOnce() -> T) -> T {
    let _guard = use_reporters(reporters);
    f()
}

/// Number of frames currently pushed on this thread
pub fn depth() -> usize {
    FRAMES.with(|frames| frames.borrow().len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ReporterDescriptor;
    use crate::reporters::QuietReporter;

    fn quiet(name: &'static str) -> ReporterDescriptor {
        ReporterDescriptor::of::<QuietReporter>(name)
    }

    fn innermost_names() -> Vec<&'static str> {
        ScopedContext.frames()[0]
            .as_ref()
            .unwrap()
            .marker()
            .unwrap()
            .0
            .names()
    }

    #[test]
    fn test_guard_pops_on_drop() {
        assert_eq!(depth(), 0);
        {
            let _guard = use_reporters(quiet("a"));
            assert_eq!(depth(), 1);
        }
        assert_eq!(depth(), 0);
    }

    #[test]
    fn test_innermost_frame_comes_first() {
        let _outer = use_type_reporters(quiet("outer"));
        let _inner = use_reporters(quiet("inner"));
        assert_eq!(innermost_names(), vec!["inner"]);
    }

    #[test]
    fn test_out_of_order_drop_clears_inner_frames() {
        let outer = use_reporters(quiet("outer"));
        let inner = use_reporters(quiet("inner"));
        drop(outer);
        assert_eq!(depth(), 0);
        drop(inner);
        assert_eq!(depth(), 0);
    }

    #[test]
    fn test_stale_guard_keeps_later_frames() {
        let outer = use_reporters(quiet("outer"));
        let inner = use_reporters(quiet("inner"));
        drop(outer);

        let _a = use_reporters(quiet("a"));
        let _b = use_reporters(quiet("b"));
        drop(inner);

        assert_eq!(depth(), 2);
        assert_eq!(innermost_names(), vec!["b"]);
    }

    #[test]
    fn test_with_reporters_scopes_closure() {
        let names = with_reporters(quiet("closure"), innermost_names);
        assert_eq!(names, vec!["closure"]);
        assert_eq!(depth(), 0);
    }

    #[test]
    fn test_frames_do_not_cross_threads() {
        let _guard = use_reporters(quiet("here"));
        let seen = std::thread::spawn(|| ScopedContext.frames().len())
            .join()
            .unwrap();
        assert_eq!(seen, 0);
    }

    #[test]
    fn test_scope_frame_carries_method_marker() {
        let _guard = use_reporters(quiet("a"));
        let frame = ScopedContext.frames().remove(0).unwrap();
        assert_eq!(frame.declaring_type, "scope");
        assert!(frame.type_override.is_none());
        assert!(frame.method_override.is_some());
    }
}
