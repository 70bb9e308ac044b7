//! Tracking of the containers currently being rendered.
//!
//! Rendering a container marks it as in progress for exactly as long as its
//! children are being rendered. Meeting a marked container again means the
//! graph loops back on itself, and the renderer prints `<Circular>` instead of
//! descending.
//!
//! The set lives in a thread-local, so every [`render`](crate::render) on a
//! thread shares it, including renders started from inside a [`Show`]
//! implementation or a `@@show` hook. Membership is by identity: two equal but
//! distinct containers never shadow each other.
//!
//! A value that renders itself is never marked, since its override runs
//! instead of the container rendering. Containers it renders are marked as
//! usual, so a loop back through them ends in `<Circular>`, but an override
//! that renders its own receiver directly recurses without bound.
//!
//! [`Show`]: crate::Show

use core::cell::RefCell;
use std::collections::HashSet;

use crate::value::Identity;

thread_local! {
    static IN_PROGRESS: RefCell<HashSet<Identity>> = RefCell::new(HashSet::new());
}

/// Keeps a container marked as in progress until dropped.
///
/// Dropping happens on every exit path, unwinding included, so a panicking
/// hook cannot leave a stale mark behind.
#[must_use = "the container is unmarked as soon as the guard is dropped"]
#[derive(Debug)]
pub struct Guard {
    id: Identity,
}

impl Drop for Guard {
    fn drop(&mut self) {
        // the thread-local may already be gone if we run during thread teardown
        let _ = IN_PROGRESS.try_with(|set| set.borrow_mut().remove(&self.id));
    }
}

/// Marks `id` as in progress.
///
/// Returns `None` if it already is, meaning the caller has found a cycle.
pub fn enter(id: Identity) -> Option<Guard> {
    IN_PROGRESS
        .with_borrow_mut(|set| set.insert(id))
        .then(|| Guard { id })
}

/// Whether `id` is currently being rendered on this thread.
pub fn is_in_progress(id: Identity) -> bool {
    IN_PROGRESS.with_borrow(|set| set.contains(&id))
}

/// How many containers are currently being rendered on this thread.
///
/// Always zero between top-level renders.
pub fn in_progress_len() -> usize {
    IN_PROGRESS.with_borrow(HashSet::len)
}
