//! Ambient values shared with everything built inside a scope.
//!
//! ## Usage
//!
//! Wrap part of a build in [`provide_context`] and read the value anywhere
//! below it with [`use_context`]. Inner providers shadow outer ones of the
//! same type until their scope ends.

use std::{
    any::{Any, TypeId},
    cell::RefCell,
    sync::Arc,
};

use crate::runtime::ensure_build_phase;

type Provided = (TypeId, Arc<dyn Any + Send + Sync>);

thread_local! {
    /// Values provided by the enclosing scopes, innermost last.
    static PROVIDED: RefCell<Vec<Provided>> = const { RefCell::new(Vec::new()) };
}

struct ScopeGuard {
    depth: usize,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        PROVIDED.with(|provided| provided.borrow_mut().truncate(self.depth));
    }
}

/// Makes `value` visible to [`use_context`] calls made while `scope` runs.
///
/// # Examples
///
/// ```
/// use kalend_ui::{Host, component, provide_context, use_context};
///
/// #[derive(Default)]
/// struct Accent(&'static str);
///
/// let mut host = Host::new(|| {
///     provide_context(Accent("teal"), || {
///         component("leaf", || {
///             assert_eq!(use_context::<Accent>().0, "teal");
///         });
///     });
/// });
/// host.render();
/// ```
///
/// # Panics
///
/// Panics when called outside a build pass.
pub fn provide_context<T, R>(value: T, scope: impl FnOnce() -> R) -> R
where
    T: Send + Sync + 'static,
{
    ensure_build_phase();
    let depth = PROVIDED.with(|provided| {
        let mut provided = provided.borrow_mut();
        let depth = provided.len();
        provided.push((TypeId::of::<T>(), Arc::new(value)));
        depth
    });
    let _guard = ScopeGuard { depth };
    scope()
}

/// Reads the innermost provided `T`, or `T::default()` when no scope
/// provides one.
///
/// # Panics
///
/// Panics when called outside a build pass.
pub fn use_context<T>() -> Arc<T>
where
    T: Default + Send + Sync + 'static,
{
    ensure_build_phase();
    let wanted = TypeId::of::<T>();
    let found = PROVIDED.with(|provided| {
        provided
            .borrow()
            .iter()
            .rev()
            .find(|(type_id, _)| *type_id == wanted)
            .map(|(_, value)| Arc::clone(value))
    });
    found
        .and_then(|value| value.downcast::<T>().ok())
        .unwrap_or_else(|| Arc::new(T::default()))
}
