//! Event handler props.
//!
//! Handlers are shared closures that compare by identity. That keeps `*Args`
//! structs holding them cheap to clone and lets them derive `PartialEq`.

use std::{fmt, sync::Arc};

/// Click handler, a shared `Fn()`.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn() + Send + Sync>);

impl Callback {
    /// Wraps a closure.
    pub fn new(handler: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }

    /// Runs the handler.
    pub fn call(&self) {
        (self.0)()
    }
}

impl<F> From<F> for Callback
where
    F: Fn() + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl Default for Callback {
    fn default() -> Self {
        Self::new(|| {})
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Value handler, a shared `Fn(T) -> R`. Change handlers such as
/// `on_change` are built from it.
pub struct CallbackWith<T, R = ()>(Arc<dyn Fn(T) -> R + Send + Sync>);

impl<T, R> CallbackWith<T, R> {
    /// Wraps a closure.
    pub fn new(handler: impl Fn(T) -> R + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }

    /// Runs the handler with `value`.
    pub fn call(&self, value: T) -> R {
        (self.0)(value)
    }
}

impl<T: 'static> CallbackWith<T> {
    /// Returns a handler taking `U` that converts its input with `adapt`
    /// and forwards it to this handler. Inputs mapped to `None` are dropped.
    ///
    /// ```
    /// use std::sync::{Arc, Mutex};
    ///
    /// use kalend_ui::CallbackWith;
    ///
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = seen.clone();
    /// let numbers = CallbackWith::new(move |n: u32| sink.lock().unwrap().push(n));
    /// let text = numbers.adapt(|raw: String| raw.parse().ok());
    ///
    /// text.call("7".to_string());
    /// text.call("seven".to_string());
    /// assert_eq!(*seen.lock().unwrap(), vec![7]);
    /// ```
    pub fn adapt<U, F>(&self, adapt: F) -> CallbackWith<U>
    where
        U: 'static,
        F: Fn(U) -> Option<T> + Send + Sync + 'static,
    {
        let target = self.clone();
        CallbackWith::new(move |input: U| {
            if let Some(value) = adapt(input) {
                target.call(value);
            }
        })
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CallbackWith(..)")
    }
}

impl<T: 'static> Default for CallbackWith<T> {
    fn default() -> Self {
        Self::new(|_: T| {})
    }
}
