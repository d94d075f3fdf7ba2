//! Build-pass bookkeeping: component identity, execution phases and memoized
//! state.
//!
//! A build pass keeps one scope per thread. The scope holds the phase stack,
//! one frame per open component or key group, and the slot table of the host
//! that is rendering. A frame's identity is derived from its parent frame, so
//! the same component called at the same place gets the same slots on every
//! pass.

use std::{
    any::{Any, TypeId},
    cell::RefCell,
    hash::{Hash, Hasher},
    sync::Arc,
};

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHasher};
use tracing::trace;

thread_local! {
    static SCOPE: RefCell<BuildScope> = RefCell::new(BuildScope::default());
}

#[derive(Default)]
struct BuildScope {
    phases: Vec<RuntimePhase>,
    frames: Vec<Frame>,
    slots: Option<Arc<RwLock<SlotTable>>>,
}

/// An open component instance or key group.
struct Frame {
    id: u64,
    /// Position handed to the next child component or `remember` call.
    cursor: u64,
}

impl Frame {
    fn new(id: u64) -> Self {
        Self { id, cursor: 0 }
    }
}

fn with_scope<R>(f: impl FnOnce(&mut BuildScope) -> R) -> R {
    SCOPE.with(|scope| f(&mut scope.borrow_mut()))
}

fn hash_of(parts: &[&dyn HashPart]) -> u64 {
    let mut hasher = FxHasher::default();
    for part in parts {
        part.feed(&mut hasher);
    }
    hasher.finish()
}

trait HashPart {
    fn feed(&self, hasher: &mut FxHasher);
}

impl<T: Hash + ?Sized> HashPart for T {
    fn feed(&self, hasher: &mut FxHasher) {
        self.hash(hasher);
    }
}

/// Takes the next position in the innermost frame and returns it with the
/// frame id.
fn advance() -> (u64, u64) {
    with_scope(|scope| match scope.frames.last_mut() {
        Some(frame) => {
            let position = frame.cursor;
            frame.cursor += 1;
            (frame.id, position)
        }
        None => (0, 0),
    })
}

struct FrameGuard;

impl FrameGuard {
    fn open(id: u64) -> Self {
        with_scope(|scope| scope.frames.push(Frame::new(id)));
        Self
    }
}

impl Drop for FrameGuard {
    fn drop(&mut self) {
        with_scope(|scope| {
            let closed = scope.frames.pop();
            debug_assert!(closed.is_some(), "frame stack underflow");
        });
    }
}

#[derive(Hash, Eq, PartialEq, Clone, Copy)]
struct SlotKey {
    frame: u64,
    position: u64,
    key: u64,
    type_id: TypeId,
}

struct SlotEntry {
    value: Arc<dyn Any + Send + Sync>,
    touched: u64,
}

/// Memoized values owned by one host.
#[derive(Default)]
pub(crate) struct SlotTable {
    entries: FxHashMap<SlotKey, SlotEntry>,
    pass: u64,
}

impl SlotTable {
    /// Drops every slot that was not touched during the current pass.
    pub(crate) fn recycle(&mut self) -> usize {
        let pass = self.pass;
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.touched == pass);
        let freed = before - self.entries.len();
        if freed > 0 {
            trace!(freed, "recycled state slots");
        }
        freed
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// What the current thread is doing.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum RuntimePhase {
    /// Running components.
    Build,
    /// Running an event handler.
    Input,
}

/// Pops its phase when dropped.
pub(crate) struct PhaseGuard;

impl Drop for PhaseGuard {
    fn drop(&mut self) {
        with_scope(|scope| {
            let popped = scope.phases.pop();
            debug_assert!(popped.is_some(), "phase stack underflow");
        });
    }
}

pub(crate) fn push_phase(phase: RuntimePhase) -> PhaseGuard {
    with_scope(|scope| scope.phases.push(phase));
    PhaseGuard
}

pub(crate) fn ensure_build_phase() {
    match with_scope(|scope| scope.phases.last().copied()) {
        Some(RuntimePhase::Build) => {}
        Some(RuntimePhase::Input) => {
            panic!("component state must not be created inside an event handler")
        }
        None => panic!(
            "components must run inside a build pass; render them through `Host::render`"
        ),
    }
}

/// Installs a host's slot table and the root frame for one build pass.
pub(crate) struct PassGuard {
    _root: FrameGuard,
    _phase: PhaseGuard,
}

impl Drop for PassGuard {
    fn drop(&mut self) {
        with_scope(|scope| scope.slots = None);
    }
}

pub(crate) fn begin_pass(slots: Arc<RwLock<SlotTable>>) -> PassGuard {
    slots.write().pass += 1;
    with_scope(|scope| {
        let previous = scope.slots.replace(slots);
        debug_assert!(previous.is_none(), "nested build passes are not supported");
    });
    PassGuard {
        _root: FrameGuard::open(0),
        _phase: push_phase(RuntimePhase::Build),
    }
}

/// Handle to memoized state created by [`remember`] and [`remember_with_key`].
///
/// Handles are cheap to clone and can be moved into `Send + Sync` event
/// handlers. Two handles are equal when they point at the same slot.
///
/// # Examples
///
/// ```
/// use kalend_ui::{Host, component, remember};
///
/// let mut host = Host::new(|| {
///     component("ticks", || {
///         let ticks = remember(|| 0usize);
///         ticks.with_mut(|t| *t += 1);
///     });
/// });
/// host.render();
/// host.render();
/// ```
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for State<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Eq for State<T> {}

impl<T> State<T> {
    /// Reads the value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.read())
    }

    /// Mutates the value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Returns a copy of the value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(T::clone)
    }

    /// Replaces the value.
    pub fn set(&self, value: T) {
        *self.inner.write() = value;
    }
}

/// Runs `body` as a component instance named `name`.
///
/// State remembered inside `body` belongs to this instance. The instance
/// identity combines the name, the enclosing instance and the position among
/// its siblings, so calling the same component twice yields two independent
/// instances.
pub fn component<R>(name: &'static str, body: impl FnOnce() -> R) -> R {
    ensure_build_phase();
    let (parent, position) = advance();
    let _frame = FrameGuard::open(hash_of(&[&name, &parent, &position]));
    body()
}

/// Remembers a value across build passes under an explicit key.
///
/// `init` runs the first time the key is seen at this position of the
/// instance. A value that is not remembered again during a pass is dropped
/// when the pass ends.
///
/// # Panics
///
/// Panics outside a build pass.
pub fn remember_with_key<K, F, T>(key: K, init: F) -> State<T>
where
    K: Hash,
    F: FnOnce() -> T,
    T: Send + Sync + 'static,
{
    ensure_build_phase();
    let (frame, position) = advance();
    let slot_key = SlotKey {
        frame,
        position,
        key: hash_of(&[&key]),
        type_id: TypeId::of::<T>(),
    };
    let slots = with_scope(|scope| scope.slots.clone())
        .unwrap_or_else(|| panic!("no slot table installed; render through `Host::render`"));

    {
        let mut table = slots.write();
        let pass = table.pass;
        if let Some(entry) = table.entries.get_mut(&slot_key) {
            entry.touched = pass;
            if let Ok(inner) = Arc::clone(&entry.value).downcast::<RwLock<T>>() {
                return State { inner };
            }
        }
    }

    // `init` may build components of its own, so it runs without the lock.
    let inner = Arc::new(RwLock::new(init()));
    let mut table = slots.write();
    let touched = table.pass;
    table.entries.insert(
        slot_key,
        SlotEntry {
            value: inner.clone(),
            touched,
        },
    );
    State { inner }
}

/// Remembers a value across build passes.
///
/// State is identified by its position within the enclosing component. For
/// state created in loops, wrap each iteration in [`key`].
///
/// # Panics
///
/// Panics outside a build pass.
pub fn remember<F, T>(init: F) -> State<T>
where
    F: FnOnce() -> T,
    T: Send + Sync + 'static,
{
    remember_with_key((), init)
}

/// Runs `block` under a stable key.
///
/// Components and state created inside the block are identified by the key
/// instead of their position, so they follow the key when items are
/// reordered.
pub fn key<K, F, R>(key: K, block: F) -> R
where
    K: Hash,
    F: FnOnce() -> R,
{
    let parent = with_scope(|scope| scope.frames.last().map_or(0, |frame| frame.id));
    let _frame = FrameGuard::open(hash_of(&[&parent, &hash_of(&[&key])]));
    block()
}
