//! Shared byte arenas - reference-counted raw storage for the transport layer

use std::{
    alloc::{self, Layout},
    ptr::NonNull,
    sync::Arc,
};

/// Raw capacity-counted allocation behind a [`ByteArena`] handle
#[derive(Debug)]
struct ArenaStorage {
    /// Pointer to the allocation (dangling when capacity is 0)
    ptr: NonNull<u8>,
    /// Size of the allocation in bytes
    capacity: usize,
}

impl ArenaStorage {
    fn allocate(capacity: usize) -> Self {
        if capacity == 0 {
            return Self {
                ptr: NonNull::dangling(),
                capacity: 0,
            };
        }

        let layout = Layout::array::<u8>(capacity).expect("arena capacity overflows Layout");
        let ptr = unsafe { alloc::alloc(layout) };
        let ptr = match NonNull::new(ptr) {
            Some(ptr) => ptr,
            // Allocation failure is fatal
            None => alloc::handle_alloc_error(layout),
        };

        Self { ptr, capacity }
    }
}

impl Drop for ArenaStorage {
    fn drop(&mut self) {
        if self.capacity > 0 {
            let layout = Layout::array::<u8>(self.capacity).expect("layout was valid at allocation");
            unsafe { alloc::dealloc(self.ptr.as_ptr(), layout) };
        }
    }
}

// Storage is plain bytes; access discipline (single writer, readers confined
// to the frozen prefix) is enforced by WriteBuffer and ShareableView.
unsafe impl Send for ArenaStorage {}
unsafe impl Sync for ArenaStorage {}

/// A reference-counted handle to a capacity-counted byte allocation.
///
/// Handles have shared-pointer semantics: cloning (or [`share_handle`])
/// yields a second handle to the same storage, and the storage lives until
/// the last handle drops. Growing a handle swaps in a *fresh* allocation
/// without copying the old contents - other handles keep the old storage
/// alive and untouched, which is what makes previously issued views immune
/// to later growth events.
///
/// [`share_handle`]: ByteArena::share_handle
#[derive(Debug, Clone)]
pub struct ByteArena {
    storage: Arc<ArenaStorage>,
}

impl ByteArena {
    /// Allocate a new arena with the given capacity.
    ///
    /// The contents are uninitialized. A zero capacity is valid and performs
    /// no allocation. Allocation failure aborts the process; there is no
    /// recoverable out-of-memory path.
    pub fn allocate(capacity: usize) -> Self {
        Self {
            storage: Arc::new(ArenaStorage::allocate(capacity)),
        }
    }

    /// Capacity of the underlying allocation in bytes
    pub fn capacity(&self) -> usize {
        self.storage.capacity
    }

    /// Replace this handle's storage with a fresh, larger allocation.
    ///
    /// Calling with `new_capacity <= capacity()` is a no-op: capacity only
    /// ever increases. The new storage is uninitialized - prior content is
    /// dropped, not copied. Callers that need continuity must copy bytes out
    /// before discarding their old handle.
    pub fn grow(&mut self, new_capacity: usize) {
        if new_capacity <= self.storage.capacity {
            return;
        }
        self.storage = Arc::new(ArenaStorage::allocate(new_capacity));
    }

    /// Return a second handle referencing the same storage, without copying
    pub fn share_handle(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
        }
    }

    /// Number of live handles referencing this storage
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.storage)
    }

    /// Whether two handles reference the same underlying storage
    pub fn shares_storage_with(&self, other: &ByteArena) -> bool {
        Arc::ptr_eq(&self.storage, &other.storage)
    }

    /// Raw pointer to the start of the storage
    pub fn as_ptr(&self) -> *const u8 {
        self.storage.ptr.as_ptr()
    }

    /// Mutable raw pointer to the start of the storage.
    ///
    /// The arena itself does not track initialization or a write position;
    /// callers own the discipline that exactly one writer mutates through
    /// this pointer, and only above any offset handed out to readers.
    pub fn as_mut_ptr(&self) -> *mut u8 {
        self.storage.ptr.as_ptr()
    }
}
