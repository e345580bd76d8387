// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::{GlobalAlloc, Layout};
use core::fmt;
use core::mem::MaybeUninit;
use core::ops::{Deref, DerefMut};
use core::ptr::NonNull;

use crate::allocator::SystemAllocator;
use crate::error::AllocError;
use crate::size::{BLOCK_ALIGN, checked_layout};

/// Owned allocation shared by [`UninitBlock`] and [`SaferBlock`].
///
/// Zero-length blocks own no memory and hold a dangling pointer.
struct RawBlock<A: GlobalAlloc> {
    ptr: NonNull<u8>,
    len: usize,
    allocator: A,
}

// SAFETY: RawBlock uniquely owns its allocation, like `Box<[u8]>`.
unsafe impl<A: GlobalAlloc + Send> Send for RawBlock<A> {}
// SAFETY: shared access only hands out `&[u8]`.
unsafe impl<A: GlobalAlloc + Sync> Sync for RawBlock<A> {}

impl<A: GlobalAlloc> RawBlock<A> {
    fn allocate(allocator: A, nmemb: usize, size: usize, zeroed: bool) -> Result<Self, AllocError> {
        let layout = checked_layout(nmemb, size)?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len: 0,
                allocator,
            });
        }

        // SAFETY: layout has a non-zero size.
        let raw = unsafe {
            if zeroed {
                allocator.alloc_zeroed(layout)
            } else {
                allocator.alloc(layout)
            }
        };

        let Some(ptr) = NonNull::new(raw) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(nmemb, size, total = layout.size(), "allocator returned null");

            return Err(AllocError::Failed {
                size: layout.size(),
            });
        };

        Ok(Self {
            ptr,
            len: layout.size(),
            allocator,
        })
    }

    #[inline(always)]
    fn as_uninit_mut(&mut self) -> &mut [MaybeUninit<u8>] {
        // SAFETY: ptr is valid for len bytes (or dangling with len == 0),
        // MaybeUninit<u8> has no validity requirement.
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr().cast(), self.len) }
    }
}

impl<A: GlobalAlloc> Drop for RawBlock<A> {
    fn drop(&mut self) {
        if self.len == 0 {
            return;
        }

        // SAFETY: same layout that `checked_layout` validated at allocation.
        unsafe {
            let layout = Layout::from_size_align_unchecked(self.len, BLOCK_ALIGN);
            self.allocator.dealloc(self.ptr.as_ptr(), layout);
        }
    }
}

/// Block returned by [`safer_malloc`](crate::safer_malloc): allocated, not
/// initialized.
///
/// Bytes can only be reached as [`MaybeUninit<u8>`] until the block is turned
/// into a [`SaferBlock`] with [`fill`](Self::fill),
/// [`copy_from`](Self::copy_from) or [`assume_init`](Self::assume_init).
///
/// The memory is released on drop.
pub struct UninitBlock<A: GlobalAlloc = SystemAllocator> {
    raw: RawBlock<A>,
}

impl<A: GlobalAlloc> UninitBlock<A> {
    pub(crate) fn allocate(allocator: A, nmemb: usize, size: usize) -> Result<Self, AllocError> {
        Ok(Self {
            raw: RawBlock::allocate(allocator, nmemb, size, false)?,
        })
    }

    /// Length of the block in bytes (`nmemb * size`).
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len
    }

    /// Returns `true` if the block holds zero bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.len == 0
    }

    /// Start of the block.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.raw.ptr.as_ptr()
    }

    /// Mutable start of the block.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.raw.ptr.as_ptr()
    }

    /// The block as possibly-uninitialized bytes.
    #[inline]
    pub fn as_uninit_mut(&mut self) -> &mut [MaybeUninit<u8>] {
        self.raw.as_uninit_mut()
    }

    /// Allocator that owns the block.
    pub fn allocator(&self) -> &A {
        &self.raw.allocator
    }

    /// Sets every byte to `byte`.
    pub fn fill(mut self, byte: u8) -> SaferBlock<A> {
        self.as_uninit_mut().fill(MaybeUninit::new(byte));

        // SAFETY: every byte was just written.
        unsafe { self.assume_init() }
    }

    /// Copies `src` into the block.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::LengthMismatch`] if `src.len() != self.len()`. The
    /// block is released in that case.
    pub fn copy_from(mut self, src: &[u8]) -> Result<SaferBlock<A>, AllocError> {
        if src.len() != self.len() {
            return Err(AllocError::LengthMismatch {
                expected: self.len(),
                actual: src.len(),
            });
        }

        for (dst, byte) in self.as_uninit_mut().iter_mut().zip(src) {
            dst.write(*byte);
        }

        // SAFETY: every byte was just written.
        Ok(unsafe { self.assume_init() })
    }

    /// Treats the block as initialized.
    ///
    /// # Safety
    ///
    /// Every byte of the block must have been written, e.g. through
    /// [`as_mut_ptr`](Self::as_mut_ptr) or [`as_uninit_mut`](Self::as_uninit_mut).
    pub unsafe fn assume_init(self) -> SaferBlock<A> {
        SaferBlock { raw: self.raw }
    }
}

impl<A: GlobalAlloc> fmt::Debug for UninitBlock<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UninitBlock")
            .field("ptr", &self.raw.ptr)
            .field("len", &self.raw.len)
            .finish()
    }
}

/// Initialized, owned block of bytes.
///
/// Returned by [`safer_calloc`](crate::safer_calloc) (all zeros) or built from
/// an [`UninitBlock`]. Dereferences to `[u8]`; the memory is released on drop.
pub struct SaferBlock<A: GlobalAlloc = SystemAllocator> {
    raw: RawBlock<A>,
}

impl<A: GlobalAlloc> SaferBlock<A> {
    pub(crate) fn allocate_zeroed(allocator: A, nmemb: usize, size: usize) -> Result<Self, AllocError> {
        Ok(Self {
            raw: RawBlock::allocate(allocator, nmemb, size, true)?,
        })
    }

    /// Length of the block in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len
    }

    /// Returns `true` if the block holds zero bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.len == 0
    }

    /// Start of the block.
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.raw.ptr.as_ptr()
    }

    /// Mutable start of the block.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.raw.ptr.as_ptr()
    }

    /// The block's bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: every byte is initialized and ptr is valid for len bytes.
        unsafe { core::slice::from_raw_parts(self.raw.ptr.as_ptr(), self.raw.len) }
    }

    /// The block's bytes, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: every byte is initialized and ptr is valid for len bytes.
        unsafe { core::slice::from_raw_parts_mut(self.raw.ptr.as_ptr(), self.raw.len) }
    }

    /// Allocator that owns the block.
    pub fn allocator(&self) -> &A {
        &self.raw.allocator
    }
}

impl<A: GlobalAlloc> Deref for SaferBlock<A> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<A: GlobalAlloc> DerefMut for SaferBlock<A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<A: GlobalAlloc> fmt::Debug for SaferBlock<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaferBlock")
            .field("ptr", &self.raw.ptr)
            .field("len", &self.raw.len)
            .finish()
    }
}
