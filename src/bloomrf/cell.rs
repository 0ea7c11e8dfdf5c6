// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::Debug;
use std::ops::BitAnd;
use std::ops::BitOr;
use std::ops::Not;
use std::ops::Shl;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// An unsigned machine word used for bit masks within one storage cell.
pub trait Word:
    Copy
    + Debug
    + PartialEq
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
{
    /// Width of the word in bits.
    const BITS: u32;
    /// The all-zero word.
    const ZERO: Self;

    /// A word with only the bit at `pos` set. `pos` must be below `BITS`.
    fn bit(pos: u32) -> Self;

    /// A word with the lowest `bits` bits set. `bits` may equal `BITS`.
    fn low_mask(bits: u32) -> Self;

    /// Number of set bits.
    fn count_ones(self) -> u32;
}

macro_rules! impl_word {
    ($($ty:ty),*) => {$(
        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const ZERO: Self = 0;

            #[inline]
            fn bit(pos: u32) -> Self {
                1 << pos
            }

            #[inline]
            fn low_mask(bits: u32) -> Self {
                if bits >= Self::BITS {
                    Self::MAX
                } else {
                    (1 << bits) - 1
                }
            }

            #[inline]
            fn count_ones(self) -> u32 {
                <$ty>::count_ones(self)
            }
        }
    )*};
}

impl_word!(u32, u64, u128);

/// A storage cell of the filter's bit-array.
///
/// The filter is a dense sequence of cells; each cell holds
/// [`Word::BITS`](Word::BITS) bits. Plain unsigned integers are the default;
/// the atomic variants additionally implement [`ConcurrentCell`] so bits can
/// be set through a shared reference.
pub trait Cell: Default {
    /// The plain integer view of the cell.
    type Word: Word;

    /// Reads the cell. Atomic cells load with relaxed ordering.
    fn load(&self) -> Self::Word;

    /// ORs `mask` into the cell.
    fn or(&mut self, mask: Self::Word);

    /// Resets the cell to all-zero.
    fn clear(&mut self);
}

/// A cell that supports setting bits through a shared reference.
///
/// The OR is a single relaxed `fetch_or`, so concurrent insertions never
/// tear a bit. No ordering beyond that is provided: a range probe spanning
/// several cells may observe an insertion in one cell and not yet in
/// another.
pub trait ConcurrentCell: Cell {
    /// ORs `mask` into the cell with relaxed ordering.
    fn fetch_or(&self, mask: Self::Word);
}

macro_rules! impl_plain_cell {
    ($($ty:ty),*) => {$(
        impl Cell for $ty {
            type Word = $ty;

            #[inline]
            fn load(&self) -> $ty {
                *self
            }

            #[inline]
            fn or(&mut self, mask: $ty) {
                *self |= mask;
            }

            #[inline]
            fn clear(&mut self) {
                *self = 0;
            }
        }
    )*};
}

impl_plain_cell!(u32, u64, u128);

macro_rules! impl_atomic_cell {
    ($($atomic:ty => $word:ty),*) => {$(
        impl Cell for $atomic {
            type Word = $word;

            #[inline]
            fn load(&self) -> $word {
                self.load(Ordering::Relaxed)
            }

            #[inline]
            fn or(&mut self, mask: $word) {
                *self.get_mut() |= mask;
            }

            #[inline]
            fn clear(&mut self) {
                *self.get_mut() = 0;
            }
        }

        impl ConcurrentCell for $atomic {
            #[inline]
            fn fetch_or(&self, mask: $word) {
                <$atomic>::fetch_or(self, mask, Ordering::Relaxed);
            }
        }
    )*};
}

impl_atomic_cell!(AtomicU32 => u32, AtomicU64 => u64);
