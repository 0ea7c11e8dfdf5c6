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

use std::marker::PhantomData;

use crate::bloomrf::builder::BloomRfBuilder;
use crate::bloomrf::cell::Cell;
use crate::bloomrf::cell::ConcurrentCell;
use crate::bloomrf::cell::Word;
use crate::bloomrf::checks::Checks;
use crate::bloomrf::key::FilterKey;
use crate::bloomrf::layout::bit_address;
use crate::bloomrf::layout::range_mask;
use crate::hash::hash64_with_seed;
use crate::hash::SEED_GEN_A;
use crate::hash::SEED_GEN_B;

/// A BloomRF filter: probabilistic point and range membership over a set of
/// fixed-width numeric keys.
///
/// Like a Bloom filter it never reports a false negative; unlike one it can
/// also answer *range* queries ([`overlaps`](Self::overlaps)) with a low
/// false-positive rate. Keys are hashed layer by layer on successively
/// shorter prefixes, so every aligned power-of-two interval of the key
/// space maps to a compact run of bits that one masked load can test.
///
/// Provides:
/// - No false negatives: inserted keys always test `true`, and any range
///   containing an inserted key always overlaps.
/// - Tunable space/accuracy via the filter size and the layer-width vector.
/// - Constant space; bits are only ever set, never cleared (except by
///   [`reset`](Self::reset)).
///
/// Use [`BloomRf::builder`] to construct instances.
///
/// # Examples
///
/// ```
/// # use bloomrf::BloomRf;
/// let mut filter = BloomRf::<u64>::builder(16_000).build().unwrap();
/// filter.add(7_000_000);
///
/// assert!(filter.contains(7_000_000));
/// assert!(filter.overlaps(6_999_900, 7_000_100));
/// assert!(!filter.contains(12)); // false (with high probability)
/// ```
#[derive(Debug, Clone)]
pub struct BloomRf<K: FilterKey, C: Cell = u64> {
    /// Hash seed shared by every layer.
    pub(super) seed: u64,
    /// Per-layer widths, finest layer first. The layer count doubles as the
    /// number of hash probes per key.
    pub(super) delta: Vec<u16>,
    /// Prefix sums of `delta`: the key bit at which each layer starts.
    pub(super) shifts: Vec<u32>,
    /// Dense bit-array, packed into cells.
    pub(super) cells: Vec<C>,
    /// Requested size in bytes (the allocation rounds up to whole cells).
    pub(super) size_bytes: usize,
    pub(super) _key: PhantomData<K>,
}

impl<K: FilterKey, C: Cell> BloomRf<K, C> {
    /// Starts building a filter of `size_bytes` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomrf::BloomRf;
    /// let filter = BloomRf::<i64>::builder(16_000)
    ///     .seed(42)
    ///     .layers(&[7, 7, 7, 7, 7, 7])
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(filter.num_layers(), 6);
    /// ```
    pub fn builder(size_bytes: usize) -> BloomRfBuilder<K, C> {
        BloomRfBuilder::with_size(size_bytes)
    }

    /// Inserts a key into the filter.
    ///
    /// After insertion, [`contains`](Self::contains) for the key and
    /// [`overlaps`](Self::overlaps) for any range containing it return
    /// `true`.
    pub fn add(&mut self, key: K) {
        let bits = key.to_bits();
        for layer in 0..self.delta.len() {
            let (cell, mask) = self.bit_slot(layer, bits);
            self.cells[cell].or(mask);
        }
    }

    /// Tests whether a key is possibly in the set.
    ///
    /// Returns:
    /// - `true`: the key was **possibly** inserted (or a false positive)
    /// - `false`: the key was **definitely not** inserted
    pub fn contains(&self, key: K) -> bool {
        let bits = key.to_bits();
        for layer in 0..self.delta.len() {
            let (cell, mask) = self.bit_slot(layer, bits);
            if (self.cells[cell].load() & mask) == <C::Word>::ZERO {
                return false;
            }
        }
        true
    }

    /// Tests whether the set possibly contains a key in `[low, high]`
    /// (closed interval).
    ///
    /// Returns `false` only if definitely no inserted key lies in the
    /// range. The range is decomposed into aligned power-of-two intervals
    /// which are resolved coarsest-first: an interval fully inside the
    /// query is settled by one masked probe, while an interval overhanging
    /// a query bound is either disproven by a clear bit or split further.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    pub fn overlaps(&self, low: K, high: K) -> bool {
        let lkey = low.to_bits();
        let hkey = high.to_bits();
        assert!(lkey <= hkey, "range query bounds must satisfy low <= high");

        let layers = self.delta.len();
        let delta_sum = self.shifts[layers - 1] + u32::from(self.delta[layers - 1]);

        let mut checks = Checks::over_domain(K::DOMAIN_BITS, lkey, hkey);

        // Descend to the coarsest layer's interval width. Intervals that
        // land fully inside the query on the way down are wider than any
        // layer's words; set them aside and resolve them word by word
        // below, so the frontier itself stays at a handful of intervals.
        let mut wide_spans = Vec::new();
        for _ in 0..(K::DOMAIN_BITS - delta_sum) {
            if checks.is_empty() {
                break;
            }
            checks.advance(1);
            let frontier = checks.take();
            let mut kept = Vec::with_capacity(frontier.len());
            for check in frontier {
                if checks.is_covering(&check) {
                    kept.push(check);
                } else {
                    wide_spans.push(check);
                }
            }
            checks.restore(kept);
        }

        let top_layer = layers - 1;
        let span_width = 1u64 << (delta_sum - 1);
        for span in wide_spans {
            let mut low = span.low;
            loop {
                let high = low + (span_width - 1);
                if self.probe_range(top_layer, low, high) {
                    return true;
                }
                if high >= span.high {
                    break;
                }
                low = high + 1;
            }
        }

        for layer in (0..layers).rev() {
            if checks.is_empty() {
                return false;
            }
            for _ in 0..self.delta[layer] {
                checks.advance(1);
                let frontier = checks.take();
                let mut kept = Vec::with_capacity(frontier.len());
                for check in frontier {
                    if checks.is_covering(&check) {
                        kept.push(check);
                    } else if self.probe_range(layer, check.low, check.high) {
                        return true;
                    }
                }
                checks.restore(kept);
            }
            // The frontier now sits at this layer's single-bit granularity:
            // each remaining interval overhangs a query bound and maps to
            // exactly one bit. A clear bit disproves the whole interval.
            checks.retain(|check| self.probe_bit(layer, check.low));
        }
        false
    }

    /// Returns the hash seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of layers (and hash probes per key).
    pub fn num_layers(&self) -> usize {
        self.delta.len()
    }

    /// Returns the per-layer width vector, finest layer first.
    pub fn layers(&self) -> &[u16] {
        &self.delta
    }

    /// Returns the total number of bits in the filter.
    pub fn num_bits(&self) -> u64 {
        self.cells.len() as u64 * u64::from(<C::Word>::BITS)
    }

    /// Returns the requested filter size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }

    /// Returns the number of bits set to 1. Scans the whole bit-array.
    pub fn bits_set(&self) -> u64 {
        self.cells
            .iter()
            .map(|cell| u64::from(cell.load().count_ones()))
            .sum()
    }

    /// Returns whether no key has been inserted. Scans the whole bit-array.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.load() == <C::Word>::ZERO)
    }

    /// Returns the fraction of bits set.
    ///
    /// Values approaching 0.5 indicate the filter is past its design load
    /// and false-positive rates will degrade.
    pub fn load_factor(&self) -> f64 {
        self.bits_set() as f64 / self.num_bits() as f64
    }

    /// Estimates the current point-query false positive probability.
    ///
    /// Uses the approximation `load_factor^L`: a point query probes one bit
    /// per layer, and under uniform bit distribution each probe hits a set
    /// bit with probability equal to the load factor.
    pub fn estimated_point_fpp(&self) -> f64 {
        self.load_factor().powi(self.delta.len() as i32)
    }

    /// Resets the filter to its initial empty state, preserving the
    /// configuration.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Checks whether two filters can be merged with [`union`](Self::union):
    /// they must agree on size, seed and layer vector.
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.seed == other.seed && self.delta == other.delta && self.cells.len() == other.cells.len()
    }

    /// Merges another filter into this one via bitwise OR.
    ///
    /// Afterwards this filter answers `true` for every key (and range)
    /// either filter answered `true` for; no false negatives are
    /// introduced.
    ///
    /// # Panics
    ///
    /// Panics if the filters are not compatible. Use
    /// [`is_compatible()`](Self::is_compatible) to check first.
    pub fn union(&mut self, other: &Self) {
        assert!(
            self.is_compatible(other),
            "cannot union incompatible filters"
        );
        for (cell, other_cell) in self.cells.iter_mut().zip(&other.cells) {
            cell.or(other_cell.load());
        }
    }

    /// Width of this layer's words, in bits.
    #[inline]
    fn word_bits(&self, layer: usize) -> u64 {
        1u64 << (u32::from(self.delta[layer]) - 1)
    }

    /// The key bits below the layer's word boundary, selecting the bit
    /// inside the word the key maps to.
    #[inline]
    fn layer_offset(&self, layer: usize, key_bits: u64) -> u64 {
        (key_bits >> self.shifts[layer]) & (self.word_bits(layer) - 1)
    }

    /// Hashes the key's layer prefix to a word index of this layer.
    ///
    /// The two base hashes of the prefix are combined as `a + i*b + i*i`,
    /// so layers probe independent words even when their prefixes agree.
    fn layer_word_index(&self, layer: usize, key_bits: u64) -> u64 {
        let prefix_shift = self.shifts[layer] + u32::from(self.delta[layer]) - 1;
        let prefix = key_bits >> prefix_shift;

        let a = hash64_with_seed(prefix, self.seed);
        let b = hash64_with_seed(
            prefix,
            SEED_GEN_A
                .wrapping_mul(self.seed)
                .wrapping_add(SEED_GEN_B),
        );
        let i = layer as u64;
        let hash = a.wrapping_add(i.wrapping_mul(b)).wrapping_add(i.wrapping_mul(i));

        hash % (self.num_bits() / self.word_bits(layer))
    }

    /// Resolves the single bit a key maps to at this layer.
    fn bit_slot(&self, layer: usize, key_bits: u64) -> (usize, C::Word) {
        let word = self.layer_word_index(layer, key_bits);
        let offset = self.layer_offset(layer, key_bits);
        let (cell, bit) = bit_address(word, offset, self.word_bits(layer), <C::Word>::BITS);
        (cell, <C::Word>::bit(bit))
    }

    /// Tests the single bit a key (or an interval at this layer's bit
    /// granularity) maps to.
    fn probe_bit(&self, layer: usize, key_bits: u64) -> bool {
        let (cell, mask) = self.bit_slot(layer, key_bits);
        (self.cells[cell].load() & mask) != <C::Word>::ZERO
    }

    /// Tests every bit of the offset range `[low_bits, high_bits]` inside
    /// the word both bounds map to. The bounds must share the layer's word
    /// prefix.
    fn probe_range(&self, layer: usize, low_bits: u64, high_bits: u64) -> bool {
        let word_bits = self.word_bits(layer);
        let cell_bits = u64::from(<C::Word>::BITS);
        let word = self.layer_word_index(layer, low_bits);
        let off_lo = self.layer_offset(layer, low_bits);
        let off_hi = self.layer_offset(layer, high_bits);
        debug_assert!(off_lo <= off_hi);

        if word_bits <= cell_bits {
            let (cell, lo_bit) = bit_address(word, off_lo, word_bits, <C::Word>::BITS);
            let mask = range_mask::<C::Word>(lo_bit, lo_bit + (off_hi - off_lo) as u32);
            (self.cells[cell].load() & mask) != <C::Word>::ZERO
        } else {
            // The word spans several cells; the first and last get masked
            // ends, the middle ones are tested whole.
            let base = (word * (word_bits / cell_bits)) as usize;
            let first = off_lo / cell_bits;
            let last = off_hi / cell_bits;
            for index in first..=last {
                let lo_bit = if index == first {
                    (off_lo % cell_bits) as u32
                } else {
                    0
                };
                let hi_bit = if index == last {
                    (off_hi % cell_bits) as u32
                } else {
                    <C::Word>::BITS - 1
                };
                let cell = self.cells[base + index as usize].load();
                if (cell & range_mask::<C::Word>(lo_bit, hi_bit)) != <C::Word>::ZERO {
                    return true;
                }
            }
            false
        }
    }
}

impl<K: FilterKey, C: ConcurrentCell> BloomRf<K, C> {
    /// Inserts a key through a shared reference.
    ///
    /// Each touched cell is updated with a single relaxed `fetch_or`, so
    /// concurrent insertions never lose or tear bits. A concurrent reader
    /// may observe some of the key's layers before others; once this call
    /// returns, the usual no-false-negative guarantee holds for queries
    /// that start afterwards.
    pub fn add_concurrent(&self, key: K) {
        let bits = key.to_bits();
        for layer in 0..self.delta.len() {
            let (cell, mask) = self.bit_slot(layer, bits);
            self.cells[cell].fetch_or(mask);
        }
    }
}
