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

use crate::bloomrf::cell::Cell;
use crate::bloomrf::cell::Word;
use crate::bloomrf::filter::BloomRf;
use crate::bloomrf::key::FilterKey;
use crate::error::Error;

const DEFAULT_SEED: u64 = 0;
const MAX_SIZE_BYTES: usize = 1 << 30;

/// Builder for creating [`BloomRf`] instances.
///
/// Construction is the only fallible operation of the filter: the size and
/// the layer-width vector are validated once in [`build()`](Self::build),
/// and every later operation is total.
///
/// # Examples
///
/// ```
/// # use bloomrf::BloomRf;
/// let filter = BloomRf::<u64>::builder(16_000)
///     .seed(9001)
///     .layers(&[7, 7, 4, 4, 2, 2])
///     .build()
///     .unwrap();
/// assert_eq!(filter.layers(), &[7, 7, 4, 4, 2, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct BloomRfBuilder<K: FilterKey, C: Cell = u64> {
    size_bytes: usize,
    seed: u64,
    layers: Option<Vec<u16>>,
    _key: PhantomData<K>,
    _cell: PhantomData<C>,
}

impl<K: FilterKey, C: Cell> BloomRfBuilder<K, C> {
    /// Creates a builder for a filter of `size_bytes` bytes.
    ///
    /// The layer vector defaults to a reference schedule for the key width
    /// (six 7-bit layers for 64-bit keys); override it with
    /// [`layers()`](Self::layers).
    pub fn with_size(size_bytes: usize) -> Self {
        BloomRfBuilder {
            size_bytes,
            seed: DEFAULT_SEED,
            layers: None,
            _key: PhantomData,
            _cell: PhantomData,
        }
    }

    /// Sets a custom hash seed (default: 0).
    ///
    /// Filters with different seeds address unrelated bits and cannot be
    /// merged.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the per-layer width vector, finest layer first.
    ///
    /// Layer `i` consumes `layers[i]` key bits; the widths must each be at
    /// least 1 and sum to at most the key width.
    pub fn layers(mut self, layers: &[u16]) -> Self {
        self.layers = Some(layers.to_vec());
        self
    }

    /// Builds the filter, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::InvalidParams`](crate::error::ErrorKind)
    /// error if the size is zero or above the supported maximum, the layer
    /// vector is empty, a layer width is zero, the widths sum to more than
    /// the key width, or a single layer's word would not fit into the
    /// allocated bit-array.
    pub fn build(self) -> Result<BloomRf<K, C>, Error> {
        if self.size_bytes == 0 {
            return Err(Error::invalid_params("filter size cannot be zero"));
        }
        if self.size_bytes > MAX_SIZE_BYTES {
            return Err(Error::invalid_params(format!(
                "filter size of {} bytes exceeds the supported maximum of {MAX_SIZE_BYTES} bytes",
                self.size_bytes,
            )));
        }

        let delta = match self.layers {
            Some(layers) => layers,
            None => default_layers(K::DOMAIN_BITS),
        };
        if delta.is_empty() {
            return Err(Error::invalid_params("layer vector cannot be empty"));
        }
        if delta.iter().any(|&width| width == 0) {
            return Err(Error::invalid_params("layer widths must be at least 1"));
        }
        let delta_sum: u32 = delta.iter().map(|&width| u32::from(width)).sum();
        if delta_sum > K::DOMAIN_BITS {
            return Err(Error::invalid_params(format!(
                "layer widths sum to {delta_sum} but the key has only {} bits",
                K::DOMAIN_BITS,
            )));
        }

        let cell_bytes = (<C::Word>::BITS / 8) as usize;
        let num_cells = self.size_bytes.div_ceil(cell_bytes);
        let num_bits = num_cells as u64 * u64::from(<C::Word>::BITS);
        for (layer, &width) in delta.iter().enumerate() {
            let word_bits = 1u64 << (u32::from(width) - 1);
            if word_bits > num_bits {
                return Err(Error::invalid_params(format!(
                    "layer {layer} needs a {word_bits}-bit word but the filter has only {num_bits} bits",
                )));
            }
        }

        let mut shifts = Vec::with_capacity(delta.len());
        let mut shift = 0u32;
        for &width in &delta {
            shifts.push(shift);
            shift += u32::from(width);
        }

        let cells = (0..num_cells).map(|_| C::default()).collect();

        Ok(BloomRf {
            seed: self.seed,
            delta,
            shifts,
            cells,
            size_bytes: self.size_bytes,
            _key: PhantomData,
        })
    }
}

/// The reference layer schedule for a key width.
///
/// These match the configurations the filter was tuned with: six 7-bit
/// layers cover 42 of a 64-bit key's bits, and the narrower widths scale
/// the same shape down.
fn default_layers(domain_bits: u32) -> Vec<u16> {
    match domain_bits {
        64 => vec![7, 7, 7, 7, 7, 7],
        32 => vec![7, 6, 6, 4, 3],
        16 => vec![7, 6, 3],
        bits => {
            // Unknown key width: greedily stack 7-bit layers.
            let mut layers = vec![7u16; (bits / 7) as usize];
            if layers.is_empty() {
                layers.push(bits as u16);
            }
            layers
        }
    }
}
