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

//! BloomRF filter for probabilistic point and range membership testing.
//!
//! BloomRF extends the Bloom-filter guarantee to range queries: besides
//! asking whether a single key may be present, it answers whether any
//! stored key may lie in a closed interval. False positives are possible,
//! false negatives are not.
//!
//! # Properties
//!
//! - **No false negatives**: if a key was inserted, [`BloomRf::contains`]
//!   returns `true` and [`BloomRf::overlaps`] returns `true` for every
//!   range containing it
//! - **Possible false positives**: either query may return `true` for keys
//!   or ranges that were never touched
//! - **Fixed size**: the filter does not resize; pick the size for the
//!   expected key count up front
//! - **Ordered keys**: unsigned, signed and floating-point keys are
//!   supported through an order-preserving encoding ([`FilterKey`])
//!
//! # How it works
//!
//! The filter hashes each key once per layer, on a successively shorter
//! prefix of the key's bits. The hash selects a small word of the
//! bit-array; the key bits just below the prefix select one bit inside
//! that word. Keys that are close together share prefixes, so their bits
//! land in the same word — which is what lets a range query test a whole
//! aligned interval of the key space with a single masked load.
//!
//! A range query decomposes `[low, high]` into aligned power-of-two
//! intervals, coarsest first. Intervals fully inside the query resolve to
//! one in-word bitmask probe; intervals overhanging a bound resolve to one
//! bit and, when that bit is set, split into finer halves for the next
//! layer. The walk stops at the first positive probe or when every
//! interval has been disproven.
//!
//! # Usage
//!
//! ```rust
//! use bloomrf::BloomRf;
//!
//! // 16 kB filter with the reference layer schedule for u64 keys.
//! let mut filter = BloomRf::<u64>::builder(16_000).build().unwrap();
//!
//! filter.add(17_183_560_791_176_864_955);
//!
//! // Point query
//! assert!(filter.contains(17_183_560_791_176_864_955));
//!
//! // Range query over a closed interval
//! assert!(filter.overlaps(17_183_560_791_176_864_900, 17_183_560_791_176_865_000));
//! ```
//!
//! Signed and floating-point keys work the same way; ranges follow the
//! natural key order:
//!
//! ```rust
//! use bloomrf::BloomRf;
//!
//! let mut filter = BloomRf::<i64>::builder(16_000).build().unwrap();
//! filter.add(-1);
//! assert!(filter.overlaps(-5, 5));
//! ```
//!
//! # Choosing parameters
//!
//! The layer vector trades point-query cost against range-query
//! resolution: layer `i` consumes `layers[i]` key bits, and the widths must
//! sum to at most the key width. Wider layers resolve wider ranges in a
//! single probe; more layers sharpen the walk at the cost of one extra
//! probe per point query. The defaults match the configurations the filter
//! was evaluated with (e.g. `[7, 7, 7, 7, 7, 7]` for 64-bit keys).
//!
//! The cell type is a tuning knob for the storage granularity; `u32`,
//! `u64` (default) and `u128` behave identically up to probe cost, while
//! `AtomicU32`/`AtomicU64` additionally allow concurrent insertion through
//! [`BloomRf::add_concurrent`].
//!
//! # References
//!
//! - Mößner et al. (2023). "bloomRF: On Performing Range-Queries in
//!   Bloom-Filters with Piecewise-Monotone Hash Functions and Dyadic Trace-Trees"

mod builder;
mod cell;
mod checks;
mod filter;
mod key;
mod layout;

pub use self::builder::BloomRfBuilder;
pub use self::cell::Cell;
pub use self::cell::ConcurrentCell;
pub use self::cell::Word;
pub use self::filter::BloomRf;
pub use self::key::FilterKey;
