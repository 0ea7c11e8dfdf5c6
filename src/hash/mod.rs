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

mod xxhash;

pub(crate) use self::xxhash::XxHash64;

/// Multiplier for deriving the second base seed from the filter seed.
///
/// The two base hashes `a = H(prefix, seed)` and
/// `b = H(prefix, SEED_GEN_A * seed + SEED_GEN_B)` are combined per layer
/// `i` as `a + i*b + i*i` (double hashing, in the Kirsch-Mitzenmacher
/// style). The constants are fixed: two filters agree bit-for-bit on their
/// layouts exactly when they agree on seed, size and layer vector, and that
/// only holds if the seed derivation never changes. Once filters built with
/// these constants exist, you are stuck with them.
pub(crate) const SEED_GEN_A: u64 = 845897321;

/// Increment for deriving the second base seed from the filter seed.
///
/// See [`SEED_GEN_A`]. The increment keeps the two base seeds distinct even
/// for `seed = 0`.
pub(crate) const SEED_GEN_B: u64 = 217728422;

/// Hashes the little-endian bytes of `value` with the given seed.
#[inline]
pub(crate) fn hash64_with_seed(value: u64, seed: u64) -> u64 {
    use std::hash::Hasher;

    let mut hasher = XxHash64::with_seed(seed);
    hasher.write(&value.to_le_bytes());
    hasher.finish()
}
