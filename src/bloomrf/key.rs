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

/// A fixed-width numeric key type accepted by the filter.
///
/// Implementations provide an order-preserving embedding of the key domain
/// into the low [`DOMAIN_BITS`](Self::DOMAIN_BITS) bits of a `u64`: for any
/// two keys, `x < y` implies `x.to_bits() < y.to_bits()`. The unsigned core
/// operates entirely on the embedded value, so signed and floating-point
/// keys need no storage changes of their own.
///
/// - Unsigned integers embed as themselves.
/// - Signed integers flip the sign bit, which shifts the domain so that
///   `MIN` maps to zero.
/// - Floats use the total-order bit trick: negative values have all
///   non-sign bits flipped, then the sign bit is flipped. The result orders
///   `-inf < … < -0.0 < +0.0 < … < +inf`, matching `total_cmp`. NaN is not
///   a supported key; its bit pattern maps outside the ordered range and is
///   treated as an ordinary opaque value.
pub trait FilterKey: Copy {
    /// Width of the key domain in bits.
    const DOMAIN_BITS: u32;

    /// The order-preserving embedding into `[0, 2^DOMAIN_BITS)`.
    fn to_bits(self) -> u64;
}

impl FilterKey for u64 {
    const DOMAIN_BITS: u32 = 64;

    #[inline]
    fn to_bits(self) -> u64 {
        self
    }
}

impl FilterKey for u32 {
    const DOMAIN_BITS: u32 = 32;

    #[inline]
    fn to_bits(self) -> u64 {
        u64::from(self)
    }
}

impl FilterKey for u16 {
    const DOMAIN_BITS: u32 = 16;

    #[inline]
    fn to_bits(self) -> u64 {
        u64::from(self)
    }
}

impl FilterKey for i64 {
    const DOMAIN_BITS: u32 = 64;

    #[inline]
    fn to_bits(self) -> u64 {
        (self as u64) ^ (1 << 63)
    }
}

impl FilterKey for i32 {
    const DOMAIN_BITS: u32 = 32;

    #[inline]
    fn to_bits(self) -> u64 {
        u64::from((self as u32) ^ (1 << 31))
    }
}

impl FilterKey for i16 {
    const DOMAIN_BITS: u32 = 16;

    #[inline]
    fn to_bits(self) -> u64 {
        u64::from((self as u16) ^ (1 << 15))
    }
}

impl FilterKey for f64 {
    const DOMAIN_BITS: u32 = 64;

    #[inline]
    fn to_bits(self) -> u64 {
        let bits = f64::to_bits(self) as i64;
        let bits = if bits < 0 { bits ^ i64::MAX } else { bits };
        (bits as u64) ^ (1 << 63)
    }
}

impl FilterKey for f32 {
    const DOMAIN_BITS: u32 = 32;

    #[inline]
    fn to_bits(self) -> u64 {
        let bits = f32::to_bits(self) as i32;
        let bits = if bits < 0 { bits ^ i32::MAX } else { bits };
        u64::from((bits as u32) ^ (1 << 31))
    }
}
