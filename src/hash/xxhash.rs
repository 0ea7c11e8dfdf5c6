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

use std::hash::Hasher;

use byteorder::ByteOrder;
use byteorder::LE;

const PRIME_1: u64 = 0x9e3779b185ebca87;
const PRIME_2: u64 = 0xc2b2ae3d27d4eb4f;
const PRIME_3: u64 = 0x165667b19e3779f9;
const PRIME_4: u64 = 0x85ebca77c2b2ae63;
const PRIME_5: u64 = 0x27d4eb2f165667c5;

/// XXHash64 is a fast, non-cryptographic, seeded 64-bit hash function with
/// good avalanche behavior, matching the reference XXH64 bit-for-bit.
#[derive(Debug)]
pub struct XxHash64 {
    seed: u64,
    v1: u64,
    v2: u64,
    v3: u64,
    v4: u64,
    total: u64,
    buf: [u8; 32],
    buf_len: usize,
}

impl XxHash64 {
    pub fn with_seed(seed: u64) -> Self {
        XxHash64 {
            seed,
            v1: seed.wrapping_add(PRIME_1).wrapping_add(PRIME_2),
            v2: seed.wrapping_add(PRIME_2),
            v3: seed,
            v4: seed.wrapping_sub(PRIME_1),
            total: 0,
            buf: [0; 32],
            buf_len: 0,
        }
    }

    #[inline]
    fn round(acc: u64, lane: u64) -> u64 {
        acc.wrapping_add(lane.wrapping_mul(PRIME_2))
            .rotate_left(31)
            .wrapping_mul(PRIME_1)
    }

    #[inline]
    fn merge_round(hash: u64, acc: u64) -> u64 {
        (hash ^ Self::round(0, acc))
            .wrapping_mul(PRIME_1)
            .wrapping_add(PRIME_4)
    }

    /// Consumes one 32-byte stripe into the four accumulators.
    #[inline]
    fn consume(&mut self, stripe: &[u8]) {
        self.v1 = Self::round(self.v1, LE::read_u64(&stripe[0..8]));
        self.v2 = Self::round(self.v2, LE::read_u64(&stripe[8..16]));
        self.v3 = Self::round(self.v3, LE::read_u64(&stripe[16..24]));
        self.v4 = Self::round(self.v4, LE::read_u64(&stripe[24..32]));
        self.total += 32;
    }
}

impl Hasher for XxHash64 {
    fn write(&mut self, mut bytes: &[u8]) {
        // Top up a partially filled buffer first.
        if self.buf_len > 0 {
            let take = bytes.len().min(32 - self.buf_len);
            self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&bytes[..take]);
            self.buf_len += take;
            bytes = &bytes[take..];

            if self.buf_len < 32 {
                return;
            }
            let stripe = self.buf;
            self.consume(&stripe);
            self.buf_len = 0;
        }

        while bytes.len() >= 32 {
            let (stripe, rest) = bytes.split_at(32);
            self.consume(stripe);
            bytes = rest;
        }

        self.buf[..bytes.len()].copy_from_slice(bytes);
        self.buf_len = bytes.len();
    }

    fn finish(&self) -> u64 {
        let total = self.total + self.buf_len as u64;

        let mut hash = if self.total >= 32 {
            let mut h = self
                .v1
                .rotate_left(1)
                .wrapping_add(self.v2.rotate_left(7))
                .wrapping_add(self.v3.rotate_left(12))
                .wrapping_add(self.v4.rotate_left(18));
            h = Self::merge_round(h, self.v1);
            h = Self::merge_round(h, self.v2);
            h = Self::merge_round(h, self.v3);
            h = Self::merge_round(h, self.v4);
            h
        } else {
            self.seed.wrapping_add(PRIME_5)
        };

        hash = hash.wrapping_add(total);

        // tail
        let mut rem = &self.buf[..self.buf_len];
        while rem.len() >= 8 {
            let k1 = Self::round(0, LE::read_u64(&rem[..8]));
            hash = (hash ^ k1)
                .rotate_left(27)
                .wrapping_mul(PRIME_1)
                .wrapping_add(PRIME_4);
            rem = &rem[8..];
        }
        if rem.len() >= 4 {
            let k1 = u64::from(LE::read_u32(&rem[..4])).wrapping_mul(PRIME_1);
            hash = (hash ^ k1)
                .rotate_left(23)
                .wrapping_mul(PRIME_2)
                .wrapping_add(PRIME_3);
            rem = &rem[4..];
        }
        for &byte in rem {
            let k1 = u64::from(byte).wrapping_mul(PRIME_5);
            hash = (hash ^ k1).rotate_left(11).wrapping_mul(PRIME_1);
        }

        // avalanche
        hash ^= hash >> 33;
        hash = hash.wrapping_mul(PRIME_2);
        hash ^= hash >> 29;
        hash = hash.wrapping_mul(PRIME_3);
        hash ^= hash >> 32;
        hash
    }
}
