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

use bloomrf::BloomRf;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

fn sweep_filter(rng: &mut StdRng) -> (BloomRf<i64>, Vec<i64>) {
    let mut filter = BloomRf::<i64>::builder(16_000)
        .seed(0)
        .layers(&[7, 7, 7, 7, 7, 7])
        .build()
        .unwrap();
    let keys: Vec<i64> = (0..10_000).map(|_| rng.gen()).collect();
    for &key in &keys {
        filter.add(key);
    }
    (filter, keys)
}

#[test]
fn test_signed_round_trip() {
    let mut filter = BloomRf::<i64>::builder(16_000)
        .seed(0)
        .layers(&[7, 7, 7, 7, 7, 7])
        .build()
        .unwrap();
    filter.add(-1);
    assert!(filter.contains(-1));
    assert!(filter.overlaps(-5, 5));
    // A single distant key should not light up this range.
    assert!(!filter.overlaps(-100, -50));
}

#[test]
fn test_no_false_negatives_point_query() {
    let mut rng = StdRng::seed_from_u64(0x5161);
    let (filter, keys) = sweep_filter(&mut rng);
    for &key in &keys {
        assert!(filter.contains(key));
    }
}

#[test]
fn test_no_false_negatives_small_range_query() {
    let mut rng = StdRng::seed_from_u64(0x5162);
    let (filter, keys) = sweep_filter(&mut rng);
    for &key in &keys {
        let low = key.saturating_sub(rng.gen_range(0..10));
        let high = key.saturating_add(rng.gen_range(0..10));
        assert!(
            filter.overlaps(low, high),
            "failed lookup of [{low}, {high}] with key {key}",
        );
    }
}

#[test]
fn test_no_false_negatives_large_range_query() {
    let mut rng = StdRng::seed_from_u64(0x5163);
    let (filter, keys) = sweep_filter(&mut rng);
    for &key in &keys {
        let low = key.saturating_sub(rng.gen_range(0..10_000));
        let high = key.saturating_add(rng.gen_range(0..10_000));
        assert!(
            filter.overlaps(low, high),
            "failed lookup of [{low}, {high}] with key {key}",
        );
    }
}

#[test]
fn test_no_false_negatives_extra_large_range_query() {
    let mut rng = StdRng::seed_from_u64(0x5164);
    let (filter, keys) = sweep_filter(&mut rng);
    for &key in &keys {
        let low = key.saturating_sub(rng.gen_range(0..100_000));
        let high = key.saturating_add(rng.gen_range(0..100_000));
        assert!(
            filter.overlaps(low, high),
            "failed lookup of [{low}, {high}] with key {key}",
        );
    }
}

#[test]
fn test_ranges_across_zero() {
    let mut filter = BloomRf::<i64>::builder(16_000).build().unwrap();
    for key in -64..=64i64 {
        filter.add(key);
    }
    for key in -64..=64i64 {
        assert!(filter.contains(key));
        assert!(filter.overlaps(key - 1, key + 1));
    }
    assert!(filter.overlaps(-1, 0));
    assert!(filter.overlaps(i64::MIN, -64));
    assert!(filter.overlaps(64, i64::MAX - (1 << 48)));
}

#[test]
fn test_signed_extremes() {
    let mut filter = BloomRf::<i64>::builder(16_000).build().unwrap();
    filter.add(i64::MIN);
    filter.add(i64::MAX);
    assert!(filter.contains(i64::MIN));
    assert!(filter.contains(i64::MAX));
    assert!(filter.overlaps(i64::MIN, i64::MIN));
    assert!(filter.overlaps(i64::MIN, i64::MIN + 100));
    assert!(filter.overlaps(i64::MAX - 100, i64::MAX));
}

#[test]
fn test_narrow_signed_keys() {
    let mut filter = BloomRf::<i16>::builder(2_000).build().unwrap();
    let mut rng = StdRng::seed_from_u64(0x5165);
    let keys: Vec<i16> = (0..2_000).map(|_| rng.gen()).collect();
    for &key in &keys {
        filter.add(key);
    }
    for &key in &keys {
        assert!(filter.contains(key));
        assert!(filter.overlaps(key.saturating_sub(2), key.saturating_add(2)));
    }
}
