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
use bloomrf::FilterKey;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

#[test]
fn test_zero_key_range_query() {
    let mut filter = BloomRf::<f32>::builder(16_000)
        .seed(0)
        .layers(&[7, 6, 6, 4, 3])
        .build()
        .unwrap();
    filter.add(0.0);
    assert!(filter.overlaps(-1.0, 1.0));
    assert!(filter.overlaps(-0.0001, 0.0001));
}

#[test]
fn test_no_false_negatives_point_query() {
    let mut rng = StdRng::seed_from_u64(0xF10A);
    let mut filter = BloomRf::<f64>::builder(16_000).build().unwrap();
    let keys: Vec<f64> = (0..10_000)
        .map(|_| rng.gen_range(-1.0e9..1.0e9))
        .collect();
    for &key in &keys {
        filter.add(key);
    }
    for &key in &keys {
        assert!(filter.contains(key));
    }
}

#[test]
fn test_no_false_negatives_small_range_query() {
    let mut rng = StdRng::seed_from_u64(0xF10B);
    let mut filter = BloomRf::<f64>::builder(16_000).build().unwrap();
    let keys: Vec<f64> = (0..10_000)
        .map(|_| rng.gen_range(1.0e-3..1.0e6))
        .collect();
    for &key in &keys {
        filter.add(key);
    }
    for &key in &keys {
        let low = key - rng.gen_range(0.001..0.01);
        let high = key + rng.gen_range(0.001..0.01);
        assert!(
            filter.overlaps(low, high),
            "failed lookup of [{low}, {high}] with key {key}",
        );
    }
}

#[test]
fn test_no_false_negatives_large_range_query() {
    let mut rng = StdRng::seed_from_u64(0xF10C);
    let mut filter = BloomRf::<f64>::builder(16_000).build().unwrap();
    let keys: Vec<f64> = (0..10_000)
        .map(|_| rng.gen_range(1.0e-3..1.0e6))
        .collect();
    for &key in &keys {
        filter.add(key);
    }
    for &key in &keys {
        assert!(
            filter.overlaps(key - 1.0, key + 1.0),
            "failed lookup around key {key}",
        );
    }
}

#[test]
fn test_single_precision_sweep() {
    let mut rng = StdRng::seed_from_u64(0xF10D);
    let mut filter = BloomRf::<f32>::builder(16_000)
        .seed(0)
        .layers(&[7, 6, 6, 4, 3])
        .build()
        .unwrap();
    let keys: Vec<f32> = (0..10_000)
        .map(|_| rng.gen_range(-1.0e6..1.0e6))
        .collect();
    for &key in &keys {
        filter.add(key);
    }
    for &key in &keys {
        assert!(filter.contains(key));
        assert!(filter.overlaps(key - 0.5, key + 0.5));
    }
}

#[test]
fn test_negative_keys_and_ranges_across_zero() {
    let mut filter = BloomRf::<f64>::builder(16_000).build().unwrap();
    filter.add(-2.5);
    filter.add(2.5);
    assert!(filter.contains(-2.5));
    assert!(filter.overlaps(-3.0, -2.0));
    assert!(filter.overlaps(-3.0, 3.0));
    assert!(filter.overlaps(2.0, 3.0));
}

#[test]
fn test_boundary_values_round_trip() {
    let mut filter = BloomRf::<f64>::builder(16_000).build().unwrap();
    let boundaries = [
        f64::NEG_INFINITY,
        f64::MIN,
        -1.0,
        -f64::MIN_POSITIVE,
        -0.0,
        0.0,
        f64::MIN_POSITIVE,
        1.0,
        f64::MAX,
        f64::INFINITY,
    ];
    for &key in &boundaries {
        filter.add(key);
    }
    for &key in &boundaries {
        assert!(filter.contains(key));
        assert!(filter.overlaps(key, key));
    }
    assert!(filter.overlaps(f64::NEG_INFINITY, f64::MIN));
    assert!(filter.overlaps(-0.5, 0.5));
    assert!(filter.overlaps(f64::MAX, f64::INFINITY));
}

#[test]
fn test_embedding_orders_range_bounds() {
    // The order-preserving encoding maps float intervals to key-space
    // intervals, so any range containing an inserted key must hit even
    // when the bounds have mixed signs, zeros or infinities.
    let mut filter = BloomRf::<f64>::builder(16_000).build().unwrap();
    filter.add(0.0);
    for (low, high) in [
        (f64::NEG_INFINITY, f64::INFINITY),
        (-0.0, 0.0),
        (0.0, 0.0),
        (-1.0e-300, 1.0e-300),
        (-0.0, f64::MAX),
    ] {
        assert!(
            FilterKey::to_bits(low) <= FilterKey::to_bits(high),
            "bounds must stay ordered after encoding",
        );
        assert!(filter.overlaps(low, high), "missed zero in [{low}, {high}]");
    }
}
