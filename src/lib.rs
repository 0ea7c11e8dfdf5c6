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

//! A BloomRF range filter: probabilistic point and range membership
//! queries over ordered numeric keys, with no false negatives.
//!
//! See the [`bloomrf`] module for the full story; the main types are
//! re-exported at the crate root.
//!
//! ```rust
//! use bloomrf::BloomRf;
//!
//! let mut filter = BloomRf::<u64>::builder(16_000).build().unwrap();
//! filter.add(42);
//! assert!(filter.contains(42));
//! assert!(filter.overlaps(40, 45));
//! assert!(!filter.contains(43)); // false (with high probability)
//! ```

pub mod bloomrf;
pub mod error;

mod hash;

pub use crate::bloomrf::BloomRf;
pub use crate::bloomrf::BloomRfBuilder;
pub use crate::bloomrf::Cell;
pub use crate::bloomrf::ConcurrentCell;
pub use crate::bloomrf::FilterKey;
pub use crate::bloomrf::Word;
pub use crate::error::Error;
pub use crate::error::ErrorKind;
