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

//! Dyadic decomposition of a closed key range.
//!
//! A range query walks the key space as a binary tree of aligned
//! power-of-two intervals. [`Checks`] tracks the frontier of that walk: a
//! set of disjoint, equally wide dyadic intervals whose union covers every
//! part of the query range not yet disproven. Each [`advance`](Checks::advance)
//! step halves every interval, discarding halves that fall outside the
//! query.

/// Which side of the query range an interval tracks after the first split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum IntervalLocation {
    /// The interval still contains the whole query range.
    NotYetSplit,
    /// The interval descends from the half holding the query's low bound.
    Left,
    /// The interval descends from the half holding the query's high bound.
    Right,
}

/// One dyadic interval of the frontier, as a closed range `[low, high]`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Check {
    pub low: u64,
    pub high: u64,
    pub loc: IntervalLocation,
}

/// The frontier of the dyadic walk over a query range `[lkey, hkey]`.
#[derive(Debug)]
pub(crate) struct Checks {
    lkey: u64,
    hkey: u64,
    checks: Vec<Check>,
}

impl Checks {
    /// Starts the walk with a single interval spanning the whole domain.
    pub(crate) fn over_domain(domain_bits: u32, lkey: u64, hkey: u64) -> Self {
        let domain_max = if domain_bits == 64 {
            u64::MAX
        } else {
            (1u64 << domain_bits) - 1
        };
        debug_assert!(lkey <= hkey && hkey <= domain_max);
        Checks {
            lkey,
            hkey,
            checks: vec![Check {
                low: 0,
                high: domain_max,
                loc: IntervalLocation::NotYetSplit,
            }],
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// An interval strictly overhangs the query when it extends past either
    /// bound; such intervals keep descending instead of being resolved in
    /// place.
    pub(crate) fn is_covering(&self, check: &Check) -> bool {
        check.low < self.lkey || check.high > self.hkey
    }

    /// Takes the current frontier, leaving the walk empty.
    pub(crate) fn take(&mut self) -> Vec<Check> {
        std::mem::take(&mut self.checks)
    }

    /// Replaces the frontier, e.g. after filtering a taken one.
    pub(crate) fn restore(&mut self, checks: Vec<Check>) {
        self.checks = checks;
    }

    /// Drops every interval for which `keep` returns false.
    pub(crate) fn retain(&mut self, keep: impl FnMut(&Check) -> bool) {
        self.checks.retain(keep);
    }

    /// Halves every interval of the frontier `steps` times.
    ///
    /// Splitting is right-leaning: `mid = high - (high - low) / 2`, so the
    /// upper half always starts at `mid` and the computation cannot
    /// overflow at the top of the domain. Halves that cannot intersect the
    /// query are dropped as they appear. All intervals must still be wider
    /// than one key when a step begins.
    pub(crate) fn advance(&mut self, steps: u32) {
        for _ in 0..steps {
            self.advance_once();
        }
    }

    fn advance_once(&mut self) {
        let mut next = Vec::with_capacity(self.checks.len() + 2);
        for &check in &self.checks {
            debug_assert!(check.low < check.high);
            let mid = check.high - (check.high - check.low) / 2;
            match check.loc {
                IntervalLocation::NotYetSplit => {
                    debug_assert_eq!(self.checks.len(), 1);
                    if mid <= self.lkey {
                        // The query lies wholly in the upper half.
                        next.push(Check {
                            low: mid,
                            high: check.high,
                            loc: IntervalLocation::NotYetSplit,
                        });
                    } else if mid - 1 >= self.hkey {
                        // The query lies wholly in the lower half.
                        next.push(Check {
                            low: check.low,
                            high: mid - 1,
                            loc: IntervalLocation::NotYetSplit,
                        });
                    } else {
                        // The query straddles mid; from here on the two
                        // sides descend independently.
                        next.push(Check {
                            low: check.low,
                            high: mid - 1,
                            loc: IntervalLocation::Left,
                        });
                        next.push(Check {
                            low: mid,
                            high: check.high,
                            loc: IntervalLocation::Right,
                        });
                    }
                }
                IntervalLocation::Left => {
                    if mid > self.lkey {
                        next.push(Check {
                            low: check.low,
                            high: mid - 1,
                            loc: IntervalLocation::Left,
                        });
                    }
                    next.push(Check {
                        low: mid,
                        high: check.high,
                        loc: IntervalLocation::Left,
                    });
                }
                IntervalLocation::Right => {
                    next.push(Check {
                        low: check.low,
                        high: mid - 1,
                        loc: IntervalLocation::Right,
                    });
                    if mid <= self.hkey {
                        next.push(Check {
                            low: mid,
                            high: check.high,
                            loc: IntervalLocation::Right,
                        });
                    }
                }
            }
        }
        self.checks = next;
    }

    #[cfg(test)]
    fn checks(&self) -> &[Check] {
        &self.checks
    }
}
