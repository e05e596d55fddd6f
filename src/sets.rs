//! Set-membership semantics of a three-set Venn diagram.
//!
//! Every element of `A ∪ B ∪ C` falls into exactly one of seven disjoint
//! regions, identified by which of the three sets contain it. Region ids use
//! the usual three-bit notation: `"100"` is "in the first set only", `"111"`
//! is "in all three".

use std::collections::BTreeSet;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

/// One of the seven regions of a three-set Venn diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    OnlyFirst,
    OnlySecond,
    OnlyThird,
    FirstSecond,
    FirstThird,
    SecondThird,
    All,
}

impl Region {
    /// All regions in a fixed order: singles, pairs, then the triple.
    pub const ALL: [Region; 7] = [
        Region::OnlyFirst,
        Region::OnlySecond,
        Region::OnlyThird,
        Region::FirstSecond,
        Region::FirstThird,
        Region::SecondThird,
        Region::All,
    ];

    /// Region for a membership pattern, or `None` for "in no set".
    pub fn of(in_first: bool, in_second: bool, in_third: bool) -> Option<Region> {
        match (in_first, in_second, in_third) {
            (true, false, false) => Some(Region::OnlyFirst),
            (false, true, false) => Some(Region::OnlySecond),
            (false, false, true) => Some(Region::OnlyThird),
            (true, true, false) => Some(Region::FirstSecond),
            (true, false, true) => Some(Region::FirstThird),
            (false, true, true) => Some(Region::SecondThird),
            (true, true, true) => Some(Region::All),
            (false, false, false) => None,
        }
    }

    /// Which sets (by position) contain this region.
    pub fn members(self) -> [bool; 3] {
        match self {
            Region::OnlyFirst => [true, false, false],
            Region::OnlySecond => [false, true, false],
            Region::OnlyThird => [false, false, true],
            Region::FirstSecond => [true, true, false],
            Region::FirstThird => [true, false, true],
            Region::SecondThird => [false, true, true],
            Region::All => [true, true, true],
        }
    }

    /// Three-bit id such as `"101"`.
    pub fn id(self) -> &'static str {
        match self {
            Region::OnlyFirst => "100",
            Region::OnlySecond => "010",
            Region::OnlyThird => "001",
            Region::FirstSecond => "110",
            Region::FirstThird => "101",
            Region::SecondThird => "011",
            Region::All => "111",
        }
    }

    fn index(self) -> usize {
        match self {
            Region::OnlyFirst => 0,
            Region::OnlySecond => 1,
            Region::OnlyThird => 2,
            Region::FirstSecond => 3,
            Region::FirstThird => 4,
            Region::SecondThird => 5,
            Region::All => 6,
        }
    }
}

/// The three input sets, in positional order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VennSets {
    sets: [BTreeSet<String>; 3],
}

impl VennSets {
    pub fn new(first: BTreeSet<String>, second: BTreeSet<String>, third: BTreeSet<String>) -> Self {
        Self {
            sets: [first, second, third],
        }
    }

    /// Build from element lists; duplicates collapse.
    pub fn from_lists<S: AsRef<str>>(first: &[S], second: &[S], third: &[S]) -> Self {
        fn collect<S: AsRef<str>>(items: &[S]) -> BTreeSet<String> {
            items.iter().map(|s| s.as_ref().to_string()).collect()
        }
        Self::new(collect(first), collect(second), collect(third))
    }

    pub fn first(&self) -> &BTreeSet<String> {
        &self.sets[0]
    }

    pub fn second(&self) -> &BTreeSet<String> {
        &self.sets[1]
    }

    pub fn third(&self) -> &BTreeSet<String> {
        &self.sets[2]
    }

    pub fn as_array(&self) -> &[BTreeSet<String>; 3] {
        &self.sets
    }

    /// Partition the union of the three sets into the seven regions.
    pub fn regions(&self) -> Regions {
        let mut regions = Regions::default();
        for element in self.sets.iter().flatten() {
            let membership = (
                self.sets[0].contains(element),
                self.sets[1].contains(element),
                self.sets[2].contains(element),
            );
            // Every element came from one of the sets, so the pattern is never 000.
            if let Some(region) = Region::of(membership.0, membership.1, membership.2) {
                regions.slots[region.index()].insert(element.clone());
            }
        }
        regions
    }
}

/// Elements per region. Always holds all seven regions, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Regions {
    slots: [BTreeSet<String>; 7],
}

impl Regions {
    pub fn get(&self, region: Region) -> &BTreeSet<String> {
        &self.slots[region.index()]
    }

    pub fn count(&self, region: Region) -> usize {
        self.get(region).len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Region, &BTreeSet<String>)> + '_ {
        Region::ALL.iter().map(move |&r| (r, self.get(r)))
    }

    /// Union of all regions, equal to the union of the input sets.
    pub fn union(&self) -> BTreeSet<String> {
        self.slots.iter().flatten().cloned().collect()
    }

    /// Hex SHA-256 over a canonical encoding of the membership.
    ///
    /// Equal inputs always give equal digests, independent of element
    /// insertion order.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        for (region, elements) in self.iter() {
            hasher.update(region.id().as_bytes());
            hasher.update([b':']);
            for element in elements {
                hasher.update((element.len() as u64).to_le_bytes());
                hasher.update(element.as_bytes());
            }
            hasher.update([b';']);
        }
        hex::encode(hasher.finalize())
    }
}

impl Serialize for Regions {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Region::ALL.len()))?;
        for (region, elements) in self.iter() {
            map.serialize_entry(region.id(), elements)?;
        }
        map.end()
    }
}
