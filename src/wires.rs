//! Ordered, duplicate-free collections of wire indices

use crate::error::WireError;
use crate::value::{try_to_exact_integer, Value};
use ndarray::ArrayD;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::{Index, Range};
use std::slice::SliceIndex;

/// Ordered set of non-negative wire indices
///
/// Immutable once constructed. Construction rejects, in this order,
/// non-integer-like entries, negative entries and duplicates. Integer-like
/// floats such as `4.0` are stored as integers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Wires {
    labels: Vec<usize>,
}

impl Wires {
    /// Build wires from any finite sequence of integer-like values
    pub fn new<I, T>(iterable: I) -> Result<Self, WireError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let values: Vec<Value> = iterable.into_iter().map(Into::into).collect();
        Self::from_values(&values)
    }

    /// Wires holding a single index
    pub fn single(wire: usize) -> Self {
        Self { labels: vec![wire] }
    }

    fn from_values(values: &[Value]) -> Result<Self, WireError> {
        let integers = values
            .iter()
            .enumerate()
            .map(|(position, value)| {
                try_to_exact_integer(value).ok_or(WireError::NonInteger { position })
            })
            .collect::<Result<Vec<i64>, _>>()?;

        let labels = integers
            .into_iter()
            .map(|value| usize::try_from(value).map_err(|_| WireError::Negative { value }))
            .collect::<Result<Vec<usize>, _>>()?;

        Self::from_labels(labels)
    }

    fn from_labels(labels: Vec<usize>) -> Result<Self, WireError> {
        let mut seen = HashSet::with_capacity(labels.len());
        if let Some(&value) = labels.iter().find(|wire| !seen.insert(**wire)) {
            return Err(WireError::Duplicate { value });
        }

        tracing::trace!(wires = ?labels, "constructed wires");
        Ok(Self { labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Wire at `position`
    pub fn get(&self, position: usize) -> Option<usize> {
        self.labels.get(position).copied()
    }

    /// Position of `wire`, if present
    pub fn index(&self, wire: usize) -> Option<usize> {
        self.labels.iter().position(|&w| w == wire)
    }

    pub fn contains(&self, wire: usize) -> bool {
        self.labels.contains(&wire)
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, usize>> {
        self.labels.iter().copied()
    }

    pub fn min(&self) -> Option<usize> {
        self.labels.iter().copied().min()
    }

    pub fn max(&self) -> Option<usize> {
        self.labels.iter().copied().max()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.labels
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.labels.clone()
    }

    /// Wires at the given positions, in the order the positions are listed
    pub fn subset(&self, positions: &[usize]) -> Result<Self, WireError> {
        let labels = positions
            .iter()
            .map(|&position| {
                self.get(position).ok_or(WireError::OutOfRange {
                    position,
                    len: self.len(),
                })
            })
            .collect::<Result<Vec<usize>, _>>()?;
        Self::from_labels(labels)
    }

    /// Union of all wires, in order of first appearance
    pub fn all_wires(list: &[Wires]) -> Self {
        let mut seen = HashSet::new();
        let labels = list
            .iter()
            .flat_map(Wires::iter)
            .filter(|wire| seen.insert(*wire))
            .collect();
        Self { labels }
    }

    /// Wires present in every collection, ordered as in the first
    pub fn shared_wires(list: &[Wires]) -> Self {
        let Some((first, rest)) = list.split_first() else {
            return Self::default();
        };
        let labels = first
            .iter()
            .filter(|&wire| rest.iter().all(|other| other.contains(wire)))
            .collect();
        Self { labels }
    }

    /// Wires present in exactly one collection, in order of appearance
    pub fn unique_wires(list: &[Wires]) -> Self {
        let labels = Self::all_wires(list)
            .iter()
            .filter(|&wire| list.iter().filter(|w| w.contains(wire)).count() == 1)
            .collect();
        Self { labels }
    }
}

impl fmt::Display for Wires {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Wires = {:?}>", self.labels)
    }
}

impl<I: SliceIndex<[usize]>> Index<I> for Wires {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.labels[index]
    }
}

impl<'a> IntoIterator for &'a Wires {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Wires {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.into_iter()
    }
}

impl PartialEq<[usize]> for Wires {
    fn eq(&self, other: &[usize]) -> bool {
        self.labels.as_slice() == other
    }
}

impl<const N: usize> PartialEq<[usize; N]> for Wires {
    fn eq(&self, other: &[usize; N]) -> bool {
        self.labels.as_slice() == other.as_slice()
    }
}

impl PartialEq<Vec<usize>> for Wires {
    fn eq(&self, other: &Vec<usize>) -> bool {
        &self.labels == other
    }
}

impl From<usize> for Wires {
    fn from(wire: usize) -> Self {
        Self::single(wire)
    }
}

impl From<Range<usize>> for Wires {
    fn from(range: Range<usize>) -> Self {
        Self {
            labels: range.collect(),
        }
    }
}

impl TryFrom<Vec<i64>> for Wires {
    type Error = WireError;

    fn try_from(values: Vec<i64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<Vec<usize>> for Wires {
    type Error = WireError;

    fn try_from(values: Vec<usize>) -> Result<Self, Self::Error> {
        Self::from_labels(values)
    }
}

impl TryFrom<&[f64]> for Wires {
    type Error = WireError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::new(values.iter().copied())
    }
}

impl TryFrom<&ArrayD<f64>> for Wires {
    type Error = WireError;

    fn try_from(array: &ArrayD<f64>) -> Result<Self, Self::Error> {
        // Rows of a higher-rank array are not integer-like
        if array.ndim() != 1 {
            return Err(WireError::NonInteger { position: 0 });
        }
        Self::new(array.iter().copied())
    }
}

/// A scalar becomes a single wire; lists and 1-D arrays are taken element-wise
impl TryFrom<Value> for Wires {
    type Error = WireError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(items) => Self::from_values(&items),
            Value::Array(array) => Self::try_from(&array),
            scalar => Self::from_values(std::slice::from_ref(&scalar)),
        }
    }
}

impl<'de> Deserialize<'de> for Wires {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Self::try_from(Value::from(raw)).map_err(serde::de::Error::custom)
    }
}
