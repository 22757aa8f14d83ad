/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use num_traits::Zero;

/// Errors raised when moving vectors between the external and the compact
/// id space.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdMapError {
    #[error("The vector has {actual} entries, but the external id space has {expected} ids")]
    ExternalLength { expected: usize, actual: usize },
    #[error("The vector has {actual} entries, but the graph has {expected} nodes")]
    CompactLength { expected: usize, actual: usize },
}

/// A map between external node ids, which may have gaps, and the compact ids
/// `0..n` used by graphs.
///
/// Compact id *i* corresponds to the *i*-th smallest external id. Vectors
/// indexed by external id have length equal to the [span](IdMap::span), that
/// is, one plus the largest external id; entries at ids that are not nodes
/// are ignored by [`compress`](IdMap::compress) and set to zero by
/// [`decompress`](IdMap::decompress).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdMap {
    ids: Box<[usize]>,
}

impl IdMap {
    /// Creates a map from the external ids of the nodes, in compact-id
    /// order.
    ///
    /// # Panics
    ///
    /// Panics if the ids are not strictly increasing.
    pub fn new(ids: Box<[usize]>) -> Self {
        assert!(
            ids.windows(2).all(|w| w[0] < w[1]),
            "External ids must be strictly increasing"
        );
        Self { ids }
    }

    /// Creates a map assigning external ids `offset..offset + n` to the
    /// nodes (e.g., one-based ids).
    pub fn shifted(n: usize, offset: usize) -> Self {
        Self {
            ids: (offset..offset + n).collect(),
        }
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.ids.len()
    }

    /// Returns one plus the largest external id, or zero if there are no
    /// nodes.
    pub fn span(&self) -> usize {
        self.ids.last().map_or(0, |&id| id + 1)
    }

    /// Returns the external id of a node.
    pub fn external(&self, node: usize) -> usize {
        self.ids[node]
    }

    /// Returns the node with the given external id, if any.
    pub fn compact(&self, id: usize) -> Option<usize> {
        self.ids.binary_search(&id).ok()
    }

    /// Moves a vector indexed by external id to the compact id space.
    pub fn compress<T: Copy>(&self, values: &[T]) -> Result<Vec<T>, IdMapError> {
        if values.len() != self.span() {
            return Err(IdMapError::ExternalLength {
                expected: self.span(),
                actual: values.len(),
            });
        }
        Ok(self.ids.iter().map(|&id| values[id]).collect())
    }

    /// Moves a vector indexed by node to the external id space.
    pub fn decompress<T: Copy + Zero>(&self, values: &[T]) -> Result<Vec<T>, IdMapError> {
        if values.len() != self.num_nodes() {
            return Err(IdMapError::CompactLength {
                expected: self.num_nodes(),
                actual: values.len(),
            });
        }
        let mut result = vec![T::zero(); self.span()];
        for (&id, &value) in self.ids.iter().zip(values) {
            result[id] = value;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_gapped_ids() {
        let map = IdMap::new(vec![1, 4, 5].into_boxed_slice());
        assert_eq!(map.span(), 6);
        assert_eq!(map.compact(4), Some(1));
        assert_eq!(map.compact(2), None);

        let compact = map.compress(&[9.0, 0.5, 9.0, 9.0, 0.25, 0.25]).unwrap();
        assert_eq!(compact, vec![0.5, 0.25, 0.25]);
        assert_eq!(
            map.decompress(&compact).unwrap(),
            vec![0.0, 0.5, 0.0, 0.0, 0.25, 0.25]
        );
    }

    #[test]
    fn test_length_mismatch() {
        let map = IdMap::shifted(3, 1);
        assert_eq!(
            map.compress(&[1.0; 3]),
            Err(IdMapError::ExternalLength {
                expected: 4,
                actual: 3
            })
        );
        assert!(map.decompress(&[1.0; 4]).is_err());
    }
}
