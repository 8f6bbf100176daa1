use crate::error::{Error, Result};
use crate::lattice::Lattice;

/// Ordered neighborhood shape as signed `(row, col)` offsets from a cell.
///
/// The center offset `(0, 0)` must sit at index `size / 2`; signature bit
/// positions are tied to this enumeration order, so the order is part of
/// the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    offsets: Vec<(i32, i32)>,
}

impl Topology {
    /// Build a topology from an explicit offset list.
    ///
    /// Rejects shapes whose `size / 2` slot is not the `(0, 0)` center.
    pub fn from_offsets(offsets: Vec<(i32, i32)>) -> Result<Self> {
        if offsets.is_empty() {
            return Err(Error::EmptyTopology);
        }
        let center = offsets[offsets.len() / 2];
        if center != (0, 0) {
            return Err(Error::OffCenterTopology {
                row: center.0,
                col: center.1,
            });
        }
        Ok(Self { offsets })
    }

    /// 5-point von Neumann neighborhood: the cell plus its four
    /// axis-aligned neighbors
    pub fn von_neumann() -> Self {
        Self {
            offsets: vec![(0, -1), (0, 1), (0, 0), (-1, 0), (1, 0)],
        }
    }

    /// 3-point line neighborhood: the cell plus its two row neighbors
    pub fn line() -> Self {
        Self {
            offsets: vec![(0, -1), (0, 0), (0, 1)],
        }
    }

    /// Number of candidate sites, center included
    pub fn size(&self) -> usize {
        self.offsets.len()
    }

    /// Index of the center site within the enumeration order
    pub fn center(&self) -> usize {
        self.offsets.len() / 2
    }

    pub fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }
}

/// Per-cell neighborhood resolved to linear qubit indices.
///
/// Sites follow the topology's enumeration order. A site is `None` when
/// its offset lands outside the lattice; the center site is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    sites: Vec<Option<usize>>,
    target: usize,
}

impl Neighborhood {
    /// Resolve the neighborhood of `(row, col)`.
    ///
    /// Returns `None` when the cell itself is outside the lattice. Offsets
    /// crossing a lattice edge become `None` sites, which both prevents
    /// wraparound at the boundary and keeps every returned index inside
    /// `[0, num_cells())`.
    pub fn build(lattice: &Lattice, topology: &Topology, row: u32, col: u32) -> Option<Self> {
        lattice.linear_index(row, col)?;
        let sites: Vec<Option<usize>> = topology
            .offsets()
            .iter()
            .map(|&(dr, dc)| {
                let r = i64::from(row) + i64::from(dr);
                let c = i64::from(col) + i64::from(dc);
                if r < 0 || c < 0 {
                    return None;
                }
                lattice.linear_index(r as u32, c as u32)
            })
            .collect();
        let target = sites[topology.center()]?;
        Some(Self { sites, target })
    }

    /// All candidate sites in topology order
    pub fn sites(&self) -> &[Option<usize>] {
        &self.sites
    }

    /// The center qubit the activator acts on
    pub fn target(&self) -> usize {
        self.target
    }

    /// Valid non-center sites in topology order.
    ///
    /// These become the control qubits; their order fixes the signature
    /// bit correspondence.
    pub fn controls(&self) -> Vec<usize> {
        let center = self.sites.len() / 2;
        self.sites
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != center)
            .filter_map(|(_, site)| *site)
            .collect()
    }

    /// Count of valid sites, center included
    pub fn num_valid(&self) -> usize {
        self.sites.iter().filter(|s| s.is_some()).count()
    }
}

impl std::fmt::Display for Neighborhood {
    /// Compact site rendering for debug logs, `-` marking invalid sites
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sites: Vec<String> = self
            .sites
            .iter()
            .map(|site| match site {
                Some(index) => index.to_string(),
                None => "-".to_string(),
            })
            .collect();
        write!(f, "[{}]", sites.join(" "))
    }
}
