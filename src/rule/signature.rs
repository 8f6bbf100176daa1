use crate::combinatorics::{fixed_weight_bitstrings, FixedWeightBitstrings};

/// One concrete 0/1 assignment over an ordered control list.
///
/// Position 0 is the most significant bit of the underlying value and
/// corresponds to the first control; realizing the assignment means
/// bit-flipping every control whose position reads `0` around an
/// all-ones-controlled gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    value: u32,
    length: u32,
}

impl Signature {
    pub fn new(value: u32, length: u32) -> Self {
        debug_assert!(length == 32 || value < 1u32 << length);
        Self { value, length }
    }

    pub fn len(&self) -> usize {
        self.length as usize
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether the control at `position` is required to be in state 1
    pub fn is_one(&self, position: usize) -> bool {
        debug_assert!(position < self.length as usize);
        let shift = self.length as usize - 1 - position;
        self.value >> shift & 1 == 1
    }

    /// Number of controls required to be 1
    pub fn weight(&self) -> u32 {
        self.value.count_ones()
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for position in 0..self.len() {
            write!(f, "{}", u8::from(self.is_one(position)))?;
        }
        Ok(())
    }
}

/// All control assignments with exactly `level` active controls, in
/// ascending numeric order.
///
/// This is the totalistic expansion: one all-ones-controlled gate per
/// signature realizes "activate when exactly `level` neighbors are
/// active", and the count is `binomial(control_count, level)` rather
/// than a full truth-table sweep.
pub fn level_signatures(level: u32, control_count: u32) -> Signatures {
    Signatures {
        inner: fixed_weight_bitstrings(control_count, level),
        length: control_count,
    }
}

/// Iterator over the signatures of one level
#[derive(Debug, Clone)]
pub struct Signatures {
    inner: FixedWeightBitstrings,
    length: u32,
}

impl Iterator for Signatures {
    type Item = Signature;

    fn next(&mut self) -> Option<Signature> {
        self.inner.next().map(|value| Signature::new(value, self.length))
    }
}

/// Controls that must be conjugated with Pauli-X for this signature.
///
/// Flipping exactly the zero-valued controls before and after an
/// all-ones-controlled gate turns it into a gate controlled on the
/// signature pattern, restoring every flipped control afterwards.
pub fn flip_targets(signature: &Signature, controls: &[usize]) -> Vec<usize> {
    debug_assert_eq!(signature.len(), controls.len());
    controls
        .iter()
        .enumerate()
        .filter(|&(position, _)| !signature.is_one(position))
        .map(|(_, &qubit)| qubit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinatorics::binomial;

    #[test]
    fn test_signature_positions_msb_first() {
        let signature = Signature::new(0b10, 2);
        assert!(signature.is_one(0));
        assert!(!signature.is_one(1));
        assert_eq!(signature.to_string(), "10");
    }

    #[test]
    fn test_level_signatures_weight_one() {
        let signatures: Vec<String> = level_signatures(1, 2).map(|s| s.to_string()).collect();
        assert_eq!(signatures, vec!["01", "10"]);
    }

    #[test]
    fn test_level_signatures_count() {
        for control_count in 0..8 {
            for level in 0..=control_count {
                let count = level_signatures(level, control_count).count() as u64;
                assert_eq!(count, binomial(control_count, level));
            }
        }
    }

    #[test]
    fn test_level_exceeding_controls_is_empty() {
        assert_eq!(level_signatures(3, 2).count(), 0);
    }

    #[test]
    fn test_flip_targets_complement_signature() {
        let controls = [0, 2];
        let flips: Vec<Vec<usize>> = level_signatures(1, 2)
            .map(|s| flip_targets(&s, &controls))
            .collect();
        // "01" keeps control 2, flips control 0; "10" flips control 2
        assert_eq!(flips, vec![vec![0], vec![2]]);
    }

    #[test]
    fn test_flip_targets_all_ones_signature() {
        let controls = [4, 5, 6];
        let signature = Signature::new(0b111, 3);
        assert!(flip_targets(&signature, &controls).is_empty());
    }

    #[test]
    fn test_flip_targets_all_zeros_signature() {
        let controls = [4, 5, 6];
        let signature = Signature::new(0, 3);
        assert_eq!(flip_targets(&signature, &controls), vec![4, 5, 6]);
    }
}
