use crate::error::{Error, Result};

/// Totalistic update rule, encoded as an unsigned integer over the
/// neighborhood's bit width.
///
/// Read MSB-first over `neighborhood_size` bits, bit position `i` selects
/// level `size - 1 - i`: the number of active neighbors that triggers the
/// activator on the center qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    code: u32,
    neighborhood_size: u32,
}

impl Rule {
    /// Validate and wrap a rule code; `code` must fit in
    /// `neighborhood_size` bits
    pub fn new(code: u32, neighborhood_size: u32) -> Result<Self> {
        let max = (1u64 << neighborhood_size) - 1;
        if u64::from(code) > max {
            return Err(Error::RuleOutOfRange {
                code,
                size: neighborhood_size,
                max: max as u32,
            });
        }
        Ok(Self {
            code,
            neighborhood_size,
        })
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn neighborhood_size(&self) -> u32 {
        self.neighborhood_size
    }

    /// Decode the rule into its active levels.
    ///
    /// MSB-first bit `i` set means level `size - 1 - i` is active, which
    /// collapses to: level `l` is active iff integer bit `l` of the code
    /// is set. Output is ascending and duplicate-free.
    pub fn levels(&self) -> LevelSet {
        let levels = (0..self.neighborhood_size)
            .filter(|level| self.code >> level & 1 == 1)
            .collect();
        LevelSet { levels }
    }
}

/// Sorted set of neighbor-activity counts that trigger the activator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSet {
    levels: Vec<u32>,
}

impl LevelSet {
    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_code_out_of_range() {
        assert!(matches!(
            Rule::new(32, 5),
            Err(Error::RuleOutOfRange {
                code: 32,
                size: 5,
                max: 31
            })
        ));
        assert!(Rule::new(31, 5).is_ok());
    }

    #[test]
    fn test_decode_msb_first() {
        // MSB-first bits 0 and 1 set -> levels 4 and 3
        let rule = Rule::new(0b11000, 5).unwrap();
        assert_eq!(rule.levels().levels(), &[3, 4]);
    }

    #[test]
    fn test_decode_zero_rule() {
        let rule = Rule::new(0, 5).unwrap();
        assert!(rule.levels().is_empty());
    }

    #[test]
    fn test_decode_all_levels() {
        let rule = Rule::new(0b111, 3).unwrap();
        assert_eq!(rule.levels().levels(), &[0, 1, 2]);
    }

    #[test]
    fn test_decode_single_level() {
        // only the LSB set -> level 0 (no active neighbors)
        let rule = Rule::new(0b00001, 5).unwrap();
        assert_eq!(rule.levels().levels(), &[0]);

        // only the MSB set -> highest level
        let rule = Rule::new(0b10000, 5).unwrap();
        assert_eq!(rule.levels().levels(), &[4]);
    }

    #[test]
    fn test_levels_sorted_and_bounded() {
        for code in 0..32 {
            let rule = Rule::new(code, 5).unwrap();
            let set = rule.levels();
            assert!(set.len() <= 5);
            for pair in set.levels().windows(2) {
                assert!(pair[0] < pair[1]);
            }
            for &level in set.levels() {
                assert!(level < 5);
            }
        }
    }
}
