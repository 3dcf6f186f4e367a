//! Mixed-radix codec between flat indices and per-axis multi-indices.
//!
//! A product of independent discrete axes with cardinalities
//! `[r_0, r_1, …]` is exposed to an agent as a single flat range
//! `[0, r_0 · r_1 · …)`. Axis 0 varies fastest:
//!
//! ```text
//! id = i_0 + i_1·r_0 + i_2·r_0·r_1 + …
//! ```

use super::error::CodecError;

/// Product of all radices, or [`CodecError::Overflow`] if it does not fit in `usize`.
pub fn cardinality(radices: &[usize]) -> Result<usize, CodecError> {
    radices
        .iter()
        .try_fold(1usize, |acc, &r| acc.checked_mul(r))
        .ok_or(CodecError::Overflow)
}

/// Decodes a flat index into its per-axis digits.
///
/// # Errors
///
/// [`CodecError::OutOfRange`] if `id >= ∏ radices`.
pub fn index_to_multi_index(id: usize, radices: &[usize]) -> Result<Vec<usize>, CodecError> {
    let card = cardinality(radices)?;
    if id >= card {
        return Err(CodecError::OutOfRange {
            index: id as i128,
            cardinality: card,
        });
    }

    let mut rest = id;
    let digits = radices
        .iter()
        .map(|&r| {
            let digit = rest % r;
            rest /= r;
            digit
        })
        .collect();
    Ok(digits)
}

/// Encodes per-axis digits into a flat index. Inverse of [`index_to_multi_index`].
///
/// # Errors
///
/// - [`CodecError::ArityMismatch`] if `digits` and `radices` differ in length.
/// - [`CodecError::DigitOutOfRange`] if any `digits[k] >= radices[k]`.
pub fn multi_index_to_index(digits: &[usize], radices: &[usize]) -> Result<usize, CodecError> {
    if digits.len() != radices.len() {
        return Err(CodecError::ArityMismatch {
            expected: radices.len(),
            found: digits.len(),
        });
    }
    // Validates that the full product fits before accumulating.
    cardinality(radices)?;

    let mut id = 0usize;
    let mut stride = 1usize;
    for (axis, (&digit, &radix)) in digits.iter().zip(radices).enumerate() {
        if digit >= radix {
            return Err(CodecError::DigitOutOfRange { axis, digit, radix });
        }
        id += digit * stride;
        stride *= radix;
    }
    Ok(id)
}

/// Decodes a signed flat index, reporting negative values as out of range.
pub fn signed_index_to_multi_index(id: i64, radices: &[usize]) -> Result<Vec<usize>, CodecError> {
    match usize::try_from(id) {
        Ok(id) => index_to_multi_index(id, radices),
        Err(_) => Err(CodecError::OutOfRange {
            index: id as i128,
            cardinality: cardinality(radices)?,
        }),
    }
}

/// An owned radix list, validated once at construction.
///
/// Suited to action spaces whose axes are only known at runtime. Fixed
/// two-axis domains such as the RC car call the free functions with a
/// constant radix list instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedRadix {
    radices: Vec<usize>,
    cardinality: usize,
}

impl MixedRadix {
    /// Creates a codec for the given per-axis cardinalities.
    pub fn new(radices: Vec<usize>) -> Result<Self, CodecError> {
        let cardinality = cardinality(&radices)?;
        Ok(Self {
            radices,
            cardinality,
        })
    }

    /// Per-axis cardinalities.
    pub fn radices(&self) -> &[usize] {
        &self.radices
    }

    /// Number of axes.
    pub fn arity(&self) -> usize {
        self.radices.len()
    }

    /// Total number of flat indices.
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    pub fn decode(&self, id: usize) -> Result<Vec<usize>, CodecError> {
        index_to_multi_index(id, &self.radices)
    }

    pub fn encode(&self, digits: &[usize]) -> Result<usize, CodecError> {
        multi_index_to_index(digits, &self.radices)
    }

    /// Iterates all multi-indices in flat-index order.
    pub fn iter(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        (0..self.cardinality).filter_map(move |id| self.decode(id).ok())
    }
}
