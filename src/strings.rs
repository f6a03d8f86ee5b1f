use crate::error::GenError;
use crate::sampler::Sampler;

/// An inclusive codepoint range with offsets (relative to `low`) that must
/// never be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointRange {
    pub low: u32,
    pub high: u32,
    excluded: Vec<u32>,
}

impl CodepointRange {
    pub const fn new(low: u32, high: u32) -> Self {
        Self {
            low,
            high,
            excluded: Vec::new(),
        }
    }

    pub fn excluding(mut self, offsets: &[u32]) -> Self {
        self.excluded.extend_from_slice(offsets);
        self.excluded.sort_unstable();
        self.excluded.dedup();
        self
    }

    fn validate(&self) -> Result<usize, GenError> {
        if self.high < self.low {
            return Err(GenError::invalid(format!(
                "empty codepoint range {:#06X}..={:#06X}",
                self.low, self.high
            )));
        }
        let span = (self.high - self.low) as usize + 1;
        let skipped = self.excluded.iter().filter(|&&o| (o as usize) < span).count();
        if skipped == span {
            return Err(GenError::invalid("every codepoint in the range is excluded"));
        }
        Ok(span - skipped)
    }

    // Maps the n-th allowed position to its codepoint, stepping over exclusions.
    fn nth_allowed(&self, mut n: u32) -> u32 {
        for &offset in &self.excluded {
            if offset <= n {
                n += 1;
            } else {
                break;
            }
        }
        self.low + n
    }
}

fn check_length(length: usize) -> Result<(), GenError> {
    if length == 0 {
        return Err(GenError::invalid("length must be greater than zero"));
    }
    Ok(())
}

/// Concatenates `length` independent draws from `symbols`.
pub fn from_symbols<T: ToString>(
    sampler: &mut Sampler,
    symbols: &[T],
    length: usize,
) -> Result<String, GenError> {
    check_length(length)?;
    (0..length)
        .map(|_| sampler.choice(symbols).map(ToString::to_string))
        .collect()
}

/// Concatenates `length` codepoints drawn uniformly from the allowed part of `range`.
pub fn from_range(
    sampler: &mut Sampler,
    range: &CodepointRange,
    length: usize,
) -> Result<String, GenError> {
    check_length(length)?;
    let allowed = range.validate()?;
    (0..length)
        .map(|_| {
            let n = sampler.index(allowed)? as u32;
            let point = range.nth_allowed(n);
            char::from_u32(point).ok_or_else(|| {
                GenError::invalid(format!("{point:#06X} is not a Unicode scalar value"))
            })
        })
        .collect()
}
