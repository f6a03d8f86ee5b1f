use crate::corpus::alphabetic_corpus;
use crate::error::GenError;
use crate::sampler::Sampler;
use crate::strings::{self, CodepointRange};

pub const CJK: CodepointRange = CodepointRange::new(0x4E00, 0x9FCC);
pub const CYRILLIC: CodepointRange = CodepointRange::new(0x0400, 0x04FF);

// Offsets of U+00D7 (multiplication sign) and U+00F7 (division sign).
const LATIN1_LOW: u32 = 0x00C0;
const LATIN1_GAPS: [u32; 2] = [0x00D7 - LATIN1_LOW, 0x00F7 - LATIN1_LOW];

pub fn latin1_range() -> CodepointRange {
    CodepointRange::new(LATIN1_LOW, 0x00FF).excluding(&LATIN1_GAPS)
}

pub fn gen_cjk(sampler: &mut Sampler, length: usize) -> Result<String, GenError> {
    strings::from_range(sampler, &CJK, length)
}

pub fn gen_cyrillic(sampler: &mut Sampler, length: usize) -> Result<String, GenError> {
    strings::from_range(sampler, &CYRILLIC, length)
}

pub fn gen_latin1(sampler: &mut Sampler, length: usize) -> Result<String, GenError> {
    strings::from_range(sampler, &latin1_range(), length)
}

/// Draws from every alphabetic codepoint Unicode knows about.
pub fn gen_utf8(sampler: &mut Sampler, length: usize) -> Result<String, GenError> {
    strings::from_symbols(sampler, alphabetic_corpus(), length)
}
