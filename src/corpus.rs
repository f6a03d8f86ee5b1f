use log::debug;
use once_cell::sync::Lazy;

const MAX_SCALAR: u32 = 0x10FFFF;

// Built on first use and shared by every thread for the rest of the process.
static ALPHABETIC: Lazy<Vec<char>> = Lazy::new(|| {
    let corpus: Vec<char> = (0..=MAX_SCALAR)
        .filter_map(char::from_u32)
        .filter(|c| c.is_alphabetic())
        .collect();
    debug!("Built alphabetic corpus with {} codepoints", corpus.len());
    corpus
});

/// Every Unicode scalar value classified as alphabetic, in ascending order.
pub fn alphabetic_corpus() -> &'static [char] {
    &ALPHABETIC
}
