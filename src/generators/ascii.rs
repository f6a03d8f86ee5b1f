use crate::error::GenError;
use crate::sampler::Sampler;
use crate::strings;

pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const LETTERS_AND_DIGITS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

fn from_alphabet(
    sampler: &mut Sampler,
    alphabet: &[u8],
    length: usize,
) -> Result<String, GenError> {
    let symbols: Vec<char> = alphabet.iter().map(|&b| char::from(b)).collect();
    strings::from_symbols(sampler, &symbols, length)
}

pub fn gen_alpha(sampler: &mut Sampler, length: usize) -> Result<String, GenError> {
    from_alphabet(sampler, LETTERS, length)
}

pub fn gen_alphanumeric(sampler: &mut Sampler, length: usize) -> Result<String, GenError> {
    from_alphabet(sampler, LETTERS_AND_DIGITS, length)
}

pub fn gen_numeric_string(sampler: &mut Sampler, length: usize) -> Result<String, GenError> {
    from_alphabet(sampler, DIGITS, length)
}

pub fn gen_punctuation(sampler: &mut Sampler, length: usize) -> Result<String, GenError> {
    from_alphabet(sampler, PUNCTUATION, length)
}
