use crate::error::GenError;
use crate::sampler::Sampler;
use crate::strings;

const HEX: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];
const VERSION_NIBBLES: [char; 5] = ['1', '2', '3', '4', '5'];
const VARIANT_NIBBLES: [char; 4] = ['8', '9', 'a', 'b'];

fn hex(sampler: &mut Sampler, length: usize) -> Result<String, GenError> {
    strings::from_symbols(sampler, &HEX, length)
}

fn led_by(sampler: &mut Sampler, leaders: &[char], length: usize) -> Result<String, GenError> {
    let mut group = String::with_capacity(length);
    group.push(*sampler.choice(leaders)?);
    group.push_str(&hex(sampler, length - 1)?);
    Ok(group)
}

/// Hyphenated 8-4-4-4-12 hex. With `valid`, the version and variant nibbles
/// hold values a UUID parser would accept.
pub fn gen_uuid(sampler: &mut Sampler, valid: bool) -> Result<String, GenError> {
    let time_low = hex(sampler, 8)?;
    let time_mid = hex(sampler, 4)?;
    let (version, variant) = if valid {
        (
            led_by(sampler, &VERSION_NIBBLES, 4)?,
            led_by(sampler, &VARIANT_NIBBLES, 4)?,
        )
    } else {
        (hex(sampler, 4)?, hex(sampler, 4)?)
    };
    let node = hex(sampler, 12)?;
    Ok([time_low, time_mid, version, variant, node].join("-"))
}
