pub mod ascii;
pub mod identifier;
pub mod markup;
pub mod models;
pub mod network;
pub mod numeric;
pub mod time;
pub mod traits;
pub mod unicode;

pub use ascii::{gen_alpha, gen_alphanumeric, gen_numeric_string, gen_punctuation};
pub use identifier::gen_uuid;
pub use markup::{gen_html, gen_ipsum};
pub use models::{GenerateRequest, GeneratedValue, GeneratorType, StringKind};
pub use network::{gen_email, gen_ipaddr, gen_mac, gen_netmask, gen_url, IpFormat, IpPrefix};
pub use numeric::{gen_bool, gen_integer, gen_negative_integer, gen_positive_integer};
pub use time::{gen_time, TimeRecord};
pub use traits::ValueGenerator;
pub use unicode::{gen_cjk, gen_cyrillic, gen_latin1, gen_utf8};

#[cfg(test)]
pub use traits::MockValueGenerator;

use crate::error::GenError;
use crate::sampler::Sampler;
use crate::tables::Tables;

/// Fixed-length string of the requested kind. `Html` wraps an alphabetic
/// payload of `length` characters in a tag.
pub fn gen_string(
    sampler: &mut Sampler,
    tables: &Tables,
    kind: StringKind,
    length: usize,
) -> Result<String, GenError> {
    match kind {
        StringKind::Alpha => gen_alpha(sampler, length),
        StringKind::Alphanumeric => gen_alphanumeric(sampler, length),
        StringKind::Cjk => gen_cjk(sampler, length),
        StringKind::Cyrillic => gen_cyrillic(sampler, length),
        StringKind::Html => gen_html(sampler, tables, length),
        StringKind::Latin1 => gen_latin1(sampler, length),
        StringKind::Numeric => gen_numeric_string(sampler, length),
        StringKind::Punctuation => gen_punctuation(sampler, length),
        StringKind::Utf8 => gen_utf8(sampler, length),
    }
}
