use crate::error::GenError;
use crate::generators::models::{GeneratedValue, GeneratorType};
use crate::generators::network::IpFormat;
use crate::generators::{
    ascii, gen_string, identifier, markup, network, numeric, time, unicode,
};
use crate::sampler::Sampler;
use crate::tables::Tables;

#[cfg_attr(test, mockall::automock)]
pub trait ValueGenerator: Send + Sync {
    fn generate(&self, sampler: &mut Sampler, tables: &Tables) -> Result<GeneratedValue, GenError>;
}

impl ValueGenerator for GeneratorType {
    fn generate(&self, sampler: &mut Sampler, tables: &Tables) -> Result<GeneratedValue, GenError> {
        self.check_size()?;
        let value: GeneratedValue = match self {
            Self::Alpha { length } => ascii::gen_alpha(sampler, *length)?.into(),
            Self::Alphanumeric { length } => ascii::gen_alphanumeric(sampler, *length)?.into(),
            Self::Numeric { length } => ascii::gen_numeric_string(sampler, *length)?.into(),
            Self::Punctuation { length } => ascii::gen_punctuation(sampler, *length)?.into(),
            Self::Cjk { length } => unicode::gen_cjk(sampler, *length)?.into(),
            Self::Cyrillic { length } => unicode::gen_cyrillic(sampler, *length)?.into(),
            Self::Latin1 { length } => unicode::gen_latin1(sampler, *length)?.into(),
            Self::Utf8 { length } => unicode::gen_utf8(sampler, *length)?.into(),
            Self::Text { kind, length } => gen_string(sampler, tables, *kind, *length)?.into(),
            Self::Bool => numeric::gen_bool(sampler)?.into(),
            Self::Integer { min, max } => numeric::gen_integer(sampler, *min, *max)?.into(),
            Self::Email { name, domain, tld } => network::gen_email(
                sampler,
                tables,
                name.as_deref(),
                domain.as_deref(),
                tld.as_deref(),
            )?
            .into(),
            Self::Url { extended } => network::gen_url(sampler, tables, *extended)?.into(),
            Self::Ipaddr {
                three_octet,
                ipv6,
                prefix,
            } => network::gen_ipaddr(sampler, IpFormat::from_flags(*three_octet, *ipv6), prefix)?
                .into(),
            Self::Mac { delimiter } => network::gen_mac(sampler, delimiter)?.into(),
            Self::Netmask { min_cidr, max_cidr } => {
                network::gen_netmask(sampler, tables, *min_cidr, *max_cidr)?.into()
            }
            Self::Uuid { valid } => identifier::gen_uuid(sampler, *valid)?.into(),
            Self::Html { length } => markup::gen_html(sampler, tables, *length)?.into(),
            Self::Ipsum { words, paragraphs } => markup::gen_ipsum(tables, *words, *paragraphs)?.into(),
            Self::Time => time::gen_time(sampler)?.into(),
        };
        Ok(value)
    }
}
