use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::GenError;
use crate::generators::ascii::gen_alpha;
use crate::sampler::Sampler;
use crate::tables::Tables;

const EMAIL_NAME_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpFormat {
    V4,
    /// Three random octets followed by a literal `.0`.
    V4ThreeOctet,
    V6,
}

impl IpFormat {
    /// IPv6 takes precedence when both flags are set.
    pub fn from_flags(three_octet: bool, ipv6: bool) -> Self {
        match (three_octet, ipv6) {
            (_, true) => Self::V6,
            (true, false) => Self::V4ThreeOctet,
            (false, false) => Self::V4,
        }
    }

    fn field_count(self) -> usize {
        match self {
            Self::V4 => 4,
            Self::V4ThreeOctet => 3,
            Self::V6 => 8,
        }
    }

    fn separator(self) -> &'static str {
        match self {
            Self::V6 => ":",
            _ => ".",
        }
    }
}

/// Leading address fields fixed by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum IpPrefix {
    /// Numeric fields, rendered in the address's own notation.
    Fields(Vec<u16>),
    /// Pre-rendered fields, copied verbatim.
    Text(Vec<String>),
}

impl Default for IpPrefix {
    fn default() -> Self {
        Self::Fields(Vec::new())
    }
}

impl IpPrefix {
    pub fn len(&self) -> usize {
        match self {
            Self::Fields(fields) => fields.len(),
            Self::Text(fields) => fields.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn render(&self, format: IpFormat) -> Result<Vec<String>, GenError> {
        match self {
            Self::Text(fields) => Ok(fields.clone()),
            Self::Fields(fields) => fields
                .iter()
                .map(|&field| match format {
                    IpFormat::V6 => Ok(format!("{field:04x}")),
                    _ if field > 255 => Err(GenError::invalid(format!(
                        "IPv4 prefix field {field} is out of range"
                    ))),
                    _ => Ok(field.to_string()),
                })
                .collect(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Builds `name@domain.tld`, filling any missing part at random.
pub fn gen_email(
    sampler: &mut Sampler,
    tables: &Tables,
    name: Option<&str>,
    domain: Option<&str>,
    tld: Option<&str>,
) -> Result<String, GenError> {
    let name = match non_empty(name) {
        Some(name) => name.to_string(),
        None => gen_alpha(sampler, EMAIL_NAME_LENGTH)?,
    };
    let domain = match non_empty(domain) {
        Some(domain) => domain,
        None => sampler.choice(&tables.subdomains)?.as_str(),
    };
    let tld = match non_empty(tld) {
        Some(tld) => tld,
        None => sampler.choice(&tables.tlds)?.as_str(),
    };
    Ok(format!("{name}@{domain}.{tld}"))
}

pub fn gen_url(sampler: &mut Sampler, tables: &Tables, extended: bool) -> Result<String, GenError> {
    let schemes = if extended {
        &tables.extended_schemes
    } else {
        &tables.schemes
    };
    let scheme = sampler.choice(schemes)?;
    let subdomain = sampler.choice(&tables.subdomains)?;
    let tld = sampler.choice(&tables.tlds)?;
    Ok(format!("{scheme}://{subdomain}.{tld}"))
}

pub fn gen_ipaddr(
    sampler: &mut Sampler,
    format: IpFormat,
    prefix: &IpPrefix,
) -> Result<String, GenError> {
    let total = format.field_count();
    let remaining = match total.checked_sub(prefix.len()) {
        Some(0) => {
            return Err(GenError::DomainConstraintViolation(format!(
                "prefix of {} fields leaves nothing random in a {total}-field address",
                prefix.len()
            )));
        }
        Some(remaining) => remaining,
        None => {
            return Err(GenError::DomainConstraintViolation(format!(
                "prefix of {} fields is longer than a {total}-field address",
                prefix.len()
            )));
        }
    };

    let mut fields = prefix.render(format)?;
    for _ in 0..remaining {
        let field = match format {
            IpFormat::V6 => format!("{:04x}", sampler.in_range(0, 0xFFFF)?),
            _ => sampler.in_range(0, 255)?.to_string(),
        };
        fields.push(field);
    }

    let mut address = fields.join(format.separator());
    if format == IpFormat::V4ThreeOctet {
        address.push_str(".0");
    }
    Ok(address)
}

pub fn gen_mac(sampler: &mut Sampler, delimiter: &str) -> Result<String, GenError> {
    if delimiter != ":" && delimiter != "-" {
        return Err(GenError::invalid(format!(
            "MAC delimiter must be ':' or '-', got '{delimiter}'"
        )));
    }
    let groups = (0..6)
        .map(|_| sampler.in_range(0, 255).map(|octet| format!("{octet:02x}")))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(groups.join(delimiter))
}

/// Picks a netmask whose table index lies in `[min_cidr, max_cidr]`.
pub fn gen_netmask(
    sampler: &mut Sampler,
    tables: &Tables,
    min_cidr: usize,
    max_cidr: usize,
) -> Result<String, GenError> {
    // The last entry (all ones) is never a valid upper bound.
    let limit = tables.netmasks.len().saturating_sub(1);
    if max_cidr >= limit {
        return Err(GenError::invalid(format!(
            "max_cidr must be below {limit}, got {max_cidr}"
        )));
    }
    if min_cidr > max_cidr {
        return Err(GenError::invalid(format!(
            "min_cidr {min_cidr} is above max_cidr {max_cidr}"
        )));
    }
    let to_bound = |cidr: usize| {
        i64::try_from(cidr).map_err(|_| GenError::invalid(format!("cidr {cidr} is out of range")))
    };
    let index = sampler.in_range(to_bound(min_cidr)?, to_bound(max_cidr)?)?;
    let index = usize::try_from(index)
        .map_err(|_| GenError::invalid(format!("netmask index {index} is out of range")))?;
    tables
        .netmasks
        .get(index)
        .cloned()
        .ok_or_else(|| GenError::invalid(format!("no netmask at index {index}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::MockRandomSource;
    use quickcheck_macros::quickcheck;

    fn octets(address: &str) -> Vec<i64> {
        address.split('.').map(|o| o.parse().unwrap()).collect()
    }

    #[test]
    fn email_fills_missing_parts() {
        let tables = Tables::default();
        let mut sampler = Sampler::from_seed(1);
        let email = gen_email(&mut sampler, &tables, None, Some(""), None).unwrap();
        let (name, host) = email.split_once('@').unwrap();
        let (domain, tld) = host.split_once('.').unwrap();
        assert_eq!(name.len(), 8);
        assert!(name.chars().all(|c| c.is_ascii_alphabetic()));
        assert!(tables.subdomains.iter().any(|s| s == domain));
        assert!(tables.tlds.iter().any(|t| t == tld));
    }

    #[test]
    fn email_keeps_given_parts() {
        let tables = Tables::default();
        let mut sampler = Sampler::from_seed(1);
        let email =
            gen_email(&mut sampler, &tables, Some("jane"), Some("corp"), Some("io")).unwrap();
        assert_eq!(email, "jane@corp.io");
    }

    #[test]
    fn url_uses_scheme_table() {
        let tables = Tables::default();
        let mut sampler = Sampler::from_seed(4);
        for extended in [false, true] {
            let url = gen_url(&mut sampler, &tables, extended).unwrap();
            let (scheme, host) = url.split_once("://").unwrap();
            let schemes = if extended {
                &tables.extended_schemes
            } else {
                &tables.schemes
            };
            assert!(schemes.iter().any(|s| s == scheme));
            assert_eq!(host.split('.').count(), 2);
        }
    }

    #[quickcheck]
    fn ipv4_prefix_is_kept(seed: u64) -> bool {
        let mut sampler = Sampler::from_seed(seed);
        let prefix = IpPrefix::Fields(vec![10, 3]);
        let address = gen_ipaddr(&mut sampler, IpFormat::V4, &prefix).unwrap();
        let fields = octets(&address);
        address.starts_with("10.3.")
            && fields.len() == 4
            && fields.iter().all(|f| (0..=255).contains(f))
    }

    #[quickcheck]
    fn three_octet_ends_with_zero(seed: u64) -> bool {
        let mut sampler = Sampler::from_seed(seed);
        let address = gen_ipaddr(&mut sampler, IpFormat::V4ThreeOctet, &IpPrefix::default()).unwrap();
        address.ends_with(".0") && octets(&address).len() == 4
    }

    #[quickcheck]
    fn ipv6_has_eight_hex_fields(seed: u64) -> bool {
        let mut sampler = Sampler::from_seed(seed);
        let address = gen_ipaddr(&mut sampler, IpFormat::V6, &IpPrefix::default()).unwrap();
        let fields: Vec<&str> = address.split(':').collect();
        fields.len() == 8
            && fields
                .iter()
                .all(|f| f.len() == 4 && f.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()))
    }

    #[test]
    fn ipv6_numeric_prefix_is_hex() {
        let mut sampler = Sampler::from_seed(2);
        let prefix = IpPrefix::Fields(vec![0xfe80]);
        let address = gen_ipaddr(&mut sampler, IpFormat::V6, &prefix).unwrap();
        assert!(address.starts_with("fe80:"));
    }

    #[test]
    fn text_prefix_is_verbatim() {
        let mut sampler = Sampler::from_seed(2);
        let prefix = IpPrefix::Text(vec!["192".into(), "168".into(), "1".into()]);
        let address = gen_ipaddr(&mut sampler, IpFormat::V4, &prefix).unwrap();
        assert!(address.starts_with("192.168.1."));
    }

    #[test]
    fn full_prefix_is_a_domain_error() {
        let mut sampler = Sampler::from_seed(2);
        let prefix = IpPrefix::Fields(vec![10, 0, 0, 1]);
        assert!(matches!(
            gen_ipaddr(&mut sampler, IpFormat::V4, &prefix),
            Err(GenError::DomainConstraintViolation(_))
        ));
    }

    #[test]
    fn oversized_prefix_is_a_domain_error() {
        let mut sampler = Sampler::from_seed(2);
        let prefix = IpPrefix::Fields(vec![10, 0, 0]);
        assert!(matches!(
            gen_ipaddr(&mut sampler, IpFormat::V4ThreeOctet, &prefix),
            Err(GenError::DomainConstraintViolation(_))
        ));
        let prefix = IpPrefix::Fields(vec![1, 2, 3, 4, 5]);
        assert!(matches!(
            gen_ipaddr(&mut sampler, IpFormat::V4, &prefix),
            Err(GenError::DomainConstraintViolation(_))
        ));
    }

    #[test]
    fn ipv4_numeric_prefix_is_bounded() {
        let mut sampler = Sampler::from_seed(2);
        let prefix = IpPrefix::Fields(vec![256]);
        assert!(matches!(
            gen_ipaddr(&mut sampler, IpFormat::V4, &prefix),
            Err(GenError::InvalidArgument(_))
        ));
    }

    #[test]
    fn ipv6_flag_wins() {
        assert_eq!(IpFormat::from_flags(true, true), IpFormat::V6);
        assert_eq!(IpFormat::from_flags(true, false), IpFormat::V4ThreeOctet);
        assert_eq!(IpFormat::from_flags(false, false), IpFormat::V4);
    }

    #[quickcheck]
    fn mac_has_six_lowercase_groups(seed: u64, dash: bool) -> bool {
        let delimiter = if dash { "-" } else { ":" };
        let mut sampler = Sampler::from_seed(seed);
        let mac = gen_mac(&mut sampler, delimiter).unwrap();
        let groups: Vec<&str> = mac.split(delimiter).collect();
        groups.len() == 6
            && groups.iter().all(|g| {
                g.len() == 2 && g.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
            })
    }

    #[test]
    fn mac_rejects_other_delimiters() {
        let mut sampler = Sampler::from_seed(0);
        assert!(matches!(gen_mac(&mut sampler, "x"), Err(GenError::InvalidArgument(_))));
        assert!(gen_mac(&mut sampler, "").is_err());
    }

    #[quickcheck]
    fn netmask_comes_from_table_slice(seed: u64) -> bool {
        let tables = Tables::default();
        let mut sampler = Sampler::from_seed(seed);
        gen_netmask(&mut sampler, &tables, 0, 31)
            .map(|mask| tables.netmasks[..32].contains(&mask))
            .unwrap_or(false)
    }

    #[test]
    fn netmask_picks_indexed_entry() {
        let mut source = MockRandomSource::new();
        source.expect_below().return_const(7u64);
        let mut sampler = Sampler::new(Box::new(source));
        let mask = gen_netmask(&mut sampler, &Tables::default(), 1, 31).unwrap();
        assert_eq!(mask, "255.0.0.0");
    }

    #[test]
    fn netmask_rejects_bad_bounds() {
        let tables = Tables::default();
        let mut sampler = Sampler::from_seed(0);
        assert!(gen_netmask(&mut sampler, &tables, 0, 32).is_err());
        assert!(gen_netmask(&mut sampler, &tables, 20, 10).is_err());
    }

    #[test]
    fn netmask_rejects_huge_min_without_drawing() {
        let mut source = MockRandomSource::new();
        source.expect_below().times(0);
        source.expect_any().times(0);
        let mut sampler = Sampler::new(Box::new(source));
        assert!(matches!(
            gen_netmask(&mut sampler, &Tables::default(), usize::MAX, 31),
            Err(GenError::InvalidArgument(_))
        ));
    }
}
