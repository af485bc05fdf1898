//! Protobuf messages of the GeoSite container.
//!
//! Field numbers and enum values must stay identical to the routing engine's
//! `GeoSiteList` schema, which reads the artifact unmodified.

use crate::container::{Container, SiteGroup};
use crate::matcher::Matcher;
use crate::{Error, Result};

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "dlc.dat";

/// Leading bytes of a gzip stream.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Matcher kind on the wire.
///
/// The numbering is historical: `Plain` is keyword containment and `Domain`
/// is the suffix match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DomainType {
    Plain = 0,
    Regex = 1,
    Domain = 2,
    Full = 3,
}

/// One matcher.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Domain {
    #[prost(enumeration = "DomainType", tag = "1")]
    pub r#type: i32,
    #[prost(string, tag = "2")]
    pub value: ::prost::alloc::string::String,
}

/// One group.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GeoSite {
    #[prost(string, tag = "1")]
    pub country_code: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub domain: ::prost::alloc::vec::Vec<Domain>,
}

/// The whole container.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GeoSiteList {
    #[prost(message, repeated, tag = "1")]
    pub entry: ::prost::alloc::vec::Vec<GeoSite>,
}

impl From<&Matcher> for Domain {
    fn from(matcher: &Matcher) -> Self {
        let domain_type = match matcher {
            Matcher::Plain(_) => DomainType::Domain,
            Matcher::Regex(_) => DomainType::Regex,
            Matcher::Substring(_) => DomainType::Plain,
            Matcher::Full(_) => DomainType::Full,
        };
        Domain {
            r#type: domain_type as i32,
            value: matcher.value().to_string(),
        }
    }
}

impl From<&SiteGroup> for GeoSite {
    fn from(group: &SiteGroup) -> Self {
        GeoSite {
            country_code: group.name.clone(),
            domain: group.matchers.iter().map(Domain::from).collect(),
        }
    }
}

impl From<&Container> for GeoSiteList {
    fn from(container: &Container) -> Self {
        GeoSiteList {
            entry: container.groups.iter().map(GeoSite::from).collect(),
        }
    }
}

impl TryFrom<GeoSite> for SiteGroup {
    type Error = Error;

    fn try_from(site: GeoSite) -> Result<Self> {
        let name = site.country_code;
        let matchers = site
            .domain
            .into_iter()
            .map(|d| {
                let domain_type = DomainType::try_from(d.r#type).map_err(|_| {
                    Error::Decode(format!("unknown domain type {} in group {}", d.r#type, name))
                })?;
                Ok(match domain_type {
                    DomainType::Plain => Matcher::Substring(d.value),
                    DomainType::Regex => Matcher::Regex(d.value),
                    DomainType::Domain => Matcher::Plain(d.value),
                    DomainType::Full => Matcher::Full(d.value),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(SiteGroup { name, matchers })
    }
}

impl TryFrom<GeoSiteList> for Container {
    type Error = Error;

    fn try_from(list: GeoSiteList) -> Result<Self> {
        let groups = list
            .entry
            .into_iter()
            .map(SiteGroup::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Container { groups })
    }
}

/// Check whether data is gzip compressed.
pub fn is_gzip(data: &[u8]) -> bool {
    data.len() >= GZIP_MAGIC.len() && data[..GZIP_MAGIC.len()] == GZIP_MAGIC
}
