//! Record types and the custom-record listing format.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Type tag marking custom DNS records in the listing.
const CUSTOM_RECORD_KIND: &str = "dns_custom_records";

/// Type tag the PATCH payload must carry.
const UPDATE_KIND: &str = "dns_service_records";

/// DNS record type handled by this tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    /// Address record
    A,
    /// Alias record
    #[allow(clippy::upper_case_acronyms)]
    CNAME,
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::CNAME => write!(f, "CNAME"),
        }
    }
}

/// One custom DNS record as listed by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDescriptor {
    /// The provider's opaque record id
    pub id: String,
    /// Record type
    pub record_type: RecordType,
    /// Subdomain prefix the record answers for
    pub prefix: String,
    /// Record content (an address for A, a target name for CNAME)
    pub content: String,
    /// Time to live in seconds
    pub ttl: u32,
}

/// Listing envelope: `{"result": {"data": [...]}}`.
#[derive(Debug, Deserialize)]
struct Envelope {
    result: ResultBlock,
}

#[derive(Debug, Deserialize)]
struct ResultBlock {
    data: Vec<RawItem>,
}

/// One item of the listing before filtering.
///
/// The collection is heterogeneous, so attributes stay raw until the type
/// tag has been checked.
#[derive(Debug, Deserialize)]
struct RawItem {
    id: RawId,
    #[serde(rename = "type")]
    kind: String,
    attributes: serde_json::Value,
}

/// Record ids arrive as strings or bare numbers depending on the endpoint.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RecordAttributes {
    prefix: String,
    #[serde(rename = "type")]
    record_type: RecordType,
    content: String,
    ttl: u32,
}

/// Parses the custom-record listing body.
///
/// Items whose type tag is not [`CUSTOM_RECORD_KIND`], and custom-record
/// items whose attributes do not fit the A/CNAME shape, are skipped with a
/// debug log rather than failing the whole listing.
///
/// # Errors
///
/// Returns a deserialization error when the envelope itself is not the
/// expected JSON shape.
pub(crate) fn parse_records(body: &[u8]) -> Result<Vec<RecordDescriptor>, serde_json::Error> {
    let envelope: Envelope = serde_json::from_slice(body)?;

    let records = envelope
        .result
        .data
        .into_iter()
        .filter_map(|item| {
            if item.kind != CUSTOM_RECORD_KIND {
                debug!("Skipping listing item of type '{}'", item.kind);
                return None;
            }
            let id = item.id.to_string();
            match serde_json::from_value::<RecordAttributes>(item.attributes) {
                Ok(attributes) => Some(RecordDescriptor {
                    id,
                    record_type: attributes.record_type,
                    prefix: attributes.prefix,
                    content: attributes.content,
                    ttl: attributes.ttl,
                }),
                Err(e) => {
                    debug!("Skipping record {id} with unexpected attributes: {e}");
                    None
                }
            }
        })
        .collect();

    Ok(records)
}

/// Finds the record answering for the given subdomain prefix.
///
/// First match wins; the provider does not allow duplicate prefixes.
#[must_use]
pub fn find_by_prefix<'a>(
    records: &'a [RecordDescriptor],
    subdomain: &str,
) -> Option<&'a RecordDescriptor> {
    records.iter().find(|record| record.prefix == subdomain)
}

/// The attributes written by a record update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUpdate {
    /// Record type to write
    pub record_type: RecordType,
    /// Subdomain prefix
    pub prefix: String,
    /// New record content
    pub content: String,
    /// Time to live in seconds; must be positive
    pub ttl: u32,
}

impl RecordUpdate {
    /// An A-record update pointing the prefix at an address.
    #[must_use]
    pub fn address(prefix: &str, content: &str, ttl: u32) -> Self {
        Self {
            record_type: RecordType::A,
            prefix: prefix.to_string(),
            content: content.to_string(),
            ttl,
        }
    }

    /// A CNAME update pointing the prefix at another name.
    #[must_use]
    pub fn alias(prefix: &str, target: &str, ttl: u32) -> Self {
        Self {
            record_type: RecordType::CNAME,
            prefix: prefix.to_string(),
            content: target.to_string(),
            ttl,
        }
    }

    /// Serializes the PATCH body for the given record id.
    pub(crate) fn to_payload(&self, id: &str) -> Result<Vec<u8>, serde_json::Error> {
        #[derive(Serialize)]
        struct PayloadAttributes<'a> {
            #[serde(rename = "type")]
            record_type: RecordType,
            prefix: &'a str,
            content: &'a str,
            ttl: u32,
        }

        #[derive(Serialize)]
        struct Payload<'a> {
            #[serde(rename = "type")]
            kind: &'static str,
            id: &'a str,
            attributes: PayloadAttributes<'a>,
        }

        serde_json::to_vec(&Payload {
            kind: UPDATE_KIND,
            id,
            attributes: PayloadAttributes {
                record_type: self.record_type,
                prefix: &self.prefix,
                content: &self.content,
                ttl: self.ttl,
            },
        })
    }
}
