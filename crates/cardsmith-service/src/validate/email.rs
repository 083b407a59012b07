//! Email address validation.
//!
//! Syntax follows the RFC 5321/5322 limits for unquoted addresses: a
//! dot-atom local part of at most 64 octets and a hostname domain of at most
//! 253 octets made of LDH labels. Quoted local parts and IP-literal domains
//! are rejected; contact cards practically never carry them.

use std::sync::Arc;

use hickory_resolver::Resolver;

/// Email validation contract.
pub trait EmailValidator: Send + Sync {
    /// Returns whether `address` is acceptable. With `check_dns`, the domain
    /// must also accept mail.
    fn is_valid(&self, address: &str, check_dns: bool) -> bool;
}

/// Answers whether a domain can receive mail.
pub trait DomainLookup: Send + Sync {
    fn accepts_mail(&self, domain: &str) -> bool;
}

/// [`DomainLookup`] over the system resolver configuration.
///
/// A domain accepts mail when it has a non-null MX record, or no MX records
/// but an A/AAAA record (RFC 5321 §5.1 implicit MX).
pub struct HickoryLookup {
    resolver: Resolver,
}

impl HickoryLookup {
    /// Creates a lookup from `/etc/resolv.conf` (or the platform equivalent).
    ///
    /// ## Errors
    /// Returns an error if the system resolver configuration cannot be read.
    pub fn from_system_conf() -> std::io::Result<Self> {
        Ok(Self {
            resolver: Resolver::from_system_conf()?,
        })
    }
}

impl DomainLookup for HickoryLookup {
    #[tracing::instrument(skip(self))]
    fn accepts_mail(&self, domain: &str) -> bool {
        let fqdn = format!("{}.", domain.trim_end_matches('.'));

        match self.resolver.mx_lookup(fqdn.as_str()) {
            Ok(mx) => {
                let accepts = mx.iter().any(|record| !record.exchange().is_root());
                tracing::debug!(accepts, "MX lookup finished");
                return accepts;
            }
            Err(e) => {
                tracing::debug!(error = %e, "No MX records, trying address records");
            }
        }

        self.resolver
            .lookup_ip(fqdn.as_str())
            .is_ok_and(|ips| ips.iter().next().is_some())
    }
}

/// Syntax check plus optional DNS check through a [`DomainLookup`].
///
/// Without a lookup, `check_dns` cannot be honored and only syntax is
/// checked.
#[derive(Clone, Default)]
pub struct StandardEmailValidator {
    lookup: Option<Arc<dyn DomainLookup>>,
}

impl StandardEmailValidator {
    /// Creates a syntax-only validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator that resolves domains through `lookup`.
    #[must_use]
    pub fn with_lookup(lookup: Arc<dyn DomainLookup>) -> Self {
        Self {
            lookup: Some(lookup),
        }
    }
}

impl EmailValidator for StandardEmailValidator {
    fn is_valid(&self, address: &str, check_dns: bool) -> bool {
        let Some((_, domain)) = split_address(address) else {
            return false;
        };

        if !check_dns {
            return true;
        }

        match &self.lookup {
            Some(lookup) => lookup.accepts_mail(domain),
            None => {
                tracing::debug!(%address, "No domain lookup configured, skipping DNS check");
                true
            }
        }
    }
}

const MAX_ADDRESS_OCTETS: usize = 254;
const MAX_LOCAL_OCTETS: usize = 64;
const MAX_DOMAIN_OCTETS: usize = 253;
const MAX_LABEL_OCTETS: usize = 63;

/// Splits a syntactically valid address into local part and domain.
fn split_address(address: &str) -> Option<(&str, &str)> {
    if address.len() > MAX_ADDRESS_OCTETS {
        return None;
    }

    let (local, domain) = address.rsplit_once('@')?;
    (valid_local_part(local) && valid_domain(domain)).then_some((local, domain))
}

fn valid_local_part(local: &str) -> bool {
    const ATEXT_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~";

    !local.is_empty()
        && local.len() <= MAX_LOCAL_OCTETS
        && local.split('.').all(|atom| {
            !atom.is_empty()
                && atom
                    .chars()
                    .all(|c| c.is_alphanumeric() || ATEXT_SPECIALS.contains(c))
        })
}

fn valid_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_OCTETS {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();

    // A dotless domain is only valid on a local network.
    if labels.len() < 2 {
        return false;
    }

    // The top-level label can't be all-numeric.
    if labels
        .last()
        .is_some_and(|tld| tld.chars().all(|c| c.is_ascii_digit()))
    {
        return false;
    }

    labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_OCTETS
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_alphanumeric() || c == '-')
    })
}
