use std::future::Future;
use std::net::IpAddr;

use trust_dns_resolver::TokioAsyncResolver;
use url::{Host, Url};

use crate::http_probe::probe::normalize_url;

/// Returned by [`Resolve::resolve`] when no address could be found.
pub const NOT_FOUND: &str = "Not found";

/// Extract the host of a target, ignoring scheme, credentials, port and path.
pub fn host_of(target: &str) -> Option<Host<String>> {
    let url = Url::parse(&normalize_url(target.trim())).ok()?;
    url.host().map(|host| host.to_owned())
}

/// Prefer an IPv4 address, falling back to whatever came first.
fn pick_address(addresses: impl IntoIterator<Item = IpAddr>) -> Option<IpAddr> {
    let mut first = None;
    for ip in addresses {
        if ip.is_ipv4() {
            return Some(ip);
        }
        first.get_or_insert(ip);
    }
    first
}

pub trait Resolve: Sync {
    /// Look up an address for a bare host name.
    fn lookup_ip(&self, host: &str) -> impl Future<Output = Option<IpAddr>> + Send;

    /// Resolve a target to a textual address, or [`NOT_FOUND`].
    fn resolve(&self, target: &str) -> impl Future<Output = String> + Send {
        async move {
            let address = match host_of(target) {
                Some(Host::Ipv4(ip)) => Some(IpAddr::V4(ip)),
                Some(Host::Ipv6(ip)) => Some(IpAddr::V6(ip)),
                Some(Host::Domain(domain)) => self.lookup_ip(&domain).await,
                None => None,
            };

            match address {
                Some(ip) => ip.to_string(),
                None => {
                    log::debug!("No address found for {target}");
                    NOT_FOUND.to_string()
                }
            }
        }
    }
}

/// DNS backed resolver.
#[derive(Clone)]
pub struct DnsResolver {
    resolver: TokioAsyncResolver,
}

impl DnsResolver {
    pub fn new(resolver: TokioAsyncResolver) -> Self {
        Self { resolver }
    }
}

impl Resolve for DnsResolver {
    async fn lookup_ip(&self, host: &str) -> Option<IpAddr> {
        match self.resolver.lookup_ip(host).await {
            Ok(lookup) => pick_address(lookup.iter()),
            Err(e) => {
                log::debug!("DNS lookup for {host} failed: {e}");
                None
            }
        }
    }
}
