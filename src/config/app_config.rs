use std::env;
use std::path::Path;
use std::{net::IpAddr, time::Duration};

use trust_dns_resolver::{
    TokioAsyncResolver,
    config::{NameServerConfig, NameServerConfigGroup, Protocol, ResolverConfig, ResolverOpts},
    error::ResolveError,
};

use super::probe_config::ProbeConfig;
use crate::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "webcheck.yml";

pub struct AppConfig {
    pub probe: ProbeConfig,
    /// Explicit name servers. Empty means the system resolver configuration is used.
    pub dns_hosts: Vec<String>,
}

/// Load the application configuration from a YAML file and environment variables.
/// An explicitly requested file must exist. When none is given, `webcheck.yml` in the
/// working directory is used if present, otherwise the built-in defaults.
/// `DNS_HOSTS` (comma separated IPs) selects the name servers used for address lookups.
pub fn load_config(config_file: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let probe = match config_file {
        Some(path) => read_probe_config(path)?,
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                read_probe_config(path)?
            } else {
                log::info!("No {DEFAULT_CONFIG_FILE} found, using built-in defaults");
                ProbeConfig::default()
            }
        }
    };

    let dns_hosts = env::var("DNS_HOSTS")
        .map(|hosts| parse_dns_hosts(&hosts))
        .unwrap_or_default();

    if dns_hosts.is_empty() {
        log::info!("Using system DNS configuration");
    } else {
        log::info!("Using DNS hosts: {:?}", dns_hosts);
    }

    Ok(AppConfig { probe, dns_hosts })
}

fn read_probe_config(path: &Path) -> Result<ProbeConfig, ConfigError> {
    let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("Loaded configuration from {}", path.display());
    parse_probe_config(&config_str, path)
}

pub fn parse_probe_config(config_str: &str, path: &Path) -> Result<ProbeConfig, ConfigError> {
    if config_str.trim().is_empty() {
        return Ok(ProbeConfig::default());
    }
    serde_yaml::from_str(config_str).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

pub fn parse_dns_hosts(hosts: &str) -> Vec<String> {
    hosts
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Setup a DNS resolver.
/// With no hosts the system configuration (resolv.conf, hosts file) is used, or the
/// library defaults when it cannot be read. Otherwise a
/// `TokioAsyncResolver` is built against the given name servers over TCP, with 2 attempts
/// and a 2 second timeout per attempt.
pub fn setup_resolver(dns_hosts: &[String]) -> Result<TokioAsyncResolver, ConfigError> {
    if dns_hosts.is_empty() {
        return Ok(system_or_default(TokioAsyncResolver::tokio_from_system_conf()));
    }

    let mut opts = ResolverOpts::default();
    opts.attempts = 2;
    opts.timeout = Duration::from_secs(2);

    let mut name_servers = NameServerConfigGroup::new();

    for host in dns_hosts {
        let ip: IpAddr = host
            .parse()
            .map_err(|_| ConfigError::InvalidDnsHost(host.clone()))?;
        name_servers.push(NameServerConfig {
            socket_addr: (ip, 53).into(),
            protocol: Protocol::Tcp,
            tls_dns_name: None,
            trust_negative_responses: false,
            bind_addr: None,
        });
    }

    let resolver_config = ResolverConfig::from_parts(None, vec![], name_servers);
    Ok(TokioAsyncResolver::tokio(resolver_config, opts))
}

// The library defaults point at public name servers.
fn system_or_default(system: Result<TokioAsyncResolver, ResolveError>) -> TokioAsyncResolver {
    system.unwrap_or_else(|e| {
        log::warn!("Unusable system DNS configuration ({e}), falling back to defaults");
        TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
    })
}
