use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// A public resolver and the endpoints it answers on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Resolver {
    pub nameserver: String,
    pub ips: Vec<SocketAddr>,
    /// Queries per second; 0 disables throttling
    #[serde(default)]
    pub ratelimit: u32,
    #[serde(default = "default_enable")]
    pub enable: bool,
}

/// Last-resort fallback pool, same shape as a primary resolver.
pub type RetryResolver = Resolver;

impl Resolver {
    pub fn new(nameserver: &str, ips: &[&str], ratelimit: u32) -> Result<Self, ConfigError> {
        let ips = ips
            .iter()
            .map(|ip| {
                ip.parse::<SocketAddr>().map_err(|e| {
                    ConfigError::Validation(format!(
                        "Invalid endpoint '{}' for {}: {}",
                        ip, nameserver, e
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            nameserver: nameserver.to_string(),
            ips,
            ratelimit,
            enable: true,
        })
    }
}

/// Primary resolvers plus the shared retry pool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolverSet {
    pub retry_servers: RetryResolver,
    #[serde(default)]
    pub resolvers: Vec<Resolver>,
}

const RETRY_POOL: &[&str] = &[
    "109.228.17.201:53",
    "109.228.0.46:53",
    "194.72.73.131:53",
    "78.109.175.227:53",
    "213.171.206.59:53",
    "213.171.206.197:53",
    "213.171.206.141:53",
    "109.233.47.19:53",
    "109.228.8.83:53",
    "109.228.8.167:53",
    "213.171.206.194:53",
    "109.228.2.168:53",
    "109.228.2.155:53",
    "193.26.23.55:53",
    "88.208.228.34:53",
    "77.68.46.58:53",
    "213.171.206.48:53",
    "88.208.192.80:53",
];

const PUBLIC_RESOLVERS: &[(&str, [&str; 2], u32)] = &[
    ("google", ["8.8.8.8:53", "8.8.4.4:53"], 40),
    ("comodo secure dns", ["8.26.56.26:53", "8.10.247.10:53"], 10),
    ("level3", ["109.244.0.3:53", "109.244.0.4:53"], 10),
    ("verisign", ["64.6.64.6:53", "64.6.65.6:53"], 10),
    ("dns advantage", ["156.154.70.1:53", "156.154.71.1:53"], 5),
    ("opennic", ["198.106.14.241:53", "172.98.193.42:53"], 10),
    ("dyn", ["216.146.35.35:53", "216.146.36.36:53"], 10),
    ("dns watch", ["84.100.69.80:53", "84.100.70.40:53"], 10),
    ("quad9", ["9.9.9.9:53", "149.112.112.112:53"], 10),
    ("green team dns", ["81.218.119.11:53", "109.88.198.133:53"], 10),
    ("safedns", ["195.46.39.39:53", "195.46.39.40:53"], 10),
    ("smartviper", ["108.76.50.50:53", "108.76.51.51:53"], 10),
    ("freedns", ["45.33.97.5:53", "37.235.1.177:53"], 10),
    ("alternate dns", ["198.101.242.72:53", "23.253.163.53:53"], 10),
    ("yandex.dns", ["77.88.8.8:53", "77.88.8.1:53"], 10),
    ("uncensored dns", ["91.239.100.100:53", "89.233.43.71:53"], 10),
    ("neustar", ["156.154.70.1:53", "156.154.71.1:53"], 10),
    ("clean browsing", ["185.228.168.9:53", "185.228.169.9:53"], 10),
    ("tenta", ["99.192.182.100:53", "99.192.182.101:53"], 10),
];

impl ResolverSet {
    /// Built-in list of well-known public resolvers.
    pub fn builtin() -> Result<Self, ConfigError> {
        let retry_servers = Resolver::new("Retry Pool Dns Servers", RETRY_POOL, 20)?;
        let resolvers = PUBLIC_RESOLVERS
            .iter()
            .map(|(name, ips, rate)| Resolver::new(name, ips, *rate))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            retry_servers,
            resolvers,
        })
    }

    /// Writes the built-in list when `path` does not exist. Returns `true` if written.
    pub fn create_if_missing(path: &Path) -> Result<bool, ConfigError> {
        if path.exists() {
            return Ok(false);
        }

        let contents = toml::to_string_pretty(&Self::builtin()?)?;
        std::fs::write(path, contents).map_err(|source| ConfigError::Write {
            path: path.display().to_string(),
            source,
        })?;

        Ok(true)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let set: ResolverSet = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        set.validate()?;
        Ok(set)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retry_servers.ips.is_empty() {
            return Err(ConfigError::Validation(
                "retry_servers must list at least one endpoint".into(),
            ));
        }
        if let Some(r) = self.enabled().find(|r| r.ips.is_empty()) {
            return Err(ConfigError::Validation(format!(
                "resolver '{}' has no endpoints",
                r.nameserver
            )));
        }
        if self.enabled().next().is_none() {
            return Err(ConfigError::Validation(
                "at least one resolver must be enabled".into(),
            ));
        }
        Ok(())
    }

    pub fn enabled(&self) -> impl Iterator<Item = &Resolver> {
        self.resolvers.iter().filter(|r| r.enable)
    }
}

fn default_enable() -> bool {
    true
}
