use ipnet::IpNet;
use serde::Deserialize;
use std::net::IpAddr;

/// Fingerprinting configuration
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct FingerprintConfig {
    /// Peers allowed to set the client address through X-Forwarded-For / X-Real-IP
    /// Supports CIDR notation and plain addresses: ["10.0.0.0/8", "127.0.0.1", "::1/128"]
    /// Empty list trusts forwarding headers from every peer
    /// Default: [] (trust all)
    #[serde(default)]
    #[serde(deserialize_with = "deserialize_ip_networks")]
    pub trusted_proxies: Vec<IpNet>,
}

/// Parses CIDR networks, accepting a bare address as a single-host network
fn deserialize_ip_networks<'de, D>(deserializer: D) -> Result<Vec<IpNet>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let strings: Vec<String> = Vec::deserialize(deserializer)?;
    let mut networks = Vec::with_capacity(strings.len());

    for s in strings {
        let parsed = s
            .parse::<IpNet>()
            .or_else(|_| s.parse::<IpAddr>().map(IpNet::from));
        match parsed {
            Ok(net) => networks.push(net),
            Err(e) => {
                return Err(serde::de::Error::custom(format!("Invalid IP network '{s}': {e}")));
            }
        }
    }

    Ok(networks)
}
