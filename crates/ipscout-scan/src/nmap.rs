//! nmap wrapper and `-oX` output parser.

use crate::scanner::{run_tool, ScanConfig, ScanOutput};
use ipscout_core::{HostAddress, Protocol, ReconError, Result, ScanResult, ScannedHost, ScannedPort};
use roxmltree::{Document, Node, ParsingOptions};

/// nmap invocation against a single target
pub struct Nmap<'a> {
    config: &'a ScanConfig,
}

impl<'a> Nmap<'a> {
    /// Create a wrapper using the given configuration
    #[must_use]
    pub const fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// Build the argument list: port selection, `-T4 -Pn -oX -`, the target,
    /// then any extra user arguments
    #[must_use]
    pub fn args(&self, target: &str, extra: &[String]) -> Vec<String> {
        let mut args = self.config.nmap_ports.to_args();
        args.extend(["-T4", "-Pn", "-oX", "-"].map(String::from));
        args.push(target.to_string());
        args.extend(extra.iter().cloned());
        args
    }

    /// Run nmap and return its raw output
    pub async fn run(&self, target: &str, extra: &[String]) -> Result<ScanOutput> {
        run_tool(&self.config.nmap_path, self.args(target, extra)).await
    }
}

/// Parse an nmap XML document into a [`ScanResult`]
///
/// Only `<host>` elements directly under `<nmaprun>` are read. A port whose
/// `<state>` or `<service>` child is missing keeps an empty state or no
/// service name.
pub fn parse_nmap_xml(xml: &str) -> Result<ScanResult> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)
        .map_err(|e| ReconError::Xml(format!("failed to parse nmap XML: {e}")))?;

    let root = doc.root_element();
    if root.tag_name().name() != "nmaprun" {
        return Err(ReconError::Xml(format!(
            "expected <nmaprun>, found <{}>",
            root.tag_name().name()
        )));
    }

    let hosts = children(root, "host")
        .map(parse_host)
        .collect::<Result<Vec<_>>>()?;

    Ok(ScanResult { hosts })
}

fn parse_host(host: Node<'_, '_>) -> Result<ScannedHost> {
    let addresses = children(host, "address")
        .map(|addr| HostAddress {
            addr: addr.attribute("addr").unwrap_or_default().to_string(),
            addr_type: addr.attribute("addrtype").unwrap_or_default().to_string(),
        })
        .collect();

    let ports = children(host, "ports")
        .flat_map(|ports| children(ports, "port"))
        .map(parse_port)
        .collect::<Result<Vec<_>>>()?;

    Ok(ScannedHost { addresses, ports })
}

fn parse_port(port: Node<'_, '_>) -> Result<ScannedPort> {
    let raw_id = port.attribute("portid").unwrap_or_default();
    let port_id = raw_id
        .parse::<u16>()
        .map_err(|_| ReconError::Xml(format!("invalid portid: {raw_id:?}")))?;

    let protocol = port
        .attribute("protocol")
        .map_or_else(|| Ok(Protocol::default()), str::parse::<Protocol>)
        .map_err(ReconError::Xml)?;

    let state = children(port, "state")
        .next()
        .and_then(|s| s.attribute("state"))
        .unwrap_or_default()
        .to_string();

    let service = children(port, "service")
        .next()
        .and_then(|s| s.attribute("name"))
        .map(String::from);

    Ok(ScannedPort {
        protocol,
        port_id,
        state,
        service,
    })
}

fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}
