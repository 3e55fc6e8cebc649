//! Active scan with nmap; prints open ports from the XML report.

use ipscout_core::{ReconError, ScanResult};
use ipscout_scan::{parse_nmap_xml, Nmap};
use std::io::{self, Write};

use super::Context;
use crate::education::Explain;
use crate::output::{spinner, Console};

pub async fn execute<W: Write>(
    ctx: &Context,
    console: &mut Console<W>,
    ip: &str,
    extra: &[String],
) -> io::Result<()> {
    let nmap = Nmap::new(&ctx.scan);

    if ctx.explain {
        Explain::nmap(&ctx.scan.nmap_path, &nmap.args(ip, extra)).render(console)?;
    }

    console.title("Running nmap...")?;

    let progress = spinner("nmap is scanning", ctx.progress);
    let outcome = nmap.run(ip, extra).await;
    progress.finish_and_clear();

    let output = match outcome {
        Ok(output) => output,
        Err(e) => return report_failure(console, "nmap", &e),
    };

    match parse_nmap_xml(&output.stdout_text()) {
        Ok(result) => print_result(console, &result),
        Err(e) => console.error(&format!("Failed to parse nmap output: {e}")),
    }
}

/// Error line followed by whatever the scanner printed
pub(crate) fn report_failure<W: Write>(
    console: &mut Console<W>,
    tool: &str,
    error: &ReconError,
) -> io::Result<()> {
    console.error(&format!("{tool} command failed: {error}"))?;
    console.plain(&format!(
        "{tool} output: {}",
        error.scanner_output().unwrap_or_default()
    ))
}

/// Open ports per host; hosts without any get a notice instead
pub(crate) fn print_result<W: Write>(console: &mut Console<W>, result: &ScanResult) -> io::Result<()> {
    if result.hosts.is_empty() {
        return console.warning("nmap reported no hosts (is the target up?)");
    }

    let label_hosts = result.hosts.len() > 1;
    for host in &result.hosts {
        if label_hosts {
            if let Some(addr) = host.primary_address() {
                console.title(addr)?;
            }
        }

        let mut open = host.open_ports().peekable();
        if open.peek().is_none() {
            console.warning("No open ports found")?;
            continue;
        }
        for port in open {
            console.port_line(&port.to_string(), port.service.as_deref().unwrap_or_default())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipscout_core::{HostAddress, Protocol, ScannedHost, ScannedPort};

    fn port(id: u16, state: &str, service: Option<&str>) -> ScannedPort {
        ScannedPort {
            protocol: Protocol::Tcp,
            port_id: id,
            state: state.to_string(),
            service: service.map(String::from),
        }
    }

    fn host(addr: &str, ports: Vec<ScannedPort>) -> ScannedHost {
        ScannedHost {
            addresses: vec![HostAddress {
                addr: addr.to_string(),
                addr_type: "ipv4".to_string(),
            }],
            ports,
        }
    }

    #[test]
    fn test_open_ports_printed() {
        let result = ScanResult {
            hosts: vec![host(
                "192.0.2.1",
                vec![port(22, "open", Some("ssh")), port(25, "closed", Some("smtp")), port(8080, "open", None)],
            )],
        };
        let mut console = Console::buffer();
        print_result(&mut console, &result).unwrap();
        assert_eq!(console.contents(), "  22/tcp - ssh\n  8080/tcp - \n");
    }

    #[test]
    fn test_single_closed_port() {
        let result = ScanResult {
            hosts: vec![host("192.0.2.1", vec![port(23, "closed", Some("telnet"))])],
        };
        let mut console = Console::buffer();
        print_result(&mut console, &result).unwrap();
        assert_eq!(console.contents(), "No open ports found\n");
    }

    #[test]
    fn test_host_without_ports() {
        let result = ScanResult {
            hosts: vec![host("192.0.2.1", vec![])],
        };
        let mut console = Console::buffer();
        print_result(&mut console, &result).unwrap();
        assert_eq!(console.contents(), "No open ports found\n");
    }

    #[test]
    fn test_multiple_hosts_are_labelled() {
        let result = ScanResult {
            hosts: vec![
                host("192.0.2.1", vec![port(80, "open", Some("http"))]),
                host("192.0.2.2", vec![]),
            ],
        };
        let mut console = Console::buffer();
        print_result(&mut console, &result).unwrap();
        assert_eq!(
            console.contents(),
            "192.0.2.1\n  80/tcp - http\n192.0.2.2\nNo open ports found\n"
        );
    }

    #[test]
    fn test_failure_dumps_output() {
        let error = ReconError::ScannerFailed {
            tool: "nmap".into(),
            status: "exit status: 1".into(),
            output: "Failed to resolve \"nope\".\n".into(),
        };
        let mut console = Console::buffer();
        report_failure(&mut console, "nmap", &error).unwrap();
        let text = console.contents();
        assert!(text.starts_with("nmap command failed: nmap exited with exit status: 1\n"));
        assert!(text.contains("nmap output: Failed to resolve \"nope\"."));
    }
}
