//! `--explain` blocks: what each handler is about to do and why it might fail.

use crate::output::{Console, Tone};
use std::io::{self, Write};

/// Command explanation builder.
pub struct Explain {
    title: String,
    description: String,
    request: Option<String>,
    requires: Option<String>,
    what_happens: Vec<String>,
}

impl Explain {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: String::new(),
            request: None,
            requires: None,
            what_happens: Vec::new(),
        }
    }

    fn description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    fn request(mut self, request: &str) -> Self {
        self.request = Some(request.to_string());
        self
    }

    fn requires(mut self, requirement: &str) -> Self {
        self.requires = Some(requirement.to_string());
        self
    }

    fn step(mut self, step: &str) -> Self {
        self.what_happens.push(step.to_string());
        self
    }

    /// Write the explanation through the console.
    pub fn render<W: Write>(&self, console: &mut Console<W>) -> io::Result<()> {
        console.say(Tone::Title, &format!("=== {} ===", self.title))?;
        console.plain(&self.description)?;

        if !self.what_happens.is_empty() {
            console.plain("How it works:")?;
            for (i, step) in self.what_happens.iter().enumerate() {
                console.plain(&format!("  {}. {}", i + 1, step))?;
            }
        }

        if let Some(request) = &self.request {
            console.key_value("Request", request)?;
        }
        if let Some(requires) = &self.requires {
            console.key_value("Requires", requires)?;
        }

        console.plain("")
    }

    // ========================================================================
    // Factory methods for each handler
    // ========================================================================

    pub fn geo(base: &str, ip: &str) -> Self {
        Self::new("Geolocation")
            .description(&format!("Looks up where {ip} is and who operates it."))
            .request(&format!("GET {}/{ip}?token=<IPINFO_API_KEY>", base.trim_end_matches('/')))
            .requires("IPINFO_API_KEY in the environment")
            .step("Reads the ipinfo.io token from the environment")
            .step("Sends one authenticated request")
            .step("Prints the country code and the owning organization")
    }

    pub fn host_intel(base: &str, ip: &str) -> Self {
        Self::new("InternetDB")
            .description(&format!(
                "Fetches passive scan data for {ip}: nothing is sent to the host itself."
            ))
            .request(&format!("GET {}/{ip}", base.trim_end_matches('/')))
            .requires("Nothing, the service is free and keyless")
            .step("Queries Shodan's InternetDB for the address")
            .step("Prints hostnames, open ports, tags, CVEs and CPEs")
    }

    pub fn minecraft(base: &str, address: &str) -> Self {
        Self::new("Minecraft Status")
            .description(&format!("Asks mcstatus.io to ping the Java server at {address}."))
            .request(&format!(
                "GET {}/v2/status/java/{address}",
                base.trim_end_matches('/')
            ))
            .step("mcstatus.io performs the server list ping on our behalf")
            .step("Prints the version, the player count and the MOTD")
            .step("Stops at the first section missing from the answer")
    }

    pub fn nmap(program: &str, args: &[String]) -> Self {
        Self::new("nmap")
            .description("Actively probes the most common TCP ports of the target.")
            .request(&format!("{program} {}", args.join(" ")))
            .requires("nmap installed and on PATH")
            .step("Skips host discovery (-Pn) and uses aggressive timing (-T4)")
            .step("Reads the XML report nmap writes to standard output")
            .step("Prints every port reported as open")
    }

    pub fn masscan(program: &str, args: &[String]) -> Self {
        Self::new("masscan")
            .description("Sends SYN probes to every port of the target at a fixed rate.")
            .request(&format!("{program} {}", args.join(" ")))
            .requires("masscan installed and usually root privileges")
            .step("Scans ports 0-65535")
            .step("Prints masscan's own output unchanged")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_geo_hides_token() {
        let mut console = Console::buffer();
        Explain::geo("https://ipinfo.io/", "1.1.1.1").render(&mut console).unwrap();
        let text = console.contents();

        assert!(text.starts_with("=== Geolocation ==="));
        assert!(text.contains("Request: GET https://ipinfo.io/1.1.1.1?token=<IPINFO_API_KEY>"));
        assert!(text.contains("  1. Reads the ipinfo.io token from the environment"));
    }

    #[test]
    fn test_render_nmap_command_line() {
        let mut console = Console::buffer();
        let args = vec!["--top-ports".to_string(), "1000".to_string(), "10.0.0.1".to_string()];
        Explain::nmap("nmap", &args).render(&mut console).unwrap();
        assert!(console.contents().contains("Request: nmap --top-ports 1000 10.0.0.1"));
    }
}
