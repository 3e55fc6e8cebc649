use ipscout_cli::cli::args::Invocation;
use ipscout_cli::cli::commands::{dispatch, Context};
use ipscout_cli::output::Console;
use ipscout_client::{Endpoints, ReconClient};
use ipscout_scan::ScanConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INTEL_FIXTURE: &str =
    r#"{"ip":"1.2.3.4","hostnames":[],"ports":[22,80],"tags":["foo"],"vulns":[],"cpes":[]}"#;

struct Services {
    geo: MockServer,
    intel: MockServer,
    mc: MockServer,
}

impl Services {
    async fn start() -> Self {
        Self {
            geo: MockServer::start().await,
            intel: MockServer::start().await,
            mc: MockServer::start().await,
        }
    }

    fn endpoints(&self) -> Endpoints {
        Endpoints {
            ipinfo: self.geo.uri(),
            internetdb: self.intel.uri(),
            mcstatus: self.mc.uri(),
        }
    }

    fn context(&self, token: Option<&str>, scan: ScanConfig) -> Context {
        Context {
            client: ReconClient::builder()
                .endpoints(self.endpoints())
                .ipinfo_token(token.map(String::from))
                .build()
                .unwrap(),
            scan,
            explain: false,
            progress: false,
        }
    }

    async fn expect_geo(&self, ip: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/{ip}")))
            .and(query_param("token", "test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ip": ip,
                "country": "US",
                "org": "AS64500 Example Networks"
            })))
            .expect(1)
            .mount(&self.geo)
            .await;
    }

    async fn expect_intel(&self, ip: &str, times: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/{ip}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(INTEL_FIXTURE))
            .expect(times)
            .mount(&self.intel)
            .await;
    }
}

fn invocation(ip: &str, mode: Option<&str>, extra: &[&str]) -> Invocation {
    Invocation {
        ip: ip.to_string(),
        mode: mode.map(String::from),
        extra: extra.iter().map(ToString::to_string).collect(),
    }
}

async fn run(ctx: &Context, inv: &Invocation) -> String {
    let mut console = Console::buffer();
    dispatch(ctx, &mut console, inv).await.unwrap();
    console.contents()
}

#[cfg(unix)]
fn script(dir: &tempfile::TempDir, name: &str, body: &str) -> String {
    use std::os::unix::fs::PermissionsExt;

    let file = dir.path().join(name);
    std::fs::write(&file, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o755)).unwrap();
    file.to_string_lossy().into_owned()
}

#[tokio::test]
async fn default_mode_prints_geo_then_intel() {
    let services = Services::start().await;
    services.expect_geo("1.2.3.4").await;
    services.expect_intel("1.2.3.4", 1).await;

    let ctx = services.context(Some("test-token"), ScanConfig::default());
    let out = run(&ctx, &invocation("1.2.3.4", None, &[])).await;

    assert_eq!(
        out,
        "1.2.3.4\n\
         Country: US\n\
         Organization: AS64500 Example Networks\n\
         Querying...\n\
         IP: 1.2.3.4\n\
         Hostnames: \n\
         Ports: [22 80]\n\
         Tags: foo\n\
         Vulnerabilities: \n\
         CPEs: \n"
    );
}

#[tokio::test]
async fn missing_token_prints_remediation_without_request() {
    let services = Services::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&services.geo)
        .await;
    services.expect_intel("1.2.3.4", 1).await;

    let ctx = services.context(None, ScanConfig::default());
    let out = run(&ctx, &invocation("1.2.3.4", Some("-s"), &[])).await;

    assert!(out.contains("Error: IPINFO_API_KEY is not set.\n"));
    assert!(out.contains("    export IPINFO_API_KEY=your_api_key_here\n"));
    assert!(out.contains("    set IPINFO_API_KEY=your_api_key_here\n"));
    assert!(out.contains("    $env:IPINFO_API_KEY=\"your_api_key_here\"\n"));
    // Geolocation failure is not fatal.
    assert!(out.contains("Ports: [22 80]\n"));
}

#[tokio::test]
async fn unknown_mode_warns_then_falls_back() {
    let services = Services::start().await;
    services.expect_geo("1.2.3.4").await;
    services.expect_intel("1.2.3.4", 1).await;

    let ctx = services.context(Some("test-token"), ScanConfig::default());
    let out = run(&ctx, &invocation("1.2.3.4", Some("-x"), &[])).await;

    let warning = out
        .find("Invalid option. Using default option (-s for internetdb).")
        .expect("warning line");
    let intel = out.find("Querying...").expect("intel header");
    let geo = out.find("Country: US").expect("geo line");
    assert!(geo < warning && warning < intel);
}

#[tokio::test]
async fn intel_failure_is_reported() {
    let services = Services::start().await;
    services.expect_geo("10.0.0.1").await;
    Mock::given(method("GET"))
        .and(path("/10.0.0.1"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "detail": "No information available" })),
        )
        .mount(&services.intel)
        .await;

    let ctx = services.context(Some("test-token"), ScanConfig::default());
    let out = run(&ctx, &invocation("10.0.0.1", None, &[])).await;

    assert!(out.ends_with("InternetDB query failed: not found: No information available\n"));
}

#[tokio::test]
async fn minecraft_prints_all_sections() {
    let services = Services::start().await;
    services.expect_geo("203.0.113.5").await;
    Mock::given(method("GET"))
        .and(path("/v2/status/java/203.0.113.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "online": true,
            "version": { "name_clean": "1.20.4" },
            "players": { "online": 7, "max": 50 },
            "motd": { "clean": "A Minecraft Server" }
        })))
        .expect(1)
        .mount(&services.mc)
        .await;

    let ctx = services.context(Some("test-token"), ScanConfig::default());
    let out = run(&ctx, &invocation("203.0.113.5", Some("-m"), &[])).await;

    assert!(out.ends_with(
        "Running mc...\nVersion: 1.20.4\nPlayers: 7/50\nMOTD: A Minecraft Server\n"
    ));
}

#[tokio::test]
async fn minecraft_stops_at_first_missing_section() {
    let services = Services::start().await;
    services.expect_geo("203.0.113.5").await;
    Mock::given(method("GET"))
        .and(path("/v2/status/java/203.0.113.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "online": false,
            "players": { "online": 0, "max": 0 },
            "motd": { "clean": "" }
        })))
        .mount(&services.mc)
        .await;

    let ctx = services.context(Some("test-token"), ScanConfig::default());
    let out = run(&ctx, &invocation("203.0.113.5", Some("-m"), &[])).await;

    assert!(out.contains("Server reports offline\n"));
    assert!(out.ends_with("Failed to parse version information\n"));
    assert!(!out.contains("Players:"));
    assert!(!out.contains("MOTD:"));
}

#[cfg(unix)]
#[tokio::test]
async fn nmap_failure_dumps_output_and_skips_parsing() {
    let services = Services::start().await;
    services.expect_geo("192.0.2.10").await;
    services.expect_intel("192.0.2.10", 0).await;

    let dir = tempfile::tempdir().unwrap();
    let nmap = script(&dir, "nmap", "echo 'Failed to resolve target' >&2\nexit 1");
    let scan = ScanConfig {
        nmap_path: nmap,
        ..ScanConfig::default()
    };

    let ctx = services.context(Some("test-token"), scan);
    let out = run(&ctx, &invocation("192.0.2.10", Some("-n"), &[])).await;

    assert!(out.find("Country: US").unwrap() < out.find("Running nmap...").unwrap());
    assert!(out.contains("nmap command failed: "));
    assert!(out.contains("nmap output: Failed to resolve target\n"));
    assert!(!out.contains("Failed to parse nmap output"));
}

#[cfg(unix)]
#[tokio::test]
async fn nmap_closed_port_reports_no_open_ports() {
    let services = Services::start().await;
    services.expect_geo("192.0.2.10").await;

    let dir = tempfile::tempdir().unwrap();
    let nmap = script(
        &dir,
        "nmap",
        r#"cat <<'XML'
<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE nmaprun>
<nmaprun scanner="nmap">
<host><address addr="192.0.2.10" addrtype="ipv4"/>
<ports><port protocol="tcp" portid="23"><state state="closed"/><service name="telnet"/></port></ports>
</host>
</nmaprun>
XML"#,
    );
    let scan = ScanConfig {
        nmap_path: nmap,
        ..ScanConfig::default()
    };

    let ctx = services.context(Some("test-token"), scan);
    let out = run(&ctx, &invocation("192.0.2.10", Some("-n"), &[])).await;

    assert!(out.ends_with("Running nmap...\nNo open ports found\n"));
}

#[cfg(unix)]
#[tokio::test]
async fn nmap_receives_fixed_flags_and_extra_args() {
    let services = Services::start().await;
    services.expect_geo("192.0.2.10").await;

    // Echo the arguments back inside the XML so the test can see them.
    let dir = tempfile::tempdir().unwrap();
    let nmap = script(
        &dir,
        "nmap",
        r#"printf '<nmaprun><host><ports><port protocol="tcp" portid="22"><state state="open"/><service name="%s"/></port></ports></host></nmaprun>' "$*""#,
    );
    let scan = ScanConfig {
        nmap_path: nmap,
        ..ScanConfig::default()
    };

    let ctx = services.context(Some("test-token"), scan);
    let out = run(&ctx, &invocation("192.0.2.10", Some("-n"), &["-sV"])).await;

    assert!(out.contains("  22/tcp - --top-ports 1000 -T4 -Pn -oX - 192.0.2.10 -sV\n"));
}

#[cfg(unix)]
#[tokio::test]
async fn nmap_garbage_output_is_parse_error() {
    let services = Services::start().await;
    services.expect_geo("192.0.2.10").await;

    let dir = tempfile::tempdir().unwrap();
    let nmap = script(&dir, "nmap", "echo 'not xml at all'");
    let scan = ScanConfig {
        nmap_path: nmap,
        ..ScanConfig::default()
    };

    let ctx = services.context(Some("test-token"), scan);
    let out = run(&ctx, &invocation("192.0.2.10", Some("-n"), &[])).await;

    assert!(out.contains("Failed to parse nmap output: "));
}

#[cfg(unix)]
#[tokio::test]
async fn masscan_prints_raw_output() {
    let services = Services::start().await;
    services.expect_geo("192.0.2.10").await;

    let dir = tempfile::tempdir().unwrap();
    let masscan = script(&dir, "masscan", "echo \"Discovered open port 22/tcp on $1\"");
    let scan = ScanConfig {
        masscan_path: masscan,
        ..ScanConfig::default()
    };

    let ctx = services.context(Some("test-token"), scan);
    let out = run(&ctx, &invocation("192.0.2.10", Some("-ma"), &[])).await;

    assert!(out.ends_with("Running masscan...\nDiscovered open port 22/tcp on 192.0.2.10\n\n"));
}

#[tokio::test]
async fn missing_scanner_binary_is_reported() {
    let services = Services::start().await;
    services.expect_geo("192.0.2.10").await;

    let scan = ScanConfig {
        masscan_path: "ipscout-test-no-such-masscan".to_string(),
        ..ScanConfig::default()
    };

    let ctx = services.context(Some("test-token"), scan);
    let out = run(&ctx, &invocation("192.0.2.10", Some("-ma"), &[])).await;

    assert!(out.contains("masscan command failed: failed to run ipscout-test-no-such-masscan"));
    assert!(out.ends_with("masscan output: \n"));
}

#[tokio::test]
async fn explain_precedes_each_step() {
    let services = Services::start().await;
    services.expect_geo("1.2.3.4").await;
    services.expect_intel("1.2.3.4", 1).await;

    let mut ctx = services.context(Some("test-token"), ScanConfig::default());
    ctx.explain = true;
    let out = run(&ctx, &invocation("1.2.3.4", None, &[])).await;

    let geo_explain = out.find("=== Geolocation ===").unwrap();
    let country = out.find("Country: US").unwrap();
    let intel_explain = out.find("=== InternetDB ===").unwrap();
    let intel = out.find("Ports: [22 80]").unwrap();
    assert!(geo_explain < country && country < intel_explain && intel_explain < intel);
    assert!(!out.contains("test-token"));
}
