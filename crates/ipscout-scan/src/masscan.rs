//! masscan wrapper. Output is passed through as text.

use crate::scanner::{run_tool, ScanConfig, ScanOutput};
use ipscout_core::Result;

/// masscan invocation against a single target
pub struct Masscan<'a> {
    config: &'a ScanConfig,
}

impl<'a> Masscan<'a> {
    /// Create a wrapper using the given configuration
    #[must_use]
    pub const fn new(config: &'a ScanConfig) -> Self {
        Self { config }
    }

    /// Build the argument list: target, rate, port range
    #[must_use]
    pub fn args(&self, target: &str) -> Vec<String> {
        let mut args = vec![
            target.to_string(),
            "--rate".to_string(),
            self.config.masscan_rate.to_string(),
        ];
        args.extend(self.config.masscan_ports.to_args());
        args
    }

    /// Run masscan and return its raw output
    pub async fn run(&self, target: &str) -> Result<ScanOutput> {
        run_tool(&self.config.masscan_path, self.args(target)).await
    }
}
