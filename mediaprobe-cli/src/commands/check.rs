use log::debug;
use mediaprobe_core::{ProcessRunner, Prober};

use crate::error::CliResult;
use crate::output::{print_info, print_success};

/// Execute the check command
pub fn run_check<R: ProcessRunner>(prober: &Prober<R>) -> CliResult<()> {
    debug!("Checking for {}", prober.config().program);
    let version = prober.check_available()?;
    print_info("ffprobe", &prober.config().program);
    print_info("Version", version);
    print_success("ffprobe is available");
    Ok(())
}
