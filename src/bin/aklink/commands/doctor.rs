//! `aklink doctor` command

use anyhow::Result;

use crate::cli::DoctorArgs;
use aklink::ops::{doctor, format_report, resolve_linkage};
use aklink::resolver::FsProbe;
use aklink::util::GlobalContext;

pub fn execute(args: DoctorArgs, verbose: bool) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let plan = resolve_linkage(&args.target.to_request(), &ctx)?;

    let report = doctor(&plan, &FsProbe);

    // Print the formatted report
    print!("{}", format_report(&report, verbose));

    // Exit with error code if required checks failed
    if !report.all_required_passed() {
        std::process::exit(1);
    }

    Ok(())
}
