//! `aklink flags` command

use anyhow::Result;

use crate::cli::FlagsArgs;
use aklink::ops::resolve_linkage;
use aklink::util::GlobalContext;

pub fn execute(args: FlagsArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let plan = resolve_linkage(&args.target.to_request(), &ctx)?;
    let label = format!("{}/{}", plan.platform, plan.configuration);

    if !args.link {
        println!("# Compile flags for `{}`:", label);
        for flag in plan.compile_flags() {
            println!("  {}", flag);
        }
    }

    if !args.compile && !args.link {
        println!();
    }

    if !args.compile {
        println!("# Link flags for `{}`:", label);
        for flag in plan.link_flags() {
            println!("  {}", flag);
        }
    }

    Ok(())
}
