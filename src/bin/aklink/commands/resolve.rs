//! `aklink resolve` command

use anyhow::Result;

use super::join_or_none;
use crate::cli::{OutputFormat, ResolveArgs};
use aklink::core::LinkagePlan;
use aklink::ops::resolve_linkage;
use aklink::util::GlobalContext;

pub fn execute(args: ResolveArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let plan = resolve_linkage(&args.target.to_request(), &ctx)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
        OutputFormat::Text => print_plan(&plan),
    }

    Ok(())
}

fn print_plan(plan: &LinkagePlan) {
    println!(
        "Linkage plan for '{}/{}':",
        plan.platform, plan.configuration
    );
    if let Some(toolset) = plan.toolset {
        println!("  toolset: {}", toolset);
    }
    println!();

    println!("Include directories:");
    for dir in &plan.include_dirs {
        println!("  {}", dir.display());
    }
    println!();

    println!("Library directories:");
    for dir in &plan.lib_dirs {
        println!("  {}", dir.display());
    }
    for dir in &plan.system_lib_dirs {
        println!("  {}    (system)", dir);
    }
    println!();

    println!("Libraries:");
    for (index, entry) in plan.link_entries().iter().enumerate() {
        println!("  {}. {}", index + 1, entry);
    }
    println!();

    println!("Definitions:");
    for define in &plan.definitions {
        println!("  {}", define);
    }

    if !plan.frameworks.is_empty() {
        println!();
        println!("Frameworks:");
        for framework in &plan.frameworks {
            println!("  {}", framework);
        }
    }

    if !plan.addons.is_empty() {
        println!();
        println!("Add-ons:");
        for addon in &plan.addons {
            match &addon.artifact {
                Some(path) => println!("  {} (installed: {})", addon.name, path.display()),
                None => println!("  {} (not installed)", addon.name),
            }
        }
    }

    println!();
    println!("Module dependencies:");
    println!("  public: {}", join_or_none(&plan.modules.public));
    println!("  private: {}", join_or_none(&plan.modules.private));
    println!(
        "  private include paths: {}",
        join_or_none(&plan.modules.private_include_paths)
    );
}
