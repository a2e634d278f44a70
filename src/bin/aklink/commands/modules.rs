//! `aklink modules` command

use anyhow::Result;

use super::join_or_none;
use crate::cli::{ModulesArgs, OutputFormat};
use aklink::core::modules::{self, ModuleRules};

pub fn execute(args: ModulesArgs) -> Result<()> {
    let rules = match &args.name {
        Some(name) => vec![modules::find(name)?],
        None => modules::all(),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rules)?),
        OutputFormat::Text => {
            for (i, module) in rules.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_module(module);
            }
        }
    }

    Ok(())
}

fn print_module(module: &ModuleRules) {
    println!("{}", module.name);
    println!("  public: {}", join_or_none(&module.deps.public));
    println!("  private: {}", join_or_none(&module.deps.private));
    println!(
        "  private include paths: {}",
        join_or_none(&module.deps.private_include_paths)
    );
}
