//! `aklink variants` command

use anyhow::Result;

use crate::cli::{OutputFormat, VariantsArgs};
use aklink::resolver::variant_table;

pub fn execute(args: VariantsArgs) -> Result<()> {
    let rows = variant_table(args.debug_crt);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Text => {
            println!("{:<10} {:<13} VARIANT", "PLATFORM", "CONFIGURATION");
            for row in &rows {
                println!(
                    "{:<10} {:<13} {}",
                    row.platform.as_str(),
                    row.configuration.as_str(),
                    row.variant
                );
            }
        }
    }

    Ok(())
}
