//! `webrtc-recipe requirements` command

use anyhow::Result;

use crate::cli::OutputArgs;
use webrtc_recipe::core::recipe;

pub fn execute(args: OutputArgs) -> Result<()> {
    let requirements = recipe::requirements();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&requirements)?);
    } else {
        for req in &requirements {
            println!("{}", req);
        }
    }

    Ok(())
}
