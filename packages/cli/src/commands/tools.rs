use anyhow::Result;
use clap::Args;
use scribe_editor::tool_definitions;

#[derive(Args, Debug)]
pub struct ToolsArgs {
    /// Print only the tool names
    #[arg(long)]
    pub names: bool,
}

pub fn tools(args: ToolsArgs) -> Result<()> {
    let definitions = tool_definitions();

    if args.names {
        for tool in &definitions {
            println!("{}", tool.name);
        }
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&definitions)?);
    Ok(())
}
