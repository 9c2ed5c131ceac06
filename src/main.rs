use clap::Parser;
use log::debug;
use serde_json::json;

use recipe_search::{RecipeSearch, ToolOutcome};

/// Search the recipe service the same way the agent runtime would
#[derive(Parser, Debug)]
#[command(name = "recipe-search", version, about)]
struct Args {
    /// Query text to search for recipes
    #[arg(required_unless_present = "print_schema")]
    query: Option<String>,

    /// Number of results to offset for pagination
    #[arg(long, default_value_t = 0)]
    offset: u32,

    /// Print the function declaration as JSON and exit
    #[arg(long)]
    print_schema: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    if args.print_schema {
        println!("{}", serde_json::to_string_pretty(&recipe_search::declaration())?);
        return Ok(());
    }

    let search = RecipeSearch::from_env()?;
    let call_args = json!({"query": args.query.unwrap_or_default(), "offset": args.offset});
    debug!("search_recipes({})", call_args);

    match search.outcome(&call_args) {
        ToolOutcome::Answer(text) => {
            println!("{}", text);
            Ok(())
        }
        ToolOutcome::Failed(err) => {
            eprintln!("{}", serde_json::to_string_pretty(&err)?);
            std::process::exit(1);
        }
    }
}
