//! Usage: catalog request <METHOD> <PATH> [--field name=value]...

use super::CommandResult;
use catalog_api::{Catalog, FormData};
use catalog_core::CatalogConfig;
use clap::Args;

#[derive(Debug, Args)]
pub struct RequestArgs {
    /// HTTP method (GET or POST)
    pub method: String,

    /// Route path, e.g. /catalog/categories
    pub path: String,

    /// Form field as name=value; repeat for multiple values
    #[arg(long = "field", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,
}

pub fn execute(config: &CatalogConfig, args: RequestArgs) -> CommandResult {
    let catalog = Catalog::from_config(config);
    let form: FormData = args.fields.into_iter().collect();
    let page = catalog.handle_request(&args.method, &args.path, &form)?;
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got `{raw}`"))
}
