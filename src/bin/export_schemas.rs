//! Writes JSON Schemas of the REST request and response bodies.

use anyhow::{Context, Result};
use clap::Parser;
use schemars::schema::RootSchema;
use schemars::schema_for;
use shipping_quote::api::rest::{
    ErrorResponse, HealthResponse, QuoteShippingRequest, QuoteShippingResponse,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(about = "Export JSON Schemas of the shipping quote REST API bodies")]
struct Args {
    /// Directory the schema files are written to
    #[arg(long, default_value = "schemas")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;

    let schemas: [(&str, RootSchema); 4] = [
        ("quote_shipping_request", schema_for!(QuoteShippingRequest)),
        ("quote_shipping_response", schema_for!(QuoteShippingResponse)),
        ("error_response", schema_for!(ErrorResponse)),
        ("health_response", schema_for!(HealthResponse)),
    ];

    for (name, schema) in &schemas {
        write_schema(&args.out_dir, name, schema)?;
    }
    Ok(())
}

fn write_schema(dir: &Path, name: &str, schema: &RootSchema) -> Result<()> {
    let path = dir.join(format!("{}.schema.json", name));
    let json = serde_json::to_string_pretty(schema).context("failed to serialize schema")?;
    fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}
