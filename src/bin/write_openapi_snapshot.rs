// src/bin/write_openapi_snapshot.rs
use anyhow::{Context, Result};
use std::{env, fs, path::PathBuf};
use tickets_machine::presentation::http::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path = PathBuf::from(
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "openapi.json".to_string()),
    );

    let document = ApiDoc::openapi()
        .to_pretty_json()
        .context("serialising OpenAPI document")?;
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(&output_path, document)
        .with_context(|| format!("writing {}", output_path.display()))?;

    println!("OpenAPI snapshot written to {}", output_path.display());
    Ok(())
}
