//! Writes TypeScript declarations and a JSON schema for the wizard snapshot.
//!
//! Usage: `cargo run --bin generate_types [output-dir]` (default: `bindings/`)

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use ts_rs::TS;

use signup_wizard::wizard::{
    Addon, Cadence, Field, PersonalInfo, Plan, Step, Summary, SummaryLine, ValidationError,
    WizardSnapshot,
};

const TS_FILE: &str = "signup-wizard.ts";
const SCHEMA_FILE: &str = "wizard-snapshot.schema.json";

fn declarations() -> Vec<String> {
    vec![
        Cadence::decl(),
        Step::decl(),
        Field::decl(),
        Plan::decl(),
        Addon::decl(),
        PersonalInfo::decl(),
        ValidationError::decl(),
        SummaryLine::decl(),
        Summary::decl(),
        WizardSnapshot::decl(),
    ]
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("bindings"), PathBuf::from);
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let mut ts = String::from("// Generated by generate_types. Do not edit.\n\n");
    for decl in declarations() {
        ts.push_str("export ");
        ts.push_str(&decl);
        ts.push_str("\n\n");
    }
    let ts_path = out_dir.join(TS_FILE);
    fs::write(&ts_path, ts).with_context(|| format!("Failed to write {}", ts_path.display()))?;
    println!("Wrote {}", ts_path.display());

    let schema = schemars::schema_for!(WizardSnapshot);
    let json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
    let schema_path = out_dir.join(SCHEMA_FILE);
    fs::write(&schema_path, json)
        .with_context(|| format!("Failed to write {}", schema_path.display()))?;
    println!("Wrote {}", schema_path.display());

    Ok(())
}
