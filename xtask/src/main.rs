//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    // If we're in the xtask directory, go up one level
    if manifest_dir.ends_with("xtask")
        && let Some(parent) = manifest_dir.parent()
    {
        return Ok(parent.to_path_buf());
    }
    Ok(manifest_dir)
}

/// Get the schemas directory path.
fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

/// Get the end-to-end fixtures directory path.
fn fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

/// Generate the Lint2PromptConfigV1 schema.
fn generate_config_schema() -> schemars::Schema {
    schema_for!(lint2prompt_settings::Lint2PromptConfigV1)
}

/// Generate the diagnostics input document schema.
fn generate_diagnostics_schema() -> schemars::Schema {
    schema_for!(lint2prompt_source::RawDiagnosticsDocument)
}

/// List of schemas to generate.
fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "lint2prompt.config.v1.json",
            generate: generate_config_schema,
        },
        SchemaSpec {
            filename: "lint2prompt.diagnostics.v1.json",
            generate: generate_diagnostics_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate tests/fixtures against the generated schemas");
}

/// Fixture paths must be relative so fixtures run from any checkout.
fn is_clean_path(path: &str) -> bool {
    !(path.starts_with('/')
        || path.starts_with('\\')
        || path.contains("..")
        || path.contains('\\')
        // Reject Windows-style drive letters like C:
        || (path.len() >= 2 && path.as_bytes()[1] == b':'))
}

/// Path of each file entry, whichever of the two entry shapes it uses.
fn entry_paths(doc: &serde_json::Value) -> Vec<String> {
    doc.as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("path").or_else(|| entry.get(0)))
                .filter_map(|p| p.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn compile(spec: &SchemaSpec) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value((spec.generate)()).context("Failed to serialize schema")?;
    jsonschema::validator_for(&value)
        .map_err(|e| anyhow::anyhow!("Failed to compile {}: {}", spec.filename, e))
}

/// Validate one fixture directory, appending problems to `errors`.
fn conform_fixture(
    dir: &Path,
    diagnostics_schema: &jsonschema::Validator,
    errors: &mut Vec<String>,
) -> anyhow::Result<()> {
    let name = dir
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let doc_path = dir.join("diagnostics.json");
    let content = fs::read_to_string(&doc_path)
        .with_context(|| format!("Failed to read {}", doc_path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {name}/diagnostics.json as JSON"))?;

    // 1. Schema validation
    for err in diagnostics_schema.iter_errors(&value) {
        errors.push(format!("{name}: schema validation: {err}"));
    }

    // 2. The input adapter accepts what the schema accepts
    if let Err(err) = lint2prompt_source::parse_diagnostics_json(&content) {
        errors.push(format!("{name}: parser rejected diagnostics.json: {err:#}"));
    }

    // 3. Path hygiene
    for path in entry_paths(&value) {
        if !is_clean_path(&path) {
            errors.push(format!("{name}: path '{path}' must be relative to the fixture"));
        }
    }

    // 4. Optional config
    let cfg_path = dir.join("lint2prompt.toml");
    if cfg_path.exists() {
        let text = fs::read_to_string(&cfg_path)
            .with_context(|| format!("Failed to read {}", cfg_path.display()))?;
        if let Err(err) = lint2prompt_settings::load_config(&text, Default::default()) {
            errors.push(format!("{name}: lint2prompt.toml: {err:#}"));
        }
    }

    Ok(())
}

/// Validate every end-to-end fixture against the generated schemas and loaders.
fn conform() -> anyhow::Result<()> {
    let specs = schema_specs();
    for spec in &specs {
        compile(spec)?;
        println!("✓ {} compiles", spec.filename);
    }
    let diagnostics_schema = specs
        .iter()
        .find(|s| s.filename == "lint2prompt.diagnostics.v1.json")
        .map(compile)
        .context("diagnostics schema not registered")??;

    let dir = fixtures_dir()?;
    if !dir.exists() {
        bail!("tests/fixtures/ not found at {}", dir.display());
    }

    let mut fixture_dirs: Vec<PathBuf> = fs::read_dir(&dir)
        .context("Failed to read tests/fixtures/")?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.join("diagnostics.json").is_file())
        .collect();
    fixture_dirs.sort();

    let mut errors = Vec::new();
    for fixture in &fixture_dirs {
        conform_fixture(fixture, &diagnostics_schema, &mut errors)?;
    }

    if errors.is_empty() {
        println!("✓ {} fixtures conform", fixture_dirs.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {error}");
        }
        bail!("Conformance failed with {} errors", errors.len())
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "conform" => conform(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
