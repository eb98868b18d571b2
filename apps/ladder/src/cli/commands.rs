//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::api::{self, RoleJson, RolesResponse, StepJson, SummaryJson};
use ladder_core::{
    AssessmentSession, FinalScorePolicy, LadderError, RoleCatalog, RoleDefinition, RoleLevel,
    Scoresheet, Step, StepKind,
};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum size of a role catalog file (1 MB).
const MAX_CATALOG_FILE_SIZE: u64 = 1024 * 1024;

/// Maximum size of a scoresheet file (1 MB).
const MAX_SCORESHEET_FILE_SIZE: u64 = 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), LadderError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| LadderError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(LadderError::SerializationError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Canonicalize an input path and make sure it is a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, LadderError> {
    let canonical = path.canonicalize().map_err(|e| {
        LadderError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(LadderError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Read a bounded text file.
fn read_input_file(path: &Path, max_size: u64) -> Result<String, LadderError> {
    let validated = validate_file_path(path)?;
    validate_file_size(&validated, max_size)?;
    std::fs::read_to_string(&validated)
        .map_err(|e| LadderError::IoError(format!("Read file: {}", e)))
}

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(
    db_path: &Path,
    catalog: RoleCatalog,
    host: &str,
    port: u16,
) -> Result<(), LadderError> {
    let session = AssessmentSession::with_redb(db_path, catalog)?;

    println!("Ladder Assessment Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:     {}", host);
    println!("  Port:     {}", port);
    println!("  Database: {:?}", db_path);
    println!();
    println!("Endpoints:");
    println!("  GET  /health                      - Health check");
    println!("  GET  /roles                       - Role catalog");
    println!("  GET  /steps/{{step}}                - Wizard page");
    println!("  GET  /assessments/{{level}}         - Role scores");
    println!("  POST /assessments/{{level}}/scores  - Set a score");
    println!("  PUT  /assessments/{{level}}/notes   - Set notes");
    println!("  GET  /summary                     - Review summary");
    println!("  GET  /name, PUT /name             - Participant name");
    println!("  GET  /intake, PUT /intake         - Intake form");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, session).await
}

// =============================================================================
// OVERVIEW & ROLES COMMANDS
// =============================================================================

/// Show the catalog overview (default command).
pub fn cmd_overview(catalog: &RoleCatalog, json_mode: bool) -> Result<(), LadderError> {
    if json_mode {
        let roles: Vec<serde_json::Value> = catalog
            .roles()
            .iter()
            .map(|r| {
                serde_json::json!({
                    "level": r.level.slug(),
                    "title": r.title(),
                    "step": r.level.step_number(),
                    "sections": r.sections.len(),
                    "criteria": r.criterion_count(),
                })
            })
            .collect();
        print_json(&serde_json::json!({
            "roles": roles,
            "total_criteria": catalog.criterion_count(),
        }));
        return Ok(());
    }

    println!("Ladder Role Catalog");
    println!("===================");
    println!();
    for role in catalog.roles() {
        println!(
            "  Step {}  {:<30} {} sections, {} criteria",
            role.level.step_number(),
            role.title(),
            role.sections.len(),
            role.criterion_count()
        );
    }
    println!();
    println!("Total criteria: {}", catalog.criterion_count());

    Ok(())
}

fn print_role(role: &RoleDefinition) {
    println!("{} ({})", role.title(), role.level.slug());
    if !role.description.is_empty() {
        println!("  {}", role.description);
    }
    for section in role.sections.iter() {
        println!();
        println!("  {}", section.title);
        for criterion in section.criteria.iter() {
            println!("    - [{}] {}", criterion.id, criterion.description);
        }
    }
    println!();
}

/// List role tables, optionally a single level.
pub fn cmd_roles(
    catalog: &RoleCatalog,
    json_mode: bool,
    level: Option<&str>,
) -> Result<(), LadderError> {
    let roles: Vec<&RoleDefinition> = match level {
        Some(text) => {
            let level = text.parse::<RoleLevel>()?;
            let role = catalog
                .role(level)
                .ok_or_else(|| LadderError::UnknownRole(text.to_string()))?;
            vec![role]
        }
        None => catalog.roles().iter().collect(),
    };

    if json_mode {
        let output = match roles.as_slice() {
            [role] => serde_json::to_value(RoleJson::from(*role)),
            _ => serde_json::to_value(RolesResponse::from_catalog(catalog)),
        }
        .map_err(|e| LadderError::SerializationError(e.to_string()))?;
        print_json(&output);
        return Ok(());
    }

    for role in roles {
        print_role(role);
    }
    Ok(())
}

// =============================================================================
// STEP COMMAND
// =============================================================================

/// Show a wizard page.
pub fn cmd_step(catalog: &RoleCatalog, json_mode: bool, step: &str) -> Result<(), LadderError> {
    let step = Step::parse(step)?;

    if json_mode {
        let output = serde_json::to_value(StepJson::new(step, catalog))
            .map_err(|e| LadderError::SerializationError(e.to_string()))?;
        print_json(&output);
        return Ok(());
    }

    let page = step.page(catalog);
    println!("Step {} of {} ({}%)", step, Step::LAST, step.progress_percent());
    println!("{}", page.title);
    println!("{}", page.description);
    println!();

    match step.kind() {
        StepKind::Role(level) => {
            if let Some(role) = catalog.role(level) {
                for section in role.sections.iter() {
                    println!("  {} ({} criteria)", section.title, section.criteria.len());
                }
            }
        }
        StepKind::Intake => println!("  Self assessment or manager assessment"),
        StepKind::Review => println!("  Summary of all six roles"),
    }

    Ok(())
}

// =============================================================================
// NAME COMMAND
// =============================================================================

/// Show or set the cached participant name.
pub fn cmd_name(
    db_path: &Path,
    catalog: RoleCatalog,
    json_mode: bool,
    set: Option<&str>,
) -> Result<(), LadderError> {
    let mut session = AssessmentSession::with_redb(db_path, catalog)?;

    if let Some(name) = set {
        session.set_name(name)?;
        tracing::info!("Name updated in {:?}", db_path);
    }

    let name = session.name();
    if json_mode {
        print_json(&serde_json::json!({ "name": name }));
    } else if name.is_empty() {
        println!("No name set");
    } else {
        println!("{}", name);
    }

    Ok(())
}

// =============================================================================
// SCORE COMMAND
// =============================================================================

/// Parse a scoresheet, choosing the format by file extension.
fn parse_scoresheet(path: &Path, text: &str) -> Result<Scoresheet, LadderError> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(text).map_err(|e| LadderError::SerializationError(e.to_string()))
    } else {
        Scoresheet::from_toml_str(text)
    }
}

/// Score a scoresheet and print the review summary.
pub fn cmd_score(
    catalog: RoleCatalog,
    json_mode: bool,
    verbose: bool,
    file: &Path,
    final_score: &str,
) -> Result<(), LadderError> {
    let policy = final_score.parse::<FinalScorePolicy>()?;
    let text = read_input_file(file, MAX_SCORESHEET_FILE_SIZE)?;
    let sheet = parse_scoresheet(file, &text)?;

    tracing::info!(
        "Applying {} scores for {} roles from {:?}",
        sheet.score_count(),
        sheet.roles.len(),
        file
    );

    let mut session = AssessmentSession::new(catalog);
    sheet.apply(&mut session)?;
    let summary = session.summary(policy)?;

    if json_mode {
        let output = serde_json::to_value(SummaryJson::from(&summary))
            .map_err(|e| LadderError::SerializationError(e.to_string()))?;
        print_json(&output);
        return Ok(());
    }

    println!("Assessment Summary");
    println!("==================");
    for role in &summary.roles {
        println!();
        println!("{:<30} {}", role.title, role.overall);
        if verbose {
            for section in &role.sections {
                println!("    {:<46} {}", section.title, section.average);
            }
        }
        if !role.notes.is_empty() {
            println!("    Notes: {}", role.notes);
        }
    }
    println!();
    println!("Final Score: {} ({})", summary.final_score, summary.policy);

    Ok(())
}

// =============================================================================
// VALIDATE COMMAND
// =============================================================================

/// Report on the (already validated) role catalog.
pub fn cmd_validate(
    catalog: &RoleCatalog,
    json_mode: bool,
    source: Option<&Path>,
) -> Result<(), LadderError> {
    let source = source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());

    if json_mode {
        print_json(&serde_json::json!({
            "valid": true,
            "source": source,
            "roles": catalog.roles().len(),
            "criteria": catalog.criterion_count(),
        }));
        return Ok(());
    }

    println!("Catalog OK ({})", source);
    println!(
        "  {} roles, {} criteria",
        catalog.roles().len(),
        catalog.criterion_count()
    );
    Ok(())
}

// =============================================================================
// INIT COMMAND
// =============================================================================

/// Initialize a new name database.
pub fn cmd_init(db_path: &Path, catalog: RoleCatalog, force: bool) -> Result<(), LadderError> {
    if db_path.exists() {
        if !force {
            return Err(LadderError::IoError(
                "Database already exists. Use --force to overwrite.".to_string(),
            ));
        }
        std::fs::remove_file(db_path)
            .map_err(|e| LadderError::IoError(format!("Remove existing database: {}", e)))?;
    }

    let session = AssessmentSession::with_redb(db_path, catalog)?;
    println!(
        "Initialized new redb database at {:?} (name: {:?})",
        db_path,
        session.name()
    );
    Ok(())
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Load the role catalog from a TOML file, or the built-in tables.
pub fn load_catalog(path: Option<&Path>) -> Result<RoleCatalog, LadderError> {
    match path {
        Some(path) => {
            let text = read_input_file(path, MAX_CATALOG_FILE_SIZE)?;
            let catalog = RoleCatalog::from_toml_str(&text)?;
            tracing::info!("Loaded role catalog from {:?}", path);
            Ok(catalog)
        }
        None => RoleCatalog::builtin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladder_core::{NameCache, RedbNameCache};
    use tempfile::TempDir;

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = TempDir::new().expect("tempdir");
        let db = dir.path().join("ladder.db");
        cmd_init(&db, RoleCatalog::builtin().expect("builtin"), false).expect("init");
        assert!(cmd_init(&db, RoleCatalog::builtin().expect("builtin"), false).is_err());
        cmd_init(&db, RoleCatalog::builtin().expect("builtin"), true).expect("force");
    }

    #[test]
    fn name_command_persists() {
        let dir = TempDir::new().expect("tempdir");
        let db = dir.path().join("ladder.db");
        cmd_name(&db, RoleCatalog::builtin().expect("builtin"), true, Some("Robin"))
            .expect("set");
        assert_eq!(RedbNameCache::open(&db).expect("open").get(), "Robin");
    }

    #[test]
    fn score_command_reads_json_and_toml() {
        let dir = TempDir::new().expect("tempdir");
        let toml_path = dir.path().join("sheet.toml");
        std::fs::write(
            &toml_path,
            "[[roles]]\nlevel = \"product-designer\"\n[roles.scores]\nhiring = 4.5\n",
        )
        .expect("write");
        cmd_score(
            RoleCatalog::builtin().expect("builtin"),
            true,
            false,
            &toml_path,
            "mean",
        )
        .expect("toml");

        let json_path = dir.path().join("sheet.json");
        std::fs::write(
            &json_path,
            r#"{"roles":[{"level":"product-designer","scores":{"hiring":6}}]}"#,
        )
        .expect("write");
        assert!(cmd_score(
            RoleCatalog::builtin().expect("builtin"),
            true,
            false,
            &json_path,
            "mean",
        )
        .is_err());
    }

    #[test]
    fn step_command_rejects_out_of_range() {
        let catalog = RoleCatalog::builtin().expect("builtin");
        assert!(cmd_step(&catalog, true, "3").is_ok());
        assert!(matches!(
            cmd_step(&catalog, true, "9"),
            Err(LadderError::InvalidStep(_))
        ));
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        assert!(load_catalog(Some(Path::new("/nonexistent/catalog.toml"))).is_err());
        assert!(load_catalog(None).is_ok());
    }
}
