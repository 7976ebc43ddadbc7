//! `module list` command

use std::fs;
use std::path::Path;

use console::Style;

use crate::error::Result;
use crate::workspace::Project;

const UNKNOWN_VERSION: &str = "unknown";

/// Installed module as shown by `module list`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

/// Run list command
pub fn run(project: &Project) -> Result<()> {
    let modules = collect_modules(&project.modules_dir())?;

    if modules.is_empty() {
        println!("No modules installed.");
        return Ok(());
    }

    println!("Installed modules ({}):", modules.len());
    println!();
    for module in &modules {
        println!(
            "  {} {}",
            Style::new().bold().yellow().apply_to(&module.name),
            Style::new().dim().apply_to(format!("v{}", module.version))
        );
        if !module.description.is_empty() {
            println!("    {}", module.description);
        }
    }

    Ok(())
}

/// Every directory under `modules_dir`, sorted by name
pub fn collect_modules(modules_dir: &Path) -> Result<Vec<ModuleInfo>> {
    if !modules_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut modules = Vec::new();
    for entry in fs::read_dir(modules_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        modules.push(read_module_info(&entry.path(), name));
    }

    modules.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(modules)
}

/// Version and description from the module's package.json
fn read_module_info(dir: &Path, name: String) -> ModuleInfo {
    let package = fs::read_to_string(dir.join("package.json"))
        .ok()
        .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok());

    let field = |key: &str| {
        package
            .as_ref()
            .and_then(|p| p.get(key))
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
    };

    ModuleInfo {
        version: field("version").unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
        description: field("description").unwrap_or_default(),
        name,
    }
}
