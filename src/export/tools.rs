//! External tool/interpreter path detection.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::ExportMethod;
use crate::state::settings::ToolPaths;

/// Check if the interpreter and the script for `method` can be found locally.
pub fn tools_available(tools: &ToolPaths, method: ExportMethod) -> bool {
    interpreter_path(tools).is_ok() && script_path(tools, method).is_ok()
}

/// Find the configured Python interpreter.
pub fn interpreter_path(tools: &ToolPaths) -> Result<PathBuf> {
    find_tool(&tools.python).ok_or_else(|| Error::ToolNotFound(tools.python.clone()))
}

/// Find the script a method's command runs.
pub fn script_path(tools: &ToolPaths, method: ExportMethod) -> Result<PathBuf> {
    let configured = tools.script(method);
    find_tool(configured).ok_or_else(|| Error::ToolNotFound(configured.to_string()))
}

fn find_tool(name: &str) -> Option<PathBuf> {
    let path = Path::new(name);

    // 1. Explicit path
    if path.components().count() > 1 || path.is_absolute() {
        return path.is_file().then(|| path.to_path_buf());
    }

    // 2. Check resources/scripts (dev mode)
    let dev_path = PathBuf::from("resources/scripts").join(name);
    if dev_path.is_file() {
        return Some(dev_path);
    }

    // 3. Check PATH
    which::which(name).ok()
}
