use kiln_core::OPTIMIZATION_LEVELS;

/// Parse an `-O` level.
///
/// Accepts the bare level (`2`, `s`) as well as the `-O` spelling (`O2`).
pub fn parse_opt_level(s: &str) -> Result<String, String> {
    let level = s.strip_prefix('O').unwrap_or(s);
    if OPTIMIZATION_LEVELS.contains(&level) {
        Ok(level.to_string())
    } else {
        Err(format!(
            "invalid optimization level '{s}' (expected one of {})",
            OPTIMIZATION_LEVELS.join(", ")
        ))
    }
}

/// Parse a preprocessor macro for `-D`.
///
/// `NAME` and `NAME=VALUE` are accepted; the name must be a C identifier.
pub fn parse_define(s: &str) -> Result<String, String> {
    let name = s.split_once('=').map_or(s, |(name, _)| name);

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err("macro name cannot be empty".to_string());
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(format!(
            "macro name must start with a letter or underscore: '{s}'"
        ));
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!(
            "macro name can only contain letters, digits or underscores: '{s}'"
        ));
    }
    if s.chars().any(char::is_whitespace) {
        return Err(format!("macro cannot contain whitespace: '{s}'"));
    }

    Ok(s.to_string())
}
