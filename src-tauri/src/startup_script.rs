use std::{fs, path::Path};

use crate::{RendererStartupArgs, PRELOAD_SCRIPT_FILE};

pub(crate) fn serialize_startup_args(args: &RendererStartupArgs) -> Result<String, String> {
    serde_json::to_string(args)
        .map_err(|error| format!("Failed to serialize renderer startup args: {error}"))
}

/// Builds the script every renderer window runs before its own code: the
/// startup argument first, then the optional preload and devtools hook.
pub(crate) fn build_initialization_script(
    args: &RendererStartupArgs,
    preload_script: Option<&str>,
    devtools_hook: Option<&str>,
) -> Result<String, String> {
    let args_json = serialize_startup_args(args)?;
    let args_literal = serde_json::to_string(&args_json)
        .map_err(|error| format!("Failed to encode renderer startup args literal: {error}"))?;

    let mut script = format!(
        r#"(function () {{
  const raw = {args_literal};
  Object.defineProperty(window, "__VUELECTRO_ARGV__", {{
    value: Object.freeze([raw]),
    writable: false,
    configurable: false,
  }});
  Object.defineProperty(window, "__VUELECTRO_ARGS__", {{
    value: Object.freeze(JSON.parse(raw)),
    writable: false,
    configurable: false,
  }});
}})();
"#
    );

    if let Some(preload) = preload_script.filter(|body| !body.trim().is_empty()) {
        script.push_str(preload);
        script.push('\n');
    }
    if let Some(hook) = devtools_hook {
        script.push_str(hook);
        script.push('\n');
    }

    Ok(script)
}

/// Reads `<app_path>/preload.js`; a missing file is not an error.
pub(crate) fn read_preload_script(app_path: &Path) -> Result<Option<String>, String> {
    let preload_path = app_path.join(PRELOAD_SCRIPT_FILE);
    match fs::read_to_string(&preload_path) {
        Ok(body) => Ok(Some(body)),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(format!(
            "Failed to read preload script {}: {}",
            preload_path.display(),
            error
        )),
    }
}
