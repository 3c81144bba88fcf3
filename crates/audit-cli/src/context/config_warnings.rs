use audit_config::{BASE_PATH_ENV, ENV_PREFIX};

/// Config sections and an example key for each.
const SECTIONS: [(&str, &str); 4] = [
    ("INVENTORY", "AUDIT_BROWSER_INVENTORY__STRICT"),
    ("EXPORT", "AUDIT_BROWSER_EXPORT__OUTPUT_PATH"),
    ("SERVE", "AUDIT_BROWSER_SERVE__PORT"),
    ("GENERAL", "AUDIT_BROWSER_GENERAL__DEFAULT_LIMIT"),
];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_mistyped_env() {
    for warning in collect_env_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_env_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut warnings = Vec::new();

    for (key, value) in env {
        if key == BASE_PATH_ENV && value.trim().is_empty() {
            warnings.push(format!(
                "{BASE_PATH_ENV} is set but empty; using the default inventory location."
            ));
            continue;
        }

        let Some(rest) = key.strip_prefix(ENV_PREFIX) else {
            continue;
        };
        if rest.contains("__") {
            continue;
        }
        if let Some((section, example)) = SECTIONS
            .iter()
            .find(|(section, _)| rest.starts_with(&format!("{section}_")))
        {
            warnings.push(format!(
                "{key} is ignored; {section} settings need double underscores (example: {example})."
            ));
        }
    }

    warnings.sort();
    warnings
}
