use std::path::Path;

pub fn run(data: Option<&Path>, output: Option<&Path>) -> Result<(), String> {
    let loaded = super::load(data)?;

    let content = serde_json::to_string_pretty(&loaded.data)
        .map_err(|e| format!("JSON serialization failed: {e}"))?;

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        println!("{content}");
    }

    Ok(())
}
