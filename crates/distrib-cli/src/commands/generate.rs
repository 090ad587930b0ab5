use std::path::Path;

use anyhow::Context;
use distrib_core::{GeneratorOptions, generate_text};

pub fn generate(output: &Path, options: GeneratorOptions) -> anyhow::Result<()> {
    let text = generate_text(&options)?;
    std::fs::write(output, &text)
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(
        path = %output.display(),
        entries = options.num_entries,
        "Generated record list"
    );
    println!("✓ Wrote {} entries to {}", options.num_entries, output.display());
    Ok(())
}
