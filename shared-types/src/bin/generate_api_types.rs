use shared_types::typescript_gen::{clean_type, ALL_TYPE_NAMES};
use shared_types::generate_typescript_definitions;
use std::fs;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for API types
    let output = generate_typescript_definitions(ALL_TYPE_NAMES)?;

    let output_dir = Path::new("frontend/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    fs::write(&output_path, format!("{}\n", clean_type(output)))?;
    println!(
        "Generated {} TypeScript types in {}",
        ALL_TYPE_NAMES.len(),
        output_path.display()
    );

    Ok(())
}
