use eggmodel::{Generator, Options};
use wasm_bindgen::prelude::*;

/// Returns the generated files as a JSON array of `{ file_name, content }` objects.
#[wasm_bindgen]
pub fn generate(schema_json: &str) -> Result<String, String> {
    let generator = Generator::new(Options::default());
    let files = generator
        .generate(schema_json)
        .map_err(|e| e.to_string())?;
    serde_json::to_string(&files).map_err(|e| e.to_string())
}
