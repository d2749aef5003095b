//! Build script to generate the bundled puzzle table
//!
//! Reads every `data/puzzles/<name>.b64` blob and generates Rust source with a
//! const table of `(name, blob)` pairs.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const PUZZLE_DIR: &str = "data/puzzles";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_puzzle_table(
        Path::new(PUZZLE_DIR),
        &Path::new(&out_dir).join("bundled.rs"),
    );

    // Rebuild if a puzzle is added, removed or edited
    println!("cargo:rerun-if-changed={PUZZLE_DIR}");
}

fn generate_puzzle_table(input_dir: &Path, output_path: &Path) {
    let mut entries: Vec<(String, String)> = fs::read_dir(input_dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", input_dir.display()))
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "b64"))
        .map(|path| {
            println!("cargo:rerun-if-changed={}", path.display());
            let name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_else(|| panic!("Non UTF-8 puzzle name: {}", path.display()))
                .to_string();
            let blob = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
            (name, blob.trim().to_string())
        })
        .collect();

    // Stable order regardless of directory iteration order
    entries.sort();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated puzzle table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// Base64 puzzle blobs from {PUZZLE_DIR}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Bundled puzzles as `(name, base64 blob)` pairs, sorted by name").unwrap();
    writeln!(output, "pub const BUNDLED: &[(&str, &str)] = &[").unwrap();

    for (name, blob) in &entries {
        writeln!(output, "    ({name:?}, {blob:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of bundled puzzles").unwrap();
    writeln!(output, "pub const BUNDLED_COUNT: usize = {count};").unwrap();
}
