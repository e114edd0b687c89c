//! Build script to generate the embedded dictionary
//!
//! Reads the dictionary file and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const DICTIONARY_PATH: &str = "data/dictionary.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    generate_word_list(
        DICTIONARY_PATH,
        &Path::new(&out_dir).join("dictionary.rs"),
        "DICTIONARY",
        "Default Distle dictionary (mixed word lengths)",
    );

    println!("cargo:rerun-if-changed={DICTIONARY_PATH}");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Blank lines and `#` comments are allowed in the source list
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let count = words.len();

    let mut source = String::new();
    source.push_str("// Generated word list\n\n");
    source.push_str(&format!("/// {doc_comment}\n"));
    source.push_str(&format!("pub const {const_name}: &[&str] = &[\n"));
    for word in words {
        source.push_str(&format!("    {word:?},\n"));
    }
    source.push_str("];\n\n");
    source.push_str(&format!("/// Number of words in {const_name}\n"));
    source.push_str(&format!("pub const {const_name}_COUNT: usize = {count};\n"));

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));
    output
        .write_all(source.as_bytes())
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}
