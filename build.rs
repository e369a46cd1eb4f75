//! Build script to generate embedded word pools
//!
//! Reads the category word files under data/ and generates Rust source code
//! with const arrays. Pool order and duplicates are kept exactly as shipped;
//! deduplicating would change the selection distribution.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const CATEGORY_POOLS: &[(&str, &str, &str)] = &[
    ("data/animals.txt", "ANIMALS", "Animal names from around the world"),
    ("data/technology.txt", "TECHNOLOGY", "Modern tech terms and gadgets"),
    ("data/sports.txt", "SPORTS", "Sports terminology and disciplines"),
    ("data/food.txt", "FOOD", "Foods from around the world"),
    ("data/movies.txt", "MOVIES", "Famous movie titles"),
    ("data/programming.txt", "PROGRAMMING", "Coding terms and languages"),
    ("data/countries.txt", "COUNTRIES", "Countries from around the world"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for &(input, const_name, doc) in CATEGORY_POOLS {
        let output = Path::new(&out_dir).join(format!("{}.rs", const_name.to_lowercase()));
        generate_word_list(input, &output, const_name, doc);
        println!("cargo:rerun-if-changed={input}");
    }

    // General-English list backing the synthetic "random" category
    generate_word_list(
        "data/random_words.txt",
        &Path::new(&out_dir).join("random_words.rs"),
        "RANDOM_WORDS",
        "General English words (4-12 letters) for the random category",
    );
    println!("cargo:rerun-if-changed=data/random_words.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{}\",", word.trim()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
