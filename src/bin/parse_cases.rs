/// Parse a directory of judgment text files and emit JSONL.
///
/// Usage:
///   cargo run --features serde --bin parse-cases -- <text-dir>
///
/// Output (stdout): one JSON object per file:
///   {"file": "...", "case": {...}, "tags": [...]}
/// Errors (stderr): {"file": "...", "error": "..."}
/// Summary (stderr): "Done: N ok, M errors"
use std::env;
use std::fs;
use std::path::Path;

use caseparse::{parse_case, sanitize_tags, Config};
use serde_json::json;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: parse-cases <text-dir>");
        std::process::exit(1);
    }
    let text_dir = Path::new(&args[1]);

    let mut entries: Vec<_> = match fs::read_dir(text_dir) {
        Ok(dir) => dir
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|x| x == "txt"))
            .collect(),
        Err(e) => {
            eprintln!("cannot read {}: {e}", text_dir.display());
            std::process::exit(1);
        }
    };
    entries.sort();

    let config = Config::default();
    let mut ok = 0usize;
    let mut errors = 0usize;

    for path in &entries {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| {
                parse_case(&text.replace('\r', ""), &config).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(case) => {
                let tags = sanitize_tags(&case.subject_matters, &config);
                println!("{}", json!({ "file": filename, "case": case, "tags": tags }));
                ok += 1;
            }
            Err(error) => {
                eprintln!("{}", json!({ "file": filename, "error": error }));
                errors += 1;
            }
        }
    }

    eprintln!("Done: {ok} ok, {errors} errors  (total {})", ok + errors);
}
