use anyhow::{Context, Result};
use sheetscrub::{
    process::HeaderTracker,
    read::{list_matching_files, DelimitedReader},
};
use std::{env, path::PathBuf};

/// Print how every line of the given files (or of every matching file in a
/// folder) would be classified, without writing anything.
///
/// Usage: inspect_lines <file-or-folder> [suffix]
fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <file-or-folder> [suffix]", args[0]);
        std::process::exit(1);
    }
    let target = PathBuf::from(&args[1]);
    let files = if target.is_dir() {
        list_matching_files(&target, args.get(2).map(String::as_str))?
    } else {
        vec![target]
    };

    let reader = DelimitedReader::default();
    let mut tracker = HeaderTracker::default();
    println!("file\trow\tkind\tnormalized");
    for path in &files {
        let rows = reader
            .read_file(path)
            .with_context(|| format!("reading {}", path.display()))?;
        for (idx, row) in rows.iter().enumerate() {
            let Some(line) = row.first() else { continue };
            let outcome = tracker.observe(line);
            println!(
                "{}\t{}\t{}\t{}",
                path.display(),
                idx + 1,
                outcome.kind().as_str(),
                outcome.shown_value()
            );
        }
    }
    Ok(())
}
