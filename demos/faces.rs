//! Reads an embedding from stdin and prints its faces to stdout.
//!
//! Run with: `cargo run --example faces < graph.txt`

use std::io::{self, BufWriter};

use planum::io::{parse_embedding, write_faces};
use planum::operations::find_faces;

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut embedding = parse_embedding(stdin.lock())?;
    let faces = find_faces(&mut embedding)?;

    let stdout = io::stdout();
    write_faces(BufWriter::new(stdout.lock()), &faces)?;
    Ok(())
}
