use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, Read};

use syntagma::{analyze, Document, ParsedDocument};

#[derive(Parser)]
#[clap(version = "0.1.0")]
struct Opts {
    /// Path to a parsed-document JSON file; reads stdin if omitted.
    input: Option<String>,
    /// Pretty-print the annotation bundle.
    #[clap(long, short)]
    pretty: bool,
}

fn main() -> Result<(), syntagma::Error> {
    env_logger::init();
    let opts = Opts::parse();

    let parsed: ParsedDocument = match opts.input {
        Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            serde_json::from_str(&buffer)?
        }
    };

    let analysis = analyze(&Document::from_parsed(parsed));

    if opts.pretty {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", serde_json::to_string(&analysis)?);
    }

    Ok(())
}
