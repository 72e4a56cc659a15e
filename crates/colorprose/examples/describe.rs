use std::io::{Error, ErrorKind, Result};

use colorprose::{best_match, parse_description, Color};

const USAGE: &str = "usage: describe <words>...\n       describe --match <color> [<mix-count>]";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("-h") | Some("--help") => {
            println!("{}", USAGE);
        }
        Some("--match") => {
            let color: Color = args
                .get(1)
                .ok_or_else(|| Error::new(ErrorKind::InvalidInput, USAGE))?
                .parse()
                .map_err(|e| Error::new(ErrorKind::InvalidInput, e))?;
            let mix_count = match args.get(2) {
                Some(count) => count
                    .parse()
                    .map_err(|e| Error::new(ErrorKind::InvalidInput, e))?,
                None => 1,
            };

            println!("{}", best_match(&color, mix_count));
        }
        Some(_) => {
            let color = parse_description(&args.join(" "));
            println!("{}  {}", color.to_hex_format(), color);
        }
    }

    Ok(())
}
