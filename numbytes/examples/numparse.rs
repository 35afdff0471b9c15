#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};

#[cfg(feature = "cli")]
use numbytes::{defaults, parse_f64, Encoding, FormattingData, StreamParser, TableConfig};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "numparse - parse numbers straight from locale-encoded bytes")]
struct Cli {
    /// JSON symbol table (defaults to the invariant table)
    #[arg(long, global = true)]
    table: Option<std::path::PathBuf>,

    /// Encoding the input is converted to before parsing
    #[arg(long, value_enum, default_value_t = Format::Utf8, global = true)]
    encoding: Format,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Utf8,
    Utf16,
}

#[cfg(feature = "cli")]
impl From<Format> for Encoding {
    fn from(format: Format) -> Self {
        match format {
            Format::Utf8 => Encoding::Utf8,
            Format::Utf16 => Encoding::Utf16,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Parse each argument and print the value
    Parse {
        /// Text to parse
        inputs: Vec<String>,
    },
    /// Parse one number from stdin as it arrives
    Stream {
        /// Read size in bytes
        #[arg(long, default_value_t = 4)]
        chunk_size: usize,
    },
    /// Print the byte codes of every symbol in the table
    Symbols,
}

#[cfg(feature = "cli")]
fn load_table(cli: &Cli) -> Result<FormattingData, Box<dyn std::error::Error>> {
    let encoding = Encoding::from(cli.encoding);
    match &cli.table {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            Ok(TableConfig::from_reader(file)?.with_encoding(encoding).build()?)
        }
        None => Ok(defaults::invariant(encoding).clone()),
    }
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::io::Read;

    let cli = Cli::parse();
    let data = load_table(&cli)?;

    match &cli.command {
        Commands::Parse { inputs } => {
            for input in inputs {
                let bytes = data.encoding().encode(input);
                match parse_f64(&data, &bytes, 0) {
                    Ok((value, consumed)) => println!("{input}: {value} ({consumed} of {} bytes)", bytes.len()),
                    Err(err) => println!("{input}: {err}"),
                }
            }
        }
        Commands::Stream { chunk_size } => {
            let mut parser = StreamParser::new(&data);
            let mut buffer = vec![0u8; (*chunk_size).max(1)];
            let mut stdin = std::io::stdin().lock();
            loop {
                let read = stdin.read(&mut buffer)?;
                if read == 0 {
                    println!("{}", parser.finish()?);
                    break;
                }
                if let numbytes::Progress::Done { value, consumed } = parser.push(&buffer[..read])? {
                    println!("{value} ({consumed} bytes)");
                    break;
                }
            }
        }
        Commands::Symbols => {
            println!("{} table, {} trie nodes", data.encoding(), data.node_count());
            for (symbol, code) in data.symbols() {
                let hex: Vec<String> = code.iter().map(|byte| format!("{byte:02X}")).collect();
                println!("{:>20}: {}", symbol.to_string(), hex.join(" "));
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --features cli --example numparse");
    std::process::exit(1);
}
