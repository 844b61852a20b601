use clap::{Parser, Subcommand, ValueEnum};
use site_code::codepage::Encoding;
use site_code::{config, output, render, table};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "site-code")]
#[command(about = "Code page reference cells for a static site")]
#[command(long_about = "\
Code page reference cells for a static site

Renders HTML <td> cells showing how a byte reads as an ASCII control code,
in Windows-1252, and in CP437. Bytes may be given in decimal (65) or hex (0x41).

  site-code cell 0x0A
  <td class=\"smallcaps\"><span title=\"Line Feed\">LF</span></td>

  site-code cell 0x80 --encoding windows-1252
  <td><span title=\"U+20ac\">&#8364;</span></td>

Run 'site-code gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Print the cell for a single byte
    Cell {
        /// Byte value, decimal or 0x-prefixed hex (0-255)
        #[arg(value_parser = parse_byte)]
        byte: u8,
        /// ascii-control, windows-1252 or cp437
        #[arg(long, short, default_value = "ascii-control")]
        encoding: Encoding,
    },
    /// Render a full reference table
    Table {
        /// Table config (defaults: every byte, every encoding)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "html")]
        format: Format,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

/// Parse a byte from `65`, `0x41` or `0X41`, rejecting anything over 255.
fn parse_byte(s: &str) -> Result<u8, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    parsed.map_err(|_| format!("'{}' is not a byte value (0-255 or 0x00-0xFF)", s))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Cell { byte, encoding } => {
            println!("{}", render::render_cell(byte, encoding));
        }
        Command::Table {
            config,
            output: output_path,
            format,
        } => {
            let table_config = config::load_config(config.as_deref())?;
            let rows = table::build_rows(&table_config);
            let rendered = match format {
                Format::Html => table::render_document(&table_config, &rows),
                Format::Json => table::rows_to_json(&rows)?,
            };
            match output_path {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    let summaries = table::summarize(&table_config, &rows);
                    output::print_table_output(&table_config, &summaries, &path);
                }
                None => println!("{}", rendered),
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
