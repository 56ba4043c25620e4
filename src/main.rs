use clap::{Parser, Subcommand};
use sauce::classify::{TypeTables, DATA_TYPE_BITMAP, DATA_TYPE_CHARACTER};
use sauce::{read_record_from_path, AnsiFlags, Sauce, SauceError};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sauce", about = "SAUCE record reader")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the SAUCE record appended to a file
    Info {
        input: PathBuf,
        /// Emit the raw record as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// One-line summary per file; files without a record are reported, not fatal
    List {
        #[arg(required = true, num_args = 1..)]
        inputs: Vec<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tables = TypeTables::standard();
    match Cli::parse().command {

        // ── Info ─────────────────────────────────────────────────────────────
        Commands::Info { input, json } => {
            let record = read_record_from_path(&input)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print_record(&record, &tables);
            }
        }

        // ── List ─────────────────────────────────────────────────────────────
        Commands::List { inputs } => {
            println!("{:<24} {:<28} {:<20} {:<20} Type", "Name", "Title", "Author", "Group");
            for path in &inputs {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                match read_record_from_path(path) {
                    Ok(r) => {
                        println!("{:<24} {:<28} {:<20} {:<20} {}",
                            name, r.title, r.author, r.group, tables.data_type_name(&r));
                    }
                    Err(SauceError::ShortRead) | Err(SauceError::MissingSignature) => {
                        println!("{:<24} — no record", name);
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }

    Ok(())
}

// ── helpers ──────────────────────────────────────────────────────────────────

fn print_record(r: &Sauce, tables: &TypeTables) {
    println!("── SAUCE record ─────────────────────────────────────────");
    println!("  Version   {}{}", r.version[0], r.version[1]);
    println!("  Title     {}", r.title);
    println!("  Author    {}", r.author);
    println!("  Group     {}", r.group);
    println!("  Date      {}", r.date);
    println!("  File size {} B", r.file_size);
    println!("  Data type {} ({})", r.data_type, tables.data_type_name(r));
    if tables.has_file_types(r.data_type) {
        println!("  File type {} ({})", r.file_type, tables.file_type_name(r));
    } else {
        println!("  File type {}", r.file_type);
    }
    println!("  Type info {}, {}, {}, {}",
        r.type_info[0], r.type_info[1], r.type_info[2], r.type_info[3]);
    if let Some(size) = canvas_size(r) {
        println!("  Size      {}", size);
    }
    println!("  Comments  {}", r.comment_lines);
    println!("  Flags     {}", describe_flags(&r.flags));
    let font = r.font();
    if !font.is_empty() {
        println!("  Font      {}", font);
    }
    println!("  MIME      {}", tables.mime_type(r));
}

/// Interpret the first two type-info values as a canvas size where the
/// data/file type defines one.
fn canvas_size(r: &Sauce) -> Option<String> {
    match (r.data_type, r.file_type) {
        (DATA_TYPE_CHARACTER, 0 | 1 | 2 | 4 | 5 | 8) => {
            // Width 0 means the producer left it unset; 80 columns is the norm.
            let w = if r.type_info[0] == 0 { 80 } else { r.type_info[0] };
            Some(format!("{} x {} characters", w, r.type_info[1]))
        }
        (DATA_TYPE_CHARACTER, 3) | (DATA_TYPE_BITMAP, _) => {
            Some(format!("{} x {} pixels", r.type_info[0], r.type_info[1]))
        }
        _ => None,
    }
}

fn describe_flags(f: &AnsiFlags) -> String {
    format!(
        "{}, {} spacing, {} aspect",
        if f.non_blink { "non-blink" } else { "blink" },
        f.letter_spacing.name(),
        f.aspect_ratio.name(),
    )
}
