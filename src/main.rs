//! CLI for psdinfo: extract layer names from PSD additional-info block dumps.

#![cfg(feature = "cli")]

use clap::Parser;
use indexmap::IndexMap;
use psdinfo::{is_additional_info, list_records, scan_additional_info, AdditionalInfo};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[derive(Parser)]
#[command(name = "psdinfo")]
#[command(about = "Extract PSD layer names from additional-info metadata blocks", long_about = None)]
struct Args {
    /// Path to a block dump or directory to scan (use -d/--directory to scan a whole directory)
    path: Option<String>,

    /// Scan a whole directory (optionally with -r to recurse into subdirectories)
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    directory: Option<String>,

    /// When scanning a directory, recurse into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// File extensions to scan (comma-separated). No-extension files are always scanned. Use --all to ignore extension filter.
    #[arg(short, long, default_value = "psd,psb,bin,dat")]
    extensions: String,

    /// Scan all files regardless of extension
    #[arg(long)]
    all: bool,

    /// Output JSON per result (one line per file unless --pretty)
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON (use with --json)
    #[arg(long)]
    pretty: bool,

    /// Quiet: only print files with a layer name
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let exts: std::collections::HashSet<String> = args
        .extensions
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .collect();

    let path_str = args
        .directory
        .as_ref()
        .or(args.path.as_ref())
        .ok_or("Missing path: give a file/directory as argument or use -d/--directory <DIR>")?;
    let path = Path::new(path_str.as_str());

    if !path.exists() {
        eprintln!("Not found: {}", path.display());
        std::process::exit(1);
    }

    if path.is_file() {
        if args.directory.is_some() {
            eprintln!("--directory expects a directory, not a file: {}", path.display());
            std::process::exit(1);
        }
        scan_file(path, &args, &exts)?;
        return Ok(());
    }

    if path.is_dir() {
        if !args.quiet {
            eprintln!(
                "Scanning directory: {} {}",
                path.display(),
                if args.recursive { "(recursive)" } else { "" }
            );
        }
        scan_dir(path, &args, &exts)?;
        return Ok(());
    }

    eprintln!("Not a file or directory: {}", path.display());
    std::process::exit(1);
}

fn scan_file(
    path: &Path,
    args: &Args,
    exts: &std::collections::HashSet<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    // Skip only when: not --all, file has an extension, and it's not in the list. No extension => always scan.
    if !args.all && !ext.is_empty() && !exts.is_empty() && !exts.contains(&ext) {
        if !args.quiet {
            eprintln!("Skip (extension): {}", path.display());
        }
        return Ok(());
    }
    let bytes = fs::read(path)?;
    let info = scan_additional_info(&bytes);
    print_result(path.display().to_string(), info.as_ref(), args, &bytes)?;
    Ok(())
}

fn scan_dir(
    dir: &Path,
    args: &Args,
    exts: &std::collections::HashSet<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let walker = if args.recursive {
        WalkDir::new(dir).into_iter()
    } else {
        WalkDir::new(dir).max_depth(1).into_iter()
    };

    let mut total = 0u64;
    let mut named = 0u64;

    for entry in walker.filter_entry(|e| !e.path().starts_with(".")) {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !args.all && !ext.is_empty() && !exts.is_empty() && !exts.contains(&ext) {
            continue;
        }
        total += 1;
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(_) => continue,
        };
        let info = scan_additional_info(&bytes);
        if info.is_some() {
            named += 1;
        }
        print_result(path.display().to_string(), info.as_ref(), args, &bytes)?;
    }

    if !args.quiet {
        eprintln!("Scanned {} files, {} with a layer name", total, named);
    }
    Ok(())
}

fn print_result(
    path: String,
    info: Option<&AdditionalInfo>,
    args: &Args,
    bytes: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    if args.quiet && info.is_none() {
        return Ok(());
    }
    let records = list_records(bytes);
    if args.json {
        let sha256 = sha256_hex(bytes);
        let mut out = IndexMap::<String, serde_json::Value>::new();
        out.insert("sha256".to_string(), serde_json::Value::String(sha256));
        out.insert("path".to_string(), serde_json::Value::String(path.clone()));
        out.insert(
            "layer_name".to_string(),
            serde_json::to_value(info.map(AdditionalInfo::layer_name))?,
        );
        out.insert("size_bytes".to_string(), serde_json::to_value(bytes.len())?);
        out.insert(
            "looks_like_block".to_string(),
            serde_json::to_value(is_additional_info(bytes))?,
        );
        out.insert("records".to_string(), serde_json::to_value(&records)?);
        let json_str = if args.pretty {
            serde_json::to_string_pretty(&out)?
        } else {
            serde_json::to_string(&out)?
        };
        println!("{}", json_str);
        return Ok(());
    }
    // Human-readable output: sha256 first
    println!("  sha256: {}", sha256_hex(bytes));
    match info {
        Some(info) => {
            println!("NAME {} ({} bytes)", path, bytes.len());
            println!("  layer name: {}", info.layer_name());
        }
        None => {
            println!("NONE {} ({} bytes)", path, bytes.len());
        }
    }
    if !args.quiet {
        if !is_additional_info(bytes) {
            println!("  warning: no 8BIM/8B64 signature at start of block");
        }
        for r in &records {
            println!(
                "  record: {} {} ({} bytes at offset {})",
                r.signature, r.key, r.size, r.offset
            );
        }
    }
    Ok(())
}
