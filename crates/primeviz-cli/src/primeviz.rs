//! Prime digit distribution CLI
//!
//! Usage: primeviz [limit] [options]
//!
//! Options:
//!   --png <PATH>  Write the three charts to a PNG file
//!   --no-text     Do not print the terminal charts
//!   --list        Print the primes that were found
//!   --help, -h    Show help
//!
//! When no limit is given, the limit is read interactively.
//!
//! Example: primeviz 1000 --png primes.png

use primeviz_digits::constants::LARGE_BOUND_WARNING;
use primeviz_digits::infra::prompt::{parse_limit, read_limit};
use primeviz_digits::infra::text_chart::render_report;
use primeviz_digits::{ReportOptions, analyze};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

#[cfg(feature = "png")]
use primeviz_digits::infra::png_chart::render_png;

struct Args {
    limit: Option<u64>,
    png_path: Option<PathBuf>,
    no_text: bool,
    list: bool,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [limit] [options]", program);
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [limit]       Inclusive upper limit (prompted for when omitted)");
    eprintln!();
    eprintln!("Options:");
    #[cfg(feature = "png")]
    eprintln!("  --png <PATH>  Write the three charts to a PNG file");
    eprintln!("  --no-text     Do not print the terminal charts");
    eprintln!("  --list        Print the primes that were found");
    eprintln!("  --help, -h    Show this help message");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut limit: Option<u64> = None;
    let mut png_path: Option<PathBuf> = None;
    let mut no_text = false;
    let mut list = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--png" => {
                i += 1;
                let path = args.get(i).ok_or("--png requires a value")?;
                png_path = Some(PathBuf::from(path));
            }
            "--no-text" => no_text = true,
            "--list" => list = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            // Negative numbers reach the limit parser so the error names them
            arg if !arg.starts_with("--") => {
                if limit.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                limit = Some(
                    parse_limit(arg).map_err(|e| format!("Invalid limit '{}': {}", arg, e))?,
                );
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    #[cfg(not(feature = "png"))]
    if png_path.is_some() {
        return Err("--png is not available (built without the 'png' feature)".to_string());
    }

    Ok(Args {
        limit,
        png_path,
        no_text,
        list,
    })
}

fn print_primes(primes: &[u64]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for line in primes.chunks(10) {
        let text: Vec<String> = line.iter().map(|p| p.to_string()).collect();
        writeln!(out, "{}", text.join(" "))?;
    }
    out.flush()
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    let limit = match args.limit {
        Some(limit) => limit,
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            match read_limit(&mut input, &mut io::stdout()) {
                Ok(Some(limit)) => limit,
                Ok(None) => {
                    println!();
                    std::process::exit(0);
                }
                Err(e) => {
                    eprintln!("Error reading input: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let Ok(bound) = i64::try_from(limit) else {
        eprintln!("Error: limit {} is too large", limit);
        std::process::exit(1);
    };

    if limit > LARGE_BOUND_WARNING {
        eprintln!(
            "Warning: limit {} needs about {:.2} GB of memory for the sieve",
            limit,
            (limit as f64 + 1.0) / (1024.0 * 1024.0 * 1024.0)
        );
    }

    println!("Sieving primes up to {}...", limit);
    let start = Instant::now();

    let options = ReportOptions::default().with_parallel(cfg!(feature = "parallel"));
    let analysis = match analyze(bound, options) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Found {} primes in {:.3} seconds",
        analysis.primes.len(),
        start.elapsed().as_secs_f64()
    );

    if args.list {
        println!();
        if let Err(e) = print_primes(analysis.primes.as_slice()) {
            eprintln!("Error writing primes: {}", e);
            std::process::exit(1);
        }
    }

    if !args.no_text {
        println!();
        print!("{}", render_report(&analysis.report));
    }

    #[cfg(feature = "png")]
    if let Some(path) = &args.png_path {
        println!("Writing charts to {}...", path.display());
        match render_png(&analysis.report, path) {
            Ok(()) => println!("Charts saved successfully."),
            Err(e) => {
                eprintln!("Error saving charts: {}", e);
                std::process::exit(1);
            }
        }
    }
}
