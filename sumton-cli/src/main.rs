use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use sumton::{cross_check, report, Approach};

#[derive(Parser)]
#[command(version, about = "Sum of 1..=n, three ways", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 5, help = "Upper bound of the sum")]
    n: u64,
    #[arg(
        short,
        long,
        value_enum,
        help = "Only run this approach instead of all three"
    )]
    approach: Option<Approach>,
    #[arg(
        long,
        value_name = "LIMIT",
        help = "Check that every approach agrees for each n in 0..=LIMIT"
    )]
    verify: Option<u64>,
    #[arg(long, help = "Print the time and space complexity of each approach")]
    table: bool,
    #[arg(short, long, help = "Log what is being computed to stderr")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let approaches = match args.approach {
        Some(approach) => vec![approach],
        None => Approach::ALL.to_vec(),
    };

    for approach in approaches {
        let value = approach
            .checked_sum(args.n)
            .with_context(|| format!("{approach} failed for n = {}", args.n))?;
        println!("{}", report::result_line(approach, value));
    }

    if let Some(limit) = args.verify {
        let verified = cross_check(limit).context("cross-check failed")?;
        debug!("{} results compared", verified.checked);
        println!("Verified 0..={}: all approaches agree", verified.limit);
    }

    if args.table {
        println!();
        println!("{}", report::complexity_table());
    }

    Ok(())
}
