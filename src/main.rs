use anyhow::{bail, Context, Result};
use smetl::{fetch_listing, init_tracing_once, write_listing_csv, Cleaner};
use std::path::PathBuf;

const SUBREDDIT: &str = "SMU_Singapore";
const DEFAULT_LIMIT: usize = 200;

fn main() -> Result<()> {
    init_tracing_once();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("reddit") => {
            let limit = match args.get(1) {
                Some(s) => s.parse().with_context(|| format!("bad limit '{}'", s))?,
                None => DEFAULT_LIMIT,
            };
            let posts = fetch_listing(SUBREDDIT, limit)?;
            println!("Fetched {} items", posts.len());
            let out = PathBuf::from("smu_reddit_full_with_body.csv");
            write_listing_csv(&out, &posts)?;
            println!("Written {}", out.display());
        }
        Some("clean") => {
            let (input, output) = match (args.get(1), args.get(2)) {
                (Some(i), Some(o)) => (PathBuf::from(i), PathBuf::from(o)),
                _ => bail!("usage: smetl clean <in.csv> <out.csv>"),
            };
            let kept = Cleaner::new().transform_csv(&input, &output)?;
            println!("Saved {} ({} rows)", output.display(), kept);
        }
        _ => bail!("usage: smetl <reddit [limit] | clean <in.csv> <out.csv>>"),
    }

    Ok(())
}
