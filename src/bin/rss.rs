use std::{fs::File, process::ExitCode};

use portfolio_site::{content::BLOGS, rss::build_channel};

const FEED_PATH: &str = "public/rss.xml";

fn write_feed() -> Result<(), Box<dyn std::error::Error>> {
    let channel = build_channel(BLOGS);
    let file = File::create(FEED_PATH)?;
    channel.pretty_write_to(file, b' ', 2)?;
    Ok(())
}

fn main() -> ExitCode {
    match write_feed() {
        Ok(()) => {
            println!("wrote {} entries to {FEED_PATH}", BLOGS.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to write {FEED_PATH}: {e}");
            ExitCode::FAILURE
        }
    }
}
