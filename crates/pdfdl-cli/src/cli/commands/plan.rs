//! `pdfdl plan` – dry run: list target paths without touching the network.

use pdfdl_core::batch;
use std::path::Path;

pub fn run_plan(output_dir: &Path, urls: &[String]) {
    let planned = batch::plan(urls, output_dir);
    if planned.is_empty() {
        println!("No valid URLs.");
        return;
    }
    for p in &planned {
        match &p.target {
            Some(path) if p.exists => println!("present  {}  {}", path.display(), p.url),
            Some(path) => println!("fetch    {}  {}", path.display(), p.url),
            None => println!("no-name  -  {}", p.url),
        }
    }
    let to_fetch = planned
        .iter()
        .filter(|p| p.target.is_some() && !p.exists)
        .count();
    println!("{} of {} URL(s) to fetch", to_fetch, planned.len());
}
