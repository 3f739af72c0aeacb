//! Filter table listing.

use crate::filters;
use anyhow::Result;

pub fn run() -> Result<()> {
    println!("Filters for `apply -f name` or `apply -f name:arg1,arg2,...`:");
    println!();
    for info in filters::FILTERS {
        println!("  {:<16} {:<22} {}", info.name, info.args, info.summary);
    }
    println!();
    println!("Noise filters draw from the --seed master generator; a fixed");
    println!("seed reproduces the whole pipeline.");
    Ok(())
}
