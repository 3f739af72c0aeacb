//! Apply command
//!
//! Builds a pipeline from the -f expressions and runs it over one image.
//! The output file is only written after every stage has succeeded.

use crate::ApplyArgs;
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rasterfx_ops::Pipeline;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: ApplyArgs, verbose: bool) -> Result<()> {
    trace!(input = %args.input.display(), stages = args.filter.len(), "apply::run");

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut master = StdRng::seed_from_u64(seed);

    let mut pipeline = Pipeline::new();
    for expr in &args.filter {
        let filter = crate::filters::build(expr, &mut master)
            .with_context(|| format!("invalid filter '{expr}'"))?;
        pipeline.push_boxed(filter);
    }

    info!(seed, stages = pipeline.len(), "running pipeline");

    if verbose {
        println!(
            "Applying {} filter(s) to {} (seed {})",
            pipeline.len(),
            args.input.display(),
            seed
        );
    }

    let mut image = super::load_image(&args.input)?;
    pipeline
        .apply(&mut image)
        .with_context(|| format!("while filtering {}", args.input.display()))?;
    super::save_image(&args.output, &image)?;

    if verbose {
        println!("Done.");
    }

    Ok(())
}
