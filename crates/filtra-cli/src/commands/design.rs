//! `design` command: print biquad coefficients for a filter.

use super::common::{describe, FilterArgs};
use clap::Args;
use filtra_core::Coefficients;

/// Arguments for the `design` subcommand.
#[derive(Args)]
pub struct DesignArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Emit the coefficients as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

pub fn run(args: &DesignArgs) -> anyhow::Result<()> {
    let (filter, params) = args.filter.resolve()?;
    let coeffs = Coefficients::design(filter, &params);

    if args.json {
        let doc = serde_json::json!({
            "filter": filter.long_name(),
            "cutoff_hz": params.cutoff_hz,
            "sample_rate_hz": params.sample_rate_hz,
            "q": params.q,
            "gain_db": params.gain_db,
            "coefficients": {
                "a0": coeffs.a0,
                "a1": coeffs.a1,
                "a2": coeffs.a2,
                "b1": coeffs.b1,
                "b2": coeffs.b2,
            },
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("{}", describe(filter, &params));
    println!();
    println!("  a0 = {}", coeffs.a0);
    println!("  a1 = {}", coeffs.a1);
    println!("  a2 = {}", coeffs.a2);
    println!("  b1 = {}", coeffs.b1);
    println!("  b2 = {}", coeffs.b2);

    Ok(())
}
