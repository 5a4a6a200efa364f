//! `payline calendar`: upcoming payout dates.

use payline_engine::schedule::upcoming_payout_dates;

use super::Context;

pub fn run(ctx: &Context, count: usize) -> anyhow::Result<String> {
    let dates = upcoming_payout_dates(ctx.as_of.date_naive(), count)?;
    if ctx.json {
        return Ok(serde_json::to_string_pretty(&dates)?);
    }
    let lines: Vec<String> = dates.iter().map(|d| d.format("%a %Y-%m-%d").to_string()).collect();
    Ok(lines.join("\n"))
}
