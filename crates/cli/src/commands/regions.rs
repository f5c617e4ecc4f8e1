//! Regions command handler.

use clap::Args;
use floodsense_core::AppResult;
use floodsense_engine::regions::format_population;
use floodsense_engine::SETTLEMENTS;

/// List the per-settlement flood figures
#[derive(Args, Debug)]
pub struct RegionsCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl RegionsCommand {
    pub fn execute(&self) -> AppResult<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&SETTLEMENTS)?);
            return Ok(());
        }

        println!(
            "{:<10} {:<10} {:<22} {:>12}",
            "Region", "Risk", "Season", "Affected"
        );
        for record in &SETTLEMENTS {
            println!(
                "{:<10} {:<10} {:<22} {:>12}",
                record.name,
                record.risk_level.as_str(),
                format!("{} - {}", record.season_start, record.season_end),
                format_population(record.population_affected)
            );
        }

        Ok(())
    }
}
