//! Events command implementation

use colored::Colorize;
use tsedit_config::{EventParam, GameConfigLoader};

use crate::error::Result;

/// List trigger event types with their parameter slots.
pub fn run_events(loader: &GameConfigLoader, all: bool) -> Result<()> {
    let registry = loader.load_event_types()?;

    for event in registry.iter().filter(|e| all || e.available) {
        let marker = if event.available {
            "+".green()
        } else {
            "-".dimmed()
        };
        println!("{} {:>3} {}", marker, event.id, event.name.bold());

        for (slot, param) in event.parameters.iter().enumerate() {
            if let EventParam::Typed { presets, .. } = param {
                let presets = presets
                    .as_ref()
                    .map(|p| format!(" [{}]", p.join(", ")))
                    .unwrap_or_default();
                println!(
                    "      P{} {} ({}){}",
                    slot + 1,
                    param.display_name(),
                    param.kind(),
                    presets.dimmed()
                );
            }
        }
    }
    Ok(())
}
