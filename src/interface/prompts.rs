use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::{DrinkInput, VolumeUnit};

/// Minimum similarity for a "did you mean" unit suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Prompt for one raw form field. Empty input is allowed; validation catches it.
pub fn prompt_field(label: &str, placeholder: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(format!("{} ({})", label, placeholder))
        .allow_empty(true)
        .interact_text()?;

    Ok(input)
}

/// Prompt for the volume unit, starting on `default`.
pub fn prompt_unit(default: VolumeUnit) -> Result<VolumeUnit> {
    let labels: Vec<&str> = VolumeUnit::ALL.iter().map(|u| u.label()).collect();
    let start = VolumeUnit::ALL
        .iter()
        .position(|u| *u == default)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("unit")
        .items(&labels)
        .default(start)
        .interact()?;

    Ok(VolumeUnit::ALL.get(selection).copied().unwrap_or(default))
}

/// Collect the whole form, in on-screen order.
pub fn prompt_drink(default_unit: VolumeUnit) -> Result<(DrinkInput, VolumeUnit)> {
    let alcohol = prompt_field("alcohol %", "enter a %")?;
    let quantity = prompt_field("quantity", "e.g. 1, 12, 55")?;
    let volume = prompt_field("volume", "e.g. 355")?;
    let unit = prompt_unit(default_unit)?;
    let price = prompt_field("price", "$")?;

    Ok((DrinkInput::new(alcohol, volume, quantity, price), unit))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Closest known unit name to `name`, if any is close enough.
pub fn suggest_unit(name: &str) -> Option<&'static str> {
    let name = name.trim().to_lowercase();
    VolumeUnit::known_names()
        .iter()
        .map(|known| (*known, jaro_winkler(known, &name)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(known, _)| known)
}
