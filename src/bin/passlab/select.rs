use anyhow::Context;
use passlab::Strength;

/// Ask which strength tier to show. `None` means all of them.
pub(crate) fn select_strength() -> Result<Option<Strength>, crate::ProgError> {
    let items = {
        let mut items = vec!["All"];
        items.extend(Strength::ALL.iter().map(|s| s.name()));
        items
    };
    let selection = dialoguer::Select::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .with_prompt("Show which passwords?")
        .items(&items)
        .default(0)
        .interact_opt()
        .context("failed to query your selection")?
        .ok_or(crate::ProgError::SelectionCancelled)?;

    Ok(selection.checked_sub(1).map(|idx| Strength::ALL[idx]))
}
