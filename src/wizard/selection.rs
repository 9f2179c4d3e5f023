//! Pick an existing remote entity or create a new one
//!
//! Shared by the project and repository steps.

use crate::error::{CliError, Result};
use crate::wizard::prompt::Prompter;
use colored::Colorize;

/// Outcome of the pick-or-create menu
#[derive(Debug, Clone, PartialEq)]
pub enum Choice<T> {
    CreateNew,
    Existing(T),
}

/// Offer `create_label` followed by the names of `entities`, in remote order
///
/// A name that matches nothing (only possible if the listing changed under
/// us) resolves to `T::default()`.
pub fn select_or_create<T, F>(
    prompter: &mut dyn Prompter,
    message: &str,
    create_label: &str,
    entities: &[T],
    name_of: F,
) -> Result<Choice<T>>
where
    T: Clone + Default,
    F: Fn(&T) -> &str,
{
    let options: Vec<String> = std::iter::once(create_label.to_string())
        .chain(entities.iter().map(|e| name_of(e).to_string()))
        .collect();

    let choice = prompter
        .select(message, &options, Some(create_label))?
        .ok_or(CliError::Cancelled)?;

    if choice == create_label {
        return Ok(Choice::CreateNew);
    }

    let entity = entities
        .iter()
        .find(|e| name_of(*e) == choice)
        .cloned()
        .unwrap_or_else(|| {
            log::warn!("'{}' is no longer in the list", choice);
            T::default()
        });
    Ok(Choice::Existing(entity))
}

/// Ask for a name until `is_taken` reports it free
///
/// Collisions are reported and asked again with no retry limit. An empty
/// answer falls back to `default` when one is given; a name that is still
/// blank is asked again.
pub fn prompt_unique_name<F>(
    prompter: &mut dyn Prompter,
    message: &str,
    noun: &str,
    default: Option<&str>,
    mut is_taken: F,
) -> Result<String>
where
    F: FnMut(&str) -> Result<bool>,
{
    loop {
        let mut name = prompter.input(message, default.is_some())?;
        if name.is_empty() {
            if let Some(default) = default {
                name = default.to_string();
            }
        }

        if name.trim().is_empty() {
            println!("{} A {} name is required", "✗".red(), noun);
            continue;
        }

        if !is_taken(&name)? {
            return Ok(name);
        }

        println!(
            "{} This {} name ({}) already exists, please choose another one",
            "✗".red(),
            noun,
            name.bold()
        );
    }
}
