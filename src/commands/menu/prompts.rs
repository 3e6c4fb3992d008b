//! Thin wrappers over dialoguer prompts

use std::fmt::Display;

use anyhow::Result;
use dialoguer::{Input, Password, Select};

/// Pick one entry; returns its index.
pub fn choose<T: Display>(prompt: &str, items: &[T]) -> Result<usize> {
    Ok(Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?)
}

/// Pick one of `items` or a trailing "Back" entry. `None` means back.
pub fn choose_or_back<T: Display>(prompt: &str, items: &[T]) -> Result<Option<usize>> {
    let mut labels: Vec<String> = items.iter().map(ToString::to_string).collect();
    labels.push("Back".to_string());
    let picked = choose(prompt, &labels)?;
    Ok((picked < items.len()).then_some(picked))
}

pub fn text(prompt: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

/// Non-empty, trimmed text
pub fn required(prompt: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("a value is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

pub fn secret(prompt: &str) -> Result<String> {
    Ok(Password::new().with_prompt(prompt).interact()?)
}

/// Integer input; dialoguer re-prompts until it parses.
pub fn integer(prompt: &str) -> Result<i64> {
    Ok(Input::<i64>::new().with_prompt(prompt).interact_text()?)
}
