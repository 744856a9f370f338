//! Configuration validation utilities

use anyhow::{Result, anyhow};

/// Accept a required environment value, rejecting missing or
/// whitespace-only values with a message naming the variable
pub fn required(name: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(anyhow!("Environment variable {} is set but empty", name)),
        None => Err(anyhow!("Environment variable {} is not set", name)),
    }
}
