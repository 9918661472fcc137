//! Load authored sequences from JSON.
//!
//! Shape:
//! `{ "sequences": [ { "tweens": [ { "ease", "duration", "target"? } ] } ] }`.
//! A tween without `target` is a delay. Absolute starts are rebuilt on load.

use crate::error::Result;
use crate::tween::Animate;

pub fn parse_animate_json(s: &str) -> Result<Animate> {
    let animate: Animate = serde_json::from_str(s)?;
    Ok(animate)
}

pub fn animate_to_json(animate: &Animate) -> Result<String> {
    Ok(serde_json::to_string_pretty(animate)?)
}
