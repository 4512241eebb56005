// jersey_orders/src/model/color.rs

//! Color normalization.
//!
//! Orders carry their color as `#rrggbb`. The legacy `rgb(r,g,b)` form is
//! accepted on input and converted; anything else is rejected.

use crate::error::{OrderError, OrderResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalizes a color representation to a `#`-prefixed hex string.
///
/// - Input starting with `#` is returned unchanged.
/// - `rgb(r, g, b)` with three integer channels in `0..=255` (whitespace
///   around channels allowed) becomes `#rrggbb` in lower case.
/// - Any other shape fails with `OrderError::InvalidColorFormat`.
pub fn color_to_hex(input: &str) -> OrderResult<String> {
  if input.starts_with('#') {
    return Ok(input.to_string());
  }

  let inner = input
    .trim()
    .strip_prefix("rgb(")
    .and_then(|rest| rest.strip_suffix(')'))
    .ok_or_else(|| OrderError::invalid_color(input, "expected '#rrggbb' or 'rgb(r,g,b)'"))?;

  let channels: Vec<&str> = inner.split(',').map(str::trim).collect();
  if channels.len() != 3 {
    return Err(OrderError::invalid_color(
      input,
      format!("expected 3 channels, found {}", channels.len()),
    ));
  }

  let mut hex = String::with_capacity(7);
  hex.push('#');
  for channel in channels {
    let value: u32 = channel
      .parse()
      .map_err(|_| OrderError::invalid_color(input, format!("channel '{}' is not a non-negative integer", channel)))?;
    if value > 255 {
      return Err(OrderError::invalid_color(
        input,
        format!("channel value {} is outside 0..=255", value),
      ));
    }
    hex.push_str(&format!("{:02x}", value));
  }
  Ok(hex)
}

/// A color value as stored on an order, always the output of [`color_to_hex`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
  pub fn parse(input: &str) -> OrderResult<Self> {
    color_to_hex(input).map(Color)
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Upper-case rendering used by the analytics view, e.g. `#3498DB`.
  pub fn display_upper(&self) -> String {
    self.0.to_uppercase()
  }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl TryFrom<String> for Color {
  type Error = OrderError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    Color::parse(&value)
  }
}

impl From<Color> for String {
  fn from(color: Color) -> Self {
    color.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn converts_rgb_to_lowercase_hex() {
    assert_eq!(color_to_hex("rgb(52,152,219)").unwrap(), "#3498db");
    assert_eq!(color_to_hex("rgb( 0, 255 , 16 )").unwrap(), "#00ff10");
  }

  #[test]
  fn hex_input_is_returned_unchanged() {
    assert_eq!(color_to_hex("#3498db").unwrap(), "#3498db");
    assert_eq!(color_to_hex("#ABC").unwrap(), "#ABC");
  }

  #[test]
  fn rejects_malformed_input() {
    for bad in ["rgb(256,0,0)", "rgb(1,2)", "rgb(1,2,3,4)", "rgb(a,b,c)", "rgb(-1,0,0)", "blue", "", "rgb(1,2,3"] {
      assert!(
        matches!(color_to_hex(bad), Err(OrderError::InvalidColorFormat { .. })),
        "expected '{}' to be rejected",
        bad
      );
    }
  }

  #[test]
  fn color_serializes_as_plain_string() {
    let color = Color::parse("rgb(255,87,51)").unwrap();
    assert_eq!(serde_json::to_string(&color).unwrap(), "\"#ff5733\"");
    let back: Color = serde_json::from_str("\"rgb(255,87,51)\"").unwrap();
    assert_eq!(back, color);
    assert_eq!(color.display_upper(), "#FF5733");
  }
}
