// jersey_orders/src/model/catalog.rs

//! Fixed choice lists offered by the order form.

use crate::error::OrderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
  Football,
  Basketball,
  Cricket,
  Volleyball,
  Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JerseyType {
  Home,
  Away,
  #[serde(rename = "Special Edition", alias = "SpecialEdition")]
  SpecialEdition,
}

/// Jersey sizes, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Size {
  XS,
  S,
  M,
  L,
  XL,
  XXL,
}

impl Sport {
  pub const ALL: [Sport; 5] = [
    Sport::Football,
    Sport::Basketball,
    Sport::Cricket,
    Sport::Volleyball,
    Sport::Other,
  ];

  pub fn label(&self) -> &'static str {
    match self {
      Sport::Football => "Football",
      Sport::Basketball => "Basketball",
      Sport::Cricket => "Cricket",
      Sport::Volleyball => "Volleyball",
      Sport::Other => "Other",
    }
  }
}

impl JerseyType {
  pub const ALL: [JerseyType; 3] = [JerseyType::Home, JerseyType::Away, JerseyType::SpecialEdition];

  pub fn label(&self) -> &'static str {
    match self {
      JerseyType::Home => "Home",
      JerseyType::Away => "Away",
      JerseyType::SpecialEdition => "Special Edition",
    }
  }
}

impl Size {
  pub const ALL: [Size; 6] = [Size::XS, Size::S, Size::M, Size::L, Size::XL, Size::XXL];

  pub fn label(&self) -> &'static str {
    match self {
      Size::XS => "XS",
      Size::S => "S",
      Size::M => "M",
      Size::L => "L",
      Size::XL => "XL",
      Size::XXL => "XXL",
    }
  }
}

// Display and FromStr share the form labels so CSV cells and request bodies agree.
macro_rules! label_conversions {
  ($ty:ident, $field:literal) => {
    impl fmt::Display for $ty {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
      }
    }

    impl FromStr for $ty {
      type Err = OrderError;

      fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        $ty::ALL
          .iter()
          .copied()
          .find(|v| v.label().eq_ignore_ascii_case(wanted) || format!("{:?}", v).eq_ignore_ascii_case(wanted))
          .ok_or_else(|| OrderError::validation($field, format!("unknown {} '{}'", $field, s)))
      }
    }
  };
}

label_conversions!(Sport, "sport");
label_conversions!(JerseyType, "jersey_type");
label_conversions!(Size, "size");

/// One entry of the color picker offered by the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteColor {
  pub hex: &'static str,
  pub label: &'static str,
}

pub const PALETTE: [PaletteColor; 5] = [
  PaletteColor { hex: "#3498db", label: "Color: #3498db" },
  PaletteColor { hex: "#808080", label: "Color: Grey" },
  PaletteColor { hex: "#ff5733", label: "Color: #ff5733" },
  PaletteColor { hex: "#28a745", label: "Color: #28a745" },
  PaletteColor { hex: "#ffc107", label: "Color: #ffc107" },
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_form_labels_and_variant_names() {
    assert_eq!("Special Edition".parse::<JerseyType>().unwrap(), JerseyType::SpecialEdition);
    assert_eq!("specialedition".parse::<JerseyType>().unwrap(), JerseyType::SpecialEdition);
    assert_eq!(" xxl ".parse::<Size>().unwrap(), Size::XXL);
    assert_eq!("Cricket".parse::<Sport>().unwrap(), Sport::Cricket);
  }

  #[test]
  fn rejects_unknown_labels_as_validation_errors() {
    match "Rugby".parse::<Sport>() {
      Err(OrderError::Validation { field, .. }) => assert_eq!(field, "sport"),
      other => panic!("expected validation error, got {:?}", other),
    }
  }

  #[test]
  fn sizes_are_ordered() {
    assert!(Size::XS < Size::S);
    assert!(Size::XL < Size::XXL);
    let mut sizes = vec![Size::L, Size::XS, Size::M];
    sizes.sort();
    assert_eq!(sizes, vec![Size::XS, Size::M, Size::L]);
  }
}
