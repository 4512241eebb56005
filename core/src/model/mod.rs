// jersey_orders/src/model/mod.rs

//! Order records and the value types they are built from.

pub mod catalog;
pub mod color;
pub mod order;

pub use catalog::{JerseyType, PaletteColor, Size, Sport, PALETTE};
pub use color::{color_to_hex, Color};
pub use order::{OrderDetails, OrderRecord, PaymentStatus, QUANTITY_RANGE, UNIT_PRICE};
