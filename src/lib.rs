#![cfg_attr(not(test), no_std)]

//! Named colors for WS2812-class LEDs, with channels pre-ordered as GRB.
//!
//! Every color is a `const`, so `grb_pallet::RED` costs nothing at runtime.
//! [`Colors`] enumerates the same table and adds lookup by name.

mod pallet;

pub use pallet::{Colors, Grb, UnknownColorName};
pub use pallet::{
    BLACK, BLUE, CYAN, GREEN, LIGHT_BLUE, MAGENTA, OLIVE, RED, VIOLET, WHITE, YELLOW,
};
