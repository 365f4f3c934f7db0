//! Combinator catalog.
//!
//! Combinators hold one or two shared function objects and build new ones
//! from them: arithmetic on two functions, composition, scaling, shifting and
//! periodic extension.

mod compound;
mod modified;

pub use compound::{Composite, Diff, Product, Ratio, Sum};
pub use modified::{Periodic, PlusConstant, TimesConstant};
