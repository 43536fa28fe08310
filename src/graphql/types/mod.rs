pub mod coordinates;
pub mod food_bank;
pub mod inputs;
pub mod nearby_outlet;
pub mod organisation;
pub mod outlet;
pub mod scalars;

pub use food_bank::*;
pub use inputs::*;
pub use nearby_outlet::*;
pub use organisation::*;
pub use outlet::*;
