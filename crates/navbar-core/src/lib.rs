pub mod constants;
pub mod error;
pub mod highlight;
pub mod menu;
pub mod resolve;
pub mod scroll;
pub mod section;

pub use constants::*;
pub use error::*;
pub use highlight::*;
pub use menu::*;
pub use resolve::*;
pub use scroll::*;
pub use section::*;
