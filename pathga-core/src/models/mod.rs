//! Contains models which describe locations to visit and candidate visiting orders.

mod location;
pub use self::location::*;

mod path;
pub use self::path::*;

mod resolver;
pub use self::resolver::*;
