//! Small stateless utilities exposed by the gateway: a request-header echo,
//! a unit converter and a four-function calculator.

pub mod calculate;
pub mod convert;
pub mod error;
pub mod whoami;

pub use calculate::{calculate, Operation};
pub use convert::{conversion_options, convert};
pub use error::{CalculateError, ConvertError};
pub use whoami::{whoami, ClientInfo, WhoAmI};
