pub mod combine;
pub mod config;
pub mod errors;
pub mod menu;
pub mod numeric;
pub mod op;
pub mod promote;
pub mod vector;

pub use combine::{build_vector, concat, make_vector, weighted_sum};
pub use errors::VectorError;
pub use numeric::Numeric;
pub use promote::{Promote, Promoted, PromotedAll};
pub use vector::FixedVector;
