pub mod filter_state;
pub mod loadable;
pub mod pagination;
pub mod query;
pub mod validation;

pub use filter_state::{FilterField, FilterState, FilterStateError};
pub use loadable::Loadable;
pub use pagination::{Paginated, PaginationLink};
pub use query::QueryRequest;
pub use validation::ValidationErrors;
