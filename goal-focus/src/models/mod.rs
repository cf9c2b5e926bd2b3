mod goal;
mod ids;
mod session;
mod todo;

pub use goal::*;
pub use ids::*;
pub use session::*;
pub use todo::*;
