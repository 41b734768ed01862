mod action;
mod operation;
mod reducer;
mod resource;
mod store;
mod stream_ext;
mod thunk;

pub use action::*;
pub use operation::*;
pub use reducer::*;
pub use resource::*;
pub use store::*;
pub use stream_ext::*;
pub use thunk::*;

pub trait State: Clone + Send + Sync + 'static {}
