pub mod autoplay;
pub mod dice;
pub mod dispatch;
pub mod options;
pub mod progression;
pub mod rejection;
pub mod resolver;
pub mod result;
pub mod session;
pub mod snapshot;
pub mod statics;
pub mod summary;
pub mod template;

pub use autoplay::*;
pub use dice::*;
pub use dispatch::*;
pub use options::*;
pub use progression::*;
pub use rejection::*;
pub use resolver::*;
pub use result::*;
pub use session::*;
pub use snapshot::*;
pub use statics::*;
pub use summary::*;
pub use template::*;
