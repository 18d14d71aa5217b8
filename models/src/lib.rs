pub mod card;
pub mod card_type;
pub mod content;
pub mod health;
pub mod phase;
pub mod statement;
pub mod template;
pub mod weakness;

pub use card::*;
pub use card_type::*;
pub use content::*;
pub use health::*;
pub use phase::*;
pub use statement::*;
pub use template::*;
pub use weakness::*;
