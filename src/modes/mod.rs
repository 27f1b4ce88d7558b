pub mod headless;
pub mod human;

pub use headless::{HeadlessConfig, HeadlessMode, HeadlessReport};
pub use human::HumanMode;
