pub mod engine;
pub mod render;
pub mod runtime;
pub mod scheduler;
pub mod view;

pub use crate::domain::content::ContentTables;
pub use crate::domain::model::{ContactLink, Logo, NavSection, Project, Skill};
pub use crate::domain::node::Node;
pub use crate::domain::ports::{Fired, PageSerializer, Scheduler, Storage};
pub use crate::utils::error::Result;
