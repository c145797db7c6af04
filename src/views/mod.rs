//! Server-rendered HTML views.

pub mod html;
pub mod layout;
pub mod pages;
pub mod shell;

pub use pages::Page;
pub use shell::Shell;
