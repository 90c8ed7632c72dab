//! Spoken rendering of LaTeX math

mod resolver;
mod speech;
mod symbols;

pub use resolver::resolve_placeholders;
pub use speech::latex_to_spoken;
