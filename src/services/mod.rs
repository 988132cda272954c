mod discovery;
mod navigation;

pub use discovery::DiscoveryEngine;
pub use navigation::{DOMAIN_PROMPT, InteractiveResolver, STACK_PROMPT};
