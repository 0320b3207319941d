//! # CLI Templates
//!
//! Output templates are minijinja files under `templates/`, embedded as string
//! constants. They emit line breaks explicitly with `{{ "\n" }}` and trim the source
//! whitespace around tags, so what a template prints does not depend on how it is
//! indented.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
