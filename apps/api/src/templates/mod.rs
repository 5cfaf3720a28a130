// Template registry: layout descriptors instead of one bespoke renderer per
// template. The renderer interprets a descriptor; the catalog is the single
// source of template ids, categories, and listing metadata.

pub mod catalog;
pub mod descriptor;
pub mod handlers;

pub use catalog::{all_templates, lookup, resolve, DEFAULT_TEMPLATE_ID};
pub use descriptor::TemplateDescriptor;
