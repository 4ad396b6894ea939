//! XML traversal and rendering helpers over `roxmltree` documents.

mod render;
mod utils;

pub use render::render_markup;
pub use utils::{
    count_ancestors_until, descendants_by_tag, elements_by_tag, find_descendant,
    first_element_attribute, get_tag_name, has_tag,
};
