pub mod workflow;

pub use workflow::{
    delete_category, delete_content_type, delete_file, delete_subcategory, replace_translation,
    update_category, update_subcategory, Confirmation, ContentTypeForm, DeleteOutcome, FormEntry,
    SaveOutcome, TaxonomyForm, TaxonomyKind,
};
