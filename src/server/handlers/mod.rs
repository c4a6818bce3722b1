mod pages;
mod static_files;

pub use pages::{
    create_page, delete_page, list_slugs, set_body_text, set_button_text, set_description,
    set_link,
};
pub use static_files::serve_page;

#[cfg(test)]
pub use pages::SlugList;
