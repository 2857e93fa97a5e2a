//! Domain models and request types.

mod blog;
mod contact;
mod video;

pub use blog::{Blog, CreateBlogRequest, UpdateBlogRequest};
pub use contact::{Contact, ContactStatus, CreateContactRequest, UpdateContactStatusRequest};
pub use video::{CreateVideoRequest, UpdateVideoRequest, Video};

fn default_category() -> String {
    "General".to_string()
}
