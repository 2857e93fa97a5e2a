mod blog;
mod contact;
mod video;

pub use blog::BlogRepository;
pub use contact::ContactRepository;
pub use video::VideoRepository;
