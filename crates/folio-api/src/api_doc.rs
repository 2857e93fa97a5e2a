use utoipa::OpenApi;

use crate::error::ErrorResponse;
use folio_core::models::{
    Blog, Contact, ContactStatus, CreateBlogRequest, CreateContactRequest, CreateVideoRequest,
    UpdateBlogRequest, UpdateContactStatusRequest, UpdateVideoRequest, Video,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::blogs::list_blogs,
        crate::handlers::blogs::get_blog,
        crate::handlers::blogs::create_blog,
        crate::handlers::blogs::update_blog,
        crate::handlers::blogs::delete_blog,
        crate::handlers::videos::list_videos,
        crate::handlers::videos::get_video,
        crate::handlers::videos::create_video,
        crate::handlers::videos::update_video,
        crate::handlers::videos::delete_video,
        crate::handlers::contacts::create_contact,
        crate::handlers::contacts::list_contacts,
        crate::handlers::contacts::get_contact,
        crate::handlers::contacts::update_contact_status,
        crate::handlers::contacts::delete_contact,
    ),
    components(schemas(
        Blog,
        Video,
        Contact,
        ContactStatus,
        CreateBlogRequest,
        UpdateBlogRequest,
        CreateVideoRequest,
        UpdateVideoRequest,
        CreateContactRequest,
        UpdateContactStatusRequest,
        ErrorResponse,
    )),
    tags(
        (name = "blogs", description = "Blog post management"),
        (name = "videos", description = "Video entry management"),
        (name = "contacts", description = "Contact inquiry management")
    ),
    info(
        title = "Folio API",
        description = "Content-management backend for blog posts, videos and contact inquiries"
    )
)]
pub struct ApiDoc;
