use chrono::Datelike;
use models::posts;

/// Named-route contract supplied by the web layer. The only route this
/// component depends on is `post_detail`, addressed by publish date parts
/// plus slug.
pub trait RouteResolver {
    fn post_detail(&self, year: i32, month: u32, day: u32, slug: &str) -> String;
}

/// Default URL scheme used when no router is wired in.
pub struct BlogRoutes;

impl RouteResolver for BlogRoutes {
    fn post_detail(&self, year: i32, month: u32, day: u32, slug: &str) -> String {
        format!("/blog/{}/{}/{}/{}/", year, month, day, slug)
    }
}

/// Derive a post's public URL from its publish date and slug.
pub fn canonical_url<R: RouteResolver + ?Sized>(routes: &R, post: &posts::Model) -> String {
    routes.post_detail(
        post.publish.year(),
        post.publish.month(),
        post.publish.day(),
        &post.slug,
    )
}
