use yew::prelude::*;

use crate::components::action_link::{ActionLink, ActionVariant};
use crate::components::fallback_image::FallbackImage;
use crate::content::BLOG_TEASERS;
use crate::reveal::Reveal;

#[function_component(Blog)]
pub fn blog() -> Html {
    html! {
        <div class="page container blog-page">
            <div class="section-title">
                <h1>{"Health & Wellness Insights"}</h1>
            </div>
            <div class="card-grid">
                { for BLOG_TEASERS.iter().map(|post| html! {
                    <Reveal class="blog-teaser">
                        <FallbackImage src={post.image} alt="Blog Post" class="landscape rounded-lg" />
                        <h3>{post.title}</h3>
                        <div class="read-more">{"Read More →"}</div>
                    </Reveal>
                }) }
            </div>
            <div class="blog-subscribe">
                <ActionLink label="Subscribe for Updates" variant={ActionVariant::Outline} />
            </div>
            <style>
                {r#"
                .blog-page {
                    padding-bottom: 6rem;
                }
                .landscape {
                    aspect-ratio: 4 / 3;
                    margin-bottom: 1.5rem;
                }
                .blog-teaser h3 {
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }
                .read-more {
                    font-size: 0.875rem;
                    font-weight: 700;
                }
                .blog-subscribe {
                    margin-top: 4rem;
                    text-align: center;
                }
                "#}
            </style>
        </div>
    }
}
