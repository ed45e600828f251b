use yew::prelude::*;

use crate::components::action_link::{ActionLink, ActionVariant};
use crate::content::TESTIMONIALS;
use crate::reveal::Reveal;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <div class="page">
            <section class="page-intro centered">
                <Reveal>
                    <h1>{"What My Clients Say"}</h1>
                    <ActionLink label="Read More Success Stories" variant={ActionVariant::Secondary} />
                </Reveal>
            </section>
            <section class="container card-grid testimonials-grid">
                { for TESTIMONIALS.iter().map(|t| html! {
                    <Reveal class="card testimonial-card">
                        <div class="quote-mark">{"“"}</div>
                        <p class="testimonial-text">{format!("\"{}\"", t.text)}</p>
                        <span class="testimonial-name">{t.name}</span>
                        <span class="testimonial-when">{t.when}</span>
                    </Reveal>
                }) }
            </section>
            <style>
                {r#"
                .testimonials-grid {
                    padding-bottom: 6rem;
                }
                .testimonial-card {
                    padding: 2.5rem;
                }
                .quote-mark {
                    font-size: 4rem;
                    line-height: 1;
                    color: #10b981;
                    opacity: 0.2;
                    margin-bottom: 1rem;
                }
                .testimonial-text {
                    font-size: 1.1rem;
                    font-style: italic;
                    font-weight: 300;
                    line-height: 1.7;
                    color: rgba(26, 74, 58, 0.7);
                    margin-bottom: 2rem;
                }
                .testimonial-name {
                    display: block;
                    font-weight: 700;
                    font-size: 1.25rem;
                }
                .testimonial-when {
                    display: block;
                    font-size: 0.875rem;
                    color: rgba(26, 74, 58, 0.4);
                }
                "#}
            </style>
        </div>
    }
}
