use yew::prelude::*;

use crate::components::action_link::ActionLink;
use crate::components::fallback_image::FallbackImage;
use crate::content::{stagger_ms, SERVICES};
use crate::reveal::Reveal;

#[function_component(Psychosocial)]
pub fn psychosocial() -> Html {
    html! {
        <div class="page">
            <section class="container narrow page-intro centered">
                <Reveal class="stack">
                    <span class="eyebrow">{"SERVICES"}</span>
                    <h1>{"Psychosocial Services"}</h1>
                    <p class="lead">{"Compassionate support and effective interventions."}</p>
                    <FallbackImage src="psychosocial-banner.jpg" alt="Psychosocial Banner" class="banner rounded-lg" />
                </Reveal>
            </section>

            <section class="container card-grid services-grid">
                { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                    <Reveal class="card service-card" delay_ms={stagger_ms(i, 150)}>
                        <FallbackImage src={service.image} alt={service.title} class="square rounded-md" />
                        <div class="service-icon">{service.icon}</div>
                        <h3>{service.title}</h3>
                        <p>{service.text}</p>
                        <ActionLink label="Enquire" icon={true} class="full-width" />
                    </Reveal>
                }) }
            </section>
            <style>
                {r#"
                .banner {
                    width: 100%;
                    aspect-ratio: 21 / 9;
                    margin-top: 3rem;
                }
                .services-grid {
                    padding-bottom: 6rem;
                }
                .service-card {
                    display: flex;
                    flex-direction: column;
                }
                .service-card .fallback-image {
                    margin-bottom: 2rem;
                }
                .service-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: #ecfdf5;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.4rem;
                    margin-bottom: 1.5rem;
                }
                .service-card h3 {
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }
                .service-card p {
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: rgba(26, 74, 58, 0.6);
                    font-weight: 300;
                    margin-bottom: 2rem;
                }
                .service-card .action-link {
                    margin-top: auto;
                }
                "#}
            </style>
        </div>
    }
}
