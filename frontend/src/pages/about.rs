use yew::prelude::*;

use crate::components::action_link::{ActionLink, ActionVariant};
use crate::components::fallback_image::FallbackImage;
use crate::content::{stagger_ms, CREDENTIALS};
use crate::reveal::Reveal;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="page about-page">
            <section class="container two-column page-intro">
                <Reveal>
                    <span class="eyebrow">{"ABOUT ME"}</span>
                    <h1>{"Hi, I'm Monique"}</h1>
                    <h2 class="script-heading">{"Your Health Prof."}</h2>
                    <p class="lead">
                        {"Welcome to my practice! As a certified health coach and registered social worker, I am dedicated to guiding you on your journey to optimal wellness. My unique blend of training allows me to support you in exploring the underlying reasons for feeling unwell or unfulfilled, while also providing encouragement and accountability. Whether in person or online, I am here to help you make meaningful changes and achieve your physical and mental health goals."}
                    </p>
                    <ActionLink label="Book a Free Call" icon={true} />
                </Reveal>
                <Reveal>
                    <FallbackImage src="monique-portrait.jpg" alt="Monique Portrait" class="portrait rounded-xl" />
                </Reveal>
            </section>

            <section class="tinted-section">
                <div class="container two-column">
                    <Reveal>
                        <FallbackImage src="monique-coaching-session.jpg" alt="Monique Coaching Session" class="square rounded-xl" />
                    </Reveal>
                    <Reveal>
                        <h2>{"My Story"}</h2>
                        <p class="lead">
                            {"I am a confident and observant coach who knows firsthand the challenges of living with a chronic illness. My personal journey has ignited my passion for empowering others to reclaim their health and thrive."}
                        </p>
                        <p class="lead">
                            {"Together, we will tackle the complexities of your health, ensuring you receive the expert support and guidance you need. Let's take this transformative journey to wellness together!"}
                        </p>
                        <ActionLink label="Let's Talk" icon={true} />
                    </Reveal>
                </div>
            </section>

            <section class="quote-banner">
                <Reveal class="container narrow">
                    <h2>{"\"Every problem has a solution\""}</h2>
                    <p class="quote-followup">{"Let's find yours..."}</p>
                    <ActionLink label="Message Me" variant={ActionVariant::Secondary} />
                </Reveal>
            </section>

            <section class="credentials-section">
                <div class="container">
                    <Reveal class="section-title">
                        <h2>{"Qualifications & Certifications"}</h2>
                    </Reveal>
                    <div class="credentials-grid">
                        { for CREDENTIALS.iter().enumerate().map(|(i, credential)| html! {
                            <Reveal delay_ms={100 + stagger_ms(i, 200)}>
                                <FallbackImage src={credential.image} alt={credential.title} class="wide rounded-lg" />
                                <p class="credential-title">{credential.title}</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>
            <style>
                {r#"
                .quote-banner {
                    padding: 8rem 1.5rem;
                    background: #1a4a3a;
                    text-align: center;
                }
                .quote-banner h2 {
                    font-family: Georgia, serif;
                    font-style: italic;
                    color: #ffffff;
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    margin-bottom: 1.5rem;
                }
                .quote-followup {
                    color: #6ee7b7;
                    font-size: 1.25rem;
                    font-style: italic;
                    margin-bottom: 2.5rem;
                }
                .credentials-section {
                    padding: 6rem 1.5rem;
                    text-align: center;
                }
                .credentials-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 3rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }
                .credential-title {
                    margin-top: 1.5rem;
                    font-size: 1.1rem;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
