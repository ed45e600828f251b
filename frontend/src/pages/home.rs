use yew::prelude::*;

use crate::components::action_link::ActionLink;
use crate::components::fallback_image::FallbackImage;
use crate::content::{stagger_ms, VALUES};
use crate::navigation::PageId;
use crate::reveal::Reveal;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<PageId>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let to_about = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(PageId::About))
    };

    html! {
        <div class="page home-page">
            <section class="home-hero">
                <div class="hero-blobs">
                    <div class="blob blob-one"></div>
                    <div class="blob blob-two"></div>
                    <div class="blob blob-three"></div>
                </div>
                <div class="container two-column">
                    <div class="hero-text">
                        <h1>{"Your Journey to Optimal Wellness Starts Here"}</h1>
                        <p class="hero-subtitle">
                            {"Certified Health Coach & Registered Social Worker, guiding you to reclaim your health, your way, with professional support and deep empathy."}
                        </p>
                        <div class="hero-cta-group">
                            <ActionLink label="Book a Free Call" icon={true} />
                            <button class="outline-button" onclick={to_about}>
                                {"About Monique"}
                            </button>
                        </div>
                    </div>
                    <FallbackImage
                        src="monique-hero.jpg"
                        alt="Monique Hero"
                        class="hero-image rounded-xl"
                    />
                </div>
            </section>

            <section class="values-section">
                <div class="container">
                    <Reveal class="section-title">
                        <h2>{"My Coaching Values"}</h2>
                    </Reveal>
                    <div class="values-grid">
                        { for VALUES.iter().enumerate().map(|(i, value)| html! {
                            <Reveal class="card value-card" delay_ms={stagger_ms(i, 100)}>
                                <div class="value-icon">{value.icon}</div>
                                <h3>{value.title}</h3>
                                <p>{value.description}</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>
            <style>
                {r#"
                .home-hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    padding: 5rem 1.5rem 0;
                }
                .hero-blobs {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    overflow: hidden;
                }
                .blob {
                    position: absolute;
                    border-radius: 50%;
                    animation: blob 7s infinite;
                }
                .blob-one {
                    top: -5%;
                    left: -10%;
                    width: 500px;
                    height: 500px;
                    background: rgba(26, 74, 58, 0.1);
                    filter: blur(100px);
                }
                .blob-two {
                    bottom: 0;
                    right: -5%;
                    width: 600px;
                    height: 600px;
                    background: rgba(26, 74, 58, 0.05);
                    filter: blur(120px);
                    animation-delay: 2s;
                }
                .blob-three {
                    top: 20%;
                    right: 10%;
                    width: 300px;
                    height: 300px;
                    background: rgba(255, 237, 213, 0.3);
                    filter: blur(80px);
                    animation-delay: 4s;
                }
                @keyframes blob {
                    0% { transform: translate(0, 0) scale(1); }
                    33% { transform: translate(30px, -50px) scale(1.1); }
                    66% { transform: translate(-20px, 20px) scale(0.9); }
                    100% { transform: translate(0, 0) scale(1); }
                }
                .home-hero h1 {
                    font-size: clamp(3rem, 6vw, 4.5rem);
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    font-size: 1.2rem;
                    color: rgba(26, 74, 58, 0.7);
                    max-width: 32rem;
                    margin-bottom: 2.5rem;
                    font-weight: 300;
                    line-height: 1.7;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .hero-image {
                    aspect-ratio: 4 / 5;
                    box-shadow: 0 25px 50px rgba(26, 74, 58, 0.05);
                }
                .values-section {
                    padding: 6rem 1.5rem;
                }
                .values-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1.5rem;
                }
                .value-card {
                    text-align: center;
                }
                .value-icon {
                    font-size: 1.4rem;
                    background: #ecfdf5;
                    border-radius: 50%;
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin: 0 auto 1rem;
                }
                .value-card h3 {
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    margin-bottom: 1rem;
                }
                .value-card p {
                    font-size: 0.875rem;
                    color: rgba(26, 74, 58, 0.6);
                    font-weight: 300;
                    line-height: 1.6;
                }
                "#}
            </style>
        </div>
    }
}
