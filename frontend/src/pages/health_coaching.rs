use yew::prelude::*;

use crate::components::action_link::ActionLink;
use crate::components::fallback_image::FallbackImage;
use crate::reveal::Reveal;

#[function_component(HealthCoaching)]
pub fn health_coaching() -> Html {
    html! {
        <div class="page">
            <section class="container two-column page-intro">
                <Reveal class="stack">
                    <span class="eyebrow">{"ABOUT"}</span>
                    <h1>{"Health Coaching"}</h1>
                    <FallbackImage src="monique-coaching-intro.jpg" alt="Health Coaching Intro" class="portrait rounded-xl" />
                </Reveal>
                <Reveal class="stack">
                    <h2>{"What does a health coach do?"}</h2>
                    <p class="lead">
                        {"Health coaches are professionally trained to assist you to achieve your wellness goals. We are dedicated to helping you manage chronic conditions, lose weight, reduce stress, and enhance your sleep quality."}
                    </p>
                    <p class="lead">
                        {"Health coaches believe that you have the answers to your health and wellness issues. We tap into your inner strengths and work together to dismantle any self-limiting beliefs and obstacles in your path."}
                    </p>
                    <ActionLink label="Ask About Coaching" icon={true} />
                </Reveal>
            </section>

            <section class="tinted-section">
                <div class="container two-column">
                    <Reveal class="stack">
                        <h2>{"How do health coaches work?"}</h2>
                        <p class="lead">
                            {"Health coaches are experts in creating feasible, sustainable, measurable, and exciting health goals based on the latest research and interventions. Accountability is a core component."}
                        </p>
                        <ActionLink label="Learn More" />
                    </Reveal>
                    <Reveal>
                        <FallbackImage src="monique-at-work.jpg" alt="Monique at Work" class="portrait rounded-xl" />
                    </Reveal>
                </div>
            </section>
        </div>
    }
}
