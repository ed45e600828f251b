use yew::prelude::*;

use crate::components::action_link::ActionLink;
use crate::components::fallback_image::FallbackImage;
use crate::reveal::Reveal;

#[function_component(Retreats)]
pub fn retreats() -> Html {
    html! {
        <div class="page full-height">
            <section class="container two-column page-intro">
                <Reveal>
                    <FallbackImage src="retreat-lifestyle.jpg" alt="Retreat Lifestyle" class="portrait rounded-xl" />
                </Reveal>
                <Reveal class="stack">
                    <span class="eyebrow">{"RETREATS"}</span>
                    <h1>{"Finding Inspiration at Every Turn"}</h1>
                    <h2 class="script-heading">{"With like-minded individuals!"}</h2>
                    <p class="lead">
                        {"Welcome to my wellness retreats, where we come together to elevate our well-being with purpose and intention. My expertly crafted programs guarantee a transformative experience for every participant."}
                    </p>
                    <ActionLink label="Join a Retreat" icon={true} />
                </Reveal>
            </section>
        </div>
    }
}
