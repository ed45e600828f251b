use log::info;
use yew::prelude::*;

use crate::components::action_link::ActionLink;
use crate::reveal::Reveal;

#[function_component(Contact)]
pub fn contact() -> Html {
    // The form has no backend to post to; bookings go through WhatsApp.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Contact form submit ignored, no submission target configured");
    });

    html! {
        <div class="page container contact-page">
            <div class="two-column align-start">
                <Reveal class="stack">
                    <h1>{"Let's Start Your Journey"}</h1>
                    <p class="lead">
                        {"Whether you have questions or are ready to book, I'd love to hear from you. Online and in-person sessions available."}
                    </p>
                    <div class="contact-details">
                        <div>{"📞 Available for Consults"}</div>
                        <div>{"📍 Durban & International Online"}</div>
                    </div>
                    <ActionLink label="Chat on WhatsApp" icon={true} />
                </Reveal>
                <Reveal delay_ms={200}>
                    <div class="contact-card">
                        <form class="contact-form" onsubmit={onsubmit}>
                            <input type="text" placeholder="Full Name" />
                            <input type="email" placeholder="Email Address" />
                            <textarea rows="4" placeholder="Your health goals..."></textarea>
                            <ActionLink label="Send via WhatsApp" icon={true} class="full-width" />
                        </form>
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                .contact-page {
                    padding-bottom: 6rem;
                }
                .contact-details div {
                    font-weight: 500;
                    margin-bottom: 1rem;
                }
                .contact-card {
                    background: #ffffff;
                    padding: 3rem;
                    border-radius: 2.5rem;
                    border: 1px solid #ecfdf5;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-form input,
                .contact-form textarea {
                    width: 100%;
                    padding: 1rem 1.25rem;
                    background: rgba(236, 253, 245, 0.3);
                    border: 1px solid #d1fae5;
                    border-radius: 1rem;
                    font: inherit;
                    resize: none;
                }
                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: #1a4a3a;
                }
                "#}
            </style>
        </div>
    }
}
