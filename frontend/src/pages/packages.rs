use yew::prelude::*;

use crate::components::action_link::{ActionLink, ActionVariant};
use crate::content::{Package, PACKAGES};
use crate::reveal::{Reveal, Threshold};

fn package_card(package: &Package) -> Html {
    let variant = if package.highlighted {
        ActionVariant::Secondary
    } else {
        ActionVariant::Primary
    };

    html! {
        <div class={classes!("package-card", package.highlighted.then(|| "highlighted"))}>
            <span class="package-label">{package.label}</span>
            <h3>{package.title}</h3>
            <ul class="package-features">
                { for package.features.iter().map(|feature| html! {
                    <li><span class="check">{"✓"}</span>{*feature}</li>
                }) }
            </ul>
            <ActionLink label="Book Now" variant={variant} />
        </div>
    }
}

#[function_component(Packages)]
pub fn packages() -> Html {
    html! {
        <div class="page">
            <section class="page-intro centered">
                <div class="container narrow">
                    <span class="eyebrow">{"WORK WITH ME"}</span>
                    <h1>{"Choose Your Wellness Journey"}</h1>
                </div>
            </section>
            <section class="container card-grid packages-grid">
                { for PACKAGES.iter().map(|package| html! {
                    <Reveal class="package-slot" threshold={Threshold::new(0.15)}>
                        { package_card(package) }
                    </Reveal>
                }) }
            </section>
            <style>
                {r#"
                .packages-grid {
                    padding-bottom: 6rem;
                    align-items: stretch;
                }
                .package-slot {
                    display: flex;
                    height: 100%;
                }
                .package-card {
                    display: flex;
                    flex-direction: column;
                    width: 100%;
                    padding: 2.5rem;
                    border-radius: 2.5rem;
                    background: #ffffff;
                    border: 1px solid #d1fae5;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.5s ease;
                }
                .package-card:hover {
                    box-shadow: 0 25px 50px rgba(26, 74, 58, 0.15);
                }
                .package-card.highlighted {
                    background: #1a4a3a;
                    color: #ffffff;
                    border: 4px solid rgba(4, 120, 87, 0.2);
                    transform: scale(1.05);
                    z-index: 1;
                }
                .package-label {
                    font-size: 0.65rem;
                    font-weight: 700;
                    letter-spacing: 0.3em;
                    margin-bottom: 1rem;
                    width: fit-content;
                }
                .highlighted .package-label {
                    background: #34d399;
                    color: #1a4a3a;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                }
                .package-card h3 {
                    font-size: 1.9rem;
                    margin-bottom: 1.5rem;
                }
                .package-features {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2.5rem;
                    flex-grow: 1;
                }
                .package-features li {
                    display: flex;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                    color: rgba(26, 74, 58, 0.7);
                }
                .highlighted .package-features li {
                    color: rgba(236, 253, 245, 0.8);
                }
                .check {
                    color: #059669;
                }
                .highlighted .check {
                    color: #6ee7b7;
                }
                "#}
            </style>
        </div>
    }
}
