use yew::prelude::*;

use crate::browser;
use crate::components::logo::Logo;
use crate::content::{METHODOLOGY, PILLARS};
use crate::site::View;

#[derive(Properties, PartialEq)]
pub struct ExpertiseProps {
    pub on_select: Callback<View>,
}

#[function_component(Expertise)]
pub fn expertise(props: &ExpertiseProps) -> Html {
    let back_home = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(View::Home))
    };

    html! {
        <div class="expertise">
            <header class="expertise__header">
                <button class="expertise__back" onclick={back_home.clone()}>
                    <span class="expertise__back-arrow">{"←"}</span>
                    {"Back to Home"}
                </button>
                <button class="expertise__logo" onclick={back_home}><Logo /></button>
                <div class="expertise__spacer"></div>
            </header>

            <main class="expertise__main">
                <div class="expertise__inner">
                    <div class="expertise__intro">
                        <span class="eyebrow">{"Our Core Pillars"}</span>
                        <h1 class="expertise__title">
                            {"Technical "}<br/><span class="accent">{"Mastery"}</span>{"."}
                        </h1>
                        <p class="expertise__lede">
                            {"We bridge the gap between educational vision and technical feasibility. Our expertise is rooted in decades of institutional transformation."}
                        </p>
                    </div>

                    <div class="pillars">
                        { for PILLARS.iter().map(|pillar| html! {
                            <div key={pillar.title} class="pillar">
                                <div class="pillar__icon"><i class={classes!("icon", pillar.icon)}></i></div>
                                <h3>{pillar.title}</h3>
                                <p>{pillar.body}</p>
                                <ul>
                                    { for pillar.points.iter().map(|point| html! {
                                        <li key={*point}><span class="pillar__dot"></span>{*point}</li>
                                    }) }
                                </ul>
                            </div>
                        }) }
                    </div>

                    <div class="methodology">
                        <h2>{"The Bayl Methodology"}</h2>
                        { for METHODOLOGY.iter().map(|step| html! {
                            <div key={step.step} class="methodology__step">
                                <span class="methodology__number">{step.step}</span>
                                <h4>{step.title}</h4>
                                <p>{step.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </main>

            <footer class="expertise__footer">
                <p>{format!("Bayl Consults expertise deep-dive • {}", browser::current_year())}</p>
            </footer>

            <style>
                {r#"
                .expertise {
                    min-height: 100vh;
                    background: #0a0a0a;
                    color: #ffffff;
                }
                .expertise__header {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.5rem 3rem;
                    background: rgba(10, 10, 10, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #1f2937;
                    box-sizing: border-box;
                }
                .expertise__back,
                .expertise__logo {
                    background: none;
                    border: none;
                    color: #ffffff;
                    cursor: pointer;
                }
                .expertise__back {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-size: 11px;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                }
                .expertise__back:hover {
                    color: #9ca3af;
                }
                .expertise__back:hover .expertise__back-arrow {
                    transform: translateX(-4px);
                }
                .expertise__back-arrow {
                    transition: transform 0.3s;
                }
                .expertise__spacer {
                    width: 6rem;
                }
                .expertise__main {
                    padding: 8rem 3rem 5rem;
                }
                .expertise__inner {
                    max-width: 64rem;
                    margin: 0 auto;
                }
                .expertise__intro {
                    margin-bottom: 6rem;
                }
                .expertise__title {
                    font-family: Georgia, serif;
                    font-size: clamp(3.75rem, 8vw, 6rem);
                    line-height: 1.2;
                    margin: 0 0 2rem;
                }
                .expertise__lede {
                    max-width: 48rem;
                    font-size: 1.5rem;
                    font-weight: 300;
                    line-height: 1.6;
                    color: #9ca3af;
                }
                .pillars {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 6rem 4rem;
                    margin-bottom: 8rem;
                }
                .pillar__icon {
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: 1px solid #374151;
                    border-radius: 9999px;
                    margin-bottom: 2rem;
                }
                .pillar h3 {
                    font-family: Georgia, serif;
                    font-size: 1.875rem;
                    font-weight: 400;
                }
                .pillar p {
                    line-height: 1.6;
                    color: #9ca3af;
                }
                .pillar ul {
                    list-style: none;
                    padding: 1rem 0 0;
                }
                .pillar li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #6b7280;
                }
                .pillar__dot {
                    width: 4px;
                    height: 4px;
                    background: #ffffff;
                }
                .methodology {
                    border-top: 1px solid #1f2937;
                    padding-top: 6rem;
                    margin-bottom: 8rem;
                }
                .methodology h2 {
                    font-family: Georgia, serif;
                    font-size: 3rem;
                    font-weight: 400;
                    margin: 0 0 4rem;
                }
                .methodology__step {
                    display: grid;
                    grid-template-columns: 6rem 1fr 1.5fr;
                    gap: 2rem;
                    align-items: start;
                    padding: 3rem 1rem;
                    border-bottom: 1px solid #1f2937;
                    transition: background 0.3s;
                }
                .methodology__step:hover {
                    background: rgba(255, 255, 255, 0.05);
                }
                .methodology__number {
                    font-family: Georgia, serif;
                    font-style: italic;
                    font-size: 2.25rem;
                    color: #374151;
                    transition: color 0.3s;
                }
                .methodology__step:hover .methodology__number {
                    color: #ffffff;
                }
                .methodology__step h4 {
                    font-family: Georgia, serif;
                    font-size: 1.5rem;
                    font-weight: 400;
                    margin: 0;
                }
                .methodology__step p {
                    color: #9ca3af;
                    margin: 0;
                }
                .expertise__footer {
                    padding: 3rem 0;
                    border-top: 1px solid #1f2937;
                    text-align: center;
                }
                .expertise__footer p {
                    color: #4b5563;
                    font-size: 10px;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                }
                @media (max-width: 767px) {
                    .expertise__spacer {
                        display: none;
                    }
                    .pillars,
                    .methodology__step {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
