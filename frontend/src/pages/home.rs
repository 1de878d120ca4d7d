use yew::prelude::*;

use crate::browser;
use crate::components::inquiry_form::{FormVariant, InquiryForm};
use crate::components::logo::Logo;
use crate::components::navbar::Navbar;
use crate::components::section::Section;
use crate::config;
use crate::content::{SERVICES, STATS};
use crate::inquiry::{Inquiry, InquiryField};
use crate::lifecycle::SubmissionStatus;
use crate::site::View;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1497215728101-856f4ea42174?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80";

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_select: Callback<View>,
    pub on_open_modal: Callback<()>,
    pub inquiry: Inquiry,
    pub status: SubmissionStatus,
    pub on_change: Callback<(InquiryField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let show_expertise = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: ()| on_select.emit(View::Expertise))
    };
    let on_expertise_click = {
        let show_expertise = show_expertise.clone();
        Callback::from(move |_: MouseEvent| show_expertise.emit(()))
    };
    let on_partner_click = {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |_: MouseEvent| on_open_modal.emit(()))
    };
    let on_footer_logo = Callback::from(|_: MouseEvent| browser::scroll_to_top());

    html! {
        <div class="home">
            <Navbar on_expertise={show_expertise} />

            <div class="hero">
                <div class="hero__shade"></div>
                <div class="hero__media">
                    <img src={HERO_IMAGE} alt="Office meeting" />
                    <div class="hero__veil"></div>
                </div>

                <div class="hero__content">
                    <div class="hero__badge">
                        <span>{"EdTech Consultancy"}</span>
                    </div>
                    <h1 class="hero__title">
                        {"Shaping the "}<br/>
                        <span class="accent">{"Future"}</span>{" of Learning."}
                    </h1>
                    <p class="hero__subtitle">
                        {"We partner with visionary institutions to navigate digital transformation, optimize curriculum delivery, and implement sustainable educational technologies."}
                    </p>
                    <div class="hero__actions">
                        <button class="hero__primary" onclick={on_expertise_click}>
                            {"OUR EXPERTISE"}
                            <span class="hero__arrow">{"→"}</span>
                        </button>
                        <button class="hero__secondary" onclick={on_partner_click}>
                            {"PARTNER WITH US"}
                        </button>
                    </div>
                </div>
            </div>

            <div class="stats">
                <div class="stats__grid">
                    { for STATS.iter().map(|stat| html! {
                        <div key={stat.label} class="stats__item">
                            <div class="stats__value">{stat.value}</div>
                            <div class="stats__label">{stat.label}</div>
                        </div>
                    }) }
                </div>
            </div>

            <Section id="services" dark=true>
                <div class="services__header">
                    <div>
                        <h2 class="eyebrow">{"CAPABILITIES"}</h2>
                        <h3 class="services__title">{"Core "}<br/>{"Consulting."}</h3>
                    </div>
                    <p class="services__tagline">
                        {"Elevating educational standards through technical excellence and operational insight."}
                    </p>
                </div>
                <div class="services__grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div key={service.title} class="services__item">
                            <i class={classes!("icon", service.icon)}></i>
                            <h4>{service.title}</h4>
                            <p>{service.description}</p>
                        </div>
                    }) }
                </div>
            </Section>

            <Section id="contact">
                <div class="contact">
                    <div class="contact__intro">
                        <h3 class="contact__title">
                            {"Ready to "}<br/><span class="accent">{"Innovate"}</span>{"?"}
                        </h3>
                        <p class="contact__lede">
                            {"Let's discuss how Bayl Consults can help your institution thrive in the digital age. Our experts are ready to listen."}
                        </p>
                        <div class="contact__details">
                            <div class="contact__detail">
                                <span class="eyebrow">{"Email"}</span>
                                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                            </div>
                            <div class="contact__detail">
                                <span class="eyebrow">{"Location"}</span>
                                <p>
                                    {"338a Regents Park Road,"}<br/>
                                    {"Acc Office 3-4, Suite 0462, London,"}<br/>
                                    {"United Kingdom, N3 2LN"}
                                </p>
                            </div>
                        </div>
                    </div>

                    <InquiryForm
                        variant={FormVariant::Inline}
                        inquiry={props.inquiry.clone()}
                        status={props.status}
                        on_change={props.on_change.clone()}
                        on_submit={props.on_submit.clone()}
                    />
                </div>
            </Section>

            <footer class="footer">
                <div class="footer__content">
                    <button class="footer__logo" onclick={on_footer_logo}><Logo /></button>
                    <div class="footer__links">
                        <a href={config::LINKEDIN_URL} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                        <a href="#">{"Twitter"}</a>
                        <a href="#">{"Privacy"}</a>
                    </div>
                    <p class="footer__note">{format!("© {} Bayl Consults.", browser::current_year())}</p>
                </div>
            </footer>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    min-height: 700px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #0a0a0a;
                    overflow: hidden;
                }
                .hero__shade {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 50%;
                    height: 100%;
                    background: linear-gradient(to left, #111827, transparent);
                    opacity: 0.4;
                }
                .hero__media {
                    position: absolute;
                    inset: 0;
                }
                .hero__media img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.2;
                    filter: grayscale(1);
                }
                .hero__veil {
                    position: absolute;
                    inset: 0;
                    background: rgba(10, 10, 10, 0.6);
                }
                .hero__content {
                    position: relative;
                    z-index: 10;
                    max-width: 80rem;
                    width: 100%;
                    margin: 4rem auto 0;
                    padding: 0 3rem;
                }
                .hero__badge {
                    display: inline-block;
                    padding: 0.25rem 1rem;
                    margin-bottom: 1.5rem;
                    border: 1px solid #4b5563;
                    border-radius: 9999px;
                    color: #d1d5db;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .hero__title {
                    font-family: Georgia, serif;
                    font-size: clamp(3rem, 7vw, 6rem);
                    line-height: 1.1;
                    color: #ffffff;
                    margin: 0 0 2rem;
                }
                .hero__subtitle {
                    max-width: 42rem;
                    font-size: 1.25rem;
                    line-height: 1.6;
                    color: #9ca3af;
                    margin-bottom: 2.5rem;
                }
                .hero__actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .hero__primary,
                .hero__secondary {
                    padding: 1.25rem 2.5rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    font-size: 11px;
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .hero__primary {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: #ffffff;
                    color: #000000;
                    border: none;
                }
                .hero__secondary {
                    background: transparent;
                    color: #ffffff;
                    border: 1px solid #ffffff;
                }
                .hero__primary:hover,
                .hero__secondary:hover {
                    transform: scale(1.05);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .hero__secondary:hover {
                    background: #ffffff;
                    color: #000000;
                }
                .hero__primary:hover .hero__arrow {
                    transform: translateX(4px);
                }
                .hero__arrow {
                    transition: transform 0.3s;
                }
                .stats {
                    background: #0a0a0a;
                    border-top: 1px solid #1f2937;
                }
                .stats__grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 3rem;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .stats__value {
                    font-family: Georgia, serif;
                    font-size: 3rem;
                    color: #ffffff;
                    margin-bottom: 0.5rem;
                }
                .stats__label {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #6b7280;
                }
                .services__header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    margin-bottom: 4rem;
                    padding-bottom: 2rem;
                    border-bottom: 1px solid #1f2937;
                }
                .services__title {
                    font-family: Georgia, serif;
                    font-size: 3rem;
                    color: #ffffff;
                    margin: 0;
                }
                .services__tagline {
                    max-width: 24rem;
                    text-align: right;
                    font-family: Georgia, serif;
                    font-style: italic;
                    color: #9ca3af;
                }
                .services__grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem 2rem;
                    padding-bottom: 3rem;
                }
                .services__item {
                    border-top: 1px solid #1f2937;
                    padding-top: 2rem;
                    transition: border-color 0.3s;
                }
                .services__item:hover {
                    border-color: #ffffff;
                }
                .services__item h4 {
                    font-family: Georgia, serif;
                    font-size: 1.25rem;
                    color: #ffffff;
                    margin: 0 0 0.75rem;
                }
                .services__item p {
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: #9ca3af;
                }
                .contact {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 5rem;
                    align-items: start;
                }
                .contact__title {
                    font-family: Georgia, serif;
                    font-size: 3.75rem;
                    line-height: 1.2;
                    color: #0a0a0a;
                    margin: 0 0 2rem;
                }
                .contact__lede {
                    max-width: 28rem;
                    font-size: 1.125rem;
                    color: #475569;
                    margin-bottom: 3rem;
                }
                .contact__details {
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                }
                .contact__detail {
                    display: flex;
                    flex-direction: column;
                }
                .contact__detail a,
                .contact__detail p {
                    font-family: Georgia, serif;
                    font-size: 1.5rem;
                    line-height: 1.6;
                    color: #0a0a0a;
                    text-decoration: none;
                    margin: 0;
                }
                .contact__detail a:hover {
                    color: #4b5563;
                }
                .footer {
                    background: #0a0a0a;
                    padding: 3rem;
                }
                .footer__content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                }
                .footer__logo {
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .footer__links {
                    display: flex;
                    gap: 2rem;
                }
                .footer__links a {
                    color: #6b7280;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    text-decoration: none;
                }
                .footer__links a:hover {
                    color: #ffffff;
                }
                @media (max-width: 767px) {
                    .stats__grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .services__grid,
                    .contact {
                        grid-template-columns: 1fr;
                    }
                    .services__tagline {
                        display: none;
                    }
                    .footer__content {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}
