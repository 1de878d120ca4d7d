use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::browser;
use crate::components::logo::Logo;
use crate::config;
use crate::content::NAV_LINKS;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_expertise: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SCROLL_THRESHOLD;

    let on_logo = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        browser::scroll_to_top();
    });

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Nav links are anchors; the expertise one swaps the view instead of jumping.
    let on_link = |label: &'static str| {
        let menu_open = menu_open.clone();
        let on_expertise = props.on_expertise.clone();
        Callback::from(move |e: MouseEvent| {
            if label == "Expertise" {
                e.prevent_default();
                on_expertise.emit(());
                menu_open.set(false);
            }
        })
    };

    let on_partner = {
        let on_expertise = props.on_expertise.clone();
        Callback::from(move |_: MouseEvent| on_expertise.emit(()))
    };

    html! {
        <nav class={classes!("navbar", is_scrolled.then(|| "navbar--scrolled"))}>
            <div class="navbar__content">
                <a href="#" class="navbar__logo" onclick={on_logo}>
                    <Logo />
                </a>

                <div class="navbar__links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={link.href} class="navbar__link" onclick={on_link(link.label)}>
                            {link.label}
                        </a>
                    }) }
                    <button class="navbar__partner" onclick={on_partner.clone()}>
                        {"Partner"}
                    </button>
                </div>

                <button class="navbar__burger" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>

                <div class={classes!("navbar__mobile", (*menu_open).then(|| "navbar__mobile--open"))}>
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={link.href} class="navbar__mobile-link" onclick={on_link(link.label)}>
                            {link.label}
                        </a>
                    }) }
                    <button class="navbar__mobile-cta" onclick={on_partner}>
                        {"Initiate Project"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.5rem 0;
                    background: transparent;
                    transition: all 0.3s;
                }
                .navbar--scrolled {
                    padding: 1rem 0;
                    background: rgba(10, 10, 10, 0.95);
                    backdrop-filter: blur(4px);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.3);
                }
                .navbar__content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .navbar__logo {
                    position: relative;
                    z-index: 50;
                    text-decoration: none;
                }
                .navbar__links {
                    display: flex;
                    align-items: center;
                    gap: 2.5rem;
                }
                .navbar__link {
                    font-size: 11px;
                    font-weight: 700;
                    color: #d1d5db;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    text-decoration: none;
                }
                .navbar__link:hover {
                    color: #ffffff;
                }
                .navbar__partner {
                    font-size: 11px;
                    font-weight: 700;
                    color: #000000;
                    background: #ffffff;
                    border: none;
                    padding: 0.5rem 1.5rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    cursor: pointer;
                }
                .navbar__partner:hover {
                    background: #e4e4e7;
                }
                .navbar__burger {
                    display: none;
                    position: relative;
                    z-index: 50;
                    background: none;
                    border: none;
                    color: #ffffff;
                    font-size: 1.75rem;
                    cursor: pointer;
                }
                .navbar__mobile {
                    position: fixed;
                    inset: 0;
                    background: #0a0a0a;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2.5rem;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s;
                }
                .navbar__mobile--open {
                    opacity: 1;
                    pointer-events: auto;
                }
                .navbar__mobile-link {
                    font-family: Georgia, serif;
                    font-style: italic;
                    font-size: 1.875rem;
                    color: #ffffff;
                    text-decoration: none;
                }
                .navbar__mobile-cta {
                    padding: 1.25rem 2.5rem;
                    background: #ffffff;
                    color: #000000;
                    border: none;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                    font-size: 11px;
                }
                @media (min-width: 768px) {
                    .navbar__mobile {
                        display: none;
                    }
                }
                @media (max-width: 767px) {
                    .navbar__links {
                        display: none;
                    }
                    .navbar__burger {
                        display: block;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
