use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoVariant {
    #[default]
    Light,
    Dark,
}

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub variant: LogoVariant,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let tone = match props.variant {
        LogoVariant::Light => "logo--light",
        LogoVariant::Dark => "logo--dark",
    };

    html! {
        <div class={classes!("logo", tone)}>
            <div class="logo__mark">
                <span class="logo__word">{"Bayl"}</span>
                <div class="logo__rule"></div>
            </div>
            <span class="logo__sub">{"Consults"}</span>
            <style>
                {r#"
                .logo {
                    display: flex;
                    align-items: baseline;
                    gap: 1rem;
                    user-select: none;
                }
                .logo__mark {
                    display: flex;
                    flex-direction: column;
                }
                .logo__word {
                    font-size: 2.25rem;
                    font-weight: 700;
                    letter-spacing: 0.15em;
                    text-transform: uppercase;
                    line-height: 1;
                    transition: transform 0.5s;
                }
                .logo:hover .logo__word {
                    transform: scaleX(1.02);
                }
                .logo__rule {
                    height: 3px;
                    margin-top: 0.5rem;
                    transition: height 0.5s;
                }
                .logo:hover .logo__rule {
                    height: 4px;
                }
                .logo__sub {
                    font-size: 10px;
                    font-weight: 700;
                    letter-spacing: 0.6em;
                    text-transform: uppercase;
                    margin-bottom: 0.25rem;
                }
                .logo--light .logo__word { color: #ffffff; }
                .logo--light .logo__rule { background: #ffffff; }
                .logo--light .logo__sub { color: #71717a; }
                .logo--dark .logo__word { color: #0f172a; }
                .logo--dark .logo__rule { background: #0f172a; }
                .logo--dark .logo__sub { color: #94a3b8; }
                "#}
            </style>
        </div>
    }
}
