use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub dark: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section
            id={props.id.clone()}
            class={classes!("page-section", if props.dark { "page-section--dark" } else { "page-section--light" })}
        >
            <div class="page-section__inner">
                { for props.children.iter() }
            </div>
        </section>
    }
}
