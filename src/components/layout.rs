use crate::components::imports::*;

pub static LAYOUT_CLASS: &str = "app-layout";

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

// Full viewport height on the theme background, whatever the route.
#[styled_component]
pub fn Layout(props: &Props) -> Html {
    let theme = use_theme();
    let palette = theme.palette();

    let style = css!(
        "
            min-height: 100vh;
            background-color: ${bg_color};
            color: ${text_color};
        ",
        bg_color = palette.bg_color.clone(),
        text_color = palette.text_color.clone(),
    );

    html! {
        <div class={ classes!(LAYOUT_CLASS, style) } data-theme={ palette.id.as_str() }>
            { props.children.clone() }
        </div>
    }
}
