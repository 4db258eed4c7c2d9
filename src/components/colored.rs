use crate::components::imports::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub with: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

// Inline pill in the given color, used for status badges
pub struct Colored {
    pub style: StyleSource,
}

impl Colored {
    fn style(color: &AttrValue) -> StyleSource {
        css!(
            "
                display: inline-block;
                color: ${color};
                border: 1px solid ${color};
                border-radius: 999px;
                padding: 0 .6em;
                font-size: .8em;
            ",
            color = color
        )
    }
}

impl Component for Colored {
    type Message = ();
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            style: Self::style(&ctx.props().with),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().with != old_props.with {
            self.style = Self::style(&ctx.props().with);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <span class={ classes!("badge", self.style.clone()) }>
                { for ctx.props().children.iter() }
            </span>
        }
    }
}
