use crate::components::imports::*;

// Document-wide colors for the active theme; renders no element of its own.
pub struct DefaultStyling {
    theme_ctx: ThemeCtxSub,
}

pub enum Msg {
    ThemeContextUpdate(ThemeCtx),
}

impl Component for DefaultStyling {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let theme = self.theme_ctx.as_ref().palette();

        let bg_color = &theme.bg_color;
        let text_color = &theme.text_color;
        let link_color = &theme.link_color;
        let color_scheme = theme.color_scheme();

        let global_style = css!(
            "
                html {
                    color-scheme: ${color_scheme};
                }

                body {
                    margin: 0;
                    background-color: ${bg_color};
                    color: ${text_color};
                    font-family: system-ui, sans-serif;
                }

                a {
                    color: ${link_color};
                }
            ",
            color_scheme = color_scheme,
            bg_color = bg_color,
            text_color = text_color,
            link_color = link_color,
        );

        html! {
            <Global css={global_style}/>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                console::log!("WithTheme context updated from DefaultStyling");
                self.theme_ctx.set(theme_ctx);
                true
            }
        }
    }
}
