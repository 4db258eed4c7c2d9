// Round button cycling dark -> light -> system
pub struct ThemeToggle {
    theme_ctx: ThemeCtxSub,
}

pub enum ThemeToggleMsg {
    ThemeContextUpdate(ThemeCtx),
    ToggleTheme,
}

impl Component for ThemeToggle {
    type Message = ThemeToggleMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(move |_| Self::Message::ToggleTheme);

        let state = self.theme_ctx.as_ref();
        let theme = state.palette();
        let toggle_border_color = &theme.box_border_color;
        let contrast_bg_color = &theme.contrast_bg_color;
        let toggle_style = css!(
            "
                user-select: none;
                outline: 2px solid ${toggle_border_color};
                background-color: ${contrast_bg_color};
                color: inherit;
                border: none;
                padding: .4em .9em;
                border-radius: 999px;
                cursor: pointer;
                transition: opacity .2s ease-in;

                :hover {
                    opacity: 0.8;
                }
            ",
            toggle_border_color = toggle_border_color,
            contrast_bg_color = contrast_bg_color,
        );

        let label = format!("Theme: {}", state.theme().as_str());

        html! {
            <button {onclick} class={ classes!("theme-toggle", toggle_style) } title="Switch theme">
                { label }
            </button>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                self.theme_ctx.set(theme_ctx);
                true
            }
            Self::Message::ToggleTheme => {
                let state = self.theme_ctx.as_ref();
                state.set_theme(state.theme().next());
                false
            }
        }
    }
}

use crate::components::imports::*;
