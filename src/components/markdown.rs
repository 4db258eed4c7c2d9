use crate::components::imports::*;

pub struct Markdown {
    theme_ctx: ThemeCtxSub,
}

pub enum Msg {
    ThemeContextUpdate(ThemeCtx),
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub source: AttrValue,
}

impl Component for Markdown {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                console::log!("WithTheme context updated from Markdown");
                self.theme_ctx.set(theme_ctx);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let md_body = parse_md(&ctx.props().source);

        let theme = self.theme_ctx.as_ref().palette();
        let text_color = &theme.text_color;
        let muted_text_color = &theme.muted_text_color;

        let style = css!(
            "
                color: ${text_color};
                line-height: 1.6;

                blockquote {
                    color: ${muted_text_color};
                    margin-left: 0;
                    padding-left: 1em;
                    border-left: 3px solid ${muted_text_color};
                }
            ",
            text_color = text_color,
            muted_text_color = muted_text_color,
        );

        html! {
            <div class={ classes!("markdown-body", style) }>
                { md_body }
            </div>
        }
    }
}

pub fn render_md(markdown_input: &str) -> String {
    use pulldown_cmark::{html, Options, Parser};

    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(markdown_input, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

pub fn parse_md(markdown_input: &str) -> Html {
    Html::from_html_unchecked(render_md(markdown_input).into())
}

#[cfg(test)]
mod tests {
    use super::render_md;

    #[test]
    fn test_render_md() {
        let html = render_md("# Brands\n\nOwned by ~~nobody~~ *us*.");

        assert!(html.contains("<h1>Brands</h1>"));
        assert!(html.contains("<del>nobody</del>"));
        assert!(html.contains("<em>us</em>"));
    }
}
