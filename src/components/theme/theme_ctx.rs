// Read side is the resolved palette plus the configuration it came from,
// write side is `set_theme`, which persists under the configured key.
#[derive(derivative::Derivative)]
#[derivative(Debug, PartialEq)]
pub struct ThemeState {
    conf: ThemeConf,
    theme: Themes,
    palette: Theme,

    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    set_theme_cb: Callback<Themes>,
}

impl ThemeState {
    pub fn conf(&self) -> &ThemeConf {
        &self.conf
    }

    // as chosen, may be System
    pub fn theme(&self) -> Themes {
        self.theme
    }

    pub fn palette(&self) -> &Theme {
        &self.palette
    }

    pub fn set_theme(&self, theme: Themes) {
        self.set_theme_cb.emit(theme);
    }
}

pub type ThemeCtx = Rc<ThemeState>;

pub struct ThemeCtxSub {
    ctx: ThemeCtx,
    // keep handle for component rerender after the theme changes
    _ctx_handle: ContextHandle<ThemeCtx>,
}

impl AsRef<ThemeState> for ThemeCtxSub {
    fn as_ref(&self) -> &ThemeState {
        &self.ctx
    }
}

impl ThemeCtxSub {
    pub fn subscribe<COMP, F, M>(ctx: &Context<COMP>, f: F) -> Self
    where
        COMP: Component,
        M: Into<COMP::Message>,
        F: Fn(ThemeCtx) -> M + 'static,
    {
        let (ctx, _ctx_handle) = ctx
            .link()
            .context(ctx.link().callback(f))
            .expect("ThemeCtx to exist");

        Self { ctx, _ctx_handle }
    }

    pub fn set(&mut self, ctx: ThemeCtx) {
        self.ctx = ctx;
    }
}

#[hook]
pub fn use_theme() -> ThemeCtx {
    use_context::<ThemeCtx>().expect("ThemeCtx to exist")
}

pub struct WithTheme {
    theme: Themes,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub conf: ThemeConf,
    pub persistence: Persistence,
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    ThemeChanged(Themes),
}

impl WithTheme {
    fn state(&self, ctx: &Context<Self>) -> ThemeCtx {
        let resolved = self.theme.resolve(prefers_dark_if(self.theme));
        Rc::new(ThemeState {
            conf: ctx.props().conf.clone(),
            theme: self.theme,
            palette: Theme::palette(resolved),
            set_theme_cb: ctx.link().callback(Msg::ThemeChanged),
        })
    }
}

// media queries are only consulted when the choice depends on them
fn prefers_dark_if(theme: Themes) -> bool {
    match theme {
        Themes::System => prefers_dark(),
        _ => true,
    }
}

impl Component for WithTheme {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let Props {
            conf, persistence, ..
        } = ctx.props();

        Self {
            theme: persistence.derive(&conf.storage_key, conf.default_theme),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<ThemeCtx> context={self.state(ctx)}>
                <DefaultStyling/>
                { ctx.props().children.clone() }
            </ContextProvider<ThemeCtx>>
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeChanged(theme) => {
                let Props {
                    conf, persistence, ..
                } = ctx.props();
                console::log!(format!(
                    "theme {} -> {}",
                    self.theme.as_str(),
                    theme.as_str()
                ));
                persistence.remember(&conf.storage_key, theme);
                let changed = self.theme != theme;
                self.theme = theme;
                changed
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if preference_source_changed(props, old_props) {
            self.theme = props
                .persistence
                .derive(&props.conf.storage_key, props.conf.default_theme);
        }
        true
    }
}

// Anything the initial theme is derived from.
fn preference_source_changed(new: &Props, old: &Props) -> bool {
    new.conf != old.conf || new.persistence != old.persistence
}

use super::storage::Persistence;
use super::themes::{prefers_dark, Theme, Themes};
use crate::components::imports::*;
use crate::components::DefaultStyling;
use crate::conf::ThemeConf;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::theme::storage::MemoryThemeStorage;

    fn props(conf: ThemeConf, persistence: &Persistence) -> Props {
        Props {
            conf,
            persistence: persistence.clone(),
            children: Children::default(),
        }
    }

    #[test]
    fn test_new_default_theme_rederives() {
        let persistence = Persistence::memory(MemoryThemeStorage::default());
        let old = props(ThemeConf::default(), &persistence);
        let new = props(ThemeConf::new(Themes::Light, "vite-ui-theme"), &persistence);

        assert!(preference_source_changed(&new, &old));
    }

    #[test]
    fn test_new_storage_key_or_persistence_rederives() {
        let persistence = Persistence::memory(MemoryThemeStorage::default());
        let old = props(ThemeConf::default(), &persistence);

        let new_key = props(ThemeConf::new(Themes::Dark, "other-key"), &persistence);
        assert!(preference_source_changed(&new_key, &old));

        let other = Persistence::memory(MemoryThemeStorage::default());
        let new_persistence = props(ThemeConf::default(), &other);
        assert!(preference_source_changed(&new_persistence, &old));
    }

    #[test]
    fn test_same_source_keeps_chosen_theme() {
        let persistence = Persistence::memory(MemoryThemeStorage::default());
        let old = props(ThemeConf::default(), &persistence);
        let new = props(ThemeConf::default(), &persistence);

        assert!(!preference_source_changed(&new, &old));
    }
}
