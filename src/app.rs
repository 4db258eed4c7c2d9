use crate::components::theme::prelude::{Persistence, WithTheme};
use crate::components::toast::prelude::{Toaster, WithToasts};
use crate::components::Layout;
use crate::conf::AppConf;
use crate::router::Route;
use crate::switch::switch;

use yew::prelude::*;
use yew_router::history::{AnyHistory, BrowserHistory};
use yew_router::prelude::{Router, Switch};

#[derive(Properties, PartialEq)]
pub struct ShellProps {
    #[prop_or_default]
    pub conf: AppConf,
    pub persistence: Persistence,
    pub history: AnyHistory,
}

// Theme outermost, router inside it. The toaster is a sibling of the
// routed layout, so it survives navigation.
#[function_component(Shell)]
pub fn shell(props: &ShellProps) -> Html {
    let ShellProps {
        conf,
        persistence,
        history,
    } = props;

    html! {
        <WithTheme conf={conf.theme.clone()} persistence={persistence.clone()}>
            <Router history={history.clone()}>
                <WithToasts conf={conf.toasts.clone()}>
                    <Layout>
                        <Switch<Route> render={switch} />
                    </Layout>
                    <Toaster/>
                </WithToasts>
            </Router>
        </WithTheme>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let history = use_state(|| AnyHistory::from(BrowserHistory::new()));
    let persistence = use_state(Persistence::local);

    html! {
        <Shell
            conf={AppConf::default()}
            persistence={(*persistence).clone()}
            history={(*history).clone()}
        />
    }
}
