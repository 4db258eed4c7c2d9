use crate::router::Route;

use yew::prelude::*;

pub fn switch(route: Route) -> Html {
    use crate::components::BrandPresentation;

    match route {
        Route::Home => html! { <BrandPresentation/> },
        Route::NotFound => html! {},
    }
}
