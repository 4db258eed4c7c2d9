use crate::brands::{self, Brand, Holding};
use crate::components::imports::*;
use crate::components::{Colored, Markdown, ThemeToggle};

pub static BRAND_PRESENTATION_CLASS: &str = "brand-presentation";

#[styled_component]
pub fn BrandPresentation() -> Html {
    let theme = use_theme();
    let toasts = use_toast();
    let holdings = use_state(brands::portfolio);

    let on_request = {
        let holdings = holdings.clone();
        Callback::from(move |(holding, brand): (AttrValue, AttrValue)| {
            let mut updated = (*holdings).clone();
            match brands::request_verification(&mut updated, &holding, &brand) {
                Ok(()) => {
                    console::log!(format!("verification requested for {brand} ({holding})"));
                    holdings.set(updated);
                    toasts.toast(
                        ToastRequest::new(format!("{brand} queued for verification"))
                            .description(format!("Ownership by {holding} will be re-checked.")),
                    );
                }
                Err(err) => {
                    console::log!(format!("{err}"));
                    toasts.toast(
                        ToastRequest::new("Verification request failed")
                            .description(err.to_string())
                            .kind(ToastKind::Destructive),
                    );
                }
            }
        })
    };

    let palette = theme.palette();
    let style = css!(
        "
            max-width: 960px;
            margin: 0 auto;
            padding: 2em 1.5em 4em;

            header {
                display: flex;
                align-items: center;
                justify-content: space-between;
                gap: 1em;
            }

            .holding {
                border: 1px solid ${box_border_color};
                border-radius: 8px;
                padding: 1em;
                margin-top: 1em;
            }

            .holding ul {
                list-style: none;
                padding: 0;
                margin: 0;
            }

            .brand {
                display: flex;
                align-items: center;
                gap: .75em;
                padding: .5em 0;
                border-top: 1px solid ${box_border_color};
            }

            .brand-name {
                flex: 1;
            }

            .brand-date {
                color: ${muted_text_color};
                font-size: .85em;
            }

            .brand button {
                background-color: ${contrast_bg_color};
                color: inherit;
                border: 1px solid ${box_border_color};
                border-radius: 6px;
                padding: .25em .75em;
                cursor: pointer;
            }
        ",
        box_border_color = palette.box_border_color.clone(),
        muted_text_color = palette.muted_text_color.clone(),
        contrast_bg_color = palette.contrast_bg_color.clone(),
    );

    let brands::Summary { verified, total } = brands::summary(&holdings);

    html! {
        <main class={ classes!(BRAND_PRESENTATION_CLASS, style) }>
            <header>
                <span class="brand-summary">{ format!("{verified}/{total} brands verified") }</span>
                <ThemeToggle/>
            </header>
            <Markdown source={ include_str!("../../md/brand_intro.md") } />
            { for holdings.iter().map(|holding| html! {
                <HoldingCard key={holding.name.as_str()} holding={holding.clone()} on_request={on_request.clone()} />
            }) }
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct HoldingCardProps {
    holding: Holding,
    on_request: Callback<(AttrValue, AttrValue)>,
}

#[function_component]
fn HoldingCard(props: &HoldingCardProps) -> Html {
    let HoldingCardProps {
        holding,
        on_request,
    } = props;

    html! {
        <section class="holding">
            <h2>{ holding.name.clone() }</h2>
            <ul>
                { for holding.brands.iter().map(|brand| brand_row(brand, on_request)) }
            </ul>
        </section>
    }
}

fn brand_row(brand: &Brand, on_request: &Callback<(AttrValue, AttrValue)>) -> Html {
    let onclick = {
        let on_request = on_request.clone();
        let key = (brand.holding_name.clone(), brand.name.clone());
        Callback::from(move |_: MouseEvent| on_request.emit(key.clone()))
    };

    let status = match brand.status {
        Some(status) => html! {
            <Colored with={ status.color() }>{ status.label() }</Colored>
        },
        None => html! {
            <Colored with="gray">{ "unchecked" }</Colored>
        },
    };

    html! {
        <li class="brand" key={brand.name.as_str()}>
            <span class="brand-name">{ brand.name.clone() }</span>
            { status }
            if let Some(date) = brand.last_verified.clone() {
                <span class="brand-date">{ date }</span>
            }
            <button {onclick}>{ "Request check" }</button>
        </li>
    }
}
